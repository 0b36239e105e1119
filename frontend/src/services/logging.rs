use log::{Level, LevelFilter, Log, Metadata, Record};

/// Component-tagged logging for the UI.
///
/// Messages go through the `log` facade with the component as target, so the
/// domain crate's own `log` output ends up in the same browser console.
pub struct Logger;

impl Logger {
    /// Install the console backend. Safe to call more than once.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&CONSOLE).is_ok() {
            log::set_max_level(level);
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, message, component);
    }

    fn log(level: Level, message: &str, component: &str) {
        log::log!(target: component, level, "{}", message);
    }
}

struct ConsoleLogger;

static CONSOLE: ConsoleLogger = ConsoleLogger;

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{}] {}: {}", level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Warn, "split_bill_form", "Choose who is paying the bill"),
            "[WARN] split_bill_form: Choose who is paying the bill"
        );
    }

    #[wasm_bindgen_test]
    fn test_init_twice_does_not_panic() {
        Logger::init(LevelFilter::Debug);
        Logger::init(LevelFilter::Info);
        Logger::info_with_component("tests", "logger ready");
    }
}
