use log::debug;

use crate::config::SplitterConfig;
use crate::friend::Friend;

/// Local state of the add-friend form
#[derive(Debug, Clone, PartialEq)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
}

impl AddFriendForm {
    pub fn new(config: &SplitterConfig) -> Self {
        Self {
            name: String::new(),
            image: config.placeholder_image.clone(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }

    /// Build a new settled friend from the form.
    ///
    /// Returns `None` without touching the form if either field is empty.
    /// On success only the name is cleared; the image stays for the next entry.
    pub fn submit(&mut self) -> Option<Friend> {
        if self.name.is_empty() || self.image.is_empty() {
            debug!("Add friend form submitted with an empty field, ignoring");
            return None;
        }

        let friend = Friend::new(std::mem::take(&mut self.name), self.image.clone());
        debug!("Add friend form produced {} ({})", friend.name, friend.id);
        Some(friend)
    }
}

impl Default for AddFriendForm {
    fn default() -> Self {
        Self::new(&SplitterConfig::default())
    }
}
