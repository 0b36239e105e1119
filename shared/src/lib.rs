//! Domain model of the friend splitter: friends with running balances, the
//! two forms that feed them and the root state machine tying them together.
//!
//! Everything here is plain data and pure transitions so it can be shared by
//! the web frontend and exercised natively in tests.

pub mod add_friend;
pub mod config;
pub mod coordinator;
pub mod friend;
pub mod registry;
pub mod split_bill;

pub use add_friend::AddFriendForm;
pub use config::SplitterConfig;
pub use coordinator::{AppAction, AppState};
pub use friend::{BalanceStatus, Friend, FriendId};
pub use registry::{FriendRegistry, InvalidFriendError};
pub use split_bill::{Payer, SplitBillError, SplitBillForm, SplitBillLabels};
