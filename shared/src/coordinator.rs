//! Root state machine of the splitter.
//!
//! `AppState` owns the friend registry and the add-form visibility flag.
//! Views never mutate it; they dispatch an [`AppAction`] and receive the
//! next state from [`AppState::reduce`].

use log::{debug, warn};

use crate::config::SplitterConfig;
use crate::friend::{Friend, FriendId};
use crate::registry::FriendRegistry;

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    ToggleAddFriend,
    AddFriend(Friend),
    SelectFriend(FriendId),
    SplitBill(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub friends: FriendRegistry,
    pub form_visible: bool,
}

impl AppState {
    pub fn new(friends: Vec<Friend>) -> Self {
        Self {
            friends: FriendRegistry::new(friends),
            form_visible: false,
        }
    }

    pub fn from_config(config: &SplitterConfig) -> Self {
        Self::new(config.seed_friends())
    }

    pub fn selected(&self) -> Option<&Friend> {
        self.friends.selected()
    }

    /// Label of the add-friend toggle button
    pub fn toggle_label(&self) -> &'static str {
        if self.form_visible {
            "Close"
        } else {
            "Add friend"
        }
    }

    /// Compute the state that follows `action`. Rejected actions return an
    /// unchanged copy.
    pub fn reduce(&self, action: AppAction) -> Self {
        debug!("Reducing {:?}", action);
        match action {
            AppAction::ToggleAddFriend => Self {
                friends: self.friends.clone(),
                form_visible: !self.form_visible,
            },
            AppAction::AddFriend(friend) => match self.friends.add(friend) {
                Ok(friends) => Self {
                    friends: friends.clear_selection(),
                    form_visible: false,
                },
                Err(e) => {
                    warn!("Friend not added: {}", e);
                    self.clone()
                }
            },
            AppAction::SelectFriend(id) => Self {
                friends: self.friends.select(&id),
                form_visible: false,
            },
            AppAction::SplitBill(delta) => match self.friends.selected_id() {
                Some(id) => Self {
                    friends: self.friends.apply_delta(id, delta),
                    form_visible: self.form_visible,
                },
                None => {
                    warn!("Bill split with no friend selected, ignoring delta {}", delta);
                    self.clone()
                }
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&SplitterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let state = AppState::default();
        let once = state.reduce(AppAction::ToggleAddFriend);
        assert!(once.form_visible);
        assert_eq!(once.toggle_label(), "Close");
        let twice = once.reduce(AppAction::ToggleAddFriend);
        assert_eq!(twice, state);
        assert_eq!(twice.toggle_label(), "Add friend");
    }

    #[test]
    fn test_add_friend_closes_form_and_clears_selection() {
        let state = AppState::default()
            .reduce(AppAction::SelectFriend(FriendId::new("118836")))
            .reduce(AppAction::ToggleAddFriend);
        assert!(state.form_visible);
        assert!(state.selected().is_some());

        let next = state.reduce(AppAction::AddFriend(Friend::new("Mia", "img")));

        assert!(!next.form_visible);
        assert!(next.selected().is_none());
        assert_eq!(next.friends.len(), 4);
    }

    #[test]
    fn test_invalid_friend_leaves_state_unchanged() {
        let state = AppState::default().reduce(AppAction::ToggleAddFriend);
        let next = state.reduce(AppAction::AddFriend(Friend::new("", "img")));
        assert_eq!(next, state);
    }

    #[test]
    fn test_select_always_closes_form() {
        let state = AppState::default().reduce(AppAction::ToggleAddFriend);
        let next = state.reduce(AppAction::SelectFriend(FriendId::new("933372")));
        assert!(!next.form_visible);
        assert_eq!(next.selected().map(|f| f.name.as_str()), Some("Aaron"));
    }

    #[test]
    fn test_split_keeps_selection() {
        let rohan = FriendId::new("118836");
        let state = AppState::default()
            .reduce(AppAction::SelectFriend(rohan.clone()))
            .reduce(AppAction::SplitBill(40.0));
        assert!(state.friends.is_selected(&rohan));
        assert_eq!(state.selected().map(|f| f.balance), Some(33.0));
    }

    #[test]
    fn test_split_without_selection_is_ignored() {
        let state = AppState::default();
        assert_eq!(state.reduce(AppAction::SplitBill(10.0)), state);
    }
}
