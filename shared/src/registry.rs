//! Ordered friend list plus the current selection.
//!
//! The registry is a value type: every mutating operation returns a new
//! registry and leaves `self` alone. The friend list is shared behind an
//! `Rc`, so snapshots handed out to views stay valid and unchanged after
//! later updates.

use log::{debug, info, warn};
use std::rc::Rc;

use crate::friend::{Friend, FriendId};

/// Reasons a friend cannot enter the registry
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidFriendError {
    #[error("Friend name cannot be empty")]
    EmptyName,
    #[error("Friend image cannot be empty")]
    EmptyImage,
    #[error("A friend with id {0} already exists")]
    DuplicateId(FriendId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FriendRegistry {
    friends: Rc<[Friend]>,
    selected: Option<FriendId>,
}

impl FriendRegistry {
    pub fn new(friends: Vec<Friend>) -> Self {
        Self {
            friends: friends.into(),
            selected: None,
        }
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|friend| &friend.id == id)
    }

    pub fn selected_id(&self) -> Option<&FriendId> {
        self.selected.as_ref()
    }

    /// The selected friend, resolved against the current list
    pub fn selected(&self) -> Option<&Friend> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Append `friend` to the end of the list.
    ///
    /// The selection is kept; clearing it on add is the coordinator's call.
    pub fn add(&self, friend: Friend) -> Result<Self, InvalidFriendError> {
        if friend.name.is_empty() {
            warn!("Rejected friend with empty name (id {})", friend.id);
            return Err(InvalidFriendError::EmptyName);
        }
        if friend.image.is_empty() {
            warn!("Rejected friend {} with empty image", friend.name);
            return Err(InvalidFriendError::EmptyImage);
        }
        if self.get(&friend.id).is_some() {
            warn!("Rejected duplicate friend id {}", friend.id);
            return Err(InvalidFriendError::DuplicateId(friend.id));
        }

        info!("Adding friend {} ({})", friend.name, friend.id);
        let friends: Rc<[Friend]> = self
            .friends
            .iter()
            .cloned()
            .chain(std::iter::once(friend))
            .collect();

        Ok(Self {
            friends,
            selected: self.selected.clone(),
        })
    }

    /// Add `delta` to the balance of the friend with `id`. Unknown ids are ignored.
    pub fn apply_delta(&self, id: &FriendId, delta: f64) -> Self {
        if self.get(id).is_none() {
            debug!("Ignoring delta {} for unknown friend {}", delta, id);
            return self.clone();
        }

        info!("Applying delta {} to friend {}", delta, id);
        let friends: Rc<[Friend]> = self
            .friends
            .iter()
            .map(|friend| {
                if &friend.id == id {
                    friend.with_delta(delta)
                } else {
                    friend.clone()
                }
            })
            .collect();

        Self {
            friends,
            selected: self.selected.clone(),
        }
    }

    /// Select `id`, or clear the selection if `id` is already selected
    pub fn select(&self, id: &FriendId) -> Self {
        let selected = if self.is_selected(id) {
            debug!("Deselecting friend {}", id);
            None
        } else {
            debug!("Selecting friend {}", id);
            Some(id.clone())
        };

        Self {
            friends: Rc::clone(&self.friends),
            selected,
        }
    }

    pub fn clear_selection(&self) -> Self {
        Self {
            friends: Rc::clone(&self.friends),
            selected: None,
        }
    }
}
