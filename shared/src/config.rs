use serde::{Deserialize, Serialize};

use crate::friend::{Friend, FriendId};

/// Static settings for the splitter UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Pre-filled image URI of the add-friend form
    pub placeholder_image: String,
    /// Avatar URI template for seed friends, `{id}` is replaced by the friend id
    pub avatar_template: String,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            placeholder_image: "https://i.pravatar.cc/150?img=49".to_string(),
            avatar_template: "https://i.pravatar.cc/48?u={id}".to_string(),
        }
    }
}

impl SplitterConfig {
    pub fn avatar_for(&self, id: &FriendId) -> String {
        self.avatar_template.replace("{id}", id.as_str())
    }

    /// The fixed friend list the app starts with
    pub fn seed_friends(&self) -> Vec<Friend> {
        [("118836", "Rohan", -7.0), ("933372", "Aaron", 20.0), ("499476", "Aarav", 0.0)]
            .into_iter()
            .map(|(id, name, balance)| {
                let id = FriendId::new(id);
                Friend {
                    image: self.avatar_for(&id),
                    id,
                    name: name.to_string(),
                    balance,
                }
            })
            .collect()
    }
}
