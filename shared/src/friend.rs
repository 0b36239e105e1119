use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque friend identifier.
///
/// Seed friends carry short numeric ids, friends added at runtime get a
/// UUID v4. Nothing may assume an ordering between ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriendId(String);

impl FriendId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FriendId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A person with a running balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    /// Avatar URI, not validated
    pub image: String,
    /// Negative when you owe them, positive when they owe you
    pub balance: f64,
}

impl Friend {
    /// Create a settled friend with a freshly generated id
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: FriendId::generate(),
            name: name.into(),
            image: image.into(),
            balance: 0.0,
        }
    }

    pub fn balance_status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }

    /// Human readable summary of who owes whom
    pub fn balance_label(&self) -> String {
        match self.balance_status() {
            BalanceStatus::YouOwe => format!("You owe {} {}$", self.name, self.balance.abs()),
            BalanceStatus::TheyOwe => format!("{} owe You {}$", self.name, self.balance),
            BalanceStatus::Even => format!("You and {} are even", self.name),
        }
    }

    /// Copy of this friend with `delta` added to the balance
    pub fn with_delta(&self, delta: f64) -> Self {
        Self {
            balance: self.balance + delta,
            ..self.clone()
        }
    }
}

/// Sign of a balance, used for both label text and row styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    YouOwe,
    TheyOwe,
    Even,
}

impl BalanceStatus {
    pub fn from_balance(balance: f64) -> Self {
        if balance < 0.0 {
            BalanceStatus::YouOwe
        } else if balance > 0.0 {
            BalanceStatus::TheyOwe
        } else {
            BalanceStatus::Even
        }
    }

    /// CSS class for the balance line
    pub fn css_class(&self) -> &'static str {
        match self {
            BalanceStatus::YouOwe => "red",
            BalanceStatus::TheyOwe => "green",
            BalanceStatus::Even => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(name: &str, balance: f64) -> Friend {
        Friend {
            id: FriendId::new("1"),
            name: name.to_string(),
            image: String::new(),
            balance,
        }
    }

    #[test]
    fn test_balance_labels() {
        assert_eq!(friend("Rohan", -7.0).balance_label(), "You owe Rohan 7$");
        assert_eq!(friend("Aaron", 20.0).balance_label(), "Aaron owe You 20$");
        assert_eq!(friend("Aarav", 0.0).balance_label(), "You and Aarav are even");
        assert_eq!(friend("Mia", 2.5).balance_label(), "Mia owe You 2.5$");
    }

    #[test]
    fn test_balance_status_classes() {
        assert_eq!(friend("a", -1.0).balance_status().css_class(), "red");
        assert_eq!(friend("a", 1.0).balance_status().css_class(), "green");
        assert_eq!(friend("a", 0.0).balance_status(), BalanceStatus::Even);
    }

    #[test]
    fn test_new_friend_is_settled_with_unique_id() {
        let a = Friend::new("Ana", "img");
        let b = Friend::new("Ana", "img");
        assert_eq!(a.balance, 0.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_with_delta_leaves_original_untouched() {
        let original = friend("Rohan", -7.0);
        let updated = original.with_delta(40.0);
        assert_eq!(updated.balance, 33.0);
        assert_eq!(original.balance, -7.0);
        assert_eq!(updated.name, original.name);
    }

    #[test]
    fn test_friend_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&FriendId::new("118836")).unwrap();
        assert_eq!(json, "\"118836\"");
    }
}
