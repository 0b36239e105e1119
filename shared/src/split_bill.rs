use log::debug;
use serde::{Deserialize, Serialize};

use crate::friend::Friend;

/// Who paid the bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payer {
    You,
    Friend,
}

impl Payer {
    /// Value used by the `<select>` options
    pub fn as_value(&self) -> &'static str {
        match self {
            Payer::You => "user",
            Payer::Friend => "friend",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Payer::You),
            "friend" => Some(Payer::Friend),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplitBillError {
    #[error("Choose who is paying the bill")]
    PayerNotChosen,
    #[error("Your expense is not a number: {0:?}")]
    InvalidExpense(String),
}

/// Local state of the split-bill form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitBillForm {
    pub bill_value: String,
    pub your_expense: String,
    pub payer: Option<Payer>,
}

/// Parse a numeric text field. Empty or non-numeric input yields `None`.
fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

impl SplitBillForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bill_value(&mut self, value: impl Into<String>) {
        self.bill_value = value.into();
    }

    pub fn set_your_expense(&mut self, value: impl Into<String>) {
        self.your_expense = value.into();
    }

    pub fn set_payer(&mut self, payer: Option<Payer>) {
        self.payer = payer;
    }

    /// The friend's share, `None` while either input is missing or not a number
    pub fn friend_expense(&self) -> Option<f64> {
        let bill = parse_amount(&self.bill_value)?;
        let yours = parse_amount(&self.your_expense)?;
        Some(bill - yours)
    }

    /// Text for the read-only friend expense field
    pub fn friend_expense_display(&self) -> String {
        self.friend_expense().map(|value| value.to_string()).unwrap_or_default()
    }

    pub fn can_submit(&self) -> bool {
        self.payer.is_some() && parse_amount(&self.your_expense).is_some()
    }

    /// Signed balance change for the selected friend.
    ///
    /// `+your_expense` when you paid, `-your_expense` when the friend paid.
    /// The expense is not checked against the bill value.
    pub fn submit(&self) -> Result<f64, SplitBillError> {
        let payer = self.payer.ok_or(SplitBillError::PayerNotChosen)?;
        let expense = parse_amount(&self.your_expense)
            .ok_or_else(|| SplitBillError::InvalidExpense(self.your_expense.clone()))?;

        let delta = match payer {
            Payer::You => expense,
            Payer::Friend => -expense,
        };
        debug!("Split bill form produced delta {}", delta);
        Ok(delta)
    }
}

/// Labels of the split-bill form that depend on the selected friend
pub struct SplitBillLabels {
    pub title: String,
    pub friend_expense: String,
    pub friend_option: String,
}

impl SplitBillLabels {
    pub fn for_friend(friend: &Friend) -> Self {
        Self {
            title: format!("Split a bill with {}", friend.name),
            friend_expense: format!("{}'s expense", friend.name),
            friend_option: friend.name.clone(),
        }
    }
}
