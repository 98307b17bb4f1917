// 🧾 Transaction - One immutable ledger entry
//
// Positive amount = deposit (money in), negative amount = withdrawal.
// Entries are never edited; corrections are new offsetting entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Signed amount
    pub amount: f64,

    /// Free text shown in the ledger view (may be empty)
    pub description: String,

    /// When the entry was appended
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Transaction {
            amount,
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0.0
    }
}
