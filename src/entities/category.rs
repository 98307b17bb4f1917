// 🏷️ Category Entity - A named budget with its own append-only ledger
//
// "Category name is a VALUE, Category UUID is IDENTITY"
//
// Problem solved:
// - Each spending category keeps every deposit and withdrawal it ever saw
// - Balance is always derived from the ledger, never stored
// - Withdrawals are checked against the balance BEFORE anything is appended
// - Transfers compose a withdrawal here with a deposit on the destination

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::entities::transaction::Transaction;
use crate::error::InsufficientFunds;
use crate::layout::Layout;

// ============================================================================
// CATEGORY ENTITY
// ============================================================================

/// Category Entity - identity plus an ordered, append-only ledger
///
/// Identity: UUID (never changes)
/// Value: title-cased name
/// State: ledger (grows, never shrinks)
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Stable identity (UUID) - NEVER changes
    pub id: String,

    /// Title-cased display name (e.g., "Food", "Auto Insurance")
    name: String,

    /// Every entry in the order it was appended
    ledger: Vec<Transaction>,

    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a category with an empty ledger
    pub fn new(name: &str) -> Self {
        Self::with_title(title_case(name))
    }

    /// Create a category from a name that is already title-cased
    pub(crate) fn with_title(name: String) -> Self {
        Category {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            ledger: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the ledger
    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    // ========================================================================
    // BOOKKEEPING
    // ========================================================================

    /// Append a deposit. Amount and description are taken as given.
    pub fn deposit(&mut self, amount: f64, description: &str) {
        tracing::debug!(category = %self.name, amount, description, "deposit");
        self.ledger.push(Transaction::new(amount, description));
    }

    /// Append a withdrawal of `amount` (stored negated) if the balance covers it.
    ///
    /// On refusal the ledger is left untouched.
    pub fn withdraw(&mut self, amount: f64, description: &str) -> Result<(), InsufficientFunds> {
        if !self.check_funds(amount) {
            let refused = InsufficientFunds {
                category: self.name.clone(),
                requested: amount,
                available: self.get_balance(),
            };
            tracing::warn!("{refused}");
            return Err(refused);
        }

        tracing::debug!(category = %self.name, amount, description, "withdraw");
        self.ledger.push(Transaction::new(-amount, description));
        Ok(())
    }

    /// Move `amount` into `destination`.
    ///
    /// Fails only when the withdrawal on this side is refused; in that case
    /// neither category changes.
    pub fn transfer(
        &mut self,
        amount: f64,
        destination: &mut Category,
    ) -> Result<(), InsufficientFunds> {
        self.withdraw(amount, &format!("Transfer to {}", destination.name))?;
        destination.deposit(amount, &format!("Transfer from {}", self.name));
        Ok(())
    }

    /// Sum of every ledger amount (0 for an empty ledger)
    pub fn get_balance(&self) -> f64 {
        self.ledger.iter().fold(0.0, |total, t| total + t.amount)
    }

    /// True iff `amount` does not exceed the current balance
    pub fn check_funds(&self, amount: f64) -> bool {
        amount <= self.get_balance()
    }

    /// Total outflow as a positive number; deposits are ignored
    pub fn spent(&self) -> f64 {
        self.ledger
            .iter()
            .filter(|t| t.is_withdrawal())
            .fold(0.0, |total, t| total - t.amount)
    }

    // ========================================================================
    // TEXT VIEW
    // ========================================================================

    /// Render the fixed-width ledger block with the given layout
    pub fn render(&self, layout: &Layout) -> String {
        let mut lines = Vec::with_capacity(self.ledger.len() + 2);

        lines.push(layout.center(&self.name));
        for t in &self.ledger {
            lines.push(format!(
                "{}{}",
                layout.description_cell(&t.description),
                layout.amount_cell(t.amount)
            ));
        }
        lines.push(format!("Total: {}", self.get_balance()));

        lines.join("\n")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Layout::default()))
    }
}

/// Upper-case the first cased letter of every word, lower-case the rest.
///
/// A word starts at any cased letter that does not follow another cased
/// letter, so "auto insurance" becomes "Auto Insurance", "o'neil" becomes
/// "O'Neil" and "a中b" becomes "A中B". Applying it twice changes nothing.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;

    for c in name.chars() {
        if c.is_uppercase() || c.is_lowercase() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                push_initial(&mut out, c);
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Word-initial form of `c`: only the first char of a multi-char
/// upper-case expansion stays upper-case ("ß" -> "Ss")
fn push_initial(out: &mut String, c: char) {
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}

// ============================================================================
// TESTS
// ============================================================================
