// 📒 Journal - Replay a CSV list of operations into a registry
//
// Format (header row required):
//
//   category,action,amount,description,target
//   food,deposit,1000,initial deposit,
//   food,withdraw,10.15,groceries,
//   food,transfer,50,,clothing
//
// Categories are created the first time they are mentioned, in order.
// Refused operations are collected in the report; they never stop the replay.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::entities::registry::CategoryRegistry;
use crate::error::{JournalError, RegistryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Deposit,
    Withdraw,
    Transfer,
}

/// One journal row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub category: String,
    pub action: Action,
    pub amount: f64,

    #[serde(default)]
    pub description: String,

    /// Destination category (transfers only)
    #[serde(default)]
    pub target: Option<String>,

    /// Source line in the journal file
    #[serde(skip)]
    pub line: u64,
}

/// An operation the ledger refused
#[derive(Debug, Clone, PartialEq)]
pub struct Refusal {
    pub line: u64,
    pub reason: RegistryError,
}

#[derive(Debug, Default)]
pub struct ReplayReport {
    pub applied: usize,
    pub refused: Vec<Refusal>,
}

impl ReplayReport {
    pub fn summary(&self) -> String {
        format!(
            "{} operations applied, {} refused",
            self.applied,
            self.refused.len()
        )
    }
}

pub fn load_journal(path: &Path) -> Result<Vec<JournalEntry>, JournalError> {
    let file = File::open(path)?;
    read_journal(file)
}

pub fn read_journal<R: Read>(reader: R) -> Result<Vec<JournalEntry>, JournalError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut entries = Vec::new();
    for result in rdr.records() {
        let mut record = result?;
        let line = record.position().map_or(0, |p| p.line());

        // Trailing optional columns may be left out entirely
        while record.len() < headers.len() {
            record.push_field("");
        }

        let mut entry: JournalEntry = record.deserialize(Some(&headers))?;
        entry.line = line;

        let has_target = entry.target.as_deref().is_some_and(|t| !t.is_empty());
        if entry.action == Action::Transfer && !has_target {
            return Err(JournalError::MissingTarget { line });
        }

        entries.push(entry);
    }

    tracing::debug!(entries = entries.len(), "journal loaded");
    Ok(entries)
}

/// Apply every entry to `registry` in order
pub fn replay(entries: &[JournalEntry], registry: &mut CategoryRegistry) -> ReplayReport {
    let mut report = ReplayReport::default();

    for entry in entries {
        registry.get_or_register(&entry.category);

        let outcome = match entry.action {
            Action::Deposit => registry.deposit(&entry.category, entry.amount, &entry.description),
            Action::Withdraw => registry.withdraw(&entry.category, entry.amount, &entry.description),
            Action::Transfer => {
                let target = entry.target.as_deref().unwrap_or_default();
                registry.get_or_register(target);
                registry.transfer(&entry.category, target, entry.amount)
            }
        };

        match outcome {
            Ok(()) => report.applied += 1,
            Err(reason) => {
                tracing::warn!(line = entry.line, "refused: {reason}");
                report.refused.push(Refusal {
                    line: entry.line,
                    reason,
                });
            }
        }
    }

    tracing::info!("{}", report.summary());
    report
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::category::Category;
    use crate::error::InsufficientFunds;

    const SAMPLE: &str = "\
category,action,amount,description,target
food,deposit,1000,initial deposit,
food,withdraw,10.15,groceries,
food,withdraw,15.89,restaurant and more food for dessert,
food,transfer,50,,clothing
clothing,withdraw,500,coat,
";

    #[test]
    fn test_read_journal() {
        let entries = read_journal(SAMPLE.as_bytes()).unwrap();

        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].action, Action::Deposit);
        assert_eq!(entries[0].description, "initial deposit");
        assert_eq!(entries[0].target, None);
        assert_eq!(entries[0].line, 2);
        assert_eq!(entries[3].action, Action::Transfer);
        assert_eq!(entries[3].target.as_deref(), Some("clothing"));
    }

    #[test]
    fn test_short_rows_are_accepted() {
        let journal = "category,action,amount,description,target\nfood,deposit,5\n";
        let entries = read_journal(journal.as_bytes()).unwrap();

        assert_eq!(entries[0].amount, 5.0);
        assert_eq!(entries[0].description, "");
        assert_eq!(entries[0].target, None);
        assert_eq!(entries[0].line, 2);
    }

    #[test]
    fn test_short_rows_replay() {
        let journal = "category,action,amount,description,target\n\
                       food,deposit,20\n\
                       food,withdraw,5,snacks\n";
        let entries = read_journal(journal.as_bytes()).unwrap();
        let mut registry = CategoryRegistry::new();

        let report = replay(&entries, &mut registry);

        let food = registry.find_by_name("food").unwrap();
        assert_eq!(report.applied, 2);
        assert_eq!(food.get_balance(), 15.0);
        assert_eq!(food.ledger()[1].description, "snacks");
    }

    #[test]
    fn test_transfer_without_target_is_rejected() {
        let journal = "category,action,amount,description,target\n\
                       food,deposit,5,,\n\
                       food,transfer,5,,\n";

        let err = read_journal(journal.as_bytes()).unwrap_err();
        assert!(matches!(err, JournalError::MissingTarget { line: 3 }));
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let journal = "category,action,amount,description,target\nfood,borrow,5,,\n";

        assert!(matches!(
            read_journal(journal.as_bytes()),
            Err(JournalError::Csv(_))
        ));
    }

    #[test]
    fn test_replay_matches_direct_calls() {
        let entries = read_journal(SAMPLE.as_bytes()).unwrap();
        let mut registry = CategoryRegistry::new();

        let report = replay(&entries, &mut registry);

        let mut food = Category::new("food");
        let mut clothing = Category::new("clothing");
        food.deposit(1000.0, "initial deposit");
        food.withdraw(10.15, "groceries").unwrap();
        food.withdraw(15.89, "restaurant and more food for dessert").unwrap();
        food.transfer(50.0, &mut clothing).unwrap();

        assert_eq!(report.applied, 4);
        assert_eq!(registry.count(), 2);
        assert_eq!(registry.find_by_name("food").unwrap().to_string(), food.to_string());
        assert_eq!(
            registry.find_by_name("clothing").unwrap().to_string(),
            clothing.to_string()
        );
    }

    #[test]
    fn test_replay_collects_refusals() {
        let entries = read_journal(SAMPLE.as_bytes()).unwrap();
        let mut registry = CategoryRegistry::new();

        let report = replay(&entries, &mut registry);

        assert_eq!(report.refused.len(), 1);
        assert_eq!(report.refused[0].line, 6);
        assert_eq!(
            report.refused[0].reason,
            RegistryError::Funds(InsufficientFunds {
                category: "Clothing".to_string(),
                requested: 500.0,
                available: 50.0,
            })
        );
        assert_eq!(report.summary(), "4 operations applied, 1 refused");
    }

    #[test]
    fn test_replay_registers_in_order_of_mention() {
        let journal = "category,action,amount,description,target\n\
                       business,deposit,10,,\n\
                       business,transfer,5,,food\n\
                       auto,deposit,1,,\n";
        let entries = read_journal(journal.as_bytes()).unwrap();
        let mut registry = CategoryRegistry::new();

        replay(&entries, &mut registry);

        let names: Vec<&str> = registry.all_categories().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Business", "Food", "Auto"]);
    }
}
