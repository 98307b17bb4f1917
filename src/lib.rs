// Budget Ledger - Core Library
// Exposes all modules for use in the CLI and in tests

pub mod chart;
pub mod entities;
pub mod error;
pub mod journal;
pub mod layout;
pub mod settings;

// Re-export commonly used types
pub use chart::{bucket, create_spend_chart, render_spend_chart, spend_list, SpendShare};
pub use entities::{title_case, Category, CategoryRegistry, CategorySummary, Snapshot, Transaction};
pub use error::{InsufficientFunds, JournalError, RegistryError};
pub use journal::{load_journal, read_journal, replay, Action, JournalEntry, Refusal, ReplayReport};
pub use layout::{ChartLayout, Layout};
pub use settings::Settings;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
