//! Errors raised by the ledger core.
//!
//! - [`InsufficientFunds`] is the only way a withdrawal or a transfer fails.
//! - [`RegistryError`] covers lookups and transfers done by name.
//! - [`JournalError`] covers reading a CSV journal.
use thiserror::Error;

/// A withdrawal was refused because the balance does not cover it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("insufficient funds in {category}: requested {requested}, available {available}")]
pub struct InsufficientFunds {
    pub category: String,
    pub requested: f64,
    pub available: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("\"{0}\" category not found!")]
    UnknownCategory(String),
    #[error("\"{0}\" category already present!")]
    DuplicateCategory(String),
    #[error("cannot transfer from \"{0}\" to itself")]
    SelfTransfer(String),
    #[error(transparent)]
    Funds(#[from] InsufficientFunds),
}

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("failed to read journal: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed journal row: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: transfer without a target category")]
    MissingTarget { line: u64 },
}
