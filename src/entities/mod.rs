// Entity Models
// "Identity persists, values change"
//
// - Transaction: one immutable ledger entry
// - Category: stable identity + append-only ledger
// - Registry: owner of every category, lookups and transfers by name

pub mod transaction;
pub mod category;
pub mod registry;

pub use transaction::Transaction;
pub use category::{title_case, Category};
pub use registry::{CategoryRegistry, CategorySummary, Snapshot};
