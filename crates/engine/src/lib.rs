//! Balance-posting engine for a personal finance tracker.
//!
//! The surrounding CRUD surface (HTTP, CSV import, validation) lives
//! elsewhere and hands this crate already-validated [`NewTransaction`]
//! events. The engine owns the only real decision logic in the system:
//! classifying each transaction into a posting rule
//! ([`rules::resolve`]) and applying the resulting signed balance
//! adjustments to accounts inside one database transaction
//! ([`Engine::record_transaction`]).
//!
//! Balances are denormalized running totals updated in place; there is no
//! posting ledger to replay. Posting is therefore deliberately
//! non-idempotent and happens exactly once per transaction, at creation
//! time.

pub use amount::Amount;
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use rules::{DesignatedAccounts, PostingRule, RuleConfig, TRANSFER_TYPE_ID};
pub use transactions::NewTransaction;

pub mod account_types;
pub mod accounts;
mod amount;
mod error;
mod ops;
pub mod rules;
pub mod transactions;

type ResultEngine<T> = Result<T, EngineError>;
