//! Core data models for the budget tracker
//!
//! Transactions are owned by accounts, accounts by the manager. Every total
//! is derived from current state on demand.

pub mod account;
pub mod ids;
pub mod manager;
pub mod money;
pub mod summary;
pub mod transaction;

pub use account::{Account, AccountValidationError};
pub use ids::{AccountId, TransactionId};
pub use manager::AccountManager;
pub use money::{Money, MoneyParseError};
pub use summary::Summary;
pub use transaction::{
    format_date, parse_timestamp, Transaction, TransactionKind, DEFAULT_DATE_FORMAT,
};
