//! Input-validation layer
//!
//! Services sit between user input and the core model. They check input,
//! pick ids, and turn "nothing matched" into a reportable error.

pub mod account;
pub mod transaction;

pub use account::AccountService;
pub use transaction::{CreateTransactionInput, TransactionService};
