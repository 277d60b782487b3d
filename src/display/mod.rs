//! Display formatting for terminal output
//!
//! Presentation only: every number shown comes straight from the model's
//! summaries, rendered with two decimals.

pub mod account;
pub mod portfolio;
pub mod transaction;

pub use account::{format_account_details, format_account_list, format_account_summary_line};
pub use portfolio::{format_portfolio_details, format_portfolio_summary_line};
pub use transaction::{format_recent_transactions, format_transaction_list};
