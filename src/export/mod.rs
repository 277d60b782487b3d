//! Export module
//!
//! CSV is the only export format: one file per account.

pub mod csv;

pub use self::csv::{export_transactions_csv, export_transactions_csv_file, HEADER};
