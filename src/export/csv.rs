//! CSV export of an account's transactions
//!
//! Layout: a header row `ID,Date,Type,Amount,Description`, then one row per
//! transaction in insertion order. Amounts are unsigned; the type column
//! carries the sign as a label.
//!
//! Amounts are always written with two decimals (`50000.00`, not `50000`),
//! the same rendering as everywhere else, so cents survive the export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{format_date, Account};

/// Column names, in output order
pub const HEADER: [&str; 5] = ["ID", "Date", "Type", "Amount", "Description"];

/// Write an account's transactions as CSV
///
/// Returns the number of transaction rows written.
pub fn export_transactions_csv<W: Write>(
    account: &Account,
    date_format: &str,
    writer: W,
) -> TrackerResult<usize> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;

    let mut rows = 0;
    for txn in account.iter_transactions() {
        csv_writer.write_record([
            txn.id().to_string(),
            format_date(&txn.date(), date_format),
            txn.kind().label().to_string(),
            txn.amount().to_string(),
            txn.description().to_string(),
        ])?;
        rows += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(rows)
}

/// Write an account's transactions to a CSV file, replacing any existing file
pub fn export_transactions_csv_file(
    account: &Account,
    date_format: &str,
    path: &Path,
) -> TrackerResult<usize> {
    let file = File::create(path).map_err(|e| {
        log::warn!("could not create {}: {}", path.display(), e);
        TrackerError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let rows = export_transactions_csv(account, date_format, file)?;
    log::debug!(
        "exported {} transaction(s) of account {} to {}",
        rows,
        account.id,
        path.display()
    );
    Ok(rows)
}
