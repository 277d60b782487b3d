//! CLI command for CSV export
//!
//! Exports one account of a seeded portfolio without going through the menu.

use std::path::Path;

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::export::export_transactions_csv_file;
use crate::models::{AccountId, AccountManager};

/// Export an account's transactions to `output`
///
/// Without an account id the first account is exported. Returns the number
/// of transaction rows written.
pub fn handle_export_command(
    manager: &AccountManager,
    settings: &Settings,
    output: &Path,
    account: Option<AccountId>,
) -> TrackerResult<usize> {
    let account = match account {
        Some(id) => manager
            .get_account_by_id(id)
            .ok_or_else(|| TrackerError::account_not_found(id.to_string()))?,
        None => manager
            .iter_accounts()
            .next()
            .ok_or_else(|| TrackerError::Export("There are no accounts to export".into()))?,
    };

    let rows = export_transactions_csv_file(account, &settings.date_format, output)?;
    println!(
        "Exported {} transaction(s) of \"{}\" to {}",
        rows,
        account.name,
        output.display()
    );
    Ok(rows)
}
