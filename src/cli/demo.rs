//! Non-interactive walkthrough of the sample portfolio

use std::io::Write;

use crate::config::Settings;
use crate::demo;
use crate::display::{
    format_account_details, format_account_summary_line, format_portfolio_details,
    format_portfolio_summary_line,
};
use crate::error::TrackerResult;
use crate::models::{AccountId, TransactionId};

/// Print the sample portfolio, look an account up, remove another, and
/// show the totals that are left
pub fn run_demo<W: Write>(out: &mut W, settings: &Settings) -> TrackerResult<()> {
    let date_format = settings.date_format.as_str();
    let mut manager = demo::sample_manager();

    writeln!(out, "=== Transactions ===")?;
    if let Some(main) = manager.get_account_by_id(AccountId::new(1)) {
        for id in [1, 2] {
            if let Some(txn) = main.transaction_by_id(TransactionId::new(id)) {
                writeln!(out, "{}", txn.render(date_format))?;
            }
        }

        writeln!(out, "\n=== Account ===")?;
        writeln!(out, "{}", format_account_summary_line(main))?;
        writeln!(out, "\nAccount details:")?;
        write!(
            out,
            "{}",
            format_account_details(main, settings.recent_transactions, date_format)
        )?;
    }

    writeln!(out, "\n=== Portfolio ===")?;
    writeln!(out, "{}", format_portfolio_summary_line(&manager))?;
    writeln!(out)?;
    write!(out, "{}", format_portfolio_details(&manager))?;

    writeln!(out, "\n=== Descriptions ===")?;
    for line in manager.describe_accounts() {
        writeln!(out, "{}", line)?;
    }

    writeln!(out, "\n=== Lookup by ID ===")?;
    match manager.get_account_by_id(AccountId::new(1)) {
        Some(account) => writeln!(out, "Found account: {}", account.name)?,
        None => writeln!(out, "Account 1 not found")?,
    }

    writeln!(out, "\n=== Remove account ===")?;
    let removed = manager.remove_account_by_id(AccountId::new(2));
    writeln!(out, "Account removed: {}", removed)?;
    writeln!(out, "Accounts left: {}", manager.account_count())?;

    writeln!(out, "\n=== Final balance ===")?;
    writeln!(out, "{}", format_portfolio_summary_line(&manager))?;

    log::debug!("demo finished with {} account(s)", manager.account_count());
    Ok(())
}
