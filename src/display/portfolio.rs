//! Portfolio display formatting
//!
//! Renders the manager-level totals, which are folded from each account.

use crate::models::AccountManager;

/// One-line summary of the whole portfolio
pub fn format_portfolio_summary_line(manager: &AccountManager) -> String {
    let summary = manager.summary();
    format!(
        "Total balance: {}, Total income: {}, Total expenses: {}, Accounts: {}",
        summary.balance,
        summary.income,
        summary.expenses,
        manager.account_count()
    )
}

/// Portfolio totals followed by a short block per account
pub fn format_portfolio_details(manager: &AccountManager) -> String {
    let summary = manager.summary();

    let mut output = String::new();
    output.push_str("=== PORTFOLIO ===\n");
    output.push_str(&format!("Total balance:  {}\n", summary.balance));
    output.push_str(&format!("Total income:   {}\n", summary.income));
    output.push_str(&format!("Total expenses: {}\n", summary.expenses));
    output.push_str(&format!("Accounts:       {}\n", manager.account_count()));

    if !manager.is_empty() {
        output.push_str("\nAccount details:\n");
        for (index, account) in manager.iter_accounts().enumerate() {
            output.push_str(&format!(
                "\n{}. {} (ID: {})\n",
                index + 1,
                account.name,
                account.id
            ));
            output.push_str(&format!("   Balance:      {}\n", account.balance()));
            output.push_str(&format!("   Transactions: {}\n", account.transaction_count()));
        }
    }

    output
}
