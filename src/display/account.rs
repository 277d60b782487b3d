//! Account display formatting
//!
//! Formats accounts for terminal output in summary-line, table and detail
//! views. Every figure is taken from the account's summary at call time.

use super::transaction::format_recent_transactions;
use crate::models::{Account, Money};

/// One-line summary of an account
pub fn format_account_summary_line(account: &Account) -> String {
    let summary = account.summary();
    format!(
        "Account \"{}\": Balance: {}, Income: {}, Expenses: {}, Transactions: {}",
        account.name,
        summary.balance,
        summary.income,
        summary.expenses,
        account.transaction_count()
    )
}

/// Format a single account's details with its most recent transactions
pub fn format_account_details(account: &Account, recent: usize, date_format: &str) -> String {
    let summary = account.summary();

    let mut output = String::new();
    output.push_str(&format!("=== Account: {} (ID: {}) ===\n", account.name, account.id));
    output.push_str(&format!("Balance:      {}\n", summary.balance));
    output.push_str(&format!("Income:       {}\n", summary.income));
    output.push_str(&format!("Expenses:     {}\n", summary.expenses));
    output.push_str(&format!("Transactions: {}\n", account.transaction_count()));

    if account.transaction_count() > 0 && recent > 0 {
        output.push_str("\nRecent transactions:\n");
        output.push_str(&format_recent_transactions(
            &account.transactions(),
            recent,
            date_format,
        ));
    }

    output
}

/// Format a list of accounts as a table with a total row
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>4}  {:>12}  {:>12}  {:>12}  {:>5}\n",
        "Name",
        "ID",
        "Income",
        "Expenses",
        "Balance",
        "Txns",
        name_width = name_width,
    ));
    output.push_str(&separator(name_width));

    for account in accounts {
        let summary = account.summary();
        output.push_str(&format!(
            "{:<name_width$}  {:>4}  {:>12}  {:>12}  {:>12}  {:>5}\n",
            account.name,
            account.id,
            summary.income,
            summary.expenses,
            summary.balance,
            account.transaction_count(),
            name_width = name_width,
        ));
    }

    let total_income: Money = accounts.iter().map(Account::income).sum();
    let total_expenses: Money = accounts.iter().map(Account::expenses).sum();
    let total_balance: Money = accounts.iter().map(Account::balance).sum();
    let total_count: usize = accounts.iter().map(Account::transaction_count).sum();

    output.push_str(&separator(name_width));
    output.push_str(&format!(
        "{:<name_width$}  {:>4}  {:>12}  {:>12}  {:>12}  {:>5}\n",
        "TOTAL",
        "",
        total_income,
        total_expenses,
        total_balance,
        total_count,
        name_width = name_width,
    ));

    output
}

fn separator(name_width: usize) -> String {
    format!(
        "{:-<name_width$}  {:->4}  {:->12}  {:->12}  {:->12}  {:->5}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    )
}
