//! Transaction display formatting

use crate::models::Transaction;

/// Format transactions as a numbered list, one rendering per line
pub fn format_transaction_list(transactions: &[Transaction], date_format: &str) -> String {
    if transactions.is_empty() {
        return "No transactions.\n".to_string();
    }

    let mut output = String::new();
    for (index, txn) in transactions.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, txn.render(date_format)));
    }
    output
}

/// Format the last `limit` transactions, newest first, indented
pub fn format_recent_transactions(
    transactions: &[Transaction],
    limit: usize,
    date_format: &str,
) -> String {
    let mut output = String::new();
    for txn in transactions.iter().rev().take(limit) {
        output.push_str(&format!("  {}\n", txn.render(date_format)));
    }
    output
}
