//! Transaction model
//!
//! A transaction is one dated monetary movement. The amount is always
//! positive; whether it adds to or subtracts from a balance comes from its
//! kind.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use crate::storage::{Describable, Identifiable};

/// strftime pattern used when no other date format is configured
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a transaction is money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Human label, as shown in menus and CSV exports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Lowercase tag, matching the serialized form
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// The sign character used when rendering an amount of this kind
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }

    /// Apply this kind's sign to a positive amount
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }

    /// Parse a kind from a menu choice or a name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "income" | "i" | "+" => Some(Self::Income),
            "2" | "expense" | "e" | "-" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single monetary movement
///
/// Fields are fixed at construction. The id only has to be unique within the
/// owning account; the caller is responsible for picking it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    amount: Money,
    #[serde(rename = "type")]
    kind: TransactionKind,
    date: DateTime<Utc>,
    description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        amount: Money,
        kind: TransactionKind,
        date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            kind,
            date,
            description: description.into(),
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// The unsigned amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The amount with the kind's sign applied
    pub fn signed_amount(&self) -> Money {
        self.kind.signed(self.amount)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Render as `[date] description: +amount (ID: id)` using the given
    /// strftime pattern for the date
    pub fn render(&self, date_format: &str) -> String {
        format!(
            "[{}] {}: {}{} (ID: {})",
            format_date(&self.date, date_format),
            self.description,
            self.kind.sign(),
            self.amount,
            self.id
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_DATE_FORMAT))
    }
}

impl Identifiable for Transaction {
    type Id = TransactionId;

    fn id(&self) -> TransactionId {
        self.id
    }

    fn as_describable(&self) -> Option<&dyn Describable> {
        Some(self)
    }
}

impl Describable for Transaction {
    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Format a timestamp with a strftime pattern
///
/// Falls back to `DEFAULT_DATE_FORMAT` when the pattern cannot be rendered.
pub fn format_date(date: &DateTime<Utc>, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}

/// Parse an ISO-8601 calendar date (`2024-01-15`, taken as midnight UTC) or
/// an RFC 3339 date-time (`2024-01-15T10:30:00Z`)
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn jan(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
    }

    fn salary() -> Transaction {
        Transaction::new(
            TransactionId::new(1),
            Money::from_units(50000),
            TransactionKind::Income,
            jan(15),
            "Salary for January",
        )
    }

    #[test]
    fn test_new_transaction() {
        let txn = salary();
        assert_eq!(txn.id(), TransactionId::new(1));
        assert_eq!(txn.amount(), Money::from_units(50000));
        assert_eq!(txn.kind(), TransactionKind::Income);
        assert_eq!(txn.date(), jan(15));
        assert_eq!(txn.description(), "Salary for January");
        assert!(txn.is_income());
        assert!(!txn.is_expense());
    }

    #[test]
    fn test_signed_amount() {
        let rent = Transaction::new(
            TransactionId::new(2),
            Money::from_units(25000),
            TransactionKind::Expense,
            jan(16),
            "Rent",
        );
        assert_eq!(rent.amount(), Money::from_units(25000));
        assert_eq!(rent.signed_amount(), Money::from_units(-25000));
        assert_eq!(salary().signed_amount(), Money::from_units(50000));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            salary().to_string(),
            "[2024-01-15] Salary for January: +50000.00 (ID: 1)"
        );

        let groceries = Transaction::new(
            TransactionId::new(3),
            Money::from_cents(499_950),
            TransactionKind::Expense,
            jan(17),
            "Groceries",
        );
        assert_eq!(
            groceries.to_string(),
            "[2024-01-17] Groceries: -4999.50 (ID: 3)"
        );
    }

    #[test]
    fn test_render_with_custom_format() {
        assert_eq!(
            salary().render("%d.%m.%Y"),
            "[15.01.2024] Salary for January: +50000.00 (ID: 1)"
        );
    }

    #[test]
    fn test_format_date_falls_back_on_bad_pattern() {
        assert_eq!(format_date(&jan(15), "%Q"), "2024-01-15");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(TransactionKind::parse("1"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("Expense"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse(" income "), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("3"), None);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(TransactionKind::Income.label(), "Income");
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
        assert_eq!(TransactionKind::Expense.tag(), "expense");
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("2024-01-15"), Some(jan(15)));
        assert_eq!(parse_timestamp("2024-01-15T00:00:00Z"), Some(jan(15)));
        assert_eq!(
            parse_timestamp("2024-01-15T03:00:00+03:00"),
            Some(jan(15))
        );
        assert_eq!(parse_timestamp("15/01/2024"), None);
        assert_eq!(parse_timestamp("2024-02-30"), None);
    }

    #[test]
    fn test_serialization() {
        let txn = salary();
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"type\":\"income\""));
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
