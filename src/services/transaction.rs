//! Transaction service
//!
//! Turns raw user input into transactions. Everything that can be wrong with
//! a transaction is caught here, before one is constructed: non-positive or
//! malformed amounts, unknown kinds, bad dates and empty descriptions.

use chrono::{DateTime, Utc};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    parse_timestamp, Account, Money, Transaction, TransactionId, TransactionKind,
};

/// Raw input for creating a new transaction, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct CreateTransactionInput {
    /// Amount, e.g. "120.50"; must be greater than zero
    pub amount: String,
    /// "1"/"income" or "2"/"expense"
    pub kind: String,
    /// `YYYY-MM-DD` or RFC 3339; empty means now
    pub date: String,
    pub description: String,
}

/// Service for transaction management within one account
pub struct TransactionService<'a> {
    account: &'a mut Account,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(account: &'a mut Account) -> Self {
        Self { account }
    }

    /// Validate the input and append a transaction dated now when no date is given
    pub fn create(&mut self, input: CreateTransactionInput) -> TrackerResult<Transaction> {
        self.create_at(input, Utc::now())
    }

    /// Like `create`, with an explicit "now" for empty dates
    pub fn create_at(
        &mut self,
        input: CreateTransactionInput,
        now: DateTime<Utc>,
    ) -> TrackerResult<Transaction> {
        let amount = parse_amount(&input.amount)?;
        let kind = parse_kind(&input.kind)?;
        let date = parse_date(&input.date, now)?;
        let description = parse_description(&input.description)?;

        let txn = Transaction::new(
            self.account.next_transaction_id(),
            amount,
            kind,
            date,
            description,
        );
        self.account.add_transaction(txn.clone());
        Ok(txn)
    }

    /// Remove a transaction, returning what was removed
    pub fn remove(&mut self, id: TransactionId) -> TrackerResult<Transaction> {
        let txn = self
            .account
            .transaction_by_id(id)
            .cloned()
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        self.account.remove_transaction_by_id(id);
        Ok(txn)
    }

    /// Look up a transaction by its 1-based position in the account
    pub fn find_by_position(&self, position: &str) -> TrackerResult<TransactionId> {
        position
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.account.iter_transactions().nth(index))
            .map(Transaction::id)
            .ok_or_else(|| TrackerError::transaction_not_found(position.trim()))
    }
}

/// Largest amount a single transaction may carry
///
/// Keeps account and portfolio totals far from `i64` overflow.
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000_000);

/// Parse a strictly positive amount no larger than `MAX_AMOUNT`
pub fn parse_amount(s: &str) -> TrackerResult<Money> {
    let amount = Money::parse(s).map_err(|e| reject(e.to_string()))?;
    if !amount.is_positive() {
        return Err(reject(format!(
            "Amount must be greater than 0, got {}",
            amount
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(reject(format!(
            "Amount must not exceed {}, got {}",
            MAX_AMOUNT, amount
        )));
    }
    Ok(amount)
}

/// Parse a transaction kind
pub fn parse_kind(s: &str) -> TrackerResult<TransactionKind> {
    TransactionKind::parse(s).ok_or_else(|| {
        reject(format!(
            "Invalid transaction type: '{}'. Use 1 (income) or 2 (expense)",
            s.trim()
        ))
    })
}

/// Parse a date, defaulting to `now` when empty
pub fn parse_date(s: &str, now: DateTime<Utc>) -> TrackerResult<DateTime<Utc>> {
    if s.trim().is_empty() {
        return Ok(now);
    }
    parse_timestamp(s).ok_or_else(|| {
        reject(format!(
            "Invalid date: '{}'. Use YYYY-MM-DD",
            s.trim()
        ))
    })
}

/// Trim a description and make sure something is left
pub fn parse_description(s: &str) -> TrackerResult<String> {
    let description = s.trim();
    if description.is_empty() {
        return Err(reject("Description cannot be empty".to_string()));
    }
    Ok(description.to_string())
}

fn reject(message: String) -> TrackerError {
    log::warn!("rejected transaction input: {}", message);
    TrackerError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountId;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn input(amount: &str, kind: &str, date: &str, description: &str) -> CreateTransactionInput {
        CreateTransactionInput {
            amount: amount.into(),
            kind: kind.into(),
            date: date.into(),
            description: description.into(),
        }
    }

    #[test]
    fn test_create_transaction() {
        let mut account = Account::new(AccountId::new(1), "Main");
        let mut service = TransactionService::new(&mut account);

        let txn = service
            .create_at(input("50000", "1", "2024-01-15", "  Salary  "), now())
            .unwrap();
        assert_eq!(txn.id(), TransactionId::new(1));
        assert_eq!(txn.amount(), Money::from_units(50000));
        assert_eq!(txn.kind(), TransactionKind::Income);
        assert_eq!(txn.date(), Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
        assert_eq!(txn.description(), "Salary");

        let second = service
            .create_at(input("25000", "expense", "", "Rent"), now())
            .unwrap();
        assert_eq!(second.id(), TransactionId::new(2));
        assert_eq!(second.date(), now());

        assert_eq!(account.balance(), Money::from_units(25000));
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let mut account = Account::new(AccountId::new(1), "Main");
        let mut service = TransactionService::new(&mut account);

        for amount in ["0", "-5", "0.00", "abc", ""] {
            let err = service
                .create_at(input(amount, "1", "", "x"), now())
                .unwrap_err();
            assert!(err.is_validation(), "amount {:?} should be rejected", amount);
        }
        assert_eq!(account.transaction_count(), 0);
    }

    #[test]
    fn test_amount_limit() {
        let mut account = Account::new(AccountId::new(1), "Main");
        let mut service = TransactionService::new(&mut account);

        service
            .create_at(input("1000000000000", "1", "", "Largest"), now())
            .unwrap();
        service
            .create_at(input("1000000000000", "1", "", "Largest again"), now())
            .unwrap();

        let err = service
            .create_at(input("50000000000000000", "1", "", "Too much"), now())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("must not exceed 1000000000000.00"));

        assert_eq!(account.transaction_count(), 2);
        assert_eq!(account.income(), Money::from_units(2_000_000_000_000));
        assert_eq!(account.balance(), account.income());
    }

    #[test]
    fn test_rejects_bad_kind() {
        let mut account = Account::new(AccountId::new(1), "Main");
        let err = TransactionService::new(&mut account)
            .create_at(input("10", "3", "", "x"), now())
            .unwrap_err();
        assert!(err.to_string().contains("Invalid transaction type"));
    }

    #[test]
    fn test_rejects_bad_date() {
        let mut account = Account::new(AccountId::new(1), "Main");
        let mut service = TransactionService::new(&mut account);

        for date in ["15.01.2024", "2024-13-01", "yesterday"] {
            assert!(service
                .create_at(input("10", "1", date, "x"), now())
                .unwrap_err()
                .is_validation());
        }
    }

    #[test]
    fn test_rejects_empty_description() {
        let mut account = Account::new(AccountId::new(1), "Main");
        let err = TransactionService::new(&mut account)
            .create_at(input("10", "1", "", "   "), now())
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Description cannot be empty");
    }

    #[test]
    fn test_remove_and_find_by_position() {
        let mut account = Account::new(AccountId::new(1), "Main");
        let mut service = TransactionService::new(&mut account);
        service.create_at(input("10", "1", "", "a"), now()).unwrap();
        service.create_at(input("20", "2", "", "b"), now()).unwrap();

        let id = service.find_by_position("2").unwrap();
        assert_eq!(id, TransactionId::new(2));

        let removed = service.remove(id).unwrap();
        assert_eq!(removed.description(), "b");
        assert!(service.remove(id).unwrap_err().is_not_found());
        assert!(service.find_by_position("2").is_err());
        assert_eq!(account.transaction_count(), 1);
    }

    #[test]
    fn test_ids_continue_after_removal() {
        let mut account = Account::new(AccountId::new(1), "Main");
        let mut service = TransactionService::new(&mut account);
        service.create_at(input("10", "1", "", "a"), now()).unwrap();
        service.create_at(input("10", "1", "", "b"), now()).unwrap();
        service.remove(TransactionId::new(1)).unwrap();

        let txn = service.create_at(input("10", "1", "", "c"), now()).unwrap();
        assert_eq!(txn.id(), TransactionId::new(3));
    }
}
