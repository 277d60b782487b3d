//! Account model
//!
//! An account is a named, ordered list of transactions. Income, expenses and
//! balance are folded from the transactions on every call and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, TransactionId};
use super::money::Money;
use super::summary::Summary;
use super::transaction::{Transaction, TransactionKind};
use crate::storage::{Describable, Identifiable, KeyedStore};

/// A named grouping of transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique within the owning manager
    pub id: AccountId,

    /// Account name (e.g., "Main")
    pub name: String,

    #[serde(with = "transaction_list")]
    transactions: KeyedStore<Transaction>,
}

impl Account {
    /// Create an account with no transactions
    pub fn new(id: AccountId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            transactions: KeyedStore::new(),
        }
    }

    /// Append a transaction
    pub fn add_transaction(&mut self, transaction: Transaction) {
        log::debug!(
            "account {}: added transaction {} ({} {})",
            self.id,
            transaction.id(),
            transaction.kind().tag(),
            transaction.amount()
        );
        self.transactions.add(transaction);
    }

    /// Remove every transaction with the given id
    ///
    /// Returns true if the transaction list got shorter.
    pub fn remove_transaction_by_id(&mut self, id: TransactionId) -> bool {
        let removed = self.transactions.remove_by_id(id);
        if removed {
            log::debug!("account {}: removed transaction {}", self.id, id);
        }
        removed
    }

    /// Get the first transaction with the given id
    pub fn transaction_by_id(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.get_by_id(id)
    }

    /// Snapshot of the transactions in insertion order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.get_all()
    }

    /// Iterate over the transactions without copying
    pub fn iter_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Sum of income transactions
    pub fn income(&self) -> Money {
        self.total_of(TransactionKind::Income)
    }

    /// Sum of expense transactions
    pub fn expenses(&self) -> Money {
        self.total_of(TransactionKind::Expense)
    }

    /// Income minus expenses
    pub fn balance(&self) -> Money {
        self.income() - self.expenses()
    }

    /// Income, expenses and balance as of now
    pub fn summary(&self) -> Summary {
        Summary::new(self.income(), self.expenses())
    }

    /// Id for the next transaction: one past the largest id in use
    pub fn next_transaction_id(&self) -> TransactionId {
        self.transactions
            .max_id()
            .map(|id| id.next())
            .unwrap_or(TransactionId::new(1))
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        Ok(())
    }

    fn total_of(&self, kind: TransactionKind) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind() == kind)
            .map(Transaction::amount)
            .sum()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

impl Identifiable for Account {
    type Id = AccountId;

    fn id(&self) -> AccountId {
        self.id
    }

    fn as_describable(&self) -> Option<&dyn Describable> {
        Some(self)
    }
}

impl Describable for Account {
    fn describe(&self) -> String {
        format!(
            "{}: balance {}, {} transaction(s)",
            self,
            self.balance(),
            self.transaction_count()
        )
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

// Serialize the store as a plain list.
mod transaction_list {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{KeyedStore, Transaction};

    pub fn serialize<S: Serializer>(
        store: &KeyedStore<Transaction>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(store.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<KeyedStore<Transaction>, D::Error> {
        let list = Vec::<Transaction>::deserialize(deserializer)?;
        Ok(list.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn txn(id: u32, units: i64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            Money::from_units(units),
            kind,
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            format!("txn {}", id),
        )
    }

    fn main_account() -> Account {
        let mut account = Account::new(AccountId::new(1), "Main");
        account.add_transaction(txn(1, 50000, TransactionKind::Income));
        account.add_transaction(txn(2, 25000, TransactionKind::Expense));
        account.add_transaction(txn(3, 5000, TransactionKind::Expense));
        account
    }

    #[test]
    fn test_new_account_is_empty() {
        let account = Account::new(AccountId::new(1), "Main");
        assert_eq!(account.name, "Main");
        assert_eq!(account.transaction_count(), 0);
        assert_eq!(account.summary(), Summary::default());
    }

    #[test]
    fn test_main_account_totals() {
        let account = main_account();
        assert_eq!(account.income(), Money::from_units(50000));
        assert_eq!(account.expenses(), Money::from_units(30000));
        assert_eq!(account.balance(), Money::from_units(20000));
    }

    #[test]
    fn test_balance_tracks_mutations() {
        let mut account = main_account();
        account.add_transaction(txn(4, 1000, TransactionKind::Expense));
        assert_eq!(account.balance(), Money::from_units(19000));

        assert!(account.remove_transaction_by_id(TransactionId::new(1)));
        assert_eq!(account.income(), Money::zero());
        assert_eq!(account.balance(), Money::from_units(-31000));
        assert_eq!(account.balance(), account.income() - account.expenses());
    }

    #[test]
    fn test_remove_transaction_preserves_order() {
        let mut account = main_account();
        assert!(account.remove_transaction_by_id(TransactionId::new(2)));
        assert!(!account.remove_transaction_by_id(TransactionId::new(2)));

        let ids: Vec<u32> = account
            .transactions()
            .iter()
            .map(|t| t.id().value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_transaction() {
        let mut account = main_account();
        assert!(!account.remove_transaction_by_id(TransactionId::new(99)));
        assert_eq!(account.transaction_count(), 3);
    }

    #[test]
    fn test_transactions_snapshot() {
        let account = main_account();
        let mut snapshot = account.transactions();
        snapshot.pop();
        snapshot.push(txn(9, 1, TransactionKind::Income));
        assert_eq!(account.transaction_count(), 3);
        assert!(account.transaction_by_id(TransactionId::new(9)).is_none());
    }

    #[test]
    fn test_next_transaction_id() {
        let mut account = Account::new(AccountId::new(1), "Empty");
        assert_eq!(account.next_transaction_id(), TransactionId::new(1));

        account.add_transaction(txn(7, 10, TransactionKind::Income));
        account.add_transaction(txn(3, 10, TransactionKind::Income));
        assert_eq!(account.next_transaction_id(), TransactionId::new(8));
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new(AccountId::new(1), "Valid");
        assert!(account.validate().is_ok());

        account.name = "   ".into();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));
    }

    #[test]
    fn test_describe() {
        let account = main_account();
        assert_eq!(
            account.describe(),
            "Main (ID: 1): balance 20000.00, 3 transaction(s)"
        );
    }

    #[test]
    fn test_serialization() {
        let account = main_account();
        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account, deserialized);
    }
}
