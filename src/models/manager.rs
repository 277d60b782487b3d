//! Account manager
//!
//! The top-level object: it owns every account and folds their derived
//! totals into portfolio-wide figures.

use super::account::Account;
use super::ids::AccountId;
use super::money::Money;
use super::summary::Summary;
use crate::storage::{Identifiable, KeyedStore};

/// A collection of accounts with portfolio-wide totals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountManager {
    accounts: KeyedStore<Account>,
}

impl AccountManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an account
    pub fn add_account(&mut self, account: Account) {
        log::debug!("added account {} ({})", account.id, account.name);
        self.accounts.add(account);
    }

    /// Remove every account with the given id
    ///
    /// Returns true if anything was removed.
    pub fn remove_account_by_id(&mut self, id: AccountId) -> bool {
        let removed = self.accounts.remove_by_id(id);
        if removed {
            log::debug!("removed account {}", id);
        }
        removed
    }

    /// Get the first account with the given id
    pub fn get_account_by_id(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get_by_id(id)
    }

    /// Get the first account with the given id, for in-place mutation
    pub fn get_account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_by_id_mut(id)
    }

    /// Snapshot of all accounts in insertion order
    pub fn all_accounts(&self) -> Vec<Account> {
        self.accounts.get_all()
    }

    /// Iterate over the accounts without copying
    pub fn iter_accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Id for the next account: one past the largest id in use
    pub fn next_account_id(&self) -> AccountId {
        self.accounts
            .max_id()
            .map(|id| id.next())
            .unwrap_or(AccountId::new(1))
    }

    /// Sum of every account's income
    pub fn income(&self) -> Money {
        self.accounts.iter().map(Account::income).sum()
    }

    /// Sum of every account's expenses
    pub fn expenses(&self) -> Money {
        self.accounts.iter().map(Account::expenses).sum()
    }

    /// Sum of every account's balance
    pub fn balance(&self) -> Money {
        self.accounts.iter().map(Account::balance).sum()
    }

    /// Portfolio totals as of now
    pub fn summary(&self) -> Summary {
        Summary {
            income: self.income(),
            expenses: self.expenses(),
            balance: self.balance(),
        }
    }

    /// Totals of a single account, if it exists
    pub fn account_summary(&self, id: AccountId) -> Option<Summary> {
        self.get_account_by_id(id).map(Account::summary)
    }

    /// One description line per account
    pub fn describe_accounts(&self) -> Vec<String> {
        self.accounts.describe_all()
    }

    /// Position (1-based) of the account in display order
    pub fn position_of(&self, id: AccountId) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.id() == id)
            .map(|index| index + 1)
    }
}

impl FromIterator<Account> for AccountManager {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        Self {
            accounts: iter.into_iter().collect(),
        }
    }
}
