//! Account service
//!
//! Builds accounts from user input and assigns their ids. The manager itself
//! accepts anything; this is where names get checked.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Account, AccountId, AccountManager};

/// Service for account management
pub struct AccountService<'a> {
    manager: &'a mut AccountManager,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(manager: &'a mut AccountManager) -> Self {
        Self { manager }
    }

    /// Create a new account with the next free id
    pub fn create(&mut self, name: &str) -> TrackerResult<AccountId> {
        let name = name.trim();
        let account = Account::new(self.manager.next_account_id(), name);

        account.validate().map_err(|e| {
            log::warn!("rejected account name {:?}", name);
            TrackerError::Validation(e.to_string())
        })?;

        let id = account.id;
        self.manager.add_account(account);
        Ok(id)
    }

    /// Remove an account, returning what was removed
    pub fn remove(&mut self, id: AccountId) -> TrackerResult<Account> {
        let account = self
            .manager
            .get_account_by_id(id)
            .cloned()
            .ok_or_else(|| TrackerError::account_not_found(id.to_string()))?;

        self.manager.remove_account_by_id(id);
        Ok(account)
    }

    /// Look up an account by its 1-based position in the account list
    pub fn find_by_position(&self, position: &str) -> TrackerResult<AccountId> {
        position
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.manager.iter_accounts().nth(index))
            .map(|account| account.id)
            .ok_or_else(|| TrackerError::account_not_found(position.trim()))
    }
}
