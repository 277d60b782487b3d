//! Interactive menu session
//!
//! The session owns the account manager for the whole run and is handed to
//! the menu loop explicitly. Each screen returns the next one to show, so the
//! loop never recurses however long the session runs.

use std::io::{BufRead, Write};

use super::prompt::Prompter;
use crate::config::Settings;
use crate::display::{
    format_account_details, format_account_list, format_account_summary_line,
    format_portfolio_details, format_transaction_list,
};
use crate::error::{TrackerError, TrackerResult};
use crate::export::export_transactions_csv_file;
use crate::models::{AccountId, AccountManager};
use crate::services::transaction::{parse_amount, parse_date, parse_description, parse_kind};
use crate::services::{AccountService, CreateTransactionInput, TransactionService};

/// Which screen the session shows next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Main,
    Account(AccountId),
    Exit,
}

/// An interactive session over one account manager
pub struct Session<R, W> {
    manager: AccountManager,
    settings: Settings,
    prompter: Prompter<R, W>,
}

// Bail out of the current screen when input runs dry.
macro_rules! answer_or_exit {
    ($expr:expr) => {
        match $expr? {
            Some(answer) => answer,
            None => return Ok(Screen::Exit),
        }
    };
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(manager: AccountManager, settings: Settings, input: R, output: W) -> Self {
        Self {
            manager,
            settings,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run menus until the user exits or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        self.prompter.say("=== BUDGET TRACKER ===")?;

        let mut screen = Screen::Main;
        while screen != Screen::Exit {
            let result = match screen {
                Screen::Main => self.main_menu(),
                Screen::Account(id) => self.account_menu(id),
                Screen::Exit => break,
            };

            screen = match result {
                Ok(next) => next,
                Err(e) if e.is_recoverable() => {
                    self.prompter.say(&format!("Error: {}", e))?;
                    screen
                }
                Err(e) => return Err(e),
            };
        }

        log::debug!("session ended with {} account(s)", self.manager.account_count());
        Ok(())
    }

    pub fn manager(&self) -> &AccountManager {
        &self.manager
    }

    /// End the session, returning the manager and the writer
    pub fn finish(self) -> (AccountManager, W) {
        (self.manager, self.prompter.into_output())
    }

    fn main_menu(&mut self) -> TrackerResult<Screen> {
        self.prompter.say("\n=== MAIN MENU ===")?;
        self.prompter.say("Accounts:\n")?;

        if self.manager.is_empty() {
            self.prompter.say("No accounts yet. Create the first one.\n")?;
        } else {
            let lines: Vec<String> = self
                .manager
                .iter_accounts()
                .enumerate()
                .map(|(index, account)| {
                    format!("{}. {}", index + 1, format_account_summary_line(account))
                })
                .collect();
            for line in lines {
                self.prompter.say(&line)?;
            }
            self.prompter.say("")?;
        }

        self.prompter.say("Actions:")?;
        self.prompter.say("1. Select an account")?;
        self.prompter.say("2. Create a new account")?;
        self.prompter.say("3. Show portfolio summary")?;
        self.prompter.say("4. Exit")?;

        let choice = answer_or_exit!(self.prompter.ask("Choose an action (1-4): "));
        match choice.trim() {
            "1" => self.select_account(),
            "2" => self.create_account(),
            "3" => self.show_portfolio(),
            "4" => {
                self.prompter.say("Goodbye!")?;
                Ok(Screen::Exit)
            }
            _ => {
                self.prompter.say("Invalid choice. Try again.")?;
                Ok(Screen::Main)
            }
        }
    }

    fn select_account(&mut self) -> TrackerResult<Screen> {
        if self.manager.is_empty() {
            self.prompter
                .say("No accounts available. Create an account first.")?;
            return Ok(Screen::Main);
        }

        self.prompter.say("\n=== SELECT ACCOUNT ===")?;
        let lines: Vec<String> = self
            .manager
            .iter_accounts()
            .enumerate()
            .map(|(index, account)| format!("{}. {}", index + 1, account))
            .collect();
        for line in lines {
            self.prompter.say(&line)?;
        }

        let question = format!("Choose an account (1-{}): ", self.manager.account_count());
        let choice = answer_or_exit!(self.prompter.ask(&question));

        let id = AccountService::new(&mut self.manager).find_by_position(&choice)?;
        Ok(Screen::Account(id))
    }

    fn create_account(&mut self) -> TrackerResult<Screen> {
        self.prompter.say("\n=== NEW ACCOUNT ===")?;
        let name = answer_or_exit!(self.prompter.ask("Account name: "));

        let id = AccountService::new(&mut self.manager).create(&name)?;
        self.prompter
            .say(&format!("Account \"{}\" created (ID: {}).", name.trim(), id))?;
        Ok(Screen::Main)
    }

    fn show_portfolio(&mut self) -> TrackerResult<Screen> {
        let details = format_portfolio_details(&self.manager);
        let table = format_account_list(&self.manager.all_accounts());
        self.prompter.say("")?;
        self.prompter.print(&details)?;
        self.prompter.say("")?;
        self.prompter.print(&table)?;
        Ok(Screen::Main)
    }

    fn account_menu(&mut self, id: AccountId) -> TrackerResult<Screen> {
        let details = match self.manager.get_account_by_id(id) {
            Some(account) => format_account_details(
                account,
                self.settings.recent_transactions,
                &self.settings.date_format,
            ),
            None => {
                self.prompter.say("Account not found.")?;
                return Ok(Screen::Main);
            }
        };

        self.prompter.say("")?;
        self.prompter.print(&details)?;
        self.prompter.say("\n=== ACCOUNT MENU ===")?;
        self.prompter.say("1. Add a transaction")?;
        self.prompter.say("2. Remove a transaction")?;
        self.prompter.say("3. Export transactions to CSV")?;
        self.prompter.say("4. Delete this account")?;
        self.prompter.say("5. Back to the account list")?;

        let choice = answer_or_exit!(self.prompter.ask("Choose an action (1-5): "));
        match choice.trim() {
            "1" => self.add_transaction(id),
            "2" => self.remove_transaction(id),
            "3" => self.export_transactions(id),
            "4" => self.delete_account(id),
            "5" => Ok(Screen::Main),
            _ => {
                self.prompter.say("Invalid choice. Try again.")?;
                Ok(Screen::Account(id))
            }
        }
    }

    fn add_transaction(&mut self, id: AccountId) -> TrackerResult<Screen> {
        self.prompter.say("\n=== ADD TRANSACTION ===")?;

        // Each answer is checked as soon as it is given.
        let amount = answer_or_exit!(self.prompter.ask("Amount (greater than 0): "));
        parse_amount(&amount)?;

        self.prompter.say("Transaction type:")?;
        self.prompter.say("1. Income")?;
        self.prompter.say("2. Expense")?;
        let kind = answer_or_exit!(self.prompter.ask("Choose a type (1-2): "));
        parse_kind(&kind)?;

        let date = answer_or_exit!(self.prompter.ask("Date (YYYY-MM-DD) [today]: "));
        parse_date(&date, chrono::Utc::now())?;

        let description = answer_or_exit!(self.prompter.ask("Description: "));
        parse_description(&description)?;

        let account = self
            .manager
            .get_account_mut(id)
            .ok_or_else(|| TrackerError::account_not_found(id.to_string()))?;
        let txn = TransactionService::new(account).create(CreateTransactionInput {
            amount,
            kind,
            date,
            description,
        })?;

        self.prompter.say(&format!(
            "Transaction added: ID {}, {} {}.",
            txn.id(),
            txn.kind(),
            txn.amount()
        ))?;
        Ok(Screen::Account(id))
    }

    fn remove_transaction(&mut self, id: AccountId) -> TrackerResult<Screen> {
        self.prompter.say("\n=== REMOVE TRANSACTION ===")?;

        let transactions = self
            .manager
            .get_account_by_id(id)
            .map(|account| account.transactions())
            .ok_or_else(|| TrackerError::account_not_found(id.to_string()))?;

        if transactions.is_empty() {
            self.prompter.say("This account has no transactions.")?;
            return Ok(Screen::Account(id));
        }

        self.prompter
            .print(&format_transaction_list(&transactions, &self.settings.date_format))?;

        let question = format!("Choose a transaction to remove (1-{}): ", transactions.len());
        let choice = answer_or_exit!(self.prompter.ask(&question));

        let account = self
            .manager
            .get_account_mut(id)
            .ok_or_else(|| TrackerError::account_not_found(id.to_string()))?;
        let txn_id = TransactionService::new(account).find_by_position(&choice)?;

        if let Some(txn) = transactions.iter().find(|t| t.id() == txn_id) {
            self.prompter
                .say(&format!("Selected: {}", txn.render(&self.settings.date_format)))?;
        }

        let confirmed =
            answer_or_exit!(self.prompter.confirm("Remove this transaction? (yes/no): "));
        if !confirmed {
            self.prompter.say("Removal cancelled.")?;
            return Ok(Screen::Account(id));
        }

        let account = self
            .manager
            .get_account_mut(id)
            .ok_or_else(|| TrackerError::account_not_found(id.to_string()))?;
        TransactionService::new(account).remove(txn_id)?;
        self.prompter.say("Transaction removed.")?;
        Ok(Screen::Account(id))
    }

    fn export_transactions(&mut self, id: AccountId) -> TrackerResult<Screen> {
        self.prompter.say("\n=== EXPORT TO CSV ===")?;

        let has_transactions = self
            .manager
            .get_account_by_id(id)
            .map(|account| account.transaction_count() > 0)
            .ok_or_else(|| TrackerError::account_not_found(id.to_string()))?;
        if !has_transactions {
            self.prompter.say("This account has no transactions to export.")?;
            return Ok(Screen::Account(id));
        }

        let file_name = answer_or_exit!(self.prompter.ask("File name (without extension): "));
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(TrackerError::Validation("File name cannot be empty".into()));
        }

        let path = self.settings.export_path(&format!("{}.csv", file_name));
        let account = self
            .manager
            .get_account_by_id(id)
            .ok_or_else(|| TrackerError::account_not_found(id.to_string()))?;
        let rows = export_transactions_csv_file(account, &self.settings.date_format, &path)?;

        self.prompter.say(&format!(
            "Exported {} transaction(s) to {}",
            rows,
            path.display()
        ))?;
        Ok(Screen::Account(id))
    }

    fn delete_account(&mut self, id: AccountId) -> TrackerResult<Screen> {
        let warning = self
            .manager
            .get_account_by_id(id)
            .map(|account| {
                format!(
                    "You are about to delete account: {}\nID: {}, Balance: {}\nTransactions: {}\n",
                    account.name,
                    account.id,
                    account.balance(),
                    account.transaction_count()
                )
            })
            .ok_or_else(|| TrackerError::account_not_found(id.to_string()))?;

        self.prompter.say("\n=== DELETE ACCOUNT ===")?;
        self.prompter.print(&warning)?;

        let confirmed =
            answer_or_exit!(self.prompter.confirm("Delete this account? (yes/no): "));
        if !confirmed {
            self.prompter.say("Deletion cancelled.")?;
            return Ok(Screen::Account(id));
        }

        let removed = AccountService::new(&mut self.manager).remove(id)?;
        self.prompter
            .say(&format!("Account \"{}\" deleted.", removed.name))?;
        Ok(Screen::Main)
    }
}
