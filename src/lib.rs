//! Budget Tracker - personal finance tracking for the terminal
//!
//! This library provides the core of a small personal finance tracker:
//! accounts holding income and expense transactions, and a manager that
//! aggregates them into portfolio-wide totals. Every total is computed on
//! demand from the current transactions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Transactions, accounts, the account manager, money and ids
//! - `storage`: Generic in-memory keyed collections
//! - `services`: Input validation and id assignment
//! - `display`: Text rendering of transactions, accounts and the portfolio
//! - `export`: CSV export of an account's transactions
//! - `cli`: Interactive menu session and command handlers
//! - `config`: Configuration paths and user settings
//! - `demo`: Seed portfolios
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::models::{
//!     Account, AccountId, AccountManager, Money, Transaction, TransactionId, TransactionKind,
//! };
//! use chrono::{TimeZone, Utc};
//!
//! let mut account = Account::new(AccountId::new(1), "Main");
//! account.add_transaction(Transaction::new(
//!     TransactionId::new(1),
//!     Money::from_units(50000),
//!     TransactionKind::Income,
//!     Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
//!     "Salary",
//! ));
//!
//! let mut manager = AccountManager::new();
//! manager.add_account(account);
//! assert_eq!(manager.balance(), Money::from_units(50000));
//! ```

pub mod cli;
pub mod config;
pub mod demo;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
