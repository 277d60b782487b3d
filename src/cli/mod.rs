//! CLI command handlers
//!
//! This module bridges clap argument parsing with the service layer: the
//! interactive menu session, the demo walkthrough, and CSV export.

pub mod demo;
pub mod export;
pub mod menu;
pub mod prompt;

use clap::ValueEnum;

use crate::models::AccountManager;

pub use demo::run_demo;
pub use export::handle_export_command;
pub use menu::Session;
pub use prompt::Prompter;

/// Which portfolio a command starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Seed {
    /// No accounts
    #[default]
    Empty,
    /// "Main" and "Savings"
    Sample,
    /// "Personal budget" and "Vacation fund"
    Initial,
}

impl Seed {
    /// Build the starting portfolio
    pub fn manager(self) -> AccountManager {
        match self {
            Self::Empty => AccountManager::new(),
            Self::Sample => crate::demo::sample_manager(),
            Self::Initial => crate::demo::initial_state(),
        }
    }
}
