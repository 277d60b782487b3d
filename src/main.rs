use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{handle_export_command, run_demo, Seed, Session};
use budget_tracker::config::{paths::TrackerPaths, settings::Settings};
use budget_tracker::models::AccountId;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal finance tracker for the terminal",
    long_about = "Track income and expenses across several accounts, see balances \
                  per account and for the whole portfolio, and export an account's \
                  transactions to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    Menu {
        /// Portfolio to start from
        #[arg(short, long, value_enum, default_value_t = Seed::Empty)]
        seed: Seed,
    },

    /// Walk through the sample portfolio without prompting
    Demo,

    /// Export an account of a seeded portfolio to CSV
    Export {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Account ID (defaults to the first account)
        #[arg(short, long)]
        account: Option<AccountId>,

        /// Portfolio to export from
        #[arg(short, long, value_enum, default_value_t = Seed::Sample)]
        seed: Seed,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Menu { seed: Seed::Empty }) {
        Commands::Menu { seed } => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut session = Session::new(seed.manager(), settings, stdin.lock(), stdout.lock());
            session.run()?;
        }
        Commands::Demo => {
            let stdout = std::io::stdout();
            run_demo(&mut stdout.lock(), &settings)?;
        }
        Commands::Export {
            output,
            account,
            seed,
        } => {
            handle_export_command(&seed.manager(), &settings, &output, account)?;
        }
        Commands::Config { save } => {
            if save {
                settings.save(&paths)?;
                println!("Settings saved to: {}", paths.settings_file().display());
                println!();
            }
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Date format:         {}", settings.date_format);
            println!(
                "  Export directory:    {}",
                settings
                    .export_dir
                    .as_deref()
                    .map(|dir| dir.display().to_string())
                    .unwrap_or_else(|| "(working directory)".to_string())
            );
            println!("  Recent transactions: {}", settings.recent_transactions);
        }
    }

    Ok(())
}
