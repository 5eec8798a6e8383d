use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use budget_buddy::cli::{handle_show_command, run_wizard, Prompter};
use budget_buddy::config::{BuddyPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget-buddy",
    version,
    about = "Step-by-step monthly budget wizard",
    long_about = "BudgetBuddy walks you through entering your monthly income and \
                  categorized expenses, then shows how much is left over and saves \
                  a plain-text summary to a datafile."
)]
struct Cli {
    /// Directory where datafiles are read and written (default: current directory)
    #[arg(long, global = true, env = "BUDGET_BUDDY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive budget wizard (default)
    Run,

    /// Show a saved datafile with category totals
    Show {
        /// Datafile name, without the .txt extension
        name: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show resolved paths and settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BuddyPaths::resolve(cli.data_dir).context("failed to resolve paths")?;
    let settings = Settings::load_or_default(&paths)?;
    budget_buddy::logging::init(&settings.log_filter);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

            let outcome = run_wizard(paths.file_store(), &settings, &mut prompter)?;
            if outcome.saved.is_none() {
                prompter.say("Nothing was saved.")?;
            }
            prompter.say("Goodbye!")?;
        }
        Commands::Show { name, json } => {
            let store = paths.file_store();
            handle_show_command(&store, &name, json, &mut io::stdout().lock())
                .with_context(|| format!("could not show datafile '{}'", name))?;
        }
        Commands::Config => {
            println!("BudgetBuddy Configuration");
            println!("=========================");
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Log filter:      {}", settings.log_filter);
            println!("  Show splash:     {}", settings.show_splash);
            println!("  Confirm deletes: {}", settings.confirm_deletes);
        }
    }

    Ok(())
}
