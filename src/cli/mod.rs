//! CLI command handlers
//!
//! The terminal presentation layer: an interactive prompt loop around the
//! wizard, plus read-only commands for saved datafiles.

pub mod prompt;
pub mod run;
pub mod show;

pub use prompt::{Answer, Prompter};
pub use run::{run_wizard, RunOutcome};
pub use show::{handle_show_command, load_datafile};
