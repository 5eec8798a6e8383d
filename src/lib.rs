//! BudgetBuddy - step-by-step monthly budget wizard
//!
//! This library collects a user's monthly income and categorized expenses
//! through a fixed sequence of validated steps, then computes a budget
//! summary and saves it to a plain-text datafile.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `validation`: Pure input validation rules
//! - `models`: Money and the session graph (categories, expenses)
//! - `wizard`: Step state machine, transition function and screen views
//! - `summary`: Report computation and datafile rendering
//! - `storage`: Datafile persistence
//! - `config`: Path resolution and user settings
//! - `cli`: Interactive terminal presenter and commands
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use budget_buddy::storage::MemoryStore;
//! use budget_buddy::wizard::{CategoryAction, Step, StepInput, Wizard};
//!
//! let mut wizard = Wizard::new(MemoryStore::new());
//! wizard.submit(StepInput::Acknowledge)?;
//! wizard.submit(StepInput::Name("Ada".into()))?;
//! wizard.submit(StepInput::Acknowledge)?;
//! wizard.submit(StepInput::Datafile { name: "march".into(), editing_existing: false })?;
//! wizard.submit(StepInput::Income("2000".into()))?;
//! wizard.apply(CategoryAction::AddCategory { name: "Food".into() })?;
//! wizard.apply(CategoryAction::AddExpense {
//!     category: "Food".into(),
//!     name: "Groceries".into(),
//!     quantity: "4".into(),
//!     unit_cost: "25.50".into(),
//! })?;
//! assert_eq!(wizard.submit(StepInput::Acknowledge)?, Step::Summary);
//! assert_eq!(wizard.report().remaining_balance.to_string(), "$1898.00");
//! wizard.save()?;
//! # Ok::<(), budget_buddy::BuddyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;
pub mod summary;
pub mod validation;
pub mod wizard;

pub use error::{BuddyError, BuddyResult};
