//! Core data models for BudgetBuddy
//!
//! This module contains the session graph collected by the wizard and the
//! money type used for every amount.

pub mod money;
pub mod session;

pub use money::{Money, MoneyParseError};
pub use session::{Category, Datafile, Expense, Session};
