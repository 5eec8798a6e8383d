//! Screen views
//!
//! What a presentation layer needs to draw the current step: a title, some
//! text lines, and the fields to collect with their current values filled
//! in. Building a view only reads the session, so it can be refreshed as
//! often as the presenter likes.

use super::step::Step;
use crate::models::Session;
use crate::summary::{self, Report};

/// Product name shown on the splash and process screens
pub const APP_NAME: &str = "BudgetBuddy";

/// Identifies an input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    UserName,
    EditingExisting,
    DatafileName,
    Income,
    CategoryName,
    ExpenseName,
    ExpenseAmount,
    ExpenseCost,
}

/// A field to collect, with any value the session already holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: FieldKey,
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(key: FieldKey, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            label,
            value: value.into(),
        }
    }

    fn empty(key: FieldKey, label: &'static str) -> Self {
        Self::new(key, label, String::new())
    }
}

/// Everything needed to render one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub step: Step,
    pub title: String,
    pub lines: Vec<String>,
    pub fields: Vec<Field>,
    /// Present on the Summary step only
    pub report: Option<Report>,
}

/// Label for the datafile name field, depending on the user's choice
pub fn datafile_prompt(editing_existing: bool) -> &'static str {
    if editing_existing {
        "Enter the name of an existing datafile:"
    } else {
        "Enter the name of a new datafile:"
    }
}

/// Greeting shown on the Process step
pub fn greeting(session: &Session) -> String {
    format!(
        "Hey {}, this is {}! Your personal Budgeting Assistant.",
        session.user_name().unwrap_or("User"),
        APP_NAME
    )
}

/// Build the view for a step
pub fn build(step: Step, session: &Session) -> Screen {
    let mut lines = Vec::new();
    let mut fields = Vec::new();
    let mut report = None;

    let title = match step {
        Step::Splash => {
            lines.push("Your personal Budgeting Assistant.".to_string());
            APP_NAME.to_string()
        }
        Step::Intro => {
            fields.push(Field::new(
                FieldKey::UserName,
                "Name",
                session.user_name().unwrap_or_default(),
            ));
            "To begin this program, enter your name.".to_string()
        }
        Step::Process => {
            lines.push(format!(
                "You will take the following steps to use {}:",
                APP_NAME
            ));
            lines.push("1. Choose a datafile".to_string());
            lines.push("2. Enter your monthly income".to_string());
            lines.push("3. Add categories and expenses".to_string());
            lines.push("4. Review and save your summary".to_string());
            greeting(session)
        }
        Step::Datafile => {
            let chosen = session.datafile();
            fields.push(Field::new(
                FieldKey::EditingExisting,
                "Edit an existing datafile? (yes/no)",
                match chosen {
                    Some(d) if d.editing_existing => "yes",
                    Some(_) => "no",
                    None => "",
                },
            ));
            fields.push(Field::new(
                FieldKey::DatafileName,
                datafile_prompt(chosen.is_some_and(|d| d.editing_existing)),
                chosen.map(|d| d.name.as_str()).unwrap_or_default(),
            ));
            "Do you want to edit an existing datafile?".to_string()
        }
        Step::Income => {
            fields.push(Field::new(
                FieldKey::Income,
                "Monthly income",
                session
                    .income()
                    .map(|income| income.input_text())
                    .unwrap_or_default(),
            ));
            "Enter your monthly income:".to_string()
        }
        Step::Category => {
            for category in session.categories() {
                lines.push(format!(
                    "{} ({} expenses, {})",
                    category.name(),
                    category.expenses().len(),
                    category.total()
                ));
            }
            if lines.is_empty() {
                lines.push("No categories yet.".to_string());
            }
            fields.push(Field::empty(FieldKey::CategoryName, "Category name"));
            fields.push(Field::empty(FieldKey::ExpenseName, "Expense name"));
            fields.push(Field::empty(FieldKey::ExpenseAmount, "Amount (integer)"));
            fields.push(Field::empty(FieldKey::ExpenseCost, "Cost (number)"));
            "Add categories and expenses:".to_string()
        }
        Step::Summary => {
            let computed = summary::compute(session);
            lines.extend(computed.body.lines().map(str::to_string));
            report = Some(computed);
            "Summary".to_string()
        }
    };

    Screen {
        step,
        title,
        lines,
        fields,
        report,
    }
}
