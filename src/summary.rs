//! Budget summary
//!
//! Aggregates a session into a [`Report`] for the Summary screen, and renders
//! the plainer layout written to the datafile on save. Both walk categories
//! and expenses in insertion order and never modify the session.

use serde::Serialize;

use crate::models::{Money, Session};
use crate::storage::datafile::LINE_SEPARATOR;

/// Warning appended to the report body when expenses exceed income
pub const OVERSPENDING_WARNING: &str = "Warning: You are overspending!";

/// Computed, read-only totals for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Monthly income (zero when not yet entered)
    pub income: Money,
    /// Sum of every expense line total
    pub total_expenses: Money,
    /// income − total_expenses
    pub remaining_balance: Money,
    /// remaining_balance < 0
    pub overspending: bool,
    /// Rendered text shown on the Summary screen
    pub body: String,
}

/// Compute the report for a session
pub fn compute(session: &Session) -> Report {
    let mut lines = Vec::new();
    let mut total_expenses = Money::zero();

    for category in session.categories() {
        lines.push(format!("Category: {}", category.name()));
        for expense in category.expenses() {
            let line_total = expense.line_total();
            total_expenses += line_total;
            lines.push(format!(
                "{} x{} = {}",
                expense.name(),
                expense.quantity(),
                line_total
            ));
        }
        lines.push(String::new());
    }

    let income = session.income().unwrap_or_default();
    let remaining_balance = income - total_expenses;
    let overspending = remaining_balance.is_negative();

    lines.push(format!("Monthly Income: {}", income));
    lines.push(format!("Total Expenses: {}", total_expenses));
    lines.push(format!("Remaining Balance: {}", remaining_balance));
    if overspending {
        lines.push(OVERSPENDING_WARNING.to_string());
    }

    let mut body = lines.join("\n");
    body.push('\n');

    Report {
        income,
        total_expenses,
        remaining_balance,
        overspending,
        body,
    }
}

/// Render the datafile layout: a category line, one `name : $total` line per
/// expense, then a blank line. Quantities, income and balance are not saved.
pub fn render_datafile(session: &Session) -> String {
    let mut output = String::new();

    for category in session.categories() {
        output.push_str(category.name());
        output.push('\n');
        for expense in category.expenses() {
            output.push_str(&format!(
                "{}{}{}\n",
                expense.name(),
                LINE_SEPARATOR,
                expense.line_total()
            ));
        }
        output.push('\n');
    }

    output
}
