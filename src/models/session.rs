//! Session, Category and Expense models
//!
//! A `Session` holds everything collected during one wizard run. Categories
//! keep their insertion order and own their expenses; expense names are
//! unique within a category and re-adding a name replaces the old entry.
//!
//! Every mutating operation validates all of its inputs before touching any
//! field, so a failed call leaves the session exactly as it was.

use std::fmt;

use tracing::debug;

use super::money::Money;
use crate::error::{BuddyError, BuddyResult};
use crate::storage::DatafileStore;
use crate::validation::{self, ValidationError};

/// The datafile chosen on the Datafile step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datafile {
    /// Validated base name, without extension
    pub name: String,
    /// Whether the user chose to edit an existing file
    pub editing_existing: bool,
}

/// A single line item within a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    name: String,
    quantity: i64,
    unit_cost: Money,
    line_total: Money,
}

impl Expense {
    /// Build an expense, or `None` if quantity × unit cost does not fit
    fn new(name: String, quantity: i64, unit_cost: Money) -> Option<Self> {
        let line_total = unit_cost.checked_times(quantity)?;
        Some(Self {
            name,
            quantity,
            unit_cost,
            line_total,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit cost exactly as entered
    pub fn unit_cost(&self) -> Money {
        self.unit_cost
    }

    /// quantity × unit cost, at full precision
    pub fn line_total(&self) -> Money {
        self.line_total
    }
}

/// A named group of expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    expenses: Vec<Expense>,
}

impl Category {
    fn new(name: String) -> Self {
        Self {
            name,
            expenses: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Find an expense by exact name
    pub fn expense(&self, name: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.name == name)
    }

    /// Sum of all line totals in this category
    pub fn total(&self) -> Money {
        self.expenses.iter().map(Expense::line_total).sum()
    }

    fn upsert(&mut self, expense: Expense) {
        match self.expenses.iter_mut().find(|e| e.name == expense.name) {
            Some(existing) => *existing = expense,
            None => self.expenses.push(expense),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// In-memory state of one wizard run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_name: Option<String>,
    datafile: Option<Datafile>,
    income: Option<Money>,
    categories: Vec<Category>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn datafile(&self) -> Option<&Datafile> {
        self.datafile.as_ref()
    }

    /// Monthly income; `None` until the Income step has been passed
    pub fn income(&self) -> Option<Money> {
        self.income
    }

    /// Categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find a category by name (surrounding whitespace ignored)
    pub fn category(&self, name: &str) -> Option<&Category> {
        let name = name.trim();
        self.categories.iter().find(|c| c.name == name)
    }

    /// Sum of every expense line total across all categories
    pub fn total_expenses(&self) -> Money {
        self.categories
            .iter()
            .flat_map(Category::expenses)
            .map(Expense::line_total)
            .sum()
    }

    /// Store the user's name after validation
    pub fn set_user_name(&mut self, input: &str) -> BuddyResult<()> {
        let name = validation::validate_name(input).map_err(|e| BuddyError::invalid("name", e))?;
        debug!("user name set");
        self.user_name = Some(name);
        Ok(())
    }

    /// Choose the datafile, confirming it exists when editing an existing one
    pub fn set_datafile(
        &mut self,
        input: &str,
        editing_existing: bool,
        store: &dyn DatafileStore,
    ) -> BuddyResult<()> {
        let name = validation::validate_filename(input)
            .map_err(|e| BuddyError::invalid("datafile name", e))?;

        if editing_existing && !store.exists(&name) {
            return Err(BuddyError::FileNotFound(name));
        }

        debug!(datafile = %name, editing_existing, "datafile selected");
        self.datafile = Some(Datafile {
            name,
            editing_existing,
        });
        Ok(())
    }

    /// Store the monthly income after validation
    pub fn set_income(&mut self, input: &str) -> BuddyResult<()> {
        let income =
            validation::validate_income(input).map_err(|e| BuddyError::invalid("income", e))?;
        if !totals_fit(Some(income), self.categories.iter().map(Category::expenses)) {
            return Err(BuddyError::invalid("income", ValidationError::OutOfRange));
        }
        debug!("income set");
        self.income = Some(income);
        Ok(())
    }

    /// Append a new, empty category
    pub fn add_category(&mut self, input: &str) -> BuddyResult<()> {
        let name = input.trim();
        if name.is_empty() {
            return Err(BuddyError::invalid(
                "category name",
                ValidationError::EmptyInput,
            ));
        }
        if name.chars().any(char::is_control) {
            return Err(BuddyError::invalid(
                "category name",
                ValidationError::InvalidCharacters,
            ));
        }
        if self.category(name).is_some() {
            return Err(BuddyError::DuplicateCategory(name.to_string()));
        }

        debug!(category = %name, "category added");
        self.categories.push(Category::new(name.to_string()));
        Ok(())
    }

    /// Remove a category together with all of its expenses
    pub fn remove_category(&mut self, name: &str) -> BuddyResult<Category> {
        let name = name.trim();
        let index = self
            .categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| BuddyError::category_not_found(name))?;

        let removed = self.categories.remove(index);
        debug!(
            category = %removed.name,
            expenses = removed.expenses.len(),
            "category removed"
        );
        Ok(removed)
    }

    /// Add an expense to a category, replacing any expense with the same name
    pub fn add_expense(
        &mut self,
        category: &str,
        name: &str,
        quantity: &str,
        unit_cost: &str,
    ) -> BuddyResult<()> {
        let category_name = category.trim();
        let index = self
            .categories
            .iter()
            .position(|c| c.name == category_name)
            .ok_or_else(|| BuddyError::category_not_found(category_name))?;

        let name =
            validation::validate_name(name).map_err(|e| BuddyError::invalid("expense name", e))?;
        let quantity = validation::validate_expense_amount(quantity)
            .map_err(|e| BuddyError::invalid("expense amount", e))?;
        let unit_cost = validation::validate_expense_cost(unit_cost)
            .map_err(|e| BuddyError::invalid("expense cost", e))?;

        let expense = Expense::new(name, quantity, unit_cost)
            .ok_or_else(|| BuddyError::invalid("expense cost", ValidationError::OutOfRange))?;
        let expense_name = expense.name.clone();

        let mut updated = self.categories[index].clone();
        updated.upsert(expense);
        let groups = self.categories.iter().enumerate().map(|(i, category)| {
            if i == index {
                updated.expenses()
            } else {
                category.expenses()
            }
        });
        if !totals_fit(self.income, groups) {
            return Err(BuddyError::invalid(
                "expense cost",
                ValidationError::OutOfRange,
            ));
        }

        debug!(
            category = %category_name,
            expense = %expense_name,
            quantity,
            "expense recorded"
        );
        self.categories[index] = updated;
        Ok(())
    }

    /// Remove a single expense from a category
    pub fn remove_expense(&mut self, category: &str, name: &str) -> BuddyResult<Expense> {
        let category_name = category.trim();
        let target = self
            .categories
            .iter_mut()
            .find(|c| c.name == category_name)
            .ok_or_else(|| BuddyError::category_not_found(category_name))?;

        let name = name.trim();
        let index = target
            .expenses
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| BuddyError::expense_not_found(category_name, name))?;

        debug!(category = %category_name, expense = %name, "expense removed");
        Ok(target.expenses.remove(index))
    }
}

/// Whether every category total, the overall total and the remaining
/// balance can be computed without leaving the decimal range
fn totals_fit<'a>(
    income: Option<Money>,
    groups: impl IntoIterator<Item = &'a [Expense]>,
) -> bool {
    let mut total = Money::zero();
    for expenses in groups {
        let mut category_total = Money::zero();
        for line in expenses.iter().map(Expense::line_total) {
            match (total.checked_add(line), category_total.checked_add(line)) {
                (Some(t), Some(c)) => {
                    total = t;
                    category_total = c;
                }
                _ => return false,
            }
        }
    }
    income.unwrap_or_default().checked_sub(total).is_some()
}
