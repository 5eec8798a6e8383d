//! Input validation rules
//!
//! Pure functions that turn raw text typed into a wizard field into a parsed
//! value, or report why the text was rejected. Nothing here touches the
//! session; the model and the wizard call these before mutating anything.

use std::fmt;

use crate::models::Money;

/// Why a raw input value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing left after trimming whitespace
    EmptyInput,
    /// Contains a character outside the field's allowed set
    InvalidCharacters,
    /// Not parsable as a decimal amount
    NotANumber,
    /// Not parsable as a whole number
    NotAnInteger,
    /// Parsed, but below zero where only non-negative values are allowed
    NegativeValue,
    /// Parsed, but the budget totals it leads to cannot be represented
    OutOfRange,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "value cannot be empty"),
            Self::InvalidCharacters => write!(f, "value contains invalid characters"),
            Self::NotANumber => write!(f, "value must be a number"),
            Self::NotAnInteger => write!(f, "value must be a whole number"),
            Self::NegativeValue => write!(f, "value cannot be negative"),
            Self::OutOfRange => write!(f, "value is too large"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a person or expense name: letters and spaces only.
///
/// Returns the trimmed name.
pub fn validate_name(input: &str) -> Result<String, ValidationError> {
    let name = non_empty(input)?;
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(ValidationError::InvalidCharacters);
    }
    Ok(name.to_string())
}

/// Validate a datafile base name: letters, digits and underscores only.
///
/// The `.txt` extension is added by the store, never typed by the user.
pub fn validate_filename(input: &str) -> Result<String, ValidationError> {
    let name = non_empty(input)?;
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::InvalidCharacters);
    }
    Ok(name.to_string())
}

/// Validate a monthly income amount (zero allowed).
pub fn validate_income(input: &str) -> Result<Money, ValidationError> {
    let income = Money::parse(input).map_err(|_| ValidationError::NotANumber)?;
    if income.is_negative() {
        return Err(ValidationError::NegativeValue);
    }
    Ok(income)
}

/// Validate an expense quantity. Any integer is accepted, including zero and
/// negative values.
pub fn validate_expense_amount(input: &str) -> Result<i64, ValidationError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger)
}

/// Validate an expense unit cost.
pub fn validate_expense_cost(input: &str) -> Result<Money, ValidationError> {
    Money::parse(input).map_err(|_| ValidationError::NotANumber)
}

fn non_empty(input: &str) -> Result<&str, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyInput)
    } else {
        Ok(trimmed)
    }
}
