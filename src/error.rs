//! Custom error types for BudgetBuddy
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::validation::ValidationError;
use crate::wizard::Step;

/// The main error type for BudgetBuddy operations
#[derive(Error, Debug)]
pub enum BuddyError {
    /// A raw input value was rejected by the validation rules
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        #[source]
        reason: ValidationError,
    },

    /// A category with the same name already exists in the session
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Editing an existing datafile that does not exist
    #[error("Datafile not found: {0}")]
    FileNotFound(String),

    /// The summary was saved before a datafile was chosen
    #[error("No datafile has been selected")]
    NoDatafile,

    /// Input submitted to a step that does not accept it
    #[error("The {step} step does not accept {input}")]
    StepMismatch { step: Step, input: &'static str },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed saved datafile
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl BuddyError {
    /// Wrap a validation failure for a named input field
    pub fn invalid(field: &'static str, reason: ValidationError) -> Self {
        Self::Validation { field, reason }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for an expense inside a category
    pub fn expense_not_found(category: &str, expense: &str) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: format!("{} in {}", expense, category),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a missing category
    pub fn is_category_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound {
                entity_type: "Category",
                ..
            }
        )
    }

    /// Check if this is a missing expense
    pub fn is_expense_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound {
                entity_type: "Expense",
                ..
            }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The underlying validation reason, if any
    pub fn validation_reason(&self) -> Option<ValidationError> {
        match self {
            Self::Validation { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BuddyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BuddyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for BudgetBuddy operations
pub type BuddyResult<T> = Result<T, BuddyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuddyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_display() {
        let err = BuddyError::invalid("income", ValidationError::NegativeValue);
        assert_eq!(err.to_string(), "Invalid income: value cannot be negative");
        assert!(err.is_validation());
        assert_eq!(err.validation_reason(), Some(ValidationError::NegativeValue));
    }

    #[test]
    fn test_not_found_error() {
        let err = BuddyError::category_not_found("Food");
        assert_eq!(err.to_string(), "Category not found: Food");
        assert!(err.is_not_found());
        assert!(err.is_category_not_found());
        assert!(!err.is_expense_not_found());

        let err = BuddyError::expense_not_found("Food", "Snacks");
        assert_eq!(err.to_string(), "Expense not found: Snacks in Food");
        assert!(err.is_expense_not_found());
    }

    #[test]
    fn test_step_mismatch_display() {
        let err = BuddyError::StepMismatch {
            step: Step::Income,
            input: "a name",
        };
        assert_eq!(err.to_string(), "The Income step does not accept a name");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BuddyError = io_err.into();
        assert!(matches!(err, BuddyError::Io(_)));
    }
}
