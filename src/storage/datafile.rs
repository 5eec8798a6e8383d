//! Reading saved datafiles back
//!
//! A saved datafile is a sequence of blocks, one per category:
//!
//! ```text
//! Food
//! Groceries : $102.00
//! Coffee : $30.00
//!
//! Rent
//! Apartment : $500.00
//!
//! ```
//!
//! Only line totals are stored, so quantities and unit costs cannot be
//! recovered. Parsed datafiles are for display only.

use serde::Serialize;

use crate::error::{BuddyError, BuddyResult};
use crate::models::Money;

/// Separator between an expense name and its line total
pub const LINE_SEPARATOR: &str = " : ";

/// One expense line as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedLine {
    pub name: String,
    pub total: Money,
}

/// One category block as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedCategory {
    pub name: String,
    pub lines: Vec<SavedLine>,
}

impl SavedCategory {
    /// Sum of the stored line totals
    pub fn total(&self) -> Money {
        self.lines.iter().map(|l| l.total).sum()
    }
}

/// A parsed datafile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SavedDatafile {
    pub categories: Vec<SavedCategory>,
}

impl SavedDatafile {
    /// Parse datafile text
    pub fn parse(content: &str) -> BuddyResult<Self> {
        let mut categories = Vec::new();
        let mut current: Option<SavedCategory> = None;

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                categories.extend(current.take());
                continue;
            }

            match current.as_mut() {
                None => {
                    current = Some(SavedCategory {
                        name: line.to_string(),
                        lines: Vec::new(),
                    });
                }
                Some(category) => category.lines.push(parse_line(line, index + 1)?),
            }
        }
        categories.extend(current);

        let saved = Self { categories };
        if !saved.totals_fit() {
            return Err(BuddyError::Storage(
                "Datafile totals are too large to add up".to_string(),
            ));
        }
        Ok(saved)
    }

    /// Sum of every stored line total
    pub fn total(&self) -> Money {
        self.categories.iter().map(SavedCategory::total).sum()
    }

    fn totals_fit(&self) -> bool {
        let mut category_totals = self.categories.iter().map(|category| {
            category
                .lines
                .iter()
                .try_fold(Money::zero(), |acc, line| acc.checked_add(line.total))
        });
        category_totals
            .try_fold(Money::zero(), |acc, total| acc.checked_add(total?))
            .is_some()
    }
}

fn parse_line(line: &str, line_number: usize) -> BuddyResult<SavedLine> {
    let malformed = || {
        BuddyError::Storage(format!(
            "Malformed expense line {}: {:?}",
            line_number, line
        ))
    };

    let (name, amount) = line.rsplit_once(LINE_SEPARATOR).ok_or_else(malformed)?;
    let amount = amount.strip_prefix('$').ok_or_else(malformed)?;
    let total = Money::parse(amount).map_err(|_| malformed())?;

    Ok(SavedLine {
        name: name.to_string(),
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blocks() {
        let content = "Food\nGroceries : $102.00\nCoffee : $30.00\n\nRent\nApartment : $500.00\n\n";
        let saved = SavedDatafile::parse(content).unwrap();

        assert_eq!(saved.categories.len(), 2);
        assert_eq!(saved.categories[0].name, "Food");
        assert_eq!(saved.categories[0].lines.len(), 2);
        assert_eq!(saved.categories[0].total(), Money::from_cents(13200));
        assert_eq!(saved.categories[1].lines[0].name, "Apartment");
        assert_eq!(saved.total(), Money::from_cents(63200));
    }

    #[test]
    fn test_parse_empty_category_and_missing_trailing_blank() {
        let saved = SavedDatafile::parse("Savings\n\nFun\nMovies : $-12.50").unwrap();
        assert_eq!(saved.categories.len(), 2);
        assert!(saved.categories[0].lines.is_empty());
        assert_eq!(saved.categories[1].lines[0].total, Money::from_cents(-1250));
    }

    #[test]
    fn test_parse_empty_file() {
        assert_eq!(SavedDatafile::parse("").unwrap(), SavedDatafile::default());
    }

    #[test]
    fn test_parse_rejects_totals_out_of_range() {
        let content = "Gold\nBar : $79228162514264337593543950335\n\n\
                       Silver\nCoin : $1.00\n\n";
        let err = SavedDatafile::parse(content).unwrap_err();
        assert!(matches!(err, BuddyError::Storage(_)));
    }

    #[test]
    fn test_parse_keeps_precision() {
        let saved = SavedDatafile::parse("Office\nPens : $1.005\n\n").unwrap();
        assert_eq!(saved.total(), Money::parse("1.005").unwrap());
    }

    #[test]
    fn test_parse_malformed_line() {
        let err = SavedDatafile::parse("Food\nGroceries 102\n\n").unwrap_err();
        assert!(matches!(err, BuddyError::Storage(ref msg) if msg.contains("line 2")));

        let err = SavedDatafile::parse("Food\nGroceries : 102.00\n").unwrap_err();
        assert!(matches!(err, BuddyError::Storage(_)));
    }
}
