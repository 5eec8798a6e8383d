//! Wizard steps and the transition function
//!
//! The steps form a fixed line. Moving forward is gated by the current
//! step's admission check; moving back is always allowed and never touches
//! the session.

use std::fmt;

use crate::error::{BuddyError, BuddyResult};
use crate::models::Session;
use crate::storage::DatafileStore;

/// A wizard step, in the order the user walks through them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Splash,
    Intro,
    Process,
    Datafile,
    Income,
    Category,
    Summary,
}

impl Step {
    /// All steps in order
    pub const ALL: [Step; 7] = [
        Step::Splash,
        Step::Intro,
        Step::Process,
        Step::Datafile,
        Step::Income,
        Step::Category,
        Step::Summary,
    ];

    /// The step a successful forward transition leads to
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Splash => Some(Step::Intro),
            Step::Intro => Some(Step::Process),
            Step::Process => Some(Step::Datafile),
            Step::Datafile => Some(Step::Income),
            Step::Income => Some(Step::Category),
            Step::Category => Some(Step::Summary),
            Step::Summary => None,
        }
    }

    /// The step a backward transition leads to
    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Splash => None,
            Step::Intro => Some(Step::Splash),
            Step::Process => Some(Step::Intro),
            Step::Datafile => Some(Step::Process),
            Step::Income => Some(Step::Datafile),
            Step::Category => Some(Step::Income),
            Step::Summary => Some(Step::Category),
        }
    }

    /// Whether this is the final step
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Step::Splash => "Splash",
            Step::Intro => "Intro",
            Step::Process => "Process",
            Step::Datafile => "Datafile",
            Step::Income => "Income",
            Step::Category => "Category",
            Step::Summary => "Summary",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw input submitted to move forward from a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepInput {
    /// Plain "continue" signal; no data attached
    Acknowledge,
    /// Intro: the user's name
    Name(String),
    /// Datafile: base name and whether it must already exist
    Datafile { name: String, editing_existing: bool },
    /// Income: the monthly income as typed
    Income(String),
}

impl StepInput {
    fn describe(&self) -> &'static str {
        match self {
            StepInput::Acknowledge => "an acknowledgement",
            StepInput::Name(_) => "a name",
            StepInput::Datafile { .. } => "a datafile choice",
            StepInput::Income(_) => "an income",
        }
    }
}

/// Edits allowed while on the Category step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryAction {
    AddCategory {
        name: String,
    },
    RemoveCategory {
        name: String,
    },
    AddExpense {
        category: String,
        name: String,
        quantity: String,
        unit_cost: String,
    },
    RemoveExpense {
        category: String,
        name: String,
    },
}

impl CategoryAction {
    /// Apply the edit to a session
    pub fn apply(&self, session: &mut Session) -> BuddyResult<()> {
        match self {
            CategoryAction::AddCategory { name } => session.add_category(name),
            CategoryAction::RemoveCategory { name } => session.remove_category(name).map(drop),
            CategoryAction::AddExpense {
                category,
                name,
                quantity,
                unit_cost,
            } => session.add_expense(category, name, quantity, unit_cost),
            CategoryAction::RemoveExpense { category, name } => {
                session.remove_expense(category, name).map(drop)
            }
        }
    }
}

/// Attempt to move forward from `step`.
///
/// On success the session holds the admitted value and the next step is
/// returned. On failure the session is unchanged. The Summary step is
/// terminal: acknowledging it stays on Summary.
pub fn attempt_advance(
    step: Step,
    input: StepInput,
    session: &mut Session,
    store: &dyn DatafileStore,
) -> BuddyResult<Step> {
    match (step, input) {
        (Step::Splash, _) => Ok(Step::Intro),
        (Step::Intro, StepInput::Name(name)) => {
            session.set_user_name(&name)?;
            Ok(Step::Process)
        }
        (Step::Process, StepInput::Acknowledge) => Ok(Step::Datafile),
        (
            Step::Datafile,
            StepInput::Datafile {
                name,
                editing_existing,
            },
        ) => {
            session.set_datafile(&name, editing_existing, store)?;
            Ok(Step::Income)
        }
        (Step::Income, StepInput::Income(income)) => {
            session.set_income(&income)?;
            Ok(Step::Category)
        }
        (Step::Category, StepInput::Acknowledge) => Ok(Step::Summary),
        (Step::Summary, StepInput::Acknowledge) => Ok(Step::Summary),
        (step, input) => Err(BuddyError::StepMismatch {
            step,
            input: input.describe(),
        }),
    }
}

/// Move back one step. Splash has nowhere to go and stays put.
pub fn retreat(step: Step) -> Step {
    step.previous().unwrap_or(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::MemoryStore;
    use crate::validation::ValidationError;

    #[test]
    fn test_step_order() {
        let mut step = Step::Splash;
        let mut walked = vec![step];
        while let Some(next) = step.next() {
            step = next;
            walked.push(step);
        }
        assert_eq!(walked, Step::ALL);
        assert!(Step::Summary.is_terminal());
    }

    #[test]
    fn test_previous_mirrors_next() {
        for step in Step::ALL {
            if let Some(next) = step.next() {
                assert_eq!(next.previous(), Some(step));
            }
        }
        assert_eq!(retreat(Step::Splash), Step::Splash);
        assert_eq!(retreat(Step::Summary), Step::Category);
    }

    #[test]
    fn test_splash_accepts_anything() {
        let store = MemoryStore::new();
        let mut session = Session::new();
        assert_eq!(
            attempt_advance(Step::Splash, StepInput::Acknowledge, &mut session, &store).unwrap(),
            Step::Intro
        );
        assert_eq!(
            attempt_advance(
                Step::Splash,
                StepInput::Name("x".into()),
                &mut session,
                &store
            )
            .unwrap(),
            Step::Intro
        );
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_intro_requires_valid_name() {
        let store = MemoryStore::new();
        let mut session = Session::new();

        let err = attempt_advance(
            Step::Intro,
            StepInput::Name("   ".into()),
            &mut session,
            &store,
        )
        .unwrap_err();
        assert_eq!(err.validation_reason(), Some(ValidationError::EmptyInput));
        assert!(session.user_name().is_none());

        let next = attempt_advance(
            Step::Intro,
            StepInput::Name("Ada".into()),
            &mut session,
            &store,
        )
        .unwrap();
        assert_eq!(next, Step::Process);
        assert_eq!(session.user_name(), Some("Ada"));
    }

    #[test]
    fn test_wrong_input_kind_is_rejected() {
        let store = MemoryStore::new();
        let mut session = Session::new();

        let err = attempt_advance(Step::Intro, StepInput::Acknowledge, &mut session, &store)
            .unwrap_err();
        assert!(matches!(
            err,
            BuddyError::StepMismatch {
                step: Step::Intro,
                ..
            }
        ));

        let err = attempt_advance(
            Step::Category,
            StepInput::Income("5".into()),
            &mut session,
            &store,
        )
        .unwrap_err();
        assert!(matches!(err, BuddyError::StepMismatch { .. }));
        assert!(session.income().is_none());
    }

    #[test]
    fn test_datafile_admission() {
        let store = MemoryStore::new();
        let mut session = Session::new();

        let err = attempt_advance(
            Step::Datafile,
            StepInput::Datafile {
                name: "march".into(),
                editing_existing: true,
            },
            &mut session,
            &store,
        )
        .unwrap_err();
        assert!(matches!(err, BuddyError::FileNotFound(_)));

        let next = attempt_advance(
            Step::Datafile,
            StepInput::Datafile {
                name: "march".into(),
                editing_existing: false,
            },
            &mut session,
            &store,
        )
        .unwrap();
        assert_eq!(next, Step::Income);
    }

    #[test]
    fn test_income_admission() {
        let store = MemoryStore::new();
        let mut session = Session::new();

        let err = attempt_advance(
            Step::Income,
            StepInput::Income("-20".into()),
            &mut session,
            &store,
        )
        .unwrap_err();
        assert_eq!(err.validation_reason(), Some(ValidationError::NegativeValue));

        let next = attempt_advance(
            Step::Income,
            StepInput::Income("500".into()),
            &mut session,
            &store,
        )
        .unwrap();
        assert_eq!(next, Step::Category);
        assert_eq!(session.income(), Some(Money::from_cents(50_000)));
    }

    #[test]
    fn test_summary_is_terminal() {
        let store = MemoryStore::new();
        let mut session = Session::new();
        assert_eq!(
            attempt_advance(Step::Summary, StepInput::Acknowledge, &mut session, &store).unwrap(),
            Step::Summary
        );
    }

    #[test]
    fn test_category_actions() {
        let mut session = Session::new();
        CategoryAction::AddCategory {
            name: "Food".into(),
        }
        .apply(&mut session)
        .unwrap();
        CategoryAction::AddExpense {
            category: "Food".into(),
            name: "Groceries".into(),
            quantity: "4".into(),
            unit_cost: "25.50".into(),
        }
        .apply(&mut session)
        .unwrap();
        assert_eq!(session.total_expenses(), Money::from_cents(10_200));

        CategoryAction::RemoveExpense {
            category: "Food".into(),
            name: "Groceries".into(),
        }
        .apply(&mut session)
        .unwrap();
        CategoryAction::RemoveCategory {
            name: "Food".into(),
        }
        .apply(&mut session)
        .unwrap();
        assert!(session.categories().is_empty());
    }
}
