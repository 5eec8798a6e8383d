//! Wizard controller
//!
//! Owns the current step, the session and the datafile store, and is the
//! only way a presentation layer moves through the wizard or edits the
//! session.

use tracing::{debug, info, warn};

use super::screen::{self, Screen};
use super::step::{attempt_advance, retreat, CategoryAction, Step, StepInput};
use crate::error::{BuddyError, BuddyResult};
use crate::models::Session;
use crate::storage::DatafileStore;
use crate::summary::{self, Report};

/// The wizard state machine
pub struct Wizard<S: DatafileStore> {
    step: Step,
    session: Session,
    store: S,
}

impl<S: DatafileStore> Wizard<S> {
    /// Start a new run on the Splash step with an empty session
    pub fn new(store: S) -> Self {
        Self {
            step: Step::Splash,
            session: Session::new(),
            store,
        }
    }

    /// The current step
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Finish the run, handing back the collected session
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Try to move forward from the current step.
    ///
    /// A rejected input leaves both the step and the session unchanged.
    pub fn submit(&mut self, input: StepInput) -> BuddyResult<Step> {
        match attempt_advance(self.step, input, &mut self.session, &self.store) {
            Ok(next) => {
                debug!(from = %self.step, to = %next, "step advanced");
                self.step = next;
                Ok(next)
            }
            Err(e) => {
                warn!(step = %self.step, error = %e, "step input rejected");
                Err(e)
            }
        }
    }

    /// Like [`submit`](Self::submit), but first checks that the caller's idea
    /// of the current step matches the wizard's
    pub fn submit_at(&mut self, step: Step, input: StepInput) -> BuddyResult<Step> {
        if step != self.step {
            return Err(BuddyError::StepMismatch {
                step: self.step,
                input: "input meant for another step",
            });
        }
        self.submit(input)
    }

    /// Go back one step; never validates and never touches the session
    pub fn back(&mut self) -> Step {
        let previous = retreat(self.step);
        debug!(from = %self.step, to = %previous, "step retreated");
        self.step = previous;
        previous
    }

    /// Edit categories or expenses; only allowed on the Category step
    pub fn apply(&mut self, action: CategoryAction) -> BuddyResult<()> {
        if self.step != Step::Category {
            return Err(BuddyError::StepMismatch {
                step: self.step,
                input: "category edits",
            });
        }
        action.apply(&mut self.session)
    }

    /// Refresh the view for the current step
    pub fn view(&self) -> Screen {
        screen::build(self.step, &self.session)
    }

    /// Compute the current report
    pub fn report(&self) -> Report {
        summary::compute(&self.session)
    }

    /// Write the datafile; only allowed on the Summary step.
    ///
    /// Returns the datafile base name. A failed write leaves the wizard on
    /// Summary so the save can be retried.
    pub fn save(&self) -> BuddyResult<String> {
        if self.step != Step::Summary {
            return Err(BuddyError::StepMismatch {
                step: self.step,
                input: "a save request",
            });
        }

        let datafile = self.session.datafile().ok_or(BuddyError::NoDatafile)?;
        let content = summary::render_datafile(&self.session);

        match self.store.write(&datafile.name, &content) {
            Ok(()) => {
                info!(
                    datafile = %datafile.name,
                    categories = self.session.categories().len(),
                    "datafile saved"
                );
                Ok(datafile.name.clone())
            }
            Err(e) => {
                warn!(datafile = %datafile.name, error = %e, "datafile save failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::MemoryStore;

    /// A store whose writes always fail
    struct FailingStore;

    impl DatafileStore for FailingStore {
        fn exists(&self, _name: &str) -> bool {
            true
        }

        fn write(&self, _name: &str, _content: &str) -> BuddyResult<()> {
            Err(BuddyError::Io("disk full".into()))
        }

        fn read(&self, name: &str) -> BuddyResult<String> {
            Err(BuddyError::FileNotFound(name.to_string()))
        }
    }

    fn walk_to_income<S: DatafileStore>(wizard: &mut Wizard<S>) {
        wizard.submit(StepInput::Acknowledge).unwrap();
        wizard.submit(StepInput::Name("Ada".into())).unwrap();
        wizard.submit(StepInput::Acknowledge).unwrap();
        wizard
            .submit(StepInput::Datafile {
                name: "march".into(),
                editing_existing: false,
            })
            .unwrap();
        assert_eq!(wizard.step(), Step::Income);
    }

    fn add_food(wizard: &mut Wizard<impl DatafileStore>) {
        wizard
            .apply(CategoryAction::AddCategory {
                name: "Food".into(),
            })
            .unwrap();
        wizard
            .apply(CategoryAction::AddExpense {
                category: "Food".into(),
                name: "Groceries".into(),
                quantity: "4".into(),
                unit_cost: "25.50".into(),
            })
            .unwrap();
    }

    #[test]
    fn test_starts_on_splash() {
        let wizard = Wizard::new(MemoryStore::new());
        assert_eq!(wizard.step(), Step::Splash);
        assert_eq!(wizard.view().title, "BudgetBuddy");
    }

    #[test]
    fn test_full_run_and_save() {
        let mut wizard = Wizard::new(MemoryStore::new());
        walk_to_income(&mut wizard);
        wizard.submit(StepInput::Income("2000.00".into())).unwrap();
        add_food(&mut wizard);
        assert_eq!(wizard.submit(StepInput::Acknowledge).unwrap(), Step::Summary);

        let report = wizard.view().report.unwrap();
        assert_eq!(report.remaining_balance, Money::from_cents(189_800));

        assert_eq!(wizard.save().unwrap(), "march");
        assert_eq!(
            wizard.store().read("march").unwrap(),
            "Food\nGroceries : $102.00\n\n"
        );
        assert_eq!(wizard.step(), Step::Summary);
    }

    #[test]
    fn test_rejected_input_stays_put() {
        let mut wizard = Wizard::new(MemoryStore::new());
        walk_to_income(&mut wizard);
        let before = wizard.session().clone();

        let err = wizard.submit(StepInput::Income("lots".into())).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(wizard.step(), Step::Income);
        assert_eq!(wizard.session(), &before);
    }

    #[test]
    fn test_back_then_forward_preserves_income() {
        let mut wizard = Wizard::new(MemoryStore::new());
        walk_to_income(&mut wizard);
        wizard.submit(StepInput::Income("500".into())).unwrap();

        assert_eq!(wizard.back(), Step::Income);
        assert_eq!(wizard.back(), Step::Datafile);
        assert_eq!(wizard.session().income(), Some(Money::from_cents(50_000)));

        wizard
            .submit(StepInput::Datafile {
                name: "march".into(),
                editing_existing: false,
            })
            .unwrap();
        assert_eq!(wizard.session().income(), Some(Money::from_cents(50_000)));
        assert_eq!(wizard.view().fields[0].value, "500.00");
    }

    #[test]
    fn test_revisiting_income_keeps_categories() {
        let mut wizard = Wizard::new(MemoryStore::new());
        walk_to_income(&mut wizard);
        wizard.submit(StepInput::Income("2000".into())).unwrap();
        add_food(&mut wizard);

        wizard.back();
        assert_eq!(wizard.step(), Step::Income);
        wizard.submit(StepInput::Income("2500".into())).unwrap();

        assert_eq!(wizard.step(), Step::Category);
        assert_eq!(wizard.session().categories().len(), 1);
        assert_eq!(wizard.session().total_expenses(), Money::from_cents(10_200));
    }

    #[test]
    fn test_back_from_splash_stays() {
        let mut wizard = Wizard::new(MemoryStore::new());
        assert_eq!(wizard.back(), Step::Splash);
    }

    #[test]
    fn test_category_edits_only_on_category_step() {
        let mut wizard = Wizard::new(MemoryStore::new());
        let err = wizard
            .apply(CategoryAction::AddCategory {
                name: "Food".into(),
            })
            .unwrap_err();
        assert!(matches!(err, BuddyError::StepMismatch { .. }));
        assert!(wizard.session().categories().is_empty());
    }

    #[test]
    fn test_save_only_on_summary() {
        let mut wizard = Wizard::new(MemoryStore::new());
        walk_to_income(&mut wizard);
        assert!(matches!(
            wizard.save().unwrap_err(),
            BuddyError::StepMismatch { .. }
        ));
        assert!(wizard.store().is_empty());
    }

    #[test]
    fn test_save_failure_is_recoverable() {
        let mut wizard = Wizard::new(FailingStore);
        walk_to_income(&mut wizard);
        wizard.submit(StepInput::Income("10".into())).unwrap();
        wizard.submit(StepInput::Acknowledge).unwrap();

        let err = wizard.save().unwrap_err();
        assert!(matches!(err, BuddyError::Io(_)));
        assert_eq!(wizard.step(), Step::Summary);
        assert!(wizard.save().is_err());
    }

    #[test]
    fn test_submit_at_checks_step() {
        let mut wizard = Wizard::new(MemoryStore::new());
        let err = wizard
            .submit_at(Step::Intro, StepInput::Name("Ada".into()))
            .unwrap_err();
        assert!(matches!(err, BuddyError::StepMismatch { step: Step::Splash, .. }));
        assert_eq!(
            wizard.submit_at(Step::Splash, StepInput::Acknowledge).unwrap(),
            Step::Intro
        );
    }

    #[test]
    fn test_view_is_idempotent() {
        let mut wizard = Wizard::new(MemoryStore::new());
        walk_to_income(&mut wizard);
        wizard.submit(StepInput::Income("2000".into())).unwrap();
        add_food(&mut wizard);
        wizard.submit(StepInput::Acknowledge).unwrap();

        let before = wizard.session().clone();
        assert_eq!(wizard.view(), wizard.view());
        assert_eq!(wizard.report(), wizard.report());
        assert_eq!(wizard.session(), &before);
    }
}
