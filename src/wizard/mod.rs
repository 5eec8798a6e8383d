//! Budget wizard
//!
//! A fixed sequence of steps that collects a name, a datafile, a monthly
//! income and categorized expenses, ending on a summary that can be saved.
//!
//! The wizard never draws anything. A presentation layer asks for the
//! current [`Screen`], collects input, and hands it back through
//! [`Wizard::submit`], [`Wizard::apply`], [`Wizard::back`] or
//! [`Wizard::save`].

pub mod controller;
pub mod screen;
pub mod step;

pub use controller::Wizard;
pub use screen::{Field, FieldKey, Screen};
pub use step::{attempt_advance, retreat, CategoryAction, Step, StepInput};
