//! Interactive wizard on the terminal
//!
//! Walks the user through every step, printing each screen and feeding the
//! answers back into the [`Wizard`]. Rejected answers are reported and the
//! same step is shown again.

use std::io::{BufRead, Write};

use super::prompt::{Answer, Prompter, BACK_COMMAND, QUIT_COMMAND};
use crate::config::Settings;
use crate::error::BuddyResult;
use crate::storage::DatafileStore;
use crate::wizard::{CategoryAction, FieldKey, Screen, Step, StepInput, Wizard};

/// How an interactive run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Step the user was on when the run ended
    pub last_step: Step,
    /// Base name of the datafile, if a save succeeded
    pub saved: Option<String>,
}

/// What one pass over a step decided
enum Flow {
    Stay,
    Moved,
    Quit,
}

/// Run the wizard until the user quits or input runs out
pub fn run_wizard<S, R, W>(
    store: S,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> BuddyResult<RunOutcome>
where
    S: DatafileStore,
    R: BufRead,
    W: Write,
{
    let mut wizard = Wizard::new(store);
    let mut saved = None;

    prompter.say(format!(
        "Type {} to go back a step or {} to leave at any prompt.",
        BACK_COMMAND, QUIT_COMMAND
    ))?;

    loop {
        let screen = wizard.view();
        show_screen(prompter, &screen)?;

        let flow = match wizard.step() {
            Step::Splash if !settings.show_splash => {
                submit(&mut wizard, prompter, StepInput::Acknowledge)?
            }
            Step::Splash | Step::Process => match prompter.ask("Press Enter to continue.", "")? {
                Answer::Value(_) => submit(&mut wizard, prompter, StepInput::Acknowledge)?,
                answer => navigate(&mut wizard, answer),
            },
            Step::Intro => match prompter.ask("Name:", field_value(&screen, FieldKey::UserName))? {
                Answer::Value(name) => submit(&mut wizard, prompter, StepInput::Name(name))?,
                answer => navigate(&mut wizard, answer),
            },
            Step::Datafile => datafile_step(&mut wizard, prompter, &screen)?,
            Step::Income => {
                match prompter.ask("Monthly income:", field_value(&screen, FieldKey::Income))? {
                    Answer::Value(income) => {
                        submit(&mut wizard, prompter, StepInput::Income(income))?
                    }
                    answer => navigate(&mut wizard, answer),
                }
            }
            Step::Category => category_step(&mut wizard, prompter, settings)?,
            Step::Summary => summary_step(&mut wizard, prompter, &mut saved)?,
        };

        if let Flow::Quit = flow {
            return Ok(RunOutcome {
                last_step: wizard.step(),
                saved,
            });
        }
    }
}

fn show_screen<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    screen: &Screen,
) -> BuddyResult<()> {
    prompter.blank()?;
    prompter.say(&screen.title)?;
    prompter.say("=".repeat(screen.title.len()))?;
    for line in &screen.lines {
        prompter.say(line)?;
    }
    Ok(())
}

fn field_value(screen: &Screen, key: FieldKey) -> &str {
    screen
        .fields
        .iter()
        .find(|f| f.key == key)
        .map(|f| f.value.as_str())
        .unwrap_or_default()
}

fn navigate<S: DatafileStore, T>(wizard: &mut Wizard<S>, answer: Answer<T>) -> Flow {
    match answer {
        Answer::Back => {
            wizard.back();
            Flow::Moved
        }
        Answer::Quit => Flow::Quit,
        Answer::Value(_) => Flow::Stay,
    }
}

/// Leave a menu sub-prompt: back cancels the action, quit ends the run
fn abandon<T>(answer: Answer<T>) -> Flow {
    match answer {
        Answer::Quit => Flow::Quit,
        Answer::Back | Answer::Value(_) => Flow::Stay,
    }
}

fn submit<S, R, W>(
    wizard: &mut Wizard<S>,
    prompter: &mut Prompter<R, W>,
    input: StepInput,
) -> BuddyResult<Flow>
where
    S: DatafileStore,
    R: BufRead,
    W: Write,
{
    match wizard.submit(input) {
        Ok(_) => Ok(Flow::Moved),
        Err(e) => {
            prompter.say(format!("Error: {}", e))?;
            Ok(Flow::Stay)
        }
    }
}

fn datafile_step<S, R, W>(
    wizard: &mut Wizard<S>,
    prompter: &mut Prompter<R, W>,
    screen: &Screen,
) -> BuddyResult<Flow>
where
    S: DatafileStore,
    R: BufRead,
    W: Write,
{
    let editing_existing = match prompter.ask_yes_no(
        "Edit an existing datafile? (yes/no)",
        field_value(screen, FieldKey::EditingExisting),
    )? {
        Answer::Value(choice) => choice,
        answer => return Ok(navigate(wizard, answer)),
    };

    let label = crate::wizard::screen::datafile_prompt(editing_existing);
    match prompter.ask(label, field_value(screen, FieldKey::DatafileName))? {
        Answer::Value(name) => submit(
            wizard,
            prompter,
            StepInput::Datafile {
                name,
                editing_existing,
            },
        ),
        answer => Ok(navigate(wizard, answer)),
    }
}

fn category_step<S, R, W>(
    wizard: &mut Wizard<S>,
    prompter: &mut Prompter<R, W>,
    settings: &Settings,
) -> BuddyResult<Flow>
where
    S: DatafileStore,
    R: BufRead,
    W: Write,
{
    prompter.blank()?;
    prompter.say("  1. Add category")?;
    prompter.say("  2. Delete category")?;
    prompter.say("  3. Add expense")?;
    prompter.say("  4. Remove expense")?;
    prompter.say("  5. Continue to summary")?;
    prompter.say("  6. Back")?;

    let choice = match prompter.ask("Select option:", "")? {
        Answer::Value(choice) => choice,
        answer => return Ok(navigate(wizard, answer)),
    };

    let action = match choice.trim() {
        "1" => ask_all(prompter, &["Enter category name:"])?.map(|answers| {
            CategoryAction::AddCategory {
                name: answers[0].clone(),
            }
        }),
        "2" => {
            let name = match ask_all(prompter, &["Category to delete:"])? {
                Answer::Value(answers) => answers[0].clone(),
                answer => return Ok(abandon(answer)),
            };
            if settings.confirm_deletes {
                match prompter.ask_yes_no(
                    "Are you sure you want to delete this category? (yes/no)",
                    "no",
                )? {
                    Answer::Value(true) => {}
                    answer => return Ok(abandon(answer)),
                }
            }
            Answer::Value(CategoryAction::RemoveCategory { name })
        }
        "3" => ask_all(
            prompter,
            &[
                "Category:",
                "Expense name:",
                "Amount (integer):",
                "Cost (number):",
            ],
        )?
        .map(|answers| CategoryAction::AddExpense {
            category: answers[0].clone(),
            name: answers[1].clone(),
            quantity: answers[2].clone(),
            unit_cost: answers[3].clone(),
        }),
        "4" => ask_all(prompter, &["Category:", "Expense name:"])?.map(|answers| {
            CategoryAction::RemoveExpense {
                category: answers[0].clone(),
                name: answers[1].clone(),
            }
        }),
        "5" => return submit(wizard, prompter, StepInput::Acknowledge),
        "6" => return Ok(navigate(wizard, Answer::<()>::Back)),
        other => {
            prompter.say(format!("Unknown option: {}", other))?;
            return Ok(Flow::Stay);
        }
    };
    let action = match action {
        Answer::Value(action) => action,
        answer => return Ok(abandon(answer)),
    };

    if let Err(e) = wizard.apply(action) {
        prompter.say(format!("Error: {}", e))?;
    }
    Ok(Flow::Stay)
}

/// Ask several questions in a row, stopping at the first navigation command
fn ask_all<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    labels: &[&str],
) -> BuddyResult<Answer<Vec<String>>> {
    let mut answers = Vec::with_capacity(labels.len());
    for label in labels {
        match prompter.ask(label, "")? {
            Answer::Value(text) => answers.push(text),
            Answer::Back => return Ok(Answer::Back),
            Answer::Quit => return Ok(Answer::Quit),
        }
    }
    Ok(Answer::Value(answers))
}

fn summary_step<S, R, W>(
    wizard: &mut Wizard<S>,
    prompter: &mut Prompter<R, W>,
    saved: &mut Option<String>,
) -> BuddyResult<Flow>
where
    S: DatafileStore,
    R: BufRead,
    W: Write,
{
    prompter.blank()?;
    prompter.say("  1. Save")?;
    prompter.say("  2. Back")?;
    prompter.say("  3. Quit")?;

    match prompter.ask("Select option:", "")? {
        Answer::Value(choice) => match choice.trim() {
            "1" => {
                match wizard.save() {
                    Ok(name) => {
                        prompter.say(format!("Saved datafile {}.txt", name))?;
                        *saved = Some(name);
                    }
                    Err(e) => prompter.say(format!("Error: {}", e))?,
                }
                Ok(Flow::Stay)
            }
            "2" => Ok(navigate(wizard, Answer::<()>::Back)),
            "3" => Ok(Flow::Quit),
            other => {
                prompter.say(format!("Unknown option: {}", other))?;
                Ok(Flow::Stay)
            }
        },
        answer => Ok(navigate(wizard, answer)),
    }
}
