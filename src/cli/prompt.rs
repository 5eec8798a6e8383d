//! Line-based terminal prompts
//!
//! Reads answers from any `BufRead` and writes prompts to any `Write`, so
//! the interactive wizard can be driven from stdin or from a test buffer.

use std::io::{BufRead, Write};

use crate::error::BuddyResult;

/// Typed to go back one step
pub const BACK_COMMAND: &str = ":back";

/// Typed to leave the wizard
pub const QUIT_COMMAND: &str = ":quit";

/// What the user typed at a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T = String> {
    Value(T),
    Back,
    Quit,
}

impl<T> Answer<T> {
    /// Transform the value, keeping navigation commands as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Answer<U> {
        match self {
            Answer::Value(value) => Answer::Value(f(value)),
            Answer::Back => Answer::Back,
            Answer::Quit => Answer::Quit,
        }
    }
}

/// Prompt reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line
    pub fn say(&mut self, line: impl AsRef<str>) -> BuddyResult<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Print a blank line
    pub fn blank(&mut self) -> BuddyResult<()> {
        self.say("")
    }

    /// Ask for a line of text. End of input counts as quitting.
    ///
    /// When `default` is non-empty it is shown in brackets and returned for
    /// an empty answer.
    pub fn ask(&mut self, label: &str, default: &str) -> BuddyResult<Answer> {
        if default.is_empty() {
            write!(self.output, "{} ", label)?;
        } else {
            write!(self.output, "{} [{}] ", label, default)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.blank()?;
            return Ok(Answer::Quit);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        Ok(match answer.trim() {
            BACK_COMMAND => Answer::Back,
            QUIT_COMMAND => Answer::Quit,
            "" if !default.is_empty() => Answer::Value(default.to_string()),
            _ => Answer::Value(answer.to_string()),
        })
    }

    /// Ask a yes/no question until the answer is one or the other, or a
    /// navigation command
    pub fn ask_yes_no(&mut self, label: &str, default: &str) -> BuddyResult<Answer<bool>> {
        loop {
            match self.ask(label, default)? {
                Answer::Value(text) => match text.trim().to_lowercase().as_str() {
                    "y" | "yes" => return Ok(Answer::Value(true)),
                    "n" | "no" => return Ok(Answer::Value(false)),
                    _ => self.say("Please answer yes or no.")?,
                },
                Answer::Back => return Ok(Answer::Back),
                Answer::Quit => return Ok(Answer::Quit),
            }
        }
    }
}
