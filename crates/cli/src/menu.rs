//! The interactive menu loop.
//!
//! ```text
//! Idle -> AwaitingChoice -> AddFlow | DeleteFlow | SortFlow | Exit
//!              ^                |          |          |
//!              +----------------+----------+----------+   (until-exit mode)
//! ```
//!
//! Every prompt blocks on one line of input. End of input at any prompt ends
//! the session normally.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::config::SessionMode;
use crate::presenter::Presenter;

pub const BANNER: &str = " Bun venit pe acest sistem de gestionare a bauturilor! ";
pub const MENU_TITLE: &str = "       Menu    ";
pub const MENU_OPTIONS: [&str; 4] = [
    "1. Add Drink",
    "2. Delete Drink",
    "3. Sort Drinks by Category",
    "4. Exit",
];

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const NAME_PROMPT: &str = "Enter the name of the drink: ";
pub const CATEGORY_PROMPT: &str = "Enter the category of the drink: ";
pub const DELETE_PROMPT: &str = "Enter the name of the drink to delete: ";
pub const SORT_PROMPT: &str = "Enter the category to sort drinks: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A recognized menu entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddDrink,
    DeleteDrink,
    SortByCategory,
    Exit,
}

impl MenuChoice {
    /// Match a raw input line. Only the exact digits are accepted.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::AddDrink),
            "2" => Some(MenuChoice::DeleteDrink),
            "3" => Some(MenuChoice::SortByCategory),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn next_state(self) -> MenuState {
        match self {
            MenuChoice::AddDrink => MenuState::AddFlow,
            MenuChoice::DeleteDrink => MenuState::DeleteFlow,
            MenuChoice::SortByCategory => MenuState::SortFlow,
            MenuChoice::Exit => MenuState::Exit,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuState {
    Idle,
    AwaitingChoice,
    AddFlow,
    DeleteFlow,
    SortFlow,
    Exit,
}

/// Why a session stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked "Exit".
    Exit,
    /// Single mode finished its one action.
    ActionCompleted,
    /// Input closed while waiting on a prompt.
    EndOfInput,
}

/// Prompt loop over any line reader and writer.
#[derive(Debug)]
pub struct Menu<R, W> {
    input: R,
    output: W,
    mode: SessionMode,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, mode: SessionMode) -> Self {
        Self { input, output, mode }
    }

    /// Run the session to completion against `presenter`.
    pub fn run(&mut self, presenter: &mut Presenter) -> Result<SessionEnd, SessionError> {
        let mut state = MenuState::Idle;

        loop {
            tracing::debug!(?state, "menu transition");

            state = match state {
                MenuState::Idle => MenuState::AwaitingChoice,
                MenuState::AwaitingChoice => {
                    self.write_menu()?;
                    let Some(line) = self.prompt(CHOICE_PROMPT)? else {
                        return Ok(SessionEnd::EndOfInput);
                    };
                    match MenuChoice::parse(&line) {
                        Some(choice) => choice.next_state(),
                        None => {
                            tracing::debug!(input = %line, "invalid menu choice");
                            writeln!(self.output, "{INVALID_CHOICE}")?;
                            MenuState::AwaitingChoice
                        }
                    }
                }
                MenuState::AddFlow => {
                    let Some(name) = self.prompt(NAME_PROMPT)? else {
                        return Ok(SessionEnd::EndOfInput);
                    };
                    let Some(category) = self.prompt(CATEGORY_PROMPT)? else {
                        return Ok(SessionEnd::EndOfInput);
                    };
                    presenter.add_drink(&mut self.output, &name, &category)?;
                    if self.mode.ends_after_action() {
                        return Ok(SessionEnd::ActionCompleted);
                    }
                    MenuState::AwaitingChoice
                }
                MenuState::DeleteFlow => {
                    let Some(name) = self.prompt(DELETE_PROMPT)? else {
                        return Ok(SessionEnd::EndOfInput);
                    };
                    presenter.delete_drink(&mut self.output, &name)?;
                    if self.mode.ends_after_action() {
                        return Ok(SessionEnd::ActionCompleted);
                    }
                    MenuState::AwaitingChoice
                }
                MenuState::SortFlow => {
                    let Some(category) = self.prompt(SORT_PROMPT)? else {
                        return Ok(SessionEnd::EndOfInput);
                    };
                    presenter.sort_drinks_by_category(&mut self.output, &category)?;
                    if self.mode.ends_after_action() {
                        return Ok(SessionEnd::ActionCompleted);
                    }
                    MenuState::AwaitingChoice
                }
                MenuState::Exit => return Ok(SessionEnd::Exit),
            };
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "{MENU_TITLE}")?;
        for option in MENU_OPTIONS {
            writeln!(self.output, "{option}")?;
        }
        Ok(())
    }

    /// Write `message`, then block for one line. `None` means end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the
    /// session.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        Ok(Some(strip_line_ending(line)))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_exact_digits() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddDrink));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::DeleteDrink));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::SortByCategory));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));

        for input in ["", "0", "5", " 1", "1 ", "01", "one", "exit"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn choices_map_to_flows() {
        assert_eq!(MenuChoice::AddDrink.next_state(), MenuState::AddFlow);
        assert_eq!(MenuChoice::DeleteDrink.next_state(), MenuState::DeleteFlow);
        assert_eq!(MenuChoice::SortByCategory.next_state(), MenuState::SortFlow);
        assert_eq!(MenuChoice::Exit.next_state(), MenuState::Exit);
    }

    #[test]
    fn strip_line_ending_removes_only_the_terminator() {
        assert_eq!(strip_line_ending("Cola\n".to_string()), "Cola");
        assert_eq!(strip_line_ending("Cola\r\n".to_string()), "Cola");
        assert_eq!(strip_line_ending(" Cola \n".to_string()), " Cola ");
        assert_eq!(strip_line_ending("Cola".to_string()), "Cola");
        assert_eq!(strip_line_ending("\n".to_string()), "");
    }
}
