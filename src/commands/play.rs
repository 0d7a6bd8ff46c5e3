//! Interactive text mode
//!
//! Suggests words and reads back what the game showed. Feedback is entered as
//! `WORD MARKS` for any guess, or just `MARKS` to take the top suggestion.
//! A mistyped mark can be fixed with `cycle N` / `back N`, which step the tag
//! at position N of the last guess forward or backward.

use crate::core::{FeedbackError, GuessFeedback, WORD_LENGTH, Word};
use crate::output::display::{print_guess, print_solved, print_suggestions};
use crate::output::formatters::share_grid;
use crate::solver::{SolverError, SolverSession, Suggestion};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use thiserror::Error;

/// One line of user input
#[derive(Debug, Clone, PartialEq)]
pub enum PlayInput {
    Guess(GuessFeedback),
    /// Step the tag at `index` (0-based) of the last guess
    Cycle { index: usize, forward: bool },
    Undo,
    New,
    Share,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
    #[error("no suggestion to apply the marks to; enter `WORD MARKS`")]
    NoSuggestion,
    #[error("position must be 1 to 5, got {0:?}")]
    InvalidPosition(String),
    #[error("expected `WORD MARKS`, `MARKS` or a command")]
    Unrecognised,
}

/// Parse a line of input
///
/// A lone `MARKS` token (or `win`) applies to `top`, the current best
/// suggestion.
///
/// # Errors
///
/// Returns `InputError` for malformed feedback, or marks without a word when
/// there is no suggestion to take it from.
pub fn parse_input(line: &str, top: Option<&Word>) -> Result<PlayInput, InputError> {
    let mut tokens = line.split_whitespace();
    let input = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(command), Some(position), None)
            if matches!(command.to_lowercase().as_str(), "cycle" | "back") =>
        {
            let index = position
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=WORD_LENGTH).contains(n))
                .ok_or_else(|| InputError::InvalidPosition(position.to_string()))?;
            PlayInput::Cycle {
                index: index - 1,
                forward: command.eq_ignore_ascii_case("cycle"),
            }
        }
        (Some(word), Some(marks), None) => PlayInput::Guess(GuessFeedback::from_marks(word, marks)?),
        (Some(token), None, None) => match token.to_lowercase().as_str() {
            "quit" | "q" | "exit" => PlayInput::Quit,
            "new" | "n" => PlayInput::New,
            "undo" | "u" => PlayInput::Undo,
            "share" | "s" => PlayInput::Share,
            "help" | "h" | "?" => PlayInput::Help,
            command => {
                let marks = if command == "win" { "GGGGG" } else { token };
                let word = top.ok_or(InputError::NoSuggestion)?;
                PlayInput::Guess(GuessFeedback::from_marks(word.text(), marks)?)
            }
        },
        _ => return Err(InputError::Unrecognised),
    };
    Ok(input)
}

/// Session plus the guesses entered so far
pub struct PlayState {
    session: SolverSession,
    history: Vec<GuessFeedback>,
}

impl PlayState {
    #[must_use]
    pub const fn new(session: SolverSession) -> Self {
        Self {
            session,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &SolverSession {
        &self.session
    }

    #[must_use]
    pub fn history(&self) -> &[GuessFeedback] {
        &self.history
    }

    /// Current suggestions, best first
    ///
    /// # Errors
    ///
    /// Propagates `SolverError` from the session.
    pub fn suggestions(&self) -> Result<Vec<Suggestion>, SolverError> {
        self.session.suggest_matches()
    }

    pub fn record(&mut self, guess: GuessFeedback) {
        self.session.record_guess(&guess);
        self.history.push(guess);
    }

    /// Drop the last guess and rebuild the session from the rest
    ///
    /// Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }
        self.session.replay(&self.history);
        true
    }

    /// Step one tag of the last guess and rebuild the session
    ///
    /// Returns the corrected guess, or `None` if nothing was entered yet.
    pub fn cycle_last(&mut self, index: usize, forward: bool) -> Option<GuessFeedback> {
        let last = self.history.last_mut()?;
        let tag = last.letters()[index].feedback();
        let tag = if forward { tag.next() } else { tag.previous() };
        *last = last.with_feedback(index, tag);
        let corrected = *last;

        self.session.replay(&self.history);
        Some(corrected)
    }

    pub fn new_game(&mut self) {
        self.history.clear();
        self.session.start_new_session();
    }

    /// Solved by the last guess or by the constraints collected so far
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.session.is_solved() || self.history.last().is_some_and(GuessFeedback::is_solved)
    }

    #[must_use]
    pub fn share(&self) -> String {
        share_grid(&self.history)
    }
}

fn print_help() {
    println!("Enter what the game showed for your guess:");
    println!("  - WORD MARKS  e.g. `crane --g-y`");
    println!("  - MARKS       applies to the top suggestion");
    println!("  - Use G/g/🟩 for green, Y/y/🟨 for yellow, -/_/./⬛ for grey");
    println!("  - Or type 'win' if the top suggestion was right");
    println!("  - `cycle N` / `back N` changes the mark at position N of the last guess\n");
    println!("Commands: 'undo', 'new', 'share', 'help', 'quit'\n");
}

/// Run the interactive text mode until the user quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if the session runs past its weight
/// table.
pub fn run_play(session: SolverSession) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle Cheat - Interactive                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut state = PlayState::new(session);

    loop {
        let suggestions = state.suggestions()?;

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {}: {} candidates remaining",
            state.history().len() + 1,
            state.session().remaining()
        );
        println!("────────────────────────────────────────────────────────────");
        print_suggestions(&suggestions);

        let Some(line) = get_user_input("Feedback")? else {
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }

        match parse_input(&line, suggestions.first().map(Suggestion::word)) {
            Ok(PlayInput::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Ok(PlayInput::New) => {
                state.new_game();
                println!("\n🔄 New game started!\n");
            }
            Ok(PlayInput::Undo) => {
                if state.undo() {
                    println!("✓ Undone! Back to turn {}\n", state.history().len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            Ok(PlayInput::Cycle { index, forward }) => match state.cycle_last(index, forward) {
                Some(guess) => print_guess(state.history().len(), &guess),
                None => println!("Nothing to change!\n"),
            },
            Ok(PlayInput::Share) => println!("\n{}", state.share()),
            Ok(PlayInput::Help) => print_help(),
            Ok(PlayInput::Guess(guess)) => {
                state.record(guess);
                print_guess(state.history().len(), &guess);

                if state.is_solved() {
                    print_solved(state.history());
                    state.new_game();
                    println!("🔄 New game started!\n");
                }
            }
            Err(e) => println!("{} {e}\n", "❌".red()),
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
