//! Formatting utilities for terminal output

use crate::core::{GuessFeedback, LetterFeedback, MAX_GUESSES, WeightProfile};
use colored::Colorize;

/// Share text: a header line followed by one emoji row per guess
///
/// # Examples
/// ```
/// use wordle_cheat::core::GuessFeedback;
/// use wordle_cheat::output::formatters::share_grid;
///
/// let guesses = [GuessFeedback::from_marks("crane", "--G-G").unwrap()];
/// assert_eq!(share_grid(&guesses), "WordleSolver: 1/6*\n⬛⬛🟩⬛🟩\n");
/// ```
#[must_use]
pub fn share_grid(guesses: &[GuessFeedback]) -> String {
    let mut grid = format!("WordleSolver: {}/{MAX_GUESSES}*\n", guesses.len());
    for guess in guesses {
        grid.push_str(&guess.to_emoji());
        grid.push('\n');
    }
    grid
}

/// Suggestion confidence as a whole percentage
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{:.0}%", value.clamp(0.0, 1.0) * 100.0)
}

/// Guess letters on coloured tiles
#[must_use]
pub fn colored_guess(guess: &GuessFeedback) -> String {
    guess
        .letters()
        .iter()
        .map(|letter| {
            let tile = format!(" {} ", char::from(letter.letter()));
            match letter.feedback() {
                LetterFeedback::Correct => tile.black().on_green().bold().to_string(),
                LetterFeedback::WrongPosition => tile.black().on_yellow().bold().to_string(),
                LetterFeedback::NotPresent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Weight table as Rust source for pasting into `WeightProfile::best`
#[must_use]
pub fn weights_as_rust(weights: &[WeightProfile]) -> String {
    let rows: String = weights
        .iter()
        .map(|profile| {
            let [a, b, c, d, e] = profile.coefficients();
            format!("    WeightProfile::new({a:?}, {b:?}, {c:?}, {d:?}, {e:?}),\n")
        })
        .collect();
    format!("vec![\n{rows}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_grid_rows() {
        let guesses = [
            GuessFeedback::from_marks("crane", "--G-G").unwrap(),
            GuessFeedback::from_marks("slate", "GGGGG").unwrap(),
        ];
        assert_eq!(
            share_grid(&guesses),
            "WordleSolver: 2/6*\n⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩\n"
        );
    }

    #[test]
    fn share_grid_without_guesses() {
        assert_eq!(share_grid(&[]), "WordleSolver: 0/6*\n");
    }

    #[test]
    fn percentage_is_capped() {
        assert_eq!(format_percentage(0.456), "46%");
        assert_eq!(format_percentage(1.7), "100%");
        assert_eq!(format_percentage(0.0), "0%");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let guess = GuessFeedback::from_marks("crane", "G-Y--").unwrap();
        assert_eq!(colored_guess(&guess), " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn empty_weight_table_renders_empty_vec() {
        assert_eq!(weights_as_rust(&[]), "vec![\n]");
    }

    #[test]
    fn weights_render_as_constructor_calls() {
        let table = [WeightProfile::new(0.5, 0.25, 1.0, 0.0, 2.0)];
        assert_eq!(
            weights_as_rust(&table),
            "vec![\n    WeightProfile::new(0.5, 0.25, 1.0, 0.0, 2.0),\n]"
        );
    }
}
