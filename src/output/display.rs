//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, format_percentage, share_grid, weights_as_rust};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{GuessFeedback, MAX_GUESSES};
use crate::evolver::EvolutionOutcome;
use crate::solver::Suggestion;
use colored::Colorize;

/// Print ranked suggestions with their confidence
pub fn print_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("\n{}\n", "No words found".red().bold());
        return;
    }

    println!("\n📊 Suggestions:");
    for (i, suggestion) in suggestions.iter().enumerate() {
        let bar = create_progress_bar(suggestion.percentage(), 1.0, 20);
        println!(
            "   {}. {} [{}] {}",
            i + 1,
            suggestion.word().text().bright_white().bold(),
            bar.green(),
            format_percentage(suggestion.percentage()).bright_yellow()
        );
    }
    println!();
}

/// Print one recorded guess on coloured tiles
pub fn print_guess(turn: usize, guess: &GuessFeedback) {
    println!("\n  {}. {}\n", turn.to_string().bright_black(), colored_guess(guess));
}

/// Print the end-of-game banner and share grid
pub fn print_solved(history: &[GuessFeedback]) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "          🎉  W O R D L E   S O L V E D !  🎉".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    let turns = history.len();
    println!(
        "\n  Solution found in {} {}\n",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );
    println!("{}", share_grid(history));
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.answer.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if !result.in_word_list {
        println!("{}", "⚠ Answer is not in the word list".yellow());
    }

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.feedback),
            step.feedback.to_emoji()
        );
        println!(
            "  Score: {}  Remaining: {}",
            format_percentage(step.score.min(1.0)),
            step.remaining
        );
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!(
        "   Failures:         {}",
        format!("{}", result.failures).red()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_GUESSES {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}

/// Print the winning weight table as pasteable Rust
pub fn print_evolution_result(outcome: &EvolutionOutcome) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EVOLUTION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Fitness:          {} guesses over {} games",
        outcome.fitness.to_string().bright_yellow().bold(),
        outcome.sample_size
    );
    println!("   Average guesses:  {:.2}\n", outcome.average_guesses());
    println!("{}", weights_as_rust(&outcome.weights));
}
