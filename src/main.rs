//! Wordle Cheat - CLI
//!
//! Suggests Wordle guesses from the feedback entered so far, and tunes the
//! suggestion weights by simulated self-play.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_cheat::{
    commands::{SolveConfig, run_benchmark, run_evolve, run_play, solve_word},
    core::{MAX_GUESSES, WeightProfile, Word},
    evolver::EvolverConfig,
    output::{logger, print_benchmark_result, print_evolution_result, print_solve_result},
    solver::{SolverSession, WordSet},
    wordlists::{load_from_file, sample_words},
};

#[derive(Parser)]
#[command(
    name = "wordle_cheat",
    about = "Wordle helper: ranks candidate words from guess feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file with `WORD FREQUENCY` lines (default: bundled sample list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Force the first suggestion of every game
    #[arg(short = 'f', long, global = true)]
    first_word: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Simulate one game against a known answer
    Solve {
        /// The answer to play against
        answer: String,
    },

    /// Simulate games over the first words of the list
    Benchmark {
        /// Number of list words to play against
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Evolve a new weight table by self-play
    Evolve {
        /// Generations to run
        #[arg(short, long, default_value = "20")]
        iterations: usize,

        /// Answers sampled per generation
        #[arg(short, long, default_value = "50")]
        sample: usize,

        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the word list from the -w flag or fall back to the bundled one
fn load_words(path: Option<&PathBuf>) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load word list {}", path.display())),
        None => Ok(sample_words()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose).context("Failed to install logger")?;

    let words = load_words(cli.wordlist.as_ref())?;
    log::info!("loaded {} words", words.len());
    let word_set = WordSet::new(words);

    let command = cli.command.unwrap_or(Commands::Play);
    let first_word = cli.first_word.as_deref();

    match command {
        Commands::Play => run_play(build_session(word_set, first_word)?),
        Commands::Solve { answer } => {
            let mut session = build_session(word_set, first_word)?;
            let result = solve_word(SolveConfig::new(answer), &mut session)?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let answers: Vec<Word> = word_set.words().iter().take(count).cloned().collect();
            println!("Running benchmark on {} words...", answers.len());

            let session = build_session(word_set, first_word)?;
            let result = run_benchmark(&session, &answers, MAX_GUESSES)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Evolve {
            iterations,
            sample,
            seed,
        } => {
            let config = EvolverConfig {
                sample_size: sample,
                seed,
                ..EvolverConfig::default()
            };
            println!("Evolving weights for {iterations} generations over {sample} games each...");

            let outcome = run_evolve(word_set, config, iterations)?;
            print_evolution_result(&outcome);
            Ok(())
        }
    }
}

/// Session with the shipped weights and an optional forced opening word
fn build_session(word_set: WordSet, first_word: Option<&str>) -> Result<SolverSession> {
    let session = SolverSession::new(word_set, WeightProfile::best())?;
    Ok(match first_word {
        Some(word) => session.with_opening_word(word)?,
        None => session,
    })
}
