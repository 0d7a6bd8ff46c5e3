//! Command implementations

pub mod benchmark;
pub mod evolve;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use evolve::run_evolve;
pub use play::{PlayInput, PlayState, parse_input, run_play};
pub use solve::{SolveConfig, SolveResult, solve_word};
