//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and the stderr logger.

pub mod display;
pub mod formatters;
pub mod logger;

pub use display::{
    print_benchmark_result, print_evolution_result, print_guess, print_solve_result,
    print_solved, print_suggestions,
};
