//! Terminal output formatting
//!
//! Display utilities for the game loop and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_error, print_guess_outcome, print_help, print_round,
    print_round_report, print_scoreboard, print_solutions, print_survey_result,
};
