//! Rounds, guesses and the game session

mod error;
mod evaluator;
mod generator;
mod reveal;
mod round;
mod scoreboard;
mod session;
#[cfg(test)]
pub(crate) mod testing;

pub use error::GameError;
pub use evaluator::{GuessOutcome, RejectReason};
pub use generator::{
    MAX_ATTEMPTS, MIN_SOLUTIONS, RoundGenerator, max_solutions_target, pick_letters,
};
pub use reveal::{
    DICTIONARY_REVEAL_WORKERS, SolutionView, THEME_REVEAL_WORKERS, resolve_meanings,
    reveal_worker_count,
};
pub use round::Round;
pub use scoreboard::{AcceptedGuess, RejectedGuess, Scoreboard};
pub use session::{GameSession, SessionState};
