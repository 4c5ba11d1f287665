use super::session::SessionState;
use crate::catalog::ProviderError;
use crate::core::{LetterCount, SettingsError, Theme};
use thiserror::Error;

/// Failures surfaced by a game session
///
/// Definitive guess rejections are not errors; they come back as
/// [`GuessOutcome::Rejected`](super::GuessOutcome::Rejected).
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Error loading {}. Please check your internet and try again.", label(.theme))]
    CatalogLoad {
        theme: Theme,
        #[source]
        source: ProviderError,
    },
    #[error("No {letter_count}-letter words available. Try a smaller letter count.")]
    NoEligibleWords { letter_count: LetterCount },
    #[error("Could not generate a round right now. Try New Game.")]
    RoundGeneration,
    #[error("No round is active. Start a new game first.")]
    NoActiveRound,
    #[error("Solutions were revealed. Start a new game to keep playing.")]
    RoundRevealed,
    #[error("Could not validate \"{word}\" right now. Check your internet and try again.")]
    ValidationUnavailable { word: String },
    #[error("Cannot move from {from:?} to {to:?}")]
    InvalidTransition { from: SessionState, to: SessionState },
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn label(theme: &Theme) -> &'static str {
    theme.label()
}
