//! Round command: generate and print a single round

use crate::game::{GameError, GameSession, SolutionView};
use crate::storage::Preferences;

/// A generated round, optionally with its solutions
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub settings: Preferences,
    pub letters: String,
    pub rules: String,
    pub solution_count: usize,
    pub solutions: Vec<SolutionView>,
}

/// Start a round with `settings` and report it
///
/// # Errors
///
/// Returns the `GameError` from loading the theme, generating the round or
/// revealing its solutions.
pub fn generate_round(
    session: &mut GameSession,
    settings: Preferences,
    show_solutions: bool,
) -> Result<RoundReport, GameError> {
    session.start_new_game(settings)?;
    let round = session.round().ok_or(GameError::NoActiveRound)?;
    let letters = round.letters_display();
    let solution_count = round.solution_count();

    let solutions = if show_solutions {
        session.reveal_solutions()?
    } else {
        Vec::new()
    };

    Ok(RoundReport {
        settings,
        letters,
        rules: session.rules(),
        solution_count,
        solutions,
    })
}
