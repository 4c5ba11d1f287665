//! Revealing all solutions of a round
//!
//! Meanings are resolved by a small worker pool draining a shared queue, which
//! caps how many lookups are in flight at once.

use super::error::GameError;
use super::session::{GameSession, SessionState};
use crate::catalog::WordCatalog;
use crate::core::Theme;
use crate::lookup::{MEANING_UNAVAILABLE, MeaningResolver};
use log::{info, warn};
use rayon::ThreadPoolBuilder;
use serde::Serialize;
use std::sync::{Mutex, PoisonError};

/// Worker cap for the dictionary theme, whose meanings need remote lookups
pub const DICTIONARY_REVEAL_WORKERS: usize = 8;

/// Worker cap for the other themes
pub const THEME_REVEAL_WORKERS: usize = 16;

/// Workers to use for `solution_count` solutions
#[must_use]
pub fn reveal_worker_count(theme: Theme, solution_count: usize) -> usize {
    let cap = if theme.is_dictionary() {
        DICTIONARY_REVEAL_WORKERS
    } else {
        THEME_REVEAL_WORKERS
    };
    cap.min(solution_count)
}

/// A solution as shown after a reveal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionView {
    pub word: String,
    pub display: String,
    pub meaning: String,
}

/// Resolve the meaning of every word with at most `workers` threads
///
/// Each worker pops words off a shared queue until it is empty, so every word
/// is resolved by exactly one worker. Returns once all workers are done.
pub fn resolve_meanings(
    resolver: &MeaningResolver,
    catalog: &WordCatalog,
    theme: Theme,
    words: &[String],
    workers: usize,
) {
    if words.is_empty() || workers == 0 {
        return;
    }

    let queue: Mutex<Vec<&str>> = Mutex::new(words.iter().rev().map(String::as_str).collect());
    let drain = || {
        loop {
            let next = queue.lock().unwrap_or_else(PoisonError::into_inner).pop();
            let Some(word) = next else {
                break;
            };
            resolver.resolve(theme, word, catalog.meaning(word));
        }
    };

    match ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|_| drain());
            }
        }),
        Err(e) => {
            warn!("Reveal pool unavailable ({e}); resolving sequentially");
            drain();
        }
    }
}

impl GameSession {
    /// Show every solution of the round with its meaning
    ///
    /// Marks the round revealed; further guesses are refused until a new game.
    /// Revealing again returns the same list without new lookups.
    ///
    /// # Errors
    /// - `GameError::NoActiveRound` without a round
    /// - `GameError::InvalidTransition` while another operation is running
    pub fn reveal_solutions(&mut self) -> Result<Vec<SolutionView>, GameError> {
        if self.state == SessionState::Idle || self.round.is_none() {
            return Err(GameError::NoActiveRound);
        }
        self.transition(SessionState::Revealing)?;

        let theme = self.settings.theme;
        let solutions = self.round.as_ref().map_or(&[][..], |round| round.solutions());
        let workers = reveal_worker_count(theme, solutions.len());
        info!(
            "Revealing {} solution(s) with {workers} worker(s)",
            solutions.len()
        );
        resolve_meanings(&self.meanings, &self.catalog, theme, solutions, workers);

        let views: Vec<SolutionView> = solutions
            .iter()
            .map(|word| SolutionView {
                word: word.clone(),
                display: self.catalog.display_word(word).to_string(),
                meaning: self
                    .meanings
                    .cached(theme, word)
                    .unwrap_or_else(|| MEANING_UNAVAILABLE.to_string()),
            })
            .collect();

        if let Some(round) = self.round.as_mut() {
            round.mark_revealed();
        }
        self.transition(SessionState::RoundActive)?;
        Ok(views)
    }
}
