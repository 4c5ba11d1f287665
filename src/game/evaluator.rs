//! Guess evaluation
//!
//! A guess is validated completely before anything is recorded, so a failure
//! part way through never leaves the round half updated.

use super::error::GameError;
use super::scoreboard::{AcceptedGuess, RejectedGuess};
use super::session::{GameSession, SessionState};
use crate::catalog::CatalogEntry;
use crate::core::{
    calculate_word_score, contains_in_order, is_alpha_word, matched_letter_count,
    normalize_for_match,
};
use crate::lookup::validate_remotely;
use log::{debug, info};
use std::fmt;

/// Why a guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Nothing but letters survived normalization
    InvalidCharacters,
    /// Already accepted this round
    Duplicate,
    /// The target letters do not appear in order
    NotInOrder,
    /// Not a word of the active theme
    NotInCatalog,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidCharacters => "Use letters only.",
            Self::Duplicate => "Already found.",
            Self::NotInOrder => "Letters are not in order.",
            Self::NotInCatalog => "Not a valid word for this theme.",
        })
    }
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Scored and added to the accepted list
    Accepted(AcceptedGuess),
    /// A definitive wrong guess; `newly_recorded` is false for a repeat
    Rejected {
        reason: RejectReason,
        record: RejectedGuess,
        newly_recorded: bool,
    },
    /// Not all target letters are matched yet; nothing was evaluated
    Incomplete { matched: usize },
}

enum Verdict {
    Accept { remotely_confirmed: bool },
    Reject(RejectReason),
}

impl GameSession {
    /// Evaluate a guess against the current round
    ///
    /// Input is normalized first. Checks run in order: letters only, not a
    /// duplicate, letters in order, then catalog membership. For the
    /// dictionary theme a word outside the catalog is looked up remotely; a
    /// confirmed word joins the catalog for good.
    ///
    /// # Errors
    /// - `GameError::NoActiveRound` / `GameError::RoundRevealed` when guessing
    ///   is not possible
    /// - `GameError::InvalidTransition` while another operation is running
    /// - `GameError::ValidationUnavailable` if the remote lookup could not
    ///   decide; nothing is recorded and the same guess may be retried
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GameError> {
        match self.state {
            SessionState::RoundActive => {}
            SessionState::Idle => return Err(GameError::NoActiveRound),
            from @ (SessionState::Loading | SessionState::Revealing) => {
                return Err(GameError::InvalidTransition {
                    from,
                    to: SessionState::RoundActive,
                });
            }
        }
        let round = self.round.as_ref().ok_or(GameError::NoActiveRound)?;
        if round.is_revealed() {
            return Err(GameError::RoundRevealed);
        }

        let word = normalize_for_match(raw);
        let letters = round.target_letters().to_vec();
        let matched = matched_letter_count(&word, &letters);
        if matched < letters.len() {
            return Ok(GuessOutcome::Incomplete { matched });
        }

        match self.verdict(&word, &letters)? {
            Verdict::Reject(reason) => Ok(self.reject(raw, word, reason)),
            Verdict::Accept { remotely_confirmed } => Ok(self.accept(word, remotely_confirmed)),
        }
    }

    fn verdict(&self, word: &str, letters: &[u8]) -> Result<Verdict, GameError> {
        if !is_alpha_word(word) {
            return Ok(Verdict::Reject(RejectReason::InvalidCharacters));
        }
        if self.scoreboard.has_accepted(word) {
            return Ok(Verdict::Reject(RejectReason::Duplicate));
        }
        if !contains_in_order(word, letters) {
            return Ok(Verdict::Reject(RejectReason::NotInOrder));
        }
        if self.catalog.contains(word) {
            return Ok(Verdict::Accept {
                remotely_confirmed: false,
            });
        }
        if !self.settings.theme.is_dictionary() {
            return Ok(Verdict::Reject(RejectReason::NotInCatalog));
        }

        match validate_remotely(self.lookup.as_ref(), self.cache.as_ref(), word) {
            Some(true) => Ok(Verdict::Accept {
                remotely_confirmed: true,
            }),
            Some(false) => Ok(Verdict::Reject(RejectReason::NotInCatalog)),
            None => Err(GameError::ValidationUnavailable {
                word: word.to_string(),
            }),
        }
    }

    fn reject(&mut self, raw: &str, key: String, reason: RejectReason) -> GuessOutcome {
        let closest_percent = self
            .round
            .as_ref()
            .map_or(0, |round| round.closest_solution_percent(&key));
        let shown = raw.trim();
        let word = if shown.is_empty() {
            self.catalog.display_word(&key).to_string()
        } else {
            shown.to_string()
        };

        let record = RejectedGuess {
            key,
            word,
            closest_percent,
        };
        debug!("Rejected {} ({reason:?})", record.key);
        let newly_recorded = self.scoreboard.record_rejected(record.clone());
        GuessOutcome::Rejected {
            reason,
            record,
            newly_recorded,
        }
    }

    fn accept(&mut self, word: String, remotely_confirmed: bool) -> GuessOutcome {
        if remotely_confirmed {
            self.catalog.add_active_entry(&CatalogEntry::plain(word.as_str()));
            self.loader.remember_accepted_word(&word);
            info!("Added {word} to the dictionary");
        }
        if let Some(round) = self.round.as_mut() {
            round.add_solution(&word);
        }

        let theme = self.settings.theme;
        let meaning = self
            .meanings
            .resolve(theme, &word, self.catalog.meaning(&word));
        let guess = AcceptedGuess {
            display_word: self.catalog.display_word(&word).to_string(),
            points: calculate_word_score(&word),
            meaning,
            word,
        };
        self.scoreboard.record_accepted(guess.clone());
        GuessOutcome::Accepted(guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Theme;
    use crate::game::testing::{ScriptedLookup, dictionary_session, settings};
    use crate::lookup::LookupOutcome;

    fn kite_session(lookup: ScriptedLookup) -> GameSession {
        let mut session = dictionary_session(&["kite", "ox"], lookup);
        session.start_new_game(settings(Theme::Dictionary, 4)).unwrap();
        session
    }

    #[test]
    fn messy_input_is_normalized_and_scored() {
        let mut session = kite_session(ScriptedLookup::new());
        let GuessOutcome::Accepted(guess) = session.submit_guess("KITE ").unwrap() else {
            panic!("expected acceptance");
        };
        assert_eq!(guess.word, "kite");
        assert_eq!(guess.points, 12);
        assert_eq!(session.scoreboard().total_score(), 12);
    }

    #[test]
    fn second_submission_is_a_duplicate() {
        let mut session = kite_session(ScriptedLookup::new());
        session.submit_guess("kite").unwrap();

        let outcome = session.submit_guess("kite").unwrap();
        assert!(matches!(
            outcome,
            GuessOutcome::Rejected {
                reason: RejectReason::Duplicate,
                newly_recorded: true,
                ..
            }
        ));
        let rejected = session.scoreboard().rejected();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].key, "kite");
        assert_eq!(rejected[0].closest_percent, 100);
        assert_eq!(session.scoreboard().accepted().len(), 1);
    }

    #[test]
    fn partial_input_is_not_evaluated() {
        let mut session = kite_session(ScriptedLookup::new());
        assert_eq!(
            session.submit_guess("kit").unwrap(),
            GuessOutcome::Incomplete { matched: 3 }
        );
        assert!(session.scoreboard().rejected().is_empty());
    }

    #[test]
    fn confirmed_word_joins_catalog_and_solutions() {
        let lookup =
            ScriptedLookup::new().answer("kites", LookupOutcome::Defined(Some("Toys.".into())));
        let mut session = kite_session(lookup);

        let GuessOutcome::Accepted(guess) = session.submit_guess("Kites").unwrap() else {
            panic!("expected acceptance");
        };
        assert_eq!(guess.meaning, "Toys.");
        assert!(session.catalog().contains("kites"));
        assert!(session.round().unwrap().is_solution("kites"));
    }

    #[test]
    fn confirmed_word_survives_a_new_game() {
        let lookup = ScriptedLookup::new().answer("kites", LookupOutcome::Defined(None));
        let mut session = kite_session(lookup);
        session.submit_guess("kites").unwrap();

        session.restart().unwrap();
        assert!(session.catalog().contains("kites"));
    }

    #[test]
    fn unknown_word_is_rejected_with_closeness() {
        let lookup = ScriptedLookup::new().answer("kiite", LookupOutcome::NotFound);
        let mut session = kite_session(lookup);

        let GuessOutcome::Rejected { reason, record, .. } = session.submit_guess(" KiIte").unwrap()
        else {
            panic!("expected rejection");
        };
        assert_eq!(reason, RejectReason::NotInCatalog);
        assert_eq!(record.key, "kiite");
        assert_eq!(record.word, "KiIte");
        assert_eq!(record.closest_percent, 80);
    }

    #[test]
    fn indeterminate_lookup_changes_nothing() {
        let mut session = kite_session(ScriptedLookup::new());
        let before = session.scoreboard().clone();

        let err = session.submit_guess("kites").unwrap_err();
        assert!(matches!(err, GameError::ValidationUnavailable { .. }));
        assert_eq!(session.scoreboard(), &before);
        assert!(!session.catalog().contains("kites"));
        assert_eq!(session.state(), SessionState::RoundActive);
    }

    #[test]
    fn non_dictionary_themes_never_look_up() {
        let lookup = ScriptedLookup::new().answer("kites", LookupOutcome::Defined(None));
        let mut session = dictionary_session(&["kite"], lookup);
        session
            .start_new_game(settings(Theme::Dictionary, 4))
            .unwrap();
        session.settings.theme = Theme::Countries;

        let outcome = session.submit_guess("kites").unwrap();
        assert!(matches!(
            outcome,
            GuessOutcome::Rejected {
                reason: RejectReason::NotInCatalog,
                ..
            }
        ));
    }

    #[test]
    fn guessing_needs_an_active_round() {
        let mut session = dictionary_session(&["kite"], ScriptedLookup::new());
        assert!(matches!(
            session.submit_guess("kite"),
            Err(GameError::NoActiveRound)
        ));
    }
}
