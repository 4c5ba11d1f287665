use serde::Serialize;

/// A word accepted this round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedGuess {
    pub word: String,
    pub display_word: String,
    pub points: u32,
    pub meaning: String,
}

/// A wrong guess, deduplicated by `key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedGuess {
    /// Normalized attempted word
    pub key: String,
    /// Text shown back to the player
    pub word: String,
    pub closest_percent: u8,
}

/// Score and guess history for the current round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    accepted: Vec<AcceptedGuess>,
    rejected: Vec<RejectedGuess>,
    total_score: u32,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn accepted(&self) -> &[AcceptedGuess] {
        &self.accepted
    }

    #[must_use]
    pub fn rejected(&self) -> &[RejectedGuess] {
        &self.rejected
    }

    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub fn has_accepted(&self, word: &str) -> bool {
        self.accepted.iter().any(|guess| guess.word == word)
    }

    pub(crate) fn record_accepted(&mut self, guess: AcceptedGuess) {
        self.total_score = self.total_score.saturating_add(guess.points);
        self.accepted.push(guess);
    }

    /// Returns false when a guess with the same key is already listed
    pub(crate) fn record_rejected(&mut self, guess: RejectedGuess) -> bool {
        if self.rejected.iter().any(|r| r.key == guess.key) {
            return false;
        }
        self.rejected.push(guess);
        true
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
