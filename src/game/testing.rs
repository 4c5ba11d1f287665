//! Shared fixtures for session tests

use super::session::GameSession;
use crate::catalog::StaticProvider;
use crate::core::{Difficulty, LetterCount, Theme};
use crate::lookup::{DefinitionLookup, LookupOutcome};
use crate::storage::{MemoryPreferences, Preferences, TtlCache};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup with per-word answers; unknown words are indeterminate
pub struct ScriptedLookup {
    answers: FxHashMap<String, LookupOutcome>,
    fallback: LookupOutcome,
    calls: Arc<AtomicUsize>,
}

impl ScriptedLookup {
    pub fn new() -> Self {
        Self {
            answers: FxHashMap::default(),
            fallback: LookupOutcome::Indeterminate,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn answer(mut self, word: &str, outcome: LookupOutcome) -> Self {
        self.answers.insert(word.to_string(), outcome);
        self
    }

    pub fn fallback(mut self, outcome: LookupOutcome) -> Self {
        self.fallback = outcome;
        self
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

impl DefinitionLookup for ScriptedLookup {
    fn lookup(&self, word: &str) -> LookupOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .get(word)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

pub fn settings(theme: Theme, letter_count: usize) -> Preferences {
    Preferences {
        theme,
        letter_count: LetterCount::new(letter_count).unwrap(),
        difficulty: Difficulty::Standard,
    }
}

/// Idle session over a fixed dictionary word list with a seeded RNG
pub fn dictionary_session(words: &[&str], lookup: impl DefinitionLookup + 'static) -> GameSession {
    GameSession::new(
        Box::new(StaticProvider::new().with_words(Theme::Dictionary, words)),
        Arc::new(lookup),
        Arc::new(TtlCache::in_memory()),
        Box::new(MemoryPreferences::default()),
    )
    .with_seed(7)
}
