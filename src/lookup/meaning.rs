//! Remote word validation and meaning resolution
//!
//! Both go through the cache so repeat lookups of a word stay local.

use super::client::{DefinitionLookup, LookupOutcome};
use crate::core::Theme;
use crate::storage::CacheStore;
use log::debug;
use rustc_hash::FxHashMap;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shown when no meaning can be found
pub const MEANING_UNAVAILABLE: &str = "Meaning unavailable.";

fn validation_key(word: &str) -> String {
    format!("dictionary:validation:{word}")
}

fn definition_key(word: &str) -> String {
    format!("dictionaryapi:meaning:{word}")
}

/// Ask the definition service whether `word` is real
///
/// Returns `Some(true)`/`Some(false)` for a definitive answer (cached) and
/// `None` when the service could not decide (never cached). A definition that
/// comes back with a positive answer is cached for meaning lookups.
pub fn validate_remotely(
    lookup: &dyn DefinitionLookup,
    cache: &dyn CacheStore,
    word: &str,
) -> Option<bool> {
    if let Some(Value::Bool(cached)) = cache.read(&validation_key(word)) {
        return Some(cached);
    }

    match lookup.lookup(word) {
        LookupOutcome::Defined(definition) => {
            cache.write(&validation_key(word), Value::Bool(true));
            if let Some(definition) = definition {
                cache.write(&definition_key(word), Value::String(definition));
            }
            Some(true)
        }
        LookupOutcome::NotFound => {
            cache.write(&validation_key(word), Value::Bool(false));
            Some(false)
        }
        LookupOutcome::Indeterminate => {
            debug!("Validation of {word} was indeterminate");
            None
        }
    }
}

/// Resolves and memoizes display meanings for accepted words and solutions
///
/// Shared by the reveal workers, so the memo sits behind a mutex. Each worker
/// claims a distinct word, so two workers never resolve the same key.
pub struct MeaningResolver {
    memo: Mutex<FxHashMap<String, String>>,
    lookup: Arc<dyn DefinitionLookup>,
    cache: Arc<dyn CacheStore>,
}

impl MeaningResolver {
    #[must_use]
    pub fn new(lookup: Arc<dyn DefinitionLookup>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            memo: Mutex::new(FxHashMap::default()),
            lookup,
            cache,
        }
    }

    fn memo(&self) -> MutexGuard<'_, FxHashMap<String, String>> {
        self.memo.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Meaning of `word` in `theme`
    ///
    /// Order: memo, then the catalog's own meaning, then (dictionary only) the
    /// cached or remote definition. Falls back to [`MEANING_UNAVAILABLE`].
    pub fn resolve(&self, theme: Theme, word: &str, local_meaning: Option<&str>) -> String {
        let key = format!("{}:{word}", theme.id());
        if let Some(meaning) = self.memo().get(&key) {
            return meaning.clone();
        }

        let meaning = match local_meaning.filter(|m| !m.is_empty()) {
            Some(local) => local.to_string(),
            None if theme.is_dictionary() => self
                .definition(word)
                .unwrap_or_else(|| MEANING_UNAVAILABLE.to_string()),
            None => MEANING_UNAVAILABLE.to_string(),
        };

        self.memo().insert(key, meaning.clone());
        meaning
    }

    /// Already-resolved meaning, without any lookup
    #[must_use]
    pub fn cached(&self, theme: Theme, word: &str) -> Option<String> {
        self.memo().get(&format!("{}:{word}", theme.id())).cloned()
    }

    /// Forget all resolved meanings (new game)
    pub fn clear(&self) {
        self.memo().clear();
    }

    fn definition(&self, word: &str) -> Option<String> {
        if let Some(Value::String(cached)) = self.cache.read(&definition_key(word))
            && !cached.is_empty()
        {
            return Some(cached);
        }

        match self.lookup.lookup(word) {
            LookupOutcome::Defined(Some(definition)) => {
                self.cache
                    .write(&definition_key(word), Value::String(definition.clone()));
                Some(definition)
            }
            LookupOutcome::Defined(None)
            | LookupOutcome::NotFound
            | LookupOutcome::Indeterminate => None,
        }
    }
}
