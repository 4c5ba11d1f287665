//! The active word catalog for the current theme
//!
//! Holds the sorted word list, a membership set and per-word display/meaning
//! metadata. Rebuilt whenever a theme is activated and extended at runtime when
//! a guess outside the catalog is confirmed as a real word.

use super::entry::{CatalogEntry, is_catalog_word};
use crate::core::{contains_in_order, normalize_for_match};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Display form and meaning of a catalog word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordMeta {
    pub display: String,
    pub meaning: String,
}

/// Words that are valid answers for the active theme
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    words: Vec<String>,
    word_set: FxHashSet<String>,
    meta: FxHashMap<String, WordMeta>,
}

impl WordCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries in one step
    #[must_use]
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        let mut catalog = Self::new();
        catalog.set_active_entries(entries);
        catalog
    }

    /// Replace the catalog contents
    ///
    /// Entries whose word is not at least two `a`-`z` letters are skipped.
    /// Duplicate words keep their first display form and first non-empty meaning.
    pub fn set_active_entries(&mut self, entries: &[CatalogEntry]) {
        self.words.clear();
        self.word_set.clear();
        self.meta.clear();

        for entry in entries {
            if !is_catalog_word(&entry.word) {
                continue;
            }
            if self.word_set.insert(entry.word.clone()) {
                self.words.push(entry.word.clone());
                self.meta.insert(
                    entry.word.clone(),
                    WordMeta {
                        display: non_empty_or(&entry.display, &entry.word),
                        meaning: entry.meaning.clone(),
                    },
                );
            } else if let Some(meta) = self.meta.get_mut(&entry.word)
                && meta.meaning.is_empty()
            {
                meta.meaning.clone_from(&entry.meaning);
            }
        }

        self.words.sort_unstable();
    }

    /// Insert a single word discovered during play
    ///
    /// The word is normalized first. Metadata supplied by the entry overrides
    /// what is stored; empty fields keep the existing values. Returns `true` if
    /// the word was not in the catalog before.
    pub fn add_active_entry(&mut self, entry: &CatalogEntry) -> bool {
        let word = normalize_for_match(&entry.word);
        if !is_catalog_word(&word) {
            return false;
        }

        let inserted = self.word_set.insert(word.clone());
        if inserted {
            let position = self.words.binary_search(&word).unwrap_or_else(|pos| pos);
            self.words.insert(position, word.clone());
        }

        let current = self.meta.remove(&word).unwrap_or_default();
        let meta = WordMeta {
            display: if entry.display.is_empty() {
                non_empty_or(&current.display, &word)
            } else {
                entry.display.clone()
            },
            meaning: if entry.meaning.is_empty() {
                current.meaning
            } else {
                entry.meaning.clone()
            },
        };
        self.meta.insert(word, meta);

        inserted
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// All words in sorted order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Display form of a word, or the word itself when unknown
    #[must_use]
    pub fn display_word<'a>(&'a self, word: &'a str) -> &'a str {
        self.meta
            .get(word)
            .map(|meta| meta.display.as_str())
            .filter(|display| !display.is_empty())
            .unwrap_or(word)
    }

    /// Locally known meaning, if non-empty
    #[must_use]
    pub fn meaning(&self, word: &str) -> Option<&str> {
        self.meta
            .get(word)
            .map(|meta| meta.meaning.as_str())
            .filter(|meaning| !meaning.is_empty())
    }

    #[must_use]
    pub fn meta(&self, word: &str) -> Option<&WordMeta> {
        self.meta.get(word)
    }

    /// Words long enough to seed a round of `min_length` letters
    #[must_use]
    pub fn eligible_words(&self, min_length: usize) -> Vec<&str> {
        self.words
            .iter()
            .filter(|word| word.len() >= min_length)
            .map(String::as_str)
            .collect()
    }

    /// Every catalog word containing `letters` in order, in sorted order
    #[must_use]
    pub fn solutions_for(&self, letters: &[u8]) -> Vec<String> {
        self.words
            .par_iter()
            .filter(|word| contains_in_order(word, letters))
            .cloned()
            .collect()
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
