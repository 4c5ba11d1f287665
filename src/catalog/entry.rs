//! Catalog entries and the helpers that build them from raw data

use crate::core::normalize_for_match;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Shortest word a catalog accepts
pub const MIN_WORD_LENGTH: usize = 2;

/// A valid answer for a theme
///
/// `word` is the normalized match key (`^[a-z]{2,}$`), `display` the form shown
/// to the player and `meaning` a description, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub word: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub meaning: String,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        display: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            display: display.into(),
            meaning: meaning.into(),
        }
    }

    /// Entry whose display form is the word itself, with no meaning
    #[must_use]
    pub fn plain(word: impl Into<String>) -> Self {
        let word = word.into();
        Self {
            display: word.clone(),
            word,
            meaning: String::new(),
        }
    }
}

/// True when `word` is a usable catalog key
#[inline]
#[must_use]
pub fn is_catalog_word(word: &str) -> bool {
    word.len() >= MIN_WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Merge entries that share a word
///
/// The first display form seen wins; an empty meaning is filled in by the first
/// later entry that has one. Entries with an empty word are dropped. The result
/// is sorted by word.
#[must_use]
pub fn dedupe_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Vec<CatalogEntry> {
    let mut by_word: FxHashMap<String, CatalogEntry> = FxHashMap::default();

    for entry in entries {
        if entry.word.is_empty() {
            continue;
        }
        match by_word.get_mut(&entry.word) {
            Some(existing) => {
                if existing.meaning.is_empty() && !entry.meaning.is_empty() {
                    existing.meaning = entry.meaning;
                }
            }
            None => {
                let display = if entry.display.is_empty() {
                    entry.word.clone()
                } else {
                    entry.display
                };
                by_word.insert(
                    entry.word.clone(),
                    CatalogEntry {
                        word: entry.word,
                        display,
                        meaning: entry.meaning,
                    },
                );
            }
        }
    }

    let mut merged: Vec<CatalogEntry> = by_word.into_values().collect();
    merged.sort_unstable_by(|a, b| a.word.cmp(&b.word));
    merged
}

/// Parse a line-oriented word list into unique normalized words
///
/// Keeps first-occurrence order.
///
/// # Examples
/// ```
/// use letter_trail::catalog::parse_word_list_text;
///
/// let words = parse_word_list_text("Kite\r\nbike\nx\nKITE\n\n");
/// assert_eq!(words, vec!["kite", "bike"]);
/// ```
#[must_use]
pub fn parse_word_list_text(raw_text: &str) -> Vec<String> {
    sanitize_words(raw_text.lines())
}

/// Normalize, filter and deduplicate a list of words
#[must_use]
pub fn sanitize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .map(|raw| normalize_for_match(raw.as_ref()))
        .filter(|word| is_catalog_word(word) && seen.insert(word.clone()))
        .collect()
}

/// Turn a dashed API name into a display form: "mr-mime" -> "Mr Mime"
#[must_use]
pub fn title_case_from_dash_text(value: &str) -> String {
    value
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
