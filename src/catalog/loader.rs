//! Per-theme catalog loading with caching
//!
//! Each theme has its own loader. Finished entries are memoized for the
//! session and cached (best effort) across sessions.

use super::entry::{
    CatalogEntry, dedupe_entries, is_catalog_word, parse_word_list_text, sanitize_words,
    title_case_from_dash_text,
};
use super::provider::{CatalogProvider, ProviderError, RawCatalog, RawRecord};
use crate::core::{Theme, normalize_for_match};
use crate::storage::CacheStore;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde_json::Value;
use std::sync::Arc;

const DICTIONARY_BASE_KEY: &str = "theme:dictionary:baseWords";
const DICTIONARY_ACCEPTED_KEY: &str = "theme:dictionary:remoteAcceptedWords";
const POKEMON_ENTRIES_KEY: &str = "theme:pokemon:entries";
const POKEMON_RAW_KEY: &str = "theme:pokemon:raw";

const POKEMON_MEANING: &str = "Pokemon name.";

/// Loads and caches the entries of each theme
pub struct ThemeLoader {
    provider: Box<dyn CatalogProvider>,
    cache: Arc<dyn CacheStore>,
    memory: FxHashMap<Theme, Vec<CatalogEntry>>,
}

impl ThemeLoader {
    #[must_use]
    pub fn new(provider: Box<dyn CatalogProvider>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            provider,
            cache,
            memory: FxHashMap::default(),
        }
    }

    /// Entries for `theme`, from memory, cache or the provider
    ///
    /// # Errors
    /// Returns `ProviderError` when the data is neither cached nor fetchable.
    pub fn load(&mut self, theme: Theme) -> Result<&[CatalogEntry], ProviderError> {
        if !self.memory.contains_key(&theme) {
            let entries = match theme {
                Theme::Dictionary => self.load_dictionary()?,
                Theme::Pokemon => self.load_pokemon()?,
                Theme::Countries | Theme::Capitals => self.load_geo(theme)?,
            };
            info!("Loaded {} entries for {theme}", entries.len());
            self.memory.insert(theme, entries);
        }

        Ok(self.memory.get(&theme).map_or(&[], Vec::as_slice))
    }

    /// Words confirmed remotely in earlier sessions
    #[must_use]
    pub fn accepted_dictionary_words(&self) -> Vec<String> {
        self.cache
            .read(DICTIONARY_ACCEPTED_KEY)
            .map(|value| cached_strings(&value))
            .unwrap_or_default()
    }

    /// Persist a remotely confirmed dictionary word for future sessions
    ///
    /// Also adds it to the memoized dictionary entries so a later reload of
    /// the theme in this session includes it.
    pub fn remember_accepted_word(&mut self, word: &str) {
        let word = normalize_for_match(word);
        if !is_catalog_word(&word) {
            return;
        }

        let mut accepted = self.accepted_dictionary_words();
        if !accepted.contains(&word) {
            accepted.push(word.clone());
            self.cache.write(DICTIONARY_ACCEPTED_KEY, Value::from(accepted));
            debug!("Remembered community word {word}");
        }

        if let Some(entries) = self.memory.get_mut(&Theme::Dictionary)
            && let Err(position) = entries.binary_search_by(|entry| entry.word.as_str().cmp(&word))
        {
            entries.insert(position, CatalogEntry::plain(word));
        }
    }

    fn load_dictionary(&self) -> Result<Vec<CatalogEntry>, ProviderError> {
        let mut base_words = self
            .cached_value(Theme::Dictionary, DICTIONARY_BASE_KEY)
            .map(|value| cached_strings(&value))
            .unwrap_or_default();

        if base_words.is_empty() {
            base_words = match self.provider.fetch(Theme::Dictionary)? {
                RawCatalog::WordList(text) => parse_word_list_text(&text),
                RawCatalog::Names(names) => sanitize_words(names),
                RawCatalog::Records(records) => {
                    sanitize_words(records.into_iter().filter_map(|record| record.word))
                }
            };
            self.write_value(
                Theme::Dictionary,
                DICTIONARY_BASE_KEY,
                Value::from(base_words.clone()),
            );
        }

        let accepted = self.accepted_dictionary_words();
        let entries = base_words
            .into_iter()
            .chain(accepted)
            .map(CatalogEntry::plain)
            .collect::<Vec<_>>();
        Ok(dedupe_entries(entries))
    }

    fn load_pokemon(&self) -> Result<Vec<CatalogEntry>, ProviderError> {
        if let Some(entries) = self.cached_entries(Theme::Pokemon, POKEMON_ENTRIES_KEY) {
            return Ok(entries);
        }

        let names = match self.cached_value(Theme::Pokemon, POKEMON_RAW_KEY) {
            Some(value) if value.as_array().is_some_and(|items| !items.is_empty()) => {
                cached_raw_strings(&value)
            }
            _ => {
                let names = match self.provider.fetch(Theme::Pokemon)? {
                    RawCatalog::Names(names) => names,
                    RawCatalog::Records(records) => records
                        .into_iter()
                        .filter_map(|record| record.word.or(record.display))
                        .collect(),
                    RawCatalog::WordList(text) => text.lines().map(str::to_string).collect(),
                };
                self.write_value(Theme::Pokemon, POKEMON_RAW_KEY, Value::from(names.clone()));
                names
            }
        };

        let entries = dedupe_entries(names.iter().filter_map(|name| {
            let word = normalize_for_match(name);
            is_catalog_word(&word)
                .then(|| CatalogEntry::new(word, title_case_from_dash_text(name), POKEMON_MEANING))
        }));

        self.write_entries(Theme::Pokemon, POKEMON_ENTRIES_KEY, &entries);
        Ok(entries)
    }

    fn load_geo(&self, theme: Theme) -> Result<Vec<CatalogEntry>, ProviderError> {
        let entries_key = format!("theme:{}:entries", theme.id());
        if let Some(entries) = self.cached_entries(theme, &entries_key) {
            return Ok(entries);
        }

        let raw_key = format!("theme:{}:raw", theme.id());
        let records: Vec<RawRecord> = match self
            .cached_value(theme, &raw_key)
            .and_then(|value| serde_json::from_value(value).ok())
        {
            Some(records) => records,
            None => {
                let RawCatalog::Records(records) = self.provider.fetch(theme)? else {
                    return Err(ProviderError::Format(theme));
                };
                if let Ok(value) = serde_json::to_value(&records) {
                    self.write_value(theme, &raw_key, value);
                }
                records
            }
        };

        let default_meaning = match theme {
            Theme::Capitals => "Capital city.",
            _ => "Country name.",
        };
        let entries = dedupe_entries(
            records
                .iter()
                .filter_map(|record| geo_entry(record, default_meaning)),
        );

        self.write_entries(theme, &entries_key, &entries);
        Ok(entries)
    }

    fn cached_value(&self, theme: Theme, key: &str) -> Option<Value> {
        if self.provider.cacheable(theme) {
            self.cache.read(key)
        } else {
            None
        }
    }

    fn write_value(&self, theme: Theme, key: &str, value: Value) {
        if self.provider.cacheable(theme) {
            self.cache.write(key, value);
        }
    }

    fn cached_entries(&self, theme: Theme, key: &str) -> Option<Vec<CatalogEntry>> {
        let value = self.cached_value(theme, key)?;
        serde_json::from_value::<Vec<CatalogEntry>>(value)
            .ok()
            .filter(|entries| !entries.is_empty())
    }

    fn write_entries(&self, theme: Theme, key: &str, entries: &[CatalogEntry]) {
        if let Ok(value) = serde_json::to_value(entries) {
            self.write_value(theme, key, value);
        }
    }
}

/// Entry for a country/capital record; the word falls back to the display form
fn geo_entry(record: &RawRecord, default_meaning: &str) -> Option<CatalogEntry> {
    let source = record
        .word
        .as_deref()
        .filter(|w| !w.is_empty())
        .or(record.display.as_deref())
        .unwrap_or_default();
    let word = normalize_for_match(source);
    if !is_catalog_word(&word) {
        return None;
    }

    let display = record
        .display
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map_or_else(|| word.clone(), str::to_string);
    let meaning = record
        .meaning
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(default_meaning)
        .trim()
        .to_string();

    Some(CatalogEntry::new(word, display, meaning))
}

/// Sanitized words from a cached JSON array; anything else is empty
fn cached_strings(value: &Value) -> Vec<String> {
    sanitize_words(cached_raw_strings(value))
}

fn cached_raw_strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
