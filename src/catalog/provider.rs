//! Theme data providers
//!
//! A provider hands back raw theme data; turning it into catalog entries and
//! caching it is the loader's job.

use super::embedded::{CAPITALS_JSON, COUNTRIES_JSON, DICTIONARY};
use crate::core::Theme;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const POKEMON_ENDPOINT: &str = "https://pokeapi.co/api/v2/pokemon?limit=2000";

/// Upper bound on followed `next` links
const MAX_PAGES: usize = 50;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unexpected data format for {0}")]
    Format(Theme),
    #[error("No data source available for {0}")]
    Unavailable(Theme),
}

/// A structured theme record as stored in the data files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

/// Raw data for one theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCatalog {
    /// Newline-separated words
    WordList(String),
    /// Word/display/meaning records
    Records(Vec<RawRecord>),
    /// Dashed names as returned by a listing API
    Names(Vec<String>),
}

/// Source of raw theme data
pub trait CatalogProvider: Send + Sync {
    /// Fetch the raw data for `theme`
    ///
    /// # Errors
    /// Returns `ProviderError` on network, status or format failures.
    fn fetch(&self, theme: Theme) -> Result<RawCatalog, ProviderError>;

    /// Whether data for `theme` may be served from and stored in the cache
    fn cacheable(&self, _theme: Theme) -> bool {
        true
    }
}

/// Data compiled into the binary; creature names need the network
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedProvider;

impl CatalogProvider for EmbeddedProvider {
    fn fetch(&self, theme: Theme) -> Result<RawCatalog, ProviderError> {
        match theme {
            Theme::Dictionary => Ok(RawCatalog::WordList(DICTIONARY.join("\n"))),
            Theme::Countries => Ok(RawCatalog::Records(serde_json::from_str(COUNTRIES_JSON)?)),
            Theme::Capitals => Ok(RawCatalog::Records(serde_json::from_str(CAPITALS_JSON)?)),
            Theme::Pokemon => Err(ProviderError::Unavailable(theme)),
        }
    }
}

/// Fixed per-theme data, deferring other themes to an optional fallback
///
/// Backs custom word lists and deterministic tests.
#[derive(Default)]
pub struct StaticProvider {
    data: FxHashMap<Theme, RawCatalog>,
    fallback: Option<Box<dyn CatalogProvider>>,
}

impl StaticProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `raw` for `theme`
    #[must_use]
    pub fn with(mut self, theme: Theme, raw: RawCatalog) -> Self {
        self.data.insert(theme, raw);
        self
    }

    /// Shorthand for a word-list theme
    #[must_use]
    pub fn with_words(self, theme: Theme, words: &[&str]) -> Self {
        self.with(theme, RawCatalog::WordList(words.join("\n")))
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Box<dyn CatalogProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

impl CatalogProvider for StaticProvider {
    fn fetch(&self, theme: Theme) -> Result<RawCatalog, ProviderError> {
        match (self.data.get(&theme), &self.fallback) {
            (Some(raw), _) => Ok(raw.clone()),
            (None, Some(fallback)) => fallback.fetch(theme),
            (None, None) => Err(ProviderError::Unavailable(theme)),
        }
    }

    /// Fixed data always wins over the cache
    fn cacheable(&self, theme: Theme) -> bool {
        !self.data.contains_key(&theme)
            && self.fallback.as_ref().is_none_or(|f| f.cacheable(theme))
    }
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct NamePage {
    #[serde(default)]
    results: Vec<NamedResource>,
    next: Option<String>,
}

/// Network-backed provider
///
/// Creature names come from the PokeAPI listing. The other themes are fetched
/// from `data_base_url` when set, else served from the embedded data.
pub struct HttpProvider {
    client: reqwest::blocking::Client,
    pokemon_url: String,
    data_base_url: Option<String>,
}

impl HttpProvider {
    /// # Errors
    /// Returns `ProviderError::Http` if the HTTP client cannot be built.
    pub fn new(data_base_url: Option<String>) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self {
            client,
            pokemon_url: POKEMON_ENDPOINT.to_string(),
            data_base_url: data_base_url.map(|url| url.trim_end_matches('/').to_string()),
        })
    }

    fn get_text(&self, url: &str) -> Result<String, ProviderError> {
        debug!("GET {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }
        Ok(resp.text()?)
    }

    fn fetch_names(&self) -> Result<Vec<String>, ProviderError> {
        let mut names = Vec::new();
        let mut next = Some(self.pokemon_url.clone());
        let mut pages = 0;

        while let Some(url) = next.take() {
            let page: NamePage = serde_json::from_str(&self.get_text(&url)?)?;
            names.extend(page.results.into_iter().map(|item| item.name));
            pages += 1;
            if pages < MAX_PAGES {
                next = page.next;
            }
        }

        info!("Fetched {} names in {pages} page(s)", names.len());
        Ok(names)
    }
}

impl CatalogProvider for HttpProvider {
    fn fetch(&self, theme: Theme) -> Result<RawCatalog, ProviderError> {
        if theme == Theme::Pokemon {
            return self.fetch_names().map(RawCatalog::Names);
        }

        let Some(base) = &self.data_base_url else {
            return EmbeddedProvider.fetch(theme);
        };

        match theme {
            Theme::Dictionary => self
                .get_text(&format!("{base}/english_words.txt"))
                .map(RawCatalog::WordList),
            Theme::Countries | Theme::Capitals => {
                let body = self.get_text(&format!("{base}/{}.json", theme.id()))?;
                Ok(RawCatalog::Records(serde_json::from_str(&body)?))
            }
            Theme::Pokemon => Err(ProviderError::Unavailable(theme)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dictionary_is_a_word_list() {
        let RawCatalog::WordList(text) = EmbeddedProvider.fetch(Theme::Dictionary).unwrap() else {
            panic!("expected a word list");
        };
        assert!(text.lines().any(|line| line == "kite"));
    }

    #[test]
    fn embedded_geo_records_parse() {
        for theme in [Theme::Countries, Theme::Capitals] {
            let RawCatalog::Records(records) = EmbeddedProvider.fetch(theme).unwrap() else {
                panic!("expected records for {theme}");
            };
            assert!(records.iter().all(|r| r.word.is_some() && r.display.is_some()));
        }
    }

    #[test]
    fn embedded_has_no_creature_names() {
        assert!(matches!(
            EmbeddedProvider.fetch(Theme::Pokemon),
            Err(ProviderError::Unavailable(Theme::Pokemon))
        ));
    }

    #[test]
    fn static_provider_serves_data_then_fallback() {
        let provider = StaticProvider::new()
            .with_words(Theme::Dictionary, &["kite", "bike"])
            .with_fallback(Box::new(EmbeddedProvider));

        assert_eq!(
            provider.fetch(Theme::Dictionary).unwrap(),
            RawCatalog::WordList("kite\nbike".into())
        );
        assert!(matches!(
            provider.fetch(Theme::Countries),
            Ok(RawCatalog::Records(_))
        ));
        assert!(StaticProvider::new().fetch(Theme::Capitals).is_err());
        assert!(!provider.cacheable(Theme::Dictionary));
        assert!(provider.cacheable(Theme::Countries));
    }

    #[test]
    fn name_page_parses_listing() {
        let body = r#"{"count": 2, "next": null,
            "results": [{"name": "bulbasaur", "url": "x"}, {"name": "mr-mime"}]}"#;
        let page: NamePage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "mr-mime");
        assert!(page.next.is_none());
    }

    #[test]
    fn raw_record_fields_are_optional() {
        let record: RawRecord = serde_json::from_str(r#"{"display": "Chad"}"#).unwrap();
        assert_eq!(record.word, None);
        assert_eq!(record.display.as_deref(), Some("Chad"));
    }
}
