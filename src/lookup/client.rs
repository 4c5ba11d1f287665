//! Word-definition lookups
//!
//! The three-way outcome matters: a word the service does not know is a
//! definitive rejection, while a network or format failure decides nothing.

use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

const DICTIONARY_API: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Result of looking a word up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The word exists; the first definition, when one was provided
    Defined(Option<String>),
    /// The service positively does not know the word
    NotFound,
    /// No answer could be obtained
    Indeterminate,
}

/// Source of word definitions
pub trait DefinitionLookup: Send + Sync {
    fn lookup(&self, word: &str) -> LookupOutcome;
}

/// Lookup that never reaches a verdict, for offline play
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineLookup;

impl DefinitionLookup for OfflineLookup {
    fn lookup(&self, _word: &str) -> LookupOutcome {
        LookupOutcome::Indeterminate
    }
}

#[derive(Debug, Deserialize)]
struct ApiEntry {
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiMeaning {
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    #[serde(default)]
    definition: String,
}

/// Client for the free dictionary API
pub struct DictionaryApiClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl DictionaryApiClient {
    /// # Errors
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_endpoint(DICTIONARY_API)
    }

    /// # Errors
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn with_endpoint(endpoint: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }
}

impl DefinitionLookup for DictionaryApiClient {
    fn lookup(&self, word: &str) -> LookupOutcome {
        // Normalized words are plain a-z, safe to place in the path as-is
        let url = format!("{}/{word}", self.endpoint);
        let resp = match self.client.get(&url).send() {
            Ok(resp) => resp,
            Err(e) => {
                debug!("Definition lookup for {word} failed: {e}");
                return LookupOutcome::Indeterminate;
            }
        };

        match resp.status() {
            StatusCode::NOT_FOUND => LookupOutcome::NotFound,
            status if status.is_success() => match resp.text() {
                Ok(body) => parse_entries(&body),
                Err(e) => {
                    debug!("Definition body for {word} unreadable: {e}");
                    LookupOutcome::Indeterminate
                }
            },
            status => {
                debug!("Definition lookup for {word} returned {status}");
                LookupOutcome::Indeterminate
            }
        }
    }
}

/// Interpret a successful API body
fn parse_entries(body: &str) -> LookupOutcome {
    let Ok(entries) = serde_json::from_str::<Vec<ApiEntry>>(body) else {
        return LookupOutcome::Indeterminate;
    };
    if entries.is_empty() {
        return LookupOutcome::NotFound;
    }

    let definition = entries
        .first()
        .and_then(|entry| entry.meanings.first())
        .and_then(|meaning| meaning.definitions.first())
        .map(|d| d.definition.trim().to_string())
        .filter(|d| !d.is_empty());
    LookupOutcome::Defined(definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_definition() {
        let body = r#"[{"word": "kite", "meanings": [
            {"partOfSpeech": "noun", "definitions": [
                {"definition": "A light frame covered with cloth, flown in the wind."},
                {"definition": "A bird of prey."}
            ]}
        ]}]"#;
        assert_eq!(
            parse_entries(body),
            LookupOutcome::Defined(Some(
                "A light frame covered with cloth, flown in the wind.".into()
            ))
        );
    }

    #[test]
    fn entry_without_definitions_is_still_valid() {
        assert_eq!(
            parse_entries(r#"[{"word": "kite"}]"#),
            LookupOutcome::Defined(None)
        );
    }

    #[test]
    fn empty_array_means_not_found() {
        assert_eq!(parse_entries("[]"), LookupOutcome::NotFound);
    }

    #[test]
    fn unexpected_body_is_indeterminate() {
        assert_eq!(
            parse_entries(r#"{"title": "No Definitions Found"}"#),
            LookupOutcome::Indeterminate
        );
        assert_eq!(parse_entries("<html>"), LookupOutcome::Indeterminate);
    }

    #[test]
    fn offline_lookup_never_decides() {
        assert_eq!(OfflineLookup.lookup("kite"), LookupOutcome::Indeterminate);
    }
}
