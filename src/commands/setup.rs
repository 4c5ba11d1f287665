//! Building a session from command-line options

use crate::catalog::{
    CatalogProvider, EmbeddedProvider, HttpProvider, RawCatalog, StaticProvider, ThemeLoader,
    WordCatalog,
};
use crate::core::{Difficulty, LetterCount, Theme};
use crate::game::GameSession;
use crate::lookup::{DefinitionLookup, DictionaryApiClient, OfflineLookup};
use crate::storage::{CacheStore, FilePreferences, Preferences, PreferencesStore, TtlCache};
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

const CACHE_FILE: &str = "cache.json";
const PREFS_FILE: &str = "prefs.json";

/// Where state lives and how the session talks to the outside world
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Directory holding the cache and preference files
    pub state_dir: PathBuf,
    /// Never touch the network
    pub offline: bool,
    /// Seed for reproducible rounds
    pub seed: Option<u64>,
    /// Custom dictionary word list
    pub wordlist: Option<PathBuf>,
    /// Base URL serving theme data files
    pub data_url: Option<String>,
}

/// Settings overrides given on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub theme: Option<Theme>,
    pub letter_count: Option<LetterCount>,
    pub difficulty: Option<Difficulty>,
}

impl SettingsOverrides {
    /// `base` with every given override applied
    #[must_use]
    pub fn apply(self, base: Preferences) -> Preferences {
        Preferences {
            theme: self.theme.unwrap_or(base.theme),
            letter_count: self.letter_count.unwrap_or(base.letter_count),
            difficulty: self.difficulty.unwrap_or(base.difficulty),
        }
    }
}

fn open_cache(options: &SessionOptions) -> Arc<dyn CacheStore> {
    if let Err(e) = fs::create_dir_all(&options.state_dir) {
        debug!("State directory {} unavailable: {e}", options.state_dir.display());
    }
    Arc::new(TtlCache::open(options.state_dir.join(CACHE_FILE)))
}

fn build_provider(options: &SessionOptions) -> Result<Box<dyn CatalogProvider>> {
    let provider: Box<dyn CatalogProvider> = if options.offline {
        Box::new(EmbeddedProvider)
    } else {
        Box::new(HttpProvider::new(options.data_url.clone())?)
    };

    let Some(path) = &options.wordlist else {
        return Ok(provider);
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    Ok(Box::new(
        StaticProvider::new()
            .with(Theme::Dictionary, RawCatalog::WordList(text))
            .with_fallback(provider),
    ))
}

/// Create an idle session with file-backed cache and preferences
///
/// # Errors
/// Returns an error if the custom word list cannot be read or an HTTP client
/// cannot be built.
pub fn build_session(options: &SessionOptions) -> Result<GameSession> {
    let cache = open_cache(options);
    let provider = build_provider(options)?;
    let preferences: Box<dyn PreferencesStore> =
        Box::new(FilePreferences::new(options.state_dir.join(PREFS_FILE)));

    let lookup: Arc<dyn DefinitionLookup> = if options.offline {
        Arc::new(OfflineLookup)
    } else {
        Arc::new(DictionaryApiClient::new()?)
    };

    let session = GameSession::new(provider, lookup, cache, preferences);
    Ok(match options.seed {
        Some(seed) => session.with_seed(seed),
        None => session,
    })
}

/// Stored preferences with command-line overrides applied
#[must_use]
pub fn resolve_settings(options: &SessionOptions, overrides: SettingsOverrides) -> Preferences {
    overrides.apply(FilePreferences::new(options.state_dir.join(PREFS_FILE)).load())
}

/// Load the catalog of one theme without starting a game
///
/// # Errors
/// Returns an error if the theme data cannot be loaded.
pub fn load_catalog(options: &SessionOptions, theme: Theme) -> Result<WordCatalog> {
    let mut loader = ThemeLoader::new(build_provider(options)?, open_cache(options));
    let entries = loader
        .load(theme)
        .with_context(|| format!("Error loading {}", theme.label()))?;
    Ok(WordCatalog::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionState;

    fn offline(dir: &tempfile::TempDir) -> SessionOptions {
        SessionOptions {
            state_dir: dir.path().join("state"),
            offline: true,
            seed: Some(11),
            ..SessionOptions::default()
        }
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let base = Preferences::default();
        let settings = SettingsOverrides {
            theme: Some(Theme::Capitals),
            ..SettingsOverrides::default()
        }
        .apply(base);
        assert_eq!(settings.theme, Theme::Capitals);
        assert_eq!(settings.letter_count, base.letter_count);
    }

    #[test]
    fn offline_session_plays_embedded_countries() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = build_session(&offline(&dir)).unwrap();
        session.start_new_game(Preferences::default()).unwrap();

        assert_eq!(session.state(), SessionState::RoundActive);
        assert!(dir.path().join("state").join(PREFS_FILE).exists());
    }

    #[test]
    fn custom_word_list_replaces_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("words.txt");
        fs::write(&list, "Kite\nzebra\n").unwrap();

        let mut options = offline(&dir);
        options.wordlist = Some(list);
        let mut session = build_session(&options).unwrap();
        session
            .start_new_game(Preferences {
                theme: Theme::Dictionary,
                ..Preferences::default()
            })
            .unwrap();
        assert_eq!(session.catalog().words(), ["kite", "zebra"]);
    }

    #[test]
    fn catalog_loads_without_a_game() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog(&offline(&dir), Theme::Capitals).unwrap();
        assert!(catalog.contains("paris"));
        assert!(!dir.path().join("state").join(PREFS_FILE).exists());
    }

    #[test]
    fn stored_settings_are_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let options = offline(&dir);
        fs::create_dir_all(&options.state_dir).unwrap();
        fs::write(
            options.state_dir.join(PREFS_FILE),
            r#"{"themeId": "pokemon", "letterCount": 3, "difficulty": "easy"}"#,
        )
        .unwrap();

        let settings = resolve_settings(
            &options,
            SettingsOverrides {
                difficulty: Some(Difficulty::Standard),
                ..SettingsOverrides::default()
            },
        );
        assert_eq!(settings.theme, Theme::Pokemon);
        assert_eq!(settings.letter_count.get(), 3);
        assert_eq!(settings.difficulty, Difficulty::Standard);
    }

    #[test]
    fn missing_word_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = offline(&dir);
        options.wordlist = Some(dir.path().join("absent.txt"));
        assert!(build_session(&options).is_err());
    }
}
