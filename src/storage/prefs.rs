//! Persisted session preferences
//!
//! Read once at startup, written on every new game. Each stored field is
//! validated on its own so one bad value does not discard the others.

use crate::core::{Difficulty, LetterCount, Theme};
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Theme, letter count and difficulty chosen by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(rename = "themeId")]
    pub theme: Theme,
    pub letter_count: LetterCount,
    pub difficulty: Difficulty,
}

impl Preferences {
    /// Build preferences from stored JSON, falling back per field to defaults
    ///
    /// # Examples
    /// ```
    /// use letter_trail::core::{Difficulty, Theme};
    /// use letter_trail::storage::Preferences;
    /// use serde_json::json;
    ///
    /// let prefs = Preferences::from_stored(&json!({
    ///     "themeId": "capitals",
    ///     "letterCount": 9,
    ///     "difficulty": "easy",
    /// }));
    /// assert_eq!(prefs.theme, Theme::Capitals);
    /// assert_eq!(prefs.letter_count.get(), 4); // out of range, default used
    /// assert_eq!(prefs.difficulty, Difficulty::Easy);
    /// ```
    #[must_use]
    pub fn from_stored(value: &Value) -> Self {
        let defaults = Self::default();

        let theme = value
            .get("themeId")
            .and_then(Value::as_str)
            .and_then(Theme::from_id)
            .unwrap_or(defaults.theme);

        let letter_count = value
            .get("letterCount")
            .and_then(stored_integer)
            .and_then(|count| LetterCount::new(count).ok())
            .unwrap_or(defaults.letter_count);

        let difficulty = match value.get("difficulty").and_then(Value::as_str) {
            Some("easy") => Difficulty::Easy,
            Some("standard") => Difficulty::Standard,
            _ => defaults.difficulty,
        };

        Self {
            theme,
            letter_count,
            difficulty,
        }
    }
}

/// Accept integers and integer-valued strings ("4"), like a numeric form field
fn stored_integer(value: &Value) -> Option<usize> {
    match value {
        Value::Number(number) => {
            if let Some(n) = number.as_u64() {
                return usize::try_from(n).ok();
            }
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as usize)
        }
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Where preferences live between sessions
pub trait PreferencesStore: Send {
    /// Stored preferences, or defaults when nothing usable is stored
    fn load(&self) -> Preferences;

    /// Persist preferences; failures are logged and ignored
    fn save(&self, preferences: &Preferences);
}

/// Preferences stored as a small JSON file
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferencesStore for FilePreferences {
    fn load(&self) -> Preferences {
        let Ok(content) = fs::read_to_string(&self.path) else {
            debug!("No preferences at {}, using defaults", self.path.display());
            return Preferences::default();
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(value) if value.is_object() => Preferences::from_stored(&value),
            Ok(_) | Err(_) => {
                warn!("Ignoring malformed preferences at {}", self.path.display());
                Preferences::default()
            }
        }
    }

    fn save(&self, preferences: &Preferences) {
        let result = serde_json::to_string_pretty(preferences)
            .map_err(std::io::Error::from)
            .and_then(|json| {
                if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&self.path, json)
            });

        if let Err(e) = result {
            warn!("Preferences not saved to {}: {e}", self.path.display());
        }
    }
}

/// Preferences kept only in memory
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    stored: Mutex<Option<Preferences>>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new(initial: Option<Preferences>) -> Self {
        Self {
            stored: Mutex::new(initial),
        }
    }

    /// The last saved value, if any
    #[must_use]
    pub fn saved(&self) -> Option<Preferences> {
        *self.stored.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferencesStore for MemoryPreferences {
    fn load(&self) -> Preferences {
        self.saved().unwrap_or_default()
    }

    fn save(&self, preferences: &Preferences) {
        *self.stored.lock().unwrap_or_else(PoisonError::into_inner) = Some(*preferences);
    }
}
