//! Game settings value types
//!
//! Themes, letter counts and difficulty levels, each validated on construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for invalid game settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("Letter count must be between 2 and 6, got {0}")]
    InvalidLetterCount(usize),
    #[error("Unknown difficulty '{0}' (expected 'easy' or 'standard')")]
    UnknownDifficulty(String),
}

/// The word theme a round is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dictionary,
    Pokemon,
    #[default]
    Countries,
    Capitals,
}

impl Theme {
    /// Every theme, in menu order
    pub const ALL: [Self; 4] = [
        Self::Dictionary,
        Self::Pokemon,
        Self::Countries,
        Self::Capitals,
    ];

    /// Stable identifier used in preferences and cache keys
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Dictionary => "dictionary",
            Self::Pokemon => "pokemon",
            Self::Countries => "countries",
            Self::Capitals => "capitals",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dictionary => "English Dictionary",
            Self::Pokemon => "Pokemon Names",
            Self::Countries => "Country Names",
            Self::Capitals => "Capital Cities",
        }
    }

    /// Noun phrase used in the rule text ("Enter an English word ...")
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Dictionary => "an English word",
            Self::Pokemon => "a Pokemon name",
            Self::Countries => "a country name",
            Self::Capitals => "a capital city name",
        }
    }

    /// Look up a theme by its identifier
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.id() == id)
    }

    #[inline]
    #[must_use]
    pub const fn is_dictionary(self) -> bool {
        matches!(self, Self::Dictionary)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(&s.trim().to_lowercase())
            .ok_or_else(|| SettingsError::UnknownTheme(s.to_string()))
    }
}

/// Number of target letters in a round (2-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct LetterCount(usize);

impl LetterCount {
    pub const MIN: usize = 2;
    pub const MAX: usize = 6;

    /// Create a validated letter count
    ///
    /// # Errors
    /// Returns `SettingsError::InvalidLetterCount` outside 2..=6.
    ///
    /// # Examples
    /// ```
    /// use letter_trail::core::LetterCount;
    ///
    /// assert_eq!(LetterCount::new(4).unwrap().get(), 4);
    /// assert!(LetterCount::new(7).is_err());
    /// ```
    pub const fn new(count: usize) -> Result<Self, SettingsError> {
        if count < Self::MIN || count > Self::MAX {
            return Err(SettingsError::InvalidLetterCount(count));
        }
        Ok(Self(count))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for LetterCount {
    fn default() -> Self {
        Self(4)
    }
}

impl TryFrom<usize> for LetterCount {
    type Error = SettingsError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LetterCount> for usize {
    fn from(count: LetterCount) -> Self {
        count.0
    }
}

impl fmt::Display for LetterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How target letters are drawn from the seed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// A contiguous run of letters
    Easy,
    /// Letters at scattered positions, kept in order
    #[default]
    Standard,
}

impl Difficulty {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Difficulty {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "standard" => Ok(Self::Standard),
            _ => Err(SettingsError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Instruction shown above the tiles
#[must_use]
pub fn rule_text(theme: Theme, letter_count: LetterCount, difficulty: Difficulty) -> String {
    let easy_suffix = match difficulty {
        Difficulty::Easy => " Easy mode uses consecutive letters.",
        Difficulty::Standard => "",
    };
    format!(
        "Enter {} that contains all {letter_count} letters in this exact order.{easy_suffix}",
        theme.prompt()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_ids_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_id(theme.id()), Some(theme));
        }
        assert_eq!(Theme::from_id("planets"), None);
    }

    #[test]
    fn theme_parse_is_case_insensitive() {
        assert_eq!("Capitals".parse::<Theme>(), Ok(Theme::Capitals));
        assert!(matches!(
            "moons".parse::<Theme>(),
            Err(SettingsError::UnknownTheme(_))
        ));
    }

    #[test]
    fn default_settings() {
        assert_eq!(Theme::default(), Theme::Countries);
        assert_eq!(LetterCount::default().get(), 4);
        assert_eq!(Difficulty::default(), Difficulty::Standard);
    }

    #[test]
    fn letter_count_bounds() {
        assert!(LetterCount::new(1).is_err());
        assert!(LetterCount::new(2).is_ok());
        assert!(LetterCount::new(6).is_ok());
        assert_eq!(
            LetterCount::new(0),
            Err(SettingsError::InvalidLetterCount(0))
        );
    }

    #[test]
    fn letter_count_serde_validates() {
        let ok: LetterCount = serde_json::from_str("3").unwrap();
        assert_eq!(ok.get(), 3);
        assert!(serde_json::from_str::<LetterCount>("9").is_err());
    }

    #[test]
    fn difficulty_parse() {
        assert_eq!("EASY".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("standard".parse::<Difficulty>(), Ok(Difficulty::Standard));
        assert!("hard".parse::<Difficulty>().is_err());
    }

    #[test]
    fn rule_text_mentions_easy_mode() {
        let count = LetterCount::new(3).unwrap();
        let standard = rule_text(Theme::Dictionary, count, Difficulty::Standard);
        assert_eq!(
            standard,
            "Enter an English word that contains all 3 letters in this exact order."
        );

        let easy = rule_text(Theme::Pokemon, count, Difficulty::Easy);
        assert!(easy.starts_with("Enter a Pokemon name"));
        assert!(easy.ends_with("Easy mode uses consecutive letters."));
    }
}
