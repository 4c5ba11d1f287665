//! Check command
//!
//! Explains how a word is treated: normalization, in-order matching against a
//! set of letters, its score and whether the theme knows it.

use crate::catalog::WordCatalog;
use crate::core::{
    LetterCount, SettingsError, Theme, calculate_word_score, contains_in_order,
    matched_letter_count, normalize_for_match,
};

/// Everything known about one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub input: String,
    pub normalized: String,
    pub target: Option<Vec<u8>>,
    pub matched: usize,
    pub in_order: bool,
    pub points: u32,
    pub theme: Theme,
    pub in_catalog: bool,
    pub display: String,
    pub meaning: Option<String>,
}

/// Check `word` against optional target letters and a theme catalog
///
/// # Errors
///
/// Returns `SettingsError::InvalidLetterCount` if the target letters are not
/// between 2 and 6 letters after normalization.
pub fn check_word(
    word: &str,
    target: Option<&str>,
    theme: Theme,
    catalog: &WordCatalog,
) -> Result<CheckResult, SettingsError> {
    let normalized = normalize_for_match(word);
    let target = target
        .map(|letters| {
            let letters = normalize_for_match(letters).into_bytes();
            LetterCount::new(letters.len()).map(|_| letters)
        })
        .transpose()?;

    let (matched, in_order) = target.as_deref().map_or((0, false), |letters| {
        (
            matched_letter_count(&normalized, letters),
            contains_in_order(&normalized, letters),
        )
    });

    Ok(CheckResult {
        input: word.to_string(),
        points: calculate_word_score(&normalized),
        theme,
        in_catalog: catalog.contains(&normalized),
        display: catalog.display_word(&normalized).to_string(),
        meaning: catalog.meaning(&normalized).map(str::to_string),
        target,
        matched,
        in_order,
        normalized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;

    fn catalog() -> WordCatalog {
        WordCatalog::from_entries(&[CatalogEntry::new(
            "saotomeandprincipe",
            "São Tomé and Príncipe",
            "Country with capital São Tomé.",
        )])
    }

    #[test]
    fn accented_input_matches_catalog() {
        let result = check_word(
            "São Tomé and Príncipe",
            Some("STP"),
            Theme::Countries,
            &catalog(),
        )
        .unwrap();
        assert_eq!(result.normalized, "saotomeandprincipe");
        assert!(result.in_catalog);
        assert!(result.in_order);
        assert_eq!(result.matched, 3);
        assert_eq!(result.display, "São Tomé and Príncipe");
    }

    #[test]
    fn partial_match_is_counted() {
        let result = check_word("kettle", Some("kite"), Theme::Dictionary, &WordCatalog::new())
            .unwrap();
        assert_eq!(result.matched, 1);
        assert!(!result.in_order);
        assert!(!result.in_catalog);
        assert_eq!(result.meaning, None);
    }

    #[test]
    fn kite_scores_twelve() {
        let result = check_word("KITE ", None, Theme::Dictionary, &WordCatalog::new()).unwrap();
        assert_eq!(result.points, 12);
        assert_eq!(result.target, None);
    }

    #[test]
    fn target_length_is_validated() {
        assert_eq!(
            check_word("kite", Some("k"), Theme::Dictionary, &WordCatalog::new()),
            Err(SettingsError::InvalidLetterCount(1))
        );
    }
}
