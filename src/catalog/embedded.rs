//! Embedded theme data
//!
//! Data compiled into the binary so the offline themes work without a network.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

/// Country records: `[{"word", "display", "meaning"}, ...]`
pub const COUNTRIES_JSON: &str = include_str!("../../data/countries.json");

/// Capital city records, same shape as [`COUNTRIES_JSON`]
pub const CAPITALS_JSON: &str = include_str!("../../data/capitals.json");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_lowercase_letters() {
        for &word in DICTIONARY {
            assert!(word.len() >= 2, "Word '{word}' is too short");
            assert!(
                word.bytes().all(|b| b.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn geo_data_is_valid_json() {
        for raw in [COUNTRIES_JSON, CAPITALS_JSON] {
            let parsed: serde_json::Value = serde_json::from_str(raw).unwrap();
            assert!(parsed.as_array().is_some_and(|records| !records.is_empty()));
        }
    }
}
