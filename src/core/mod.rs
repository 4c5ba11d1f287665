//! Core domain types and pure word functions
//!
//! Everything here is deterministic and free of I/O: normalization, ordered
//! matching, edit-distance similarity, scoring and the game setting types.

mod matching;
mod normalize;
mod scoring;
mod similarity;
mod theme;

pub use matching::{contains_in_order, matched_letter_count, matched_positions};
pub use normalize::{is_alpha_word, normalize_for_match};
pub use scoring::{calculate_word_score, letter_points};
pub use similarity::{closest_solution_percent, fuzzy_similarity_percent, levenshtein_distance};
pub use theme::{Difficulty, LetterCount, SettingsError, Theme, rule_text};
