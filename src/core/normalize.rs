//! Text normalization for matching
//!
//! Catalog words and player input go through the same function so comparisons
//! are symmetric.

use unicode_normalization::UnicodeNormalization;

/// Normalize arbitrary text to lowercase ASCII letters only
///
/// Trims, lowercases, decomposes accented characters (NFD) and then drops every
/// character outside `a`-`z`, which removes the combining marks left behind by
/// the decomposition along with spaces, digits and punctuation.
///
/// # Examples
/// ```
/// use letter_trail::core::normalize_for_match;
///
/// assert_eq!(normalize_for_match("  KITE "), "kite");
/// assert_eq!(normalize_for_match("São Tomé"), "saotome");
/// assert_eq!(normalize_for_match("Port-au-Prince"), "portauprince");
/// ```
#[must_use]
pub fn normalize_for_match(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .nfd()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// True for a non-empty string made only of `a`-`z`
#[inline]
#[must_use]
pub fn is_alpha_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}
