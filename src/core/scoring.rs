//! Word scoring
//!
//! Each letter is worth its classic tile value, plus one point per letter of
//! length.

/// Tile value of each letter, indexed from `a`
const LETTER_POINTS: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // a-m
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // n-z
];

/// Point value of a single letter (0 outside `a`-`z`)
#[inline]
#[must_use]
pub fn letter_points(letter: u8) -> u32 {
    if letter.is_ascii_lowercase() {
        LETTER_POINTS[usize::from(letter - b'a')]
    } else {
        0
    }
}

/// Score for an accepted word
///
/// # Examples
/// ```
/// use letter_trail::core::calculate_word_score;
///
/// // k5 + i1 + t1 + e1 + length 4
/// assert_eq!(calculate_word_score("kite"), 12);
/// ```
#[must_use]
pub fn calculate_word_score(word: &str) -> u32 {
    let letter_sum: u32 = word.bytes().map(letter_points).sum();
    letter_sum + word.len() as u32
}
