//! Ordered-subsequence matching
//!
//! A word solves a round when the target letters appear in it in order, not
//! necessarily adjacent. Matching is a greedy leftmost scan: taking each letter
//! at its earliest possible position never removes options for later letters.

/// Check whether `letters` occurs in `word` as a subsequence
///
/// # Examples
/// ```
/// use letter_trail::core::contains_in_order;
///
/// assert!(contains_in_order("kite", b"kte"));
/// assert!(!contains_in_order("kite", b"etk"));
/// assert!(contains_in_order("anything", b""));
/// ```
#[must_use]
pub fn contains_in_order(word: &str, letters: &[u8]) -> bool {
    matched_letter_count(word, letters) == letters.len()
}

/// Count the target letters matched before the first miss
///
/// Drives the live partial-match feedback on the tiles. Returns 0 for an empty
/// word or an empty letter sequence.
///
/// # Examples
/// ```
/// use letter_trail::core::matched_letter_count;
///
/// assert_eq!(matched_letter_count("kit", b"kite"), 3);
/// assert_eq!(matched_letter_count("bike", b"kite"), 0);
/// ```
#[must_use]
pub fn matched_letter_count(word: &str, letters: &[u8]) -> usize {
    let bytes = word.as_bytes();
    let mut from = 0;
    let mut count = 0;

    for &letter in letters {
        match bytes[from..].iter().position(|&b| b == letter) {
            Some(offset) => {
                count += 1;
                from += offset + 1;
            }
            None => break,
        }
    }

    count
}

/// Positions in `word` where the greedy scan matched each target letter
///
/// Has [`matched_letter_count`] elements; used to highlight the matched
/// letters of a partial guess.
#[must_use]
pub fn matched_positions(word: &str, letters: &[u8]) -> Vec<usize> {
    let bytes = word.as_bytes();
    let mut positions = Vec::with_capacity(letters.len());
    let mut from = 0;

    for &letter in letters {
        let Some(offset) = bytes[from..].iter().position(|&b| b == letter) else {
            break;
        };
        positions.push(from + offset);
        from += offset + 1;
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference check: try every way of picking positions
    fn brute_force_subsequence(word: &[u8], letters: &[u8]) -> bool {
        match letters.split_first() {
            None => true,
            Some((first, rest)) => word
                .iter()
                .enumerate()
                .any(|(i, b)| b == first && brute_force_subsequence(&word[i + 1..], rest)),
        }
    }

    #[test]
    fn exact_word_matches_itself() {
        assert!(contains_in_order("kite", b"kite"));
    }

    #[test]
    fn scattered_letters_match() {
        assert!(contains_in_order("dictionary", b"dtry"));
        assert!(contains_in_order("banana", b"bnn"));
    }

    #[test]
    fn order_matters() {
        assert!(!contains_in_order("kite", b"eik"));
        assert!(!contains_in_order("bike", b"kite"));
        assert!(!contains_in_order("mike", b"kite"));
    }

    #[test]
    fn repeated_letters_need_distinct_positions() {
        assert!(contains_in_order("banana", b"aaa"));
        assert!(!contains_in_order("banana", b"aaaa"));
        assert!(!contains_in_order("kite", b"kk"));
    }

    #[test]
    fn greedy_matches_brute_force() {
        let words = ["kite", "banana", "mississippi", "abc", "", "zebra"];
        let patterns: [&[u8]; 8] = [b"", b"a", b"ss", b"sip", b"ipi", b"zba", b"ana", b"cab"];
        for word in words {
            for letters in patterns {
                assert_eq!(
                    contains_in_order(word, letters),
                    brute_force_subsequence(word.as_bytes(), letters),
                    "word={word} letters={:?}",
                    std::str::from_utf8(letters)
                );
            }
        }
    }

    #[test]
    fn prefixes_of_a_match_also_match() {
        let word = "mississippi";
        let letters = b"msspi";
        assert!(contains_in_order(word, letters));
        for k in 0..=letters.len() {
            assert!(contains_in_order(word, &letters[..k]));
        }
    }

    #[test]
    fn positions_agree_with_count() {
        assert_eq!(matched_positions("kitten", b"kte"), vec![0, 2, 4]);
        assert_eq!(matched_positions("kettle", b"kite"), vec![0]);
        for (word, letters) in [("banana", &b"ana"[..]), ("kite", &b"kix"[..]), ("", &b"ab"[..])] {
            assert_eq!(
                matched_positions(word, letters).len(),
                matched_letter_count(word, letters)
            );
        }
    }

    #[test]
    fn matched_count_stops_at_first_miss() {
        assert_eq!(matched_letter_count("kite", b"kite"), 4);
        assert_eq!(matched_letter_count("kit", b"kite"), 3);
        assert_eq!(matched_letter_count("kxe", b"kite"), 1);
        assert_eq!(matched_letter_count("", b"kite"), 0);
        assert_eq!(matched_letter_count("kite", b""), 0);
    }

    #[test]
    fn matched_count_prefix_property() {
        let cases = [("mississippi", &b"spix"[..]), ("kitten", b"knit"), ("zebra", b"zbr")];
        for (word, letters) in cases {
            let k = matched_letter_count(word, letters);
            assert!(contains_in_order(word, &letters[..k]));
            if k < letters.len() {
                assert!(!contains_in_order(word, &letters[..=k]));
            }
        }
    }
}
