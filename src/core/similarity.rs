//! Edit-distance closeness scores
//!
//! Used to tell the player how near a rejected guess came to a real solution.

/// Levenshtein distance with unit costs
///
/// Two-row dynamic programming: O(|a|·|b|) time, O(|b|) space.
///
/// # Examples
/// ```
/// use letter_trail::core::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous_row: Vec<usize> = (0..=b.len()).collect();
    let mut current_row = vec![0; b.len() + 1];

    for (i, &a_byte) in a.iter().enumerate() {
        current_row[0] = i + 1;
        for (j, &b_byte) in b.iter().enumerate() {
            let cost = usize::from(a_byte != b_byte);
            current_row[j + 1] = (previous_row[j + 1] + 1)
                .min(current_row[j] + 1)
                .min(previous_row[j] + cost);
        }
        std::mem::swap(&mut previous_row, &mut current_row);
    }

    previous_row[b.len()]
}

/// Similarity as a rounded percentage of the longer string's length
///
/// Returns 100 for two empty strings and never goes below 0.
///
/// # Examples
/// ```
/// use letter_trail::core::fuzzy_similarity_percent;
///
/// assert_eq!(fuzzy_similarity_percent("kite", "kite"), 100);
/// assert_eq!(fuzzy_similarity_percent("kite", "bite"), 75);
/// assert_eq!(fuzzy_similarity_percent("", ""), 100);
/// ```
#[must_use]
pub fn fuzzy_similarity_percent(a: &str, b: &str) -> u8 {
    let max_length = a.len().max(b.len());
    if max_length == 0 {
        return 100;
    }

    let distance = levenshtein_distance(a, b);
    let similarity = (max_length.saturating_sub(distance) as f64 / max_length as f64) * 100.0;
    similarity.round().clamp(0.0, 100.0) as u8
}

/// Best similarity of `word` against any of `solutions`
///
/// Stops scanning as soon as a perfect match is seen. Returns 0 for an empty
/// word or an empty solution list.
#[must_use]
pub fn closest_solution_percent<S: AsRef<str>>(word: &str, solutions: &[S]) -> u8 {
    if word.is_empty() {
        return 0;
    }

    let mut best = 0;
    for solution in solutions {
        best = best.max(fuzzy_similarity_percent(word, solution.as_ref()));
        if best == 100 {
            break;
        }
    }
    best
}
