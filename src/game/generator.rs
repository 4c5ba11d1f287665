//! Round generation
//!
//! Draws letters from a random catalog word and keeps the draw only when the
//! resulting subsequence has a playable number of solutions.

use super::error::GameError;
use super::round::Round;
use crate::catalog::WordCatalog;
use crate::core::{Difficulty, LetterCount, Theme};
use log::{debug, info, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::seq::index::sample;

/// Draws tried before settling for the best fallback
pub const MAX_ATTEMPTS: usize = 420;

/// Fewest solutions a committed round may have
pub const MIN_SOLUTIONS: usize = 1;

/// Most solutions a draw may have to be accepted immediately
///
/// Keeps rounds from being trivial and bounds the reveal workload.
#[must_use]
pub const fn max_solutions_target(theme: Theme, letter_count: LetterCount) -> usize {
    match (theme, letter_count.get()) {
        (Theme::Dictionary, 2) => 900,
        (Theme::Dictionary, 3) => 500,
        (Theme::Dictionary, _) => 350,
        _ => 300,
    }
}

/// Pick `count` letters of `word` in order
///
/// Standard difficulty samples distinct positions anywhere in the word; easy
/// takes a contiguous run. Words no longer than `count` are used whole.
///
/// # Examples
/// ```
/// use letter_trail::core::{Difficulty, contains_in_order};
/// use letter_trail::game::pick_letters;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let letters = pick_letters("planet", 3, Difficulty::Standard, &mut rng);
/// assert_eq!(letters.len(), 3);
/// assert!(contains_in_order("planet", &letters));
/// ```
pub fn pick_letters<R: Rng + ?Sized>(
    word: &str,
    count: usize,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<u8> {
    let bytes = word.as_bytes();
    if bytes.len() <= count {
        return bytes.to_vec();
    }

    match difficulty {
        Difficulty::Easy => {
            let start = rng.random_range(0..=bytes.len() - count);
            bytes[start..start + count].to_vec()
        }
        Difficulty::Standard => {
            let mut positions = sample(rng, bytes.len(), count).into_vec();
            positions.sort_unstable();
            positions.into_iter().map(|i| bytes[i]).collect()
        }
    }
}

/// Generates rounds against the active catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundGenerator {
    pub max_attempts: usize,
    pub min_solutions: usize,
}

impl Default for RoundGenerator {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            min_solutions: MIN_SOLUTIONS,
        }
    }
}

impl RoundGenerator {
    /// Generate a round for the given settings
    ///
    /// The first draw within [`max_solutions_target`] is committed. Failing
    /// that, the draw with the fewest solutions (still at least
    /// `min_solutions`) is used.
    ///
    /// # Errors
    /// - `GameError::NoEligibleWords` if no catalog word is long enough
    /// - `GameError::RoundGeneration` if no draw reached `min_solutions`
    pub fn generate<R: Rng + ?Sized>(
        &self,
        catalog: &WordCatalog,
        theme: Theme,
        letter_count: LetterCount,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Round, GameError> {
        let count = letter_count.get();
        let eligible = catalog.eligible_words(count);
        if eligible.is_empty() {
            return Err(GameError::NoEligibleWords { letter_count });
        }

        let ceiling = max_solutions_target(theme, letter_count);
        let mut best: Option<(Vec<u8>, Vec<String>)> = None;

        for attempt in 1..=self.max_attempts {
            let Some(&seed) = eligible.choose(rng) else {
                break;
            };
            let letters = pick_letters(seed, count, difficulty, rng);
            let solutions = catalog.solutions_for(&letters);

            if solutions.len() < self.min_solutions {
                continue;
            }
            if solutions.len() <= ceiling {
                debug!(
                    "Round from {seed} after {attempt} draw(s): {} solution(s)",
                    solutions.len()
                );
                return Ok(Round::new(letters, solutions));
            }
            if best
                .as_ref()
                .is_none_or(|(_, fewest)| solutions.len() < fewest.len())
            {
                best = Some((letters, solutions));
            }
        }

        if let Some((letters, solutions)) = best {
            info!(
                "No draw within {ceiling} solutions; using best with {}",
                solutions.len()
            );
            return Ok(Round::new(letters, solutions));
        }

        warn!(
            "No playable draw in {} attempts for {theme} with {count} letters",
            self.max_attempts
        );
        Err(GameError::RoundGeneration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::core::contains_in_order;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog(words: &[&str]) -> WordCatalog {
        let entries: Vec<CatalogEntry> = words.iter().map(|w| CatalogEntry::plain(*w)).collect();
        WordCatalog::from_entries(&entries)
    }

    fn four() -> LetterCount {
        LetterCount::new(4).unwrap()
    }

    #[test]
    fn kite_letters_exclude_bike_and_mike() {
        let catalog = catalog(&["kite", "bike", "mike"]);
        assert_eq!(catalog.solutions_for(b"kite"), ["kite"]);
    }

    #[test]
    fn every_generated_round_is_solvable() {
        let catalog = catalog(&["kite", "bike", "mike", "kitten", "biker", "smoke"]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let round = RoundGenerator::default()
                .generate(&catalog, Theme::Dictionary, four(), Difficulty::Standard, &mut rng)
                .unwrap();
            assert_eq!(round.target_letters().len(), 4);
            assert!(round.solution_count() >= 1);
            assert!(
                round
                    .solutions()
                    .iter()
                    .all(|word| contains_in_order(word, round.target_letters()))
            );
        }
    }

    #[test]
    fn whole_word_used_when_exactly_long_enough() {
        let catalog = catalog(&["kite", "ab"]);
        let mut rng = StdRng::seed_from_u64(1);
        let round = RoundGenerator::default()
            .generate(&catalog, Theme::Countries, four(), Difficulty::Easy, &mut rng)
            .unwrap();
        assert_eq!(round.target_letters(), b"kite");
        assert_eq!(round.solutions(), ["kite"]);
    }

    #[test]
    fn short_catalog_has_no_eligible_words() {
        let catalog = catalog(&["ab", "cat"]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = RoundGenerator::default()
            .generate(&catalog, Theme::Capitals, four(), Difficulty::Standard, &mut rng)
            .unwrap_err();
        assert!(matches!(err, GameError::NoEligibleWords { .. }));
    }

    #[test]
    fn unreachable_minimum_fails_generation() {
        let catalog = catalog(&["kite", "bike"]);
        let generator = RoundGenerator {
            max_attempts: 20,
            min_solutions: 5,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let err = generator
            .generate(&catalog, Theme::Dictionary, four(), Difficulty::Standard, &mut rng)
            .unwrap_err();
        assert!(matches!(err, GameError::RoundGeneration));
    }

    /// `count` distinct words: `prefix` followed by nine letters over `pair`
    fn two_letter_words(prefix: &str, pair: [char; 2], count: usize) -> Vec<String> {
        (0..count)
            .map(|n| {
                let tail: String = (0..9).map(|bit| pair[(n >> bit) & 1]).collect();
                format!("{prefix}{tail}")
            })
            .collect()
    }

    #[test]
    fn crowded_catalog_falls_back_to_fewest_solutions() {
        // Every two-letter draw matches its whole family, so no draw fits the ceiling
        let mut words = two_letter_words("abab", ['a', 'b'], 400);
        words.extend(two_letter_words("cdcd", ['c', 'd'], 350));
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let catalog = catalog(&refs);
        let two = LetterCount::new(2).unwrap();
        assert!(catalog.solutions_for(b"ba").len() > max_solutions_target(Theme::Countries, two));

        let mut rng = StdRng::seed_from_u64(11);
        let round = RoundGenerator::default()
            .generate(&catalog, Theme::Countries, two, Difficulty::Standard, &mut rng)
            .unwrap();

        assert_eq!(round.solution_count(), 350);
        assert!(round.target_letters().iter().all(|l| matches!(l, b'c' | b'd')));
        assert!(
            round
                .solutions()
                .iter()
                .all(|word| contains_in_order(word, round.target_letters()))
        );
    }

    #[test]
    fn easy_letters_are_contiguous() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let letters = pick_letters("planets", 3, Difficulty::Easy, &mut rng);
            let run = String::from_utf8(letters).unwrap();
            assert!("planets".contains(&run), "{run} is not a run of planets");
        }
    }

    #[test]
    fn standard_letters_keep_word_order() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let letters = pick_letters("abcdefgh", 4, Difficulty::Standard, &mut rng);
            assert!(letters.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn ceilings_depend_on_theme_and_count() {
        let count = |n| LetterCount::new(n).unwrap();
        assert_eq!(max_solutions_target(Theme::Dictionary, count(2)), 900);
        assert_eq!(max_solutions_target(Theme::Dictionary, count(3)), 500);
        assert_eq!(max_solutions_target(Theme::Dictionary, count(6)), 350);
        assert_eq!(max_solutions_target(Theme::Pokemon, count(2)), 300);
    }
}
