use crate::core::{closest_solution_percent, contains_in_order};
use rustc_hash::FxHashSet;

/// Target letters of a round and every known word that solves them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    target_letters: Vec<u8>,
    solutions: Vec<String>,
    solution_set: FxHashSet<String>,
    revealed: bool,
}

impl Round {
    /// Words that do not contain `target_letters` in order are dropped
    #[must_use]
    pub fn new(target_letters: Vec<u8>, solutions: Vec<String>) -> Self {
        let mut solutions: Vec<String> = solutions
            .into_iter()
            .filter(|word| contains_in_order(word, &target_letters))
            .collect();
        solutions.sort_unstable();
        solutions.dedup();
        let solution_set = solutions.iter().cloned().collect();

        Self {
            target_letters,
            solutions,
            solution_set,
            revealed: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn target_letters(&self) -> &[u8] {
        &self.target_letters
    }

    /// Target letters as uppercase text, space separated
    #[must_use]
    pub fn letters_display(&self) -> String {
        self.target_letters
            .iter()
            .map(|&b| char::from(b.to_ascii_uppercase()).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Solutions in sorted order
    #[must_use]
    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    #[must_use]
    pub fn is_solution(&self, word: &str) -> bool {
        self.solution_set.contains(word)
    }

    /// Record a solution found outside the catalog; returns whether it was new
    pub fn add_solution(&mut self, word: &str) -> bool {
        if self.solution_set.contains(word) || !contains_in_order(word, &self.target_letters) {
            return false;
        }
        if let Err(position) = self.solutions.binary_search_by(|s| s.as_str().cmp(word)) {
            self.solutions.insert(position, word.to_string());
        }
        self.solution_set.insert(word.to_string());
        true
    }

    /// Best similarity of `word` to any solution, 0-100
    #[must_use]
    pub fn closest_solution_percent(&self, word: &str) -> u8 {
        closest_solution_percent(word, &self.solutions)
    }

    #[inline]
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub(crate) fn mark_revealed(&mut self) {
        self.revealed = true;
    }
}
