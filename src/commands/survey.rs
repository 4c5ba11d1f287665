//! Survey command
//!
//! Generates many rounds with the same settings and reports how many
//! solutions they tend to have.

use crate::game::{GameError, GameSession};
use crate::storage::Preferences;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::time::{Duration, Instant};

/// Upper bounds of the solution-count buckets; the last bucket is open
pub const BUCKET_LIMITS: [usize; 5] = [1, 5, 20, 100, 300];

/// Solution-count statistics over generated rounds
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyResult {
    pub settings: Preferences,
    pub rounds: usize,
    pub failures: usize,
    pub min_solutions: usize,
    pub max_solutions: usize,
    pub mean_solutions: f64,
    pub median_solutions: f64,
    /// Bucket label and round count
    pub distribution: Vec<(String, usize)>,
    pub duration: Duration,
}

/// Generate `rounds` rounds and collect statistics
///
/// A round that fails to generate is counted, not fatal.
///
/// # Errors
///
/// Returns the `GameError` from loading the theme or from the first round when
/// no round can be played with these settings at all.
pub fn run_survey(
    session: &mut GameSession,
    settings: Preferences,
    rounds: usize,
) -> Result<SurveyResult, GameError> {
    let start = Instant::now();
    session.start_new_game(settings)?;

    let pb = ProgressBar::new(rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut counts = Vec::with_capacity(rounds);
    let mut failures = 0;
    for index in 0..rounds {
        if index > 0
            && let Err(e) = session.restart()
        {
            debug!("Survey round {index} failed: {e}");
            failures += 1;
            pb.inc(1);
            continue;
        }
        if let Some(round) = session.round() {
            counts.push(round.solution_count());
            pb.set_message(format!("{} → {}", round.letters_display(), round.solution_count()));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(summarize(settings, &counts, failures, start.elapsed()))
}

/// Statistics over a list of solution counts
#[must_use]
pub fn summarize(
    settings: Preferences,
    counts: &[usize],
    failures: usize,
    duration: Duration,
) -> SurveyResult {
    let mut sorted = counts.to_vec();
    sorted.sort_unstable();

    let mean_solutions = if sorted.is_empty() {
        0.0
    } else {
        sorted.iter().sum::<usize>() as f64 / sorted.len() as f64
    };
    let median_solutions = match sorted.len() {
        0 => 0.0,
        n if n % 2 == 1 => sorted[n / 2] as f64,
        n => (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.0,
    };

    SurveyResult {
        settings,
        rounds: counts.len() + failures,
        failures,
        min_solutions: sorted.first().copied().unwrap_or(0),
        max_solutions: sorted.last().copied().unwrap_or(0),
        mean_solutions,
        median_solutions,
        distribution: bucket_counts(&sorted),
        duration,
    }
}

fn bucket_counts(counts: &[usize]) -> Vec<(String, usize)> {
    let mut buckets = Vec::with_capacity(BUCKET_LIMITS.len() + 1);
    let mut lower = 1;
    for limit in BUCKET_LIMITS {
        let label = if lower == limit {
            format!("{limit}")
        } else {
            format!("{lower}-{limit}")
        };
        let n = counts.iter().filter(|&&c| (lower..=limit).contains(&c)).count();
        buckets.push((label, n));
        lower = limit + 1;
    }
    let n = counts.iter().filter(|&&c| c >= lower).count();
    buckets.push((format!("{lower}+"), n));
    buckets
}
