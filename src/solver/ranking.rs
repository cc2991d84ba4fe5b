//! Guess ranking
//!
//! Scores every candidate guess by how well it partitions the solution set and
//! returns the best `top` of them.

use super::partition::{Partition, PartitionMetrics, guess_metrics};
use crate::core::{Secret, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::{debug, info};

/// Every n-th evaluated guess is reported at debug level
const TELEMETRY_INTERVAL: usize = 1000;

/// Ranking criterion; smaller scores rank first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankFn {
    /// Negated entropy of the clue distribution (default)
    #[default]
    Stat,
    /// Expected number of remaining candidates
    Expected,
    /// Worst-case number of remaining candidates
    Worst,
}

impl RankFn {
    /// Score of a guess with the given partition metrics
    #[must_use]
    pub fn score(self, metrics: &PartitionMetrics) -> f64 {
        match self {
            Self::Stat => metrics.stat,
            Self::Expected => metrics.expected,
            Self::Worst => metrics.max as f64,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stat => "stat",
            Self::Expected => "expected",
            Self::Worst => "worst",
        }
    }
}

/// Ranking result for one guess
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRecord {
    pub guess: Word,
    /// Members of the largest partition group
    pub max_set: Vec<Word>,
    pub metrics: PartitionMetrics,
}

impl RankingRecord {
    #[must_use]
    pub const fn max(&self) -> usize {
        self.metrics.max
    }

    #[must_use]
    pub const fn expected(&self) -> f64 {
        self.metrics.expected
    }

    #[must_use]
    pub const fn stat(&self) -> f64 {
        self.metrics.stat
    }
}

/// Rank guesses by how well they split `solutions`
///
/// The evaluated guesses are the whole `dictionary`, or in hard mode only the
/// dictionary words that are still in `solutions`. Results are sorted
/// ascending by `rank_fn`; equal scores keep dictionary order. At most `top`
/// records are returned and an empty dictionary or solution set yields none.
///
/// # Examples
/// ```
/// use wordle_best_guess::core::Word;
/// use wordle_best_guess::solver::{RankFn, rank};
///
/// let words: Vec<Word> = ["abide", "badly", "abase"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let ranked = rank(&words, 1, &words, RankFn::Worst, false);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].max(), 1);
/// ```
#[must_use]
pub fn rank(
    dictionary: &[Word],
    top: usize,
    solutions: &[Word],
    rank_fn: RankFn,
    hard_mode: bool,
) -> Vec<RankingRecord> {
    if top == 0 || solutions.is_empty() {
        return Vec::new();
    }

    let universe: Vec<&Word> = if hard_mode {
        let members: FxHashSet<&Word> = solutions.iter().collect();
        dictionary.iter().filter(|w| members.contains(w)).collect()
    } else {
        dictionary.iter().collect()
    };

    let start = Instant::now();
    info!(
        guesses = universe.len(),
        solutions = solutions.len(),
        rank_fn = rank_fn.name(),
        hard_mode,
        "ranking guesses"
    );

    let secrets = Secret::from_words(solutions);

    // Collecting an indexed parallel iterator keeps dictionary order
    let mut scored: Vec<(&Word, PartitionMetrics)> = universe
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| {
            let metrics = guess_metrics(guess, &secrets);
            if index % TELEMETRY_INTERVAL == 0 {
                debug!(index, %guess, max = metrics.max, expected = metrics.expected, "sample");
            }
            (guess, metrics)
        })
        .collect();

    // Stable sort: ties stay in dictionary order
    scored.sort_by(|(_, a), (_, b)| rank_fn.score(a).total_cmp(&rank_fn.score(b)));
    scored.truncate(top);

    let records: Vec<RankingRecord> = scored
        .into_iter()
        .map(|(guess, metrics)| {
            let partition = Partition::by_guess(guess, &secrets);
            let max_set = partition
                .largest()
                .map(|(_, words)| words.to_vec())
                .unwrap_or_default();
            RankingRecord {
                guess: guess.clone(),
                max_set,
                metrics,
            }
        })
        .collect();

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        best = records.first().map(|r| r.guess.text()),
        "ranking complete"
    );

    records
}
