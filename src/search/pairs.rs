//! Exhaustive guess-pair search
//!
//! Evaluates every unordered pair of solution words as a two-guess opening and
//! keeps the pair with the lowest expected remaining count and the pair with the
//! lowest worst-case remaining count.

use super::pool::{Completion, PoolError, UnitFailure, WorkerPool};
use crate::core::{Secret, Word};
use crate::solver::{Trial, evaluate_sequence};
use indicatif::{ProgressBar, ProgressStyle};
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

/// Default number of worker threads
pub const DEFAULT_WORKERS: usize = 8;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("{failed} guess pair(s) failed to evaluate, first: {first}")]
    FailedUnits { failed: usize, first: String },
    #[error("need at least 2 solution words to search pairs, got {0}")]
    NotEnoughCandidates(usize),
}

/// One unit of work: a guess pair and its position in the enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairUnit {
    pub index: usize,
    pub guesses: [Word; 2],
}

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub workers: usize,
    pub show_progress: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            show_progress: true,
        }
    }
}

/// Final result of a pair search
#[derive(Debug, Clone, PartialEq)]
pub struct PairSearch {
    pub best_expected: Trial,
    pub best_max: Trial,
    pub evaluated: usize,
    pub duration: Duration,
}

/// Which bests a trial improved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Improvement {
    pub expected: bool,
    pub max: bool,
}

/// Running best trials by expected and by worst-case remaining count
///
/// Equal scores resolve to the lower enumeration index, so the outcome does
/// not depend on the order trials are offered in.
#[derive(Debug, Clone, Default)]
pub struct BestTrials {
    expected: Option<(usize, Trial)>,
    max: Option<(usize, Trial)>,
    offered: usize,
}

impl BestTrials {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the trial for the pair at `index`
    pub fn offer(&mut self, index: usize, trial: Trial) -> Improvement {
        self.offered += 1;

        let expected = self.expected.as_ref().is_none_or(|(best_index, best)| {
            trial
                .expected
                .total_cmp(&best.expected)
                .then(index.cmp(best_index))
                == Ordering::Less
        });
        let max = self.max.as_ref().is_none_or(|(best_index, best)| {
            trial.max.cmp(&best.max).then(index.cmp(best_index)) == Ordering::Less
        });

        match (expected, max) {
            (true, true) => {
                self.expected = Some((index, trial.clone()));
                self.max = Some((index, trial));
            }
            (true, false) => self.expected = Some((index, trial)),
            (false, true) => self.max = Some((index, trial)),
            (false, false) => {}
        }

        Improvement { expected, max }
    }

    #[must_use]
    pub fn best_expected(&self) -> Option<&Trial> {
        self.expected.as_ref().map(|(_, trial)| trial)
    }

    #[must_use]
    pub fn best_max(&self) -> Option<&Trial> {
        self.max.as_ref().map(|(_, trial)| trial)
    }

    #[must_use]
    pub const fn offered(&self) -> usize {
        self.offered
    }
}

/// Number of unordered pairs of distinct words among `m`
#[must_use]
pub const fn pair_count(m: usize) -> usize {
    m * m.saturating_sub(1) / 2
}

/// Enumerate every pair `(i, j)` with `i < j` in solution order
pub fn pairs(words: &[Word]) -> impl Iterator<Item = PairUnit> + '_ {
    (0..words.len())
        .flat_map(move |i| (i + 1..words.len()).map(move |j| (i, j)))
        .enumerate()
        .map(move |(index, (i, j))| PairUnit {
            index,
            guesses: [words[i].clone(), words[j].clone()],
        })
}

/// Search all guess pairs drawn from `solutions`
///
/// Each pair is evaluated on the worker pool against a shared read-only
/// snapshot of the solutions. There is no pruning: every pair is evaluated
/// before the pool drains and the bests are returned.
///
/// # Errors
/// Returns `SearchError::NotEnoughCandidates` for fewer than two solutions,
/// `SearchError::FailedUnits` if any pair failed to evaluate, or a pool error.
pub fn search_pairs(solutions: &[Word], options: SearchOptions) -> Result<PairSearch, SearchError> {
    let snapshot: Arc<[Secret]> = Secret::from_words(solutions).into();
    let work = move |unit: &PairUnit| (unit.index, evaluate_sequence(&unit.guesses, &snapshot));
    search_with(solutions, options, work)
}

fn search_with<W>(
    solutions: &[Word],
    options: SearchOptions,
    work: W,
) -> Result<PairSearch, SearchError>
where
    W: Fn(&PairUnit) -> (usize, Trial) + Send + Sync + 'static,
{
    if solutions.len() < 2 {
        return Err(SearchError::NotEnoughCandidates(solutions.len()));
    }

    let total = pair_count(solutions.len());
    let start = Instant::now();
    info!(
        solutions = solutions.len(),
        pairs = total,
        workers = options.workers,
        "searching guess pairs"
    );

    let bar = progress_bar(total as u64, options.show_progress);
    let mut best = BestTrials::new();
    let mut failures: Vec<UnitFailure<PairUnit>> = Vec::new();

    let on_complete = |completion: Completion<PairUnit, (usize, Trial)>| {
        match completion {
            Ok((index, trial)) => {
                let summary = trial_summary(&trial);
                let improved = best.offer(index, trial);
                let count = best.offered();
                if improved.expected {
                    info!(count, trial = %summary, "new best expected");
                }
                if improved.max {
                    info!(count, trial = %summary, "new best max");
                }
            }
            Err(failure) => {
                warn!(index = failure.input.index, message = %failure.message, "guess pair failed");
                failures.push(failure);
            }
        }
        bar.inc(1);
    };

    let mut pool = WorkerPool::new(options.workers, work, on_complete)?;
    for unit in pairs(solutions) {
        pool.submit(unit)?;
    }
    pool.drain()?;
    bar.finish_and_clear();

    if let Some(first) = failures.first() {
        return Err(SearchError::FailedUnits {
            failed: failures.len(),
            first: format!(
                "{}, {}: {}",
                first.input.guesses[0], first.input.guesses[1], first.message
            ),
        });
    }

    let evaluated = best.offered();
    let duration = start.elapsed();
    info!(evaluated, elapsed_ms = duration.as_millis() as u64, "pair search complete");

    match (best.expected, best.max) {
        (Some((_, best_expected)), Some((_, best_max))) => Ok(PairSearch {
            best_expected,
            best_max,
            evaluated,
            duration,
        }),
        _ => Err(SearchError::NotEnoughCandidates(solutions.len())),
    }
}

fn trial_summary(trial: &Trial) -> String {
    let guesses: Vec<&str> = trial.guesses.iter().map(Word::text).collect();
    format!(
        "{} expected={:.3} max={}",
        guesses.join(","),
        trial.expected,
        trial.max
    )
}

fn progress_bar(total: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | eta {eta}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::seq::SliceRandom;
    use std::thread;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn solutions() -> Vec<Word> {
        words(&[
            "abide", "badly", "abase", "crane", "crate", "grate", "irate", "trace", "raise",
            "adieu", "slate", "stare",
        ])
    }

    fn quiet(workers: usize) -> SearchOptions {
        SearchOptions {
            workers,
            show_progress: false,
        }
    }

    /// Strict-less scan in enumeration order
    fn sequential_bests(solutions: &[Word]) -> (Trial, Trial) {
        let secrets = Secret::from_words(solutions);
        let mut best_expected: Option<Trial> = None;
        let mut best_max: Option<Trial> = None;
        for unit in pairs(solutions) {
            let trial = evaluate_sequence(&unit.guesses, &secrets);
            if best_expected.as_ref().is_none_or(|b| trial.expected < b.expected) {
                best_expected = Some(trial.clone());
            }
            if best_max.as_ref().is_none_or(|b| trial.max < b.max) {
                best_max = Some(trial);
            }
        }
        (best_expected.unwrap(), best_max.unwrap())
    }

    #[test]
    fn pairs_are_unordered_and_distinct() {
        let sols = solutions();
        let units: Vec<PairUnit> = pairs(&sols).collect();
        assert_eq!(units.len(), pair_count(sols.len()));
        assert_eq!(units.len(), 66);

        for (expected_index, unit) in units.iter().enumerate() {
            assert_eq!(unit.index, expected_index);
            assert_ne!(unit.guesses[0], unit.guesses[1]);
        }

        let mut keys: Vec<(String, String)> = units
            .iter()
            .map(|u| {
                let (a, b) = (u.guesses[0].text(), u.guesses[1].text());
                if a < b { (a.into(), b.into()) } else { (b.into(), a.into()) }
            })
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 66);
    }

    #[test]
    fn pair_count_small_sets() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(380), 72_010);
    }

    #[test]
    fn search_matches_sequential_scan() {
        let sols = solutions();
        let (expected, max) = sequential_bests(&sols);

        let result = search_pairs(&sols, quiet(4)).unwrap();
        assert_eq!(result.best_expected, expected);
        assert_eq!(result.best_max, max);
        assert_eq!(result.evaluated, 66);
    }

    #[test]
    fn search_result_independent_of_width() {
        let sols = solutions();
        let single = search_pairs(&sols, quiet(1)).unwrap();
        for workers in [2, 3, 8] {
            let parallel = search_pairs(&sols, quiet(workers)).unwrap();
            assert_eq!(parallel.best_expected, single.best_expected);
            assert_eq!(parallel.best_max, single.best_max);
        }
    }

    #[test]
    fn best_trials_independent_of_offer_order() {
        let sols = solutions();
        let secrets = Secret::from_words(&sols);
        let mut trials: Vec<(usize, Trial)> = pairs(&sols)
            .map(|u| (u.index, evaluate_sequence(&u.guesses, &secrets)))
            .collect();

        let mut in_order = BestTrials::new();
        for (index, trial) in trials.clone() {
            in_order.offer(index, trial);
        }

        let mut rng = rand::rng();
        for _ in 0..20 {
            trials.shuffle(&mut rng);
            let mut shuffled = BestTrials::new();
            for (index, trial) in trials.clone() {
                shuffled.offer(index, trial);
            }
            assert_eq!(shuffled.best_expected(), in_order.best_expected());
            assert_eq!(shuffled.best_max(), in_order.best_max());
        }
    }

    #[test]
    fn jittered_pool_completions_give_same_bests() {
        let sols = solutions();
        let (expected, max) = sequential_bests(&sols);
        let snapshot: Arc<[Secret]> = Secret::from_words(&sols).into();

        let work = move |unit: &PairUnit| {
            let micros = rand::rng().random_range(0..300);
            thread::sleep(Duration::from_micros(micros));
            (unit.index, evaluate_sequence(&unit.guesses, &snapshot))
        };

        let mut best = BestTrials::new();
        let mut arrival = Vec::new();
        let mut pool = WorkerPool::new(
            6,
            work,
            |c: Completion<PairUnit, (usize, Trial)>| {
                let (index, trial) = c.unwrap();
                arrival.push(index);
                best.offer(index, trial);
            },
        )
        .unwrap();
        for unit in pairs(&sols) {
            pool.submit(unit).unwrap();
        }
        pool.drain().unwrap();

        assert_eq!(arrival.len(), 66);
        assert_eq!(best.best_expected(), Some(&expected));
        assert_eq!(best.best_max(), Some(&max));
    }

    #[test]
    fn ties_resolve_to_first_enumerated_pair() {
        let trial = |g: &[&str], expected: f64, max: usize| Trial {
            guesses: words(g),
            expected,
            max,
        };
        let mut best = BestTrials::new();
        best.offer(5, trial(&["crane", "adieu"], 1.0, 1));
        let improved = best.offer(2, trial(&["abide", "badly"], 1.0, 1));
        assert_eq!(improved, Improvement { expected: true, max: true });
        let improved = best.offer(9, trial(&["slate", "raise"], 1.0, 1));
        assert_eq!(improved, Improvement::default());

        assert_eq!(best.best_expected().unwrap().guesses, words(&["abide", "badly"]));
        assert_eq!(best.best_max().unwrap().guesses, words(&["abide", "badly"]));
        assert_eq!(best.offered(), 3);
    }

    #[test]
    fn bests_track_metrics_independently() {
        let trial = |expected: f64, max: usize| Trial {
            guesses: words(&["crane", "adieu"]),
            expected,
            max,
        };
        let mut best = BestTrials::new();
        best.offer(0, trial(2.0, 3));
        let improved = best.offer(1, trial(1.5, 4));
        assert_eq!(improved, Improvement { expected: true, max: false });
        assert!((best.best_expected().unwrap().expected - 1.5).abs() < f64::EPSILON);
        assert_eq!(best.best_max().unwrap().max, 3);
    }

    #[test]
    fn too_few_solutions_is_an_error() {
        let one = words(&["abide"]);
        assert!(matches!(
            search_pairs(&one, quiet(2)),
            Err(SearchError::NotEnoughCandidates(1))
        ));
        assert!(matches!(
            search_pairs(&[], quiet(2)),
            Err(SearchError::NotEnoughCandidates(0))
        ));
    }

    #[test]
    fn zero_workers_is_a_pool_error() {
        assert!(matches!(
            search_pairs(&solutions(), quiet(0)),
            Err(SearchError::Pool(PoolError::ZeroWidth))
        ));
    }

    #[test]
    fn failed_pairs_are_reported_not_dropped() {
        let sols = solutions();
        let snapshot: Arc<[Secret]> = Secret::from_words(&sols).into();
        let work = move |unit: &PairUnit| {
            assert!(unit.index % 20 != 7, "evaluation fault");
            (unit.index, evaluate_sequence(&unit.guesses, &snapshot))
        };

        match search_with(&sols, quiet(3), work) {
            Err(SearchError::FailedUnits { failed, first }) => {
                // Indices 7, 27 and 47 fail
                assert_eq!(failed, 3);
                assert!(first.contains("evaluation fault"));
            }
            other => panic!("expected failed units, got {other:?}"),
        }
    }

    #[test]
    fn two_solutions_single_pair() {
        let sols = words(&["abide", "badly"]);
        let result = search_pairs(&sols, quiet(2)).unwrap();
        assert_eq!(result.evaluated, 1);
        assert_eq!(result.best_max.max, 1);
        assert_eq!(result.best_expected.guesses, sols);
    }
}
