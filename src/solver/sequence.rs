//! Multi-guess lookahead
//!
//! Evaluates a fixed sequence of guesses by grouping the secrets on the tuple of
//! clues the whole sequence produces, and renders that grouping as a table.

use super::partition::PartitionMetrics;
use crate::core::{CLUE_COUNT, Clue, Secret, Word};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Longest sequence whose combined clue key fits in a u64 (243^8 < 2^64)
pub const MAX_SEQUENCE_LEN: usize = 8;

/// Evaluated outcome of a guess sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    pub guesses: Vec<Word>,
    /// Expected remaining candidates after playing every guess
    pub expected: f64,
    /// Worst-case remaining candidates after playing every guess
    pub max: usize,
}

fn sequence_key(guesses: &[Word], secret: &Secret) -> u64 {
    guesses.iter().fold(0u64, |key, guess| {
        key * CLUE_COUNT as u64 + u64::from(Clue::against(guess, secret).value())
    })
}

/// Evaluate playing every guess in `guesses` against each secret
///
/// # Panics
/// Panics if more than [`MAX_SEQUENCE_LEN`] guesses are given.
///
/// # Examples
/// ```
/// use wordle_best_guess::core::{Secret, Word};
/// use wordle_best_guess::solver::evaluate_sequence;
///
/// let words: Vec<Word> = ["abide", "badly", "abase"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let secrets = Secret::from_words(&words);
///
/// let trial = evaluate_sequence(&words[..2], &secrets);
/// assert_eq!(trial.max, 1);
/// ```
#[must_use]
pub fn evaluate_sequence(guesses: &[Word], secrets: &[Secret]) -> Trial {
    assert!(
        guesses.len() <= MAX_SEQUENCE_LEN,
        "at most {MAX_SEQUENCE_LEN} guesses can be evaluated together"
    );

    let mut counts: FxHashMap<u64, usize> = FxHashMap::default();
    for secret in secrets {
        *counts.entry(sequence_key(guesses, secret)).or_insert(0) += 1;
    }

    let metrics = PartitionMetrics::from_sizes(counts.into_values());

    Trial {
        guesses: guesses.to_vec(),
        expected: metrics.expected,
        max: metrics.max,
    }
}

/// One row of a clue table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Clues for each guess joined with `-`, e.g. `!XX?X-XX!!?`
    pub pattern: String,
    pub words: Vec<Word>,
}

/// Group `solutions` by the clues `guesses` produce, sorted by pattern
///
/// Words in a row keep the order of `solutions`.
#[must_use]
pub fn clue_table(guesses: &[Word], solutions: &[Word]) -> Vec<TableRow> {
    let mut rows: BTreeMap<String, Vec<Word>> = BTreeMap::new();

    for secret in solutions {
        let pattern = guesses
            .iter()
            .map(|guess| Clue::calculate(guess, secret).to_string())
            .collect::<Vec<_>>()
            .join("-");
        rows.entry(pattern).or_default().push(secret.clone());
    }

    rows.into_iter()
        .map(|(pattern, words)| TableRow { pattern, words })
        .collect()
}
