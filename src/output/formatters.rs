//! Formatting utilities for terminal output

use crate::core::{Clue, Mark, Word};
use crate::solver::{RankFn, RankingRecord, TableRow, Trial};

/// Format a clue as emoji string
#[must_use]
pub fn clue_to_emoji(clue: Clue) -> String {
    clue.marks()
        .iter()
        .map(|mark| match mark {
            Mark::Miss => '⬜',
            Mark::Present => '🟨',
            Mark::Hit => '🟩',
        })
        .collect()
}

/// Join words with `separator`
#[must_use]
pub fn join_words(words: &[Word], separator: &str) -> String {
    words.iter().map(Word::text).collect::<Vec<_>>().join(separator)
}

/// One clue table row: `  <pattern>: <words>`
#[must_use]
pub fn table_line(row: &TableRow) -> String {
    format!("  {}: {}", row.pattern, join_words(&row.words, " "))
}

/// Comma-separated guesses of a trial
#[must_use]
pub fn trial_guesses(trial: &Trial) -> String {
    join_words(&trial.guesses, ", ")
}

/// One line of the top ranking listing
#[must_use]
pub fn record_line(position: usize, record: &RankingRecord, rank_fn: RankFn) -> String {
    format!(
        "{position:>3}. {}  max={:<4} expected={:<8.3} stat={:.4}  [{}]",
        record.guess,
        record.max(),
        record.expected(),
        record.stat(),
        rank_fn.name()
    )
}
