//! First-guess ranking command
//!
//! Ranks the dictionary against the solution list with the configured options.

use crate::config::Config;
use crate::solver::{RankFn, RankingRecord, rank};
use crate::wordlists::WordLists;

/// Result of ranking first guesses
#[derive(Debug, Clone, PartialEq)]
pub struct RankResult {
    pub records: Vec<RankingRecord>,
    pub rank_fn: RankFn,
    pub hard_mode: bool,
    pub total_solutions: usize,
}

impl RankResult {
    /// The optimal guess, if any guess was ranked
    #[must_use]
    pub fn best(&self) -> Option<&RankingRecord> {
        self.records.first()
    }
}

/// Rank guesses for the configured rank function, hard mode and top count
#[must_use]
pub fn run_rank(config: &Config, lists: &WordLists) -> RankResult {
    let records = rank(
        &lists.dictionary,
        config.top,
        &lists.solutions,
        config.rank_fn,
        config.hard_mode,
    );

    RankResult {
        records,
        rank_fn: config.rank_fn,
        hard_mode: config.hard_mode,
        total_solutions: lists.solutions.len(),
    }
}
