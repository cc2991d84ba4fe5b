//! Run configuration
//!
//! The command line is parsed in the binary; this module holds the typed
//! result and the validation that turns raw option values into it.

use crate::core::{Word, WordError};
use crate::search::{DEFAULT_WORKERS, SearchOptions};
use crate::solver::RankFn;
use std::path::PathBuf;
use thiserror::Error;

/// Number of ranking records shown by `--top` without a value
pub const DEFAULT_TOP: usize = 10;

/// Largest supported `--multi` width
pub const MAX_MULTI: usize = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid table value - 5-letter word guesses: {value}")]
    InvalidTableWord {
        value: String,
        #[source]
        source: WordError,
    },
    #[error("Invalid table value - at least one guess is required")]
    EmptyTable,
    #[error("Invalid multi value: {0} (supported: 1 or 2)")]
    InvalidMulti(usize),
    #[error("Invalid top value: {0}")]
    InvalidTop(usize),
    #[error("Invalid workers value: {0}")]
    InvalidWorkers(usize),
}

/// What a run produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Rank single guesses
    Rank,
    /// Print the clue table for a guess sequence
    Table(Vec<Word>),
    /// Search every guess pair
    Pairs,
}

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl From<Option<PathBuf>> for WordSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rank_fn: RankFn,
    pub hard_mode: bool,
    pub top: usize,
    pub show_top: bool,
    pub mode: Mode,
    pub telemetry: bool,
    pub workers: usize,
    pub words: WordSource,
    pub solutions: WordSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rank_fn: RankFn::default(),
            hard_mode: false,
            top: DEFAULT_TOP,
            show_top: false,
            mode: Mode::Rank,
            telemetry: false,
            workers: DEFAULT_WORKERS,
            words: WordSource::Embedded,
            solutions: WordSource::Embedded,
        }
    }
}

impl Config {
    /// Pool settings for the pair search
    #[must_use]
    pub const fn search_options(&self) -> SearchOptions {
        SearchOptions {
            workers: self.workers,
            show_progress: true,
        }
    }

    /// Set `--top`; `None` leaves the default count and hides the listing
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidTop` for zero.
    pub fn with_top(mut self, top: Option<usize>) -> Result<Self, ConfigError> {
        if let Some(top) = top {
            if top == 0 {
                return Err(ConfigError::InvalidTop(top));
            }
            self.top = top;
            self.show_top = true;
        }
        Ok(self)
    }

    /// Set the worker pool width
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidWorkers` for zero.
    pub fn with_workers(mut self, workers: usize) -> Result<Self, ConfigError> {
        if workers == 0 {
            return Err(ConfigError::InvalidWorkers(workers));
        }
        self.workers = workers;
        Ok(self)
    }
}

/// Pick the rank function from the `--expected` / `--worst` flags
#[must_use]
pub const fn rank_fn_from_flags(expected: bool, worst: bool) -> RankFn {
    match (expected, worst) {
        (_, true) => RankFn::Worst,
        (true, false) => RankFn::Expected,
        (false, false) => RankFn::Stat,
    }
}

/// Parse `--table` guesses
///
/// # Errors
/// Returns `ConfigError` if the list is empty or any guess is not a 5-letter word.
pub fn parse_table(values: &[String]) -> Result<Vec<Word>, ConfigError> {
    if values.is_empty() {
        return Err(ConfigError::EmptyTable);
    }

    values
        .iter()
        .map(|value| {
            Word::new(value.trim()).map_err(|source| ConfigError::InvalidTableWord {
                value: value.clone(),
                source,
            })
        })
        .collect()
}

/// Choose the run mode: a pair search wins over a table, a table over ranking
///
/// # Errors
/// Returns `ConfigError::InvalidMulti` for a width outside `1..=2`, or a table
/// parsing error.
pub fn select_mode(multi: Option<usize>, table: Option<&[String]>) -> Result<Mode, ConfigError> {
    match multi {
        Some(width) if width == 0 || width > MAX_MULTI => {
            return Err(ConfigError::InvalidMulti(width));
        }
        Some(MAX_MULTI) => return Ok(Mode::Pairs),
        _ => {}
    }

    match table {
        Some(values) => Ok(Mode::Table(parse_table(values)?)),
        None => Ok(Mode::Rank),
    }
}
