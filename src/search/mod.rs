//! Parallel guess-pair search
//!
//! A fixed-width worker pool and the orchestrator that feeds it every guess
//! pair and keeps the running bests.

mod pairs;
mod pool;

pub use pairs::{
    BestTrials, DEFAULT_WORKERS, Improvement, PairSearch, PairUnit, SearchError, SearchOptions,
    pair_count, pairs, search_pairs,
};
pub use pool::{Completion, PoolError, UnitFailure, WorkerPool};
