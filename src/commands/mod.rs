//! Command implementations

pub mod analyze;
pub mod play;

pub use analyze::{RankResult, run_rank};
pub use play::{OPENING_GUESS, PlayOutcome, PlaySession, Step, run_play};
