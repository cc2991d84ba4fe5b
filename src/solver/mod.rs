//! Guess evaluation
//!
//! Partitions a solution set by clue, ranks single guesses and evaluates
//! multi-guess sequences.

mod partition;
mod ranking;
mod sequence;

pub use partition::{Partition, PartitionMetrics, guess_metrics, tally};
pub use ranking::{RankFn, RankingRecord, rank};
pub use sequence::{MAX_SEQUENCE_LEN, TableRow, Trial, clue_table, evaluate_sequence};
