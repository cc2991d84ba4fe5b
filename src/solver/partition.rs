//! Partitioning a solution set by the clue a guess produces
//!
//! Given a guess and set of secrets, groups the secrets by clue and derives the
//! worst-case, expected and entropy metrics used to rank guesses.

use crate::core::{CLUE_COUNT, Clue, Secret, Word};
use rustc_hash::FxHashMap;

/// Metrics for a partition with group sizes `n_1..n_k` over `M` secrets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionMetrics {
    /// Largest group size (worst-case remaining candidates)
    pub max: usize,
    /// Size-weighted average group size: Σ n_i² / M
    pub expected: f64,
    /// Negated Shannon entropy of the group distribution in bits (smaller is better)
    pub stat: f64,
}

impl PartitionMetrics {
    /// Metrics of an empty solution set
    pub const EMPTY: Self = Self {
        max: 0,
        expected: 0.0,
        stat: 0.0,
    };

    /// Compute metrics from group sizes
    ///
    /// Zero sizes are ignored, so a full clue tally can be passed directly.
    ///
    /// # Examples
    /// ```
    /// use wordle_best_guess::solver::PartitionMetrics;
    ///
    /// let metrics = PartitionMetrics::from_sizes([2, 1, 1]);
    /// assert_eq!(metrics.max, 2);
    /// assert!((metrics.expected - 1.5).abs() < 1e-9); // (4 + 1 + 1) / 4
    /// assert!((metrics.stat + 1.5).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn from_sizes<I>(sizes: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let sizes: Vec<usize> = sizes.into_iter().filter(|&n| n > 0).collect();
        let total: usize = sizes.iter().sum();

        if total == 0 {
            return Self::EMPTY;
        }

        let total_f = total as f64;
        let sum_squares: u64 = sizes.iter().map(|&n| (n as u64) * (n as u64)).sum();

        let entropy: f64 = sizes
            .iter()
            .map(|&n| {
                let p = n as f64 / total_f;
                -p * p.log2()
            })
            .sum();

        Self {
            max: sizes.iter().copied().max().unwrap_or(0),
            expected: sum_squares as f64 / total_f,
            stat: 0.0 - entropy,
        }
    }
}

/// Count how many secrets produce each clue for `guess`
///
/// Indexed by [`Clue::value`]. This is the cheap form of a partition: no
/// members are collected.
#[must_use]
pub fn tally(guess: &Word, secrets: &[Secret]) -> [u32; CLUE_COUNT] {
    let mut counts = [0u32; CLUE_COUNT];
    for secret in secrets {
        counts[usize::from(Clue::against(guess, secret).value())] += 1;
    }
    counts
}

/// Metrics of the partition induced by `guess`, computed from a tally
#[must_use]
pub fn guess_metrics(guess: &Word, secrets: &[Secret]) -> PartitionMetrics {
    PartitionMetrics::from_sizes(tally(guess, secrets).iter().map(|&n| n as usize))
}

/// Full partition of a solution set by clue
#[derive(Debug, Clone, Default)]
pub struct Partition {
    groups: FxHashMap<Clue, Vec<Word>>,
}

impl Partition {
    /// Group `secrets` by the clue `guess` would produce against each
    ///
    /// Words inside a group keep the order of `secrets`.
    #[must_use]
    pub fn by_guess(guess: &Word, secrets: &[Secret]) -> Self {
        let mut groups: FxHashMap<Clue, Vec<Word>> = FxHashMap::default();
        for secret in secrets {
            groups
                .entry(Clue::against(guess, secret))
                .or_default()
                .push(secret.word().clone());
        }
        Self { groups }
    }

    /// Members of the group for `clue` (empty if no secret produces it)
    #[must_use]
    pub fn group(&self, clue: Clue) -> &[Word] {
        self.groups.get(&clue).map_or(&[], Vec::as_slice)
    }

    /// Iterate over `(clue, members)` in no particular order
    pub fn groups(&self) -> impl Iterator<Item = (Clue, &[Word])> {
        self.groups.iter().map(|(&clue, words)| (clue, words.as_slice()))
    }

    /// Number of distinct clues observed
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The largest group; ties go to the lowest clue value
    #[must_use]
    pub fn largest(&self) -> Option<(Clue, &[Word])> {
        self.groups()
            .max_by(|(c1, w1), (c2, w2)| w1.len().cmp(&w2.len()).then(c2.value().cmp(&c1.value())))
    }

    #[must_use]
    pub fn metrics(&self) -> PartitionMetrics {
        PartitionMetrics::from_sizes(self.groups.values().map(Vec::len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets(words: &[&str]) -> Vec<Secret> {
        words
            .iter()
            .map(|w| Secret::new(Word::new(*w).unwrap()))
            .collect()
    }

    #[test]
    fn metrics_perfect_split() {
        let metrics = PartitionMetrics::from_sizes([1, 1, 1, 1]);
        assert_eq!(metrics.max, 1);
        assert!((metrics.expected - 1.0).abs() < f64::EPSILON);
        assert!((metrics.stat + 2.0).abs() < 1e-9); // log2(4) = 2 bits
    }

    #[test]
    fn metrics_single_group() {
        let metrics = PartitionMetrics::from_sizes([3]);
        assert_eq!(metrics.max, 3);
        assert!((metrics.expected - 3.0).abs() < f64::EPSILON);
        assert!(metrics.stat.abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_empty() {
        assert_eq!(PartitionMetrics::from_sizes([]), PartitionMetrics::EMPTY);
        assert_eq!(PartitionMetrics::from_sizes([0, 0]), PartitionMetrics::EMPTY);
    }

    #[test]
    fn skewed_split_scores_worse_than_even_split() {
        let even = PartitionMetrics::from_sizes([25, 25, 25, 25]);
        let skewed = PartitionMetrics::from_sizes([97, 1, 1, 1]);
        assert!(even.expected < skewed.expected);
        assert!(even.stat < skewed.stat);
        assert!(even.max < skewed.max);
    }

    #[test]
    fn partition_is_complete() {
        let set = secrets(&["abide", "badly", "abase", "raise", "adieu", "crane", "crate"]);
        for guess in ["raise", "abase", "zzzzz", "crate"] {
            let partition = Partition::by_guess(&Word::new(guess).unwrap(), &set);

            let mut members: Vec<&Word> = partition.groups().flat_map(|(_, w)| w).collect();
            members.sort();
            let mut expected: Vec<&Word> = set.iter().map(Secret::word).collect();
            expected.sort();

            assert_eq!(members, expected, "partition by {guess} lost or duplicated words");
        }
    }

    #[test]
    fn partition_groups_share_clue() {
        let set = secrets(&["abide", "badly", "abase"]);
        let guess = Word::new("abase").unwrap();
        let partition = Partition::by_guess(&guess, &set);

        for (clue, words) in partition.groups() {
            for word in words {
                assert_eq!(Clue::calculate(&guess, word), clue);
            }
        }
        assert_eq!(partition.group(Clue::parse("!!XX!").unwrap()).len(), 1);
        assert_eq!(partition.group(Clue::SOLVED)[0].text(), "ABASE");
    }

    #[test]
    fn tally_agrees_with_partition() {
        let set = secrets(&["slate", "irate", "crate", "grate", "trace", "raise"]);
        let guess = Word::new("crane").unwrap();
        let counts = tally(&guess, &set);
        let partition = Partition::by_guess(&guess, &set);

        for (clue, words) in partition.groups() {
            assert_eq!(counts[usize::from(clue.value())] as usize, words.len());
        }
        assert_eq!(counts.iter().sum::<u32>() as usize, set.len());
        assert_eq!(guess_metrics(&guess, &set), partition.metrics());
    }

    #[test]
    fn largest_group_is_found() {
        // ZZZZZ misses every word: one group holding everything
        let set = secrets(&["aaaaa", "bbbbb", "ccccc"]);
        let partition = Partition::by_guess(&Word::new("zzzzz").unwrap(), &set);
        let (clue, words) = partition.largest().unwrap();
        assert_eq!(clue.to_string(), "XXXXX");
        assert_eq!(words.len(), 3);
        assert_eq!(partition.metrics().max, 3);
    }

    #[test]
    fn empty_solution_set() {
        let partition = Partition::by_guess(&Word::new("crane").unwrap(), &[]);
        assert!(partition.is_empty());
        assert!(partition.largest().is_none());
        assert_eq!(partition.metrics(), PartitionMetrics::EMPTY);
    }
}
