//! The benchmark fixture: one random dataset per configuration, and every algorithm sorts its
//! own copy of it.

use std::cmp::Ordering;
use std::fmt;

use rand::rngs::StdRng;
use rand::Rng;

use crate::error::SetupError;
use crate::{patterns, stable, unstable};

/// Dataset size used when no other configuration is given.
pub const DEFAULT_ARRAY_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Quick,
    ];

    /// The algorithm the others are measured against.
    pub const BASELINE: Algorithm = Algorithm::Quick;

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Shell => "shell",
            Algorithm::Quick => "quick",
        }
    }

    pub fn sort<T: Ord>(self, v: &mut [T]) {
        match self {
            Algorithm::Bubble => stable::bubble::sort(v),
            Algorithm::Selection => unstable::selection::sort(v),
            Algorithm::Insertion => stable::insertion::sort(v),
            Algorithm::Shell => unstable::shell::sort(v),
            Algorithm::Quick => unstable::quicksort::sort(v),
        }
    }

    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Bubble => stable::bubble::sort_by(v, compare),
            Algorithm::Selection => unstable::selection::sort_by(v, compare),
            Algorithm::Insertion => stable::insertion::sort_by(v, compare),
            Algorithm::Shell => unstable::shell::sort_by(v, compare),
            Algorithm::Quick => unstable::quicksort::sort_by(v, compare),
        }
    }

    /// Number of comparisons needed to sort a copy of `v`.
    pub fn count_comparisons<T: Ord + Clone>(self, v: &[T]) -> u64 {
        let mut comp_count = 0u64;
        let mut v = v.to_vec();
        self.sort_by(&mut v, |a, b| {
            comp_count += 1;
            a.cmp(b)
        });

        comp_count
    }

    /// Takes ownership of `v`, sorts it and hands it back.
    pub fn sort_vec<T: Ord>(self, mut v: Vec<T>) -> Vec<T> {
        self.sort(&mut v);
        v
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparisons one algorithm needed for an input, next to the baseline's count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonCount {
    pub algorithm: Algorithm,
    pub comparisons: u64,
    pub baseline_comparisons: u64,
}

impl ComparisonCount {
    /// How many times the baseline's comparisons this algorithm needed.
    ///
    /// Inputs too short to need any comparison give `1.0` for every algorithm.
    pub fn ratio(&self) -> f64 {
        if self.baseline_comparisons == 0 {
            if self.comparisons == 0 {
                1.0
            } else {
                f64::INFINITY
            }
        } else {
            self.comparisons as f64 / self.baseline_comparisons as f64
        }
    }
}

impl fmt::Display for ComparisonCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: comparisons: {} (x{:.3} vs {})",
            self.algorithm,
            self.comparisons,
            self.ratio(),
            Algorithm::BASELINE
        )
    }
}

/// Counts the comparisons of every algorithm in `Algorithm::ALL` order on copies of `v`.
pub fn comparison_report<T: Ord + Clone>(v: &[T]) -> Vec<ComparisonCount> {
    let baseline_comparisons = Algorithm::BASELINE.count_comparisons(v);

    Algorithm::ALL
        .iter()
        .map(|&algorithm| ComparisonCount {
            algorithm,
            comparisons: algorithm.count_comparisons(v),
            baseline_comparisons,
        })
        .collect()
}

/// Holds the dataset of the current configuration.
///
/// The dataset is only ever read after `setup`, each sort entry point works on a fresh
/// `unsorted_copy`, so all algorithms see exactly the same input.
pub struct SortBench<R = StdRng> {
    rng: R,
    data: Vec<i32>,
}

impl SortBench<StdRng> {
    /// Creates a fixture with a generator seeded by `patterns::random_init_seed`.
    pub fn new() -> Self {
        Self::with_rng(patterns::new_seed())
    }
}

impl Default for SortBench<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SortBench<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            data: Vec::new(),
        }
    }

    /// Generates and stores a new dataset of `size` values drawn from `[0, size)`.
    ///
    /// On error the previous dataset is kept.
    pub fn setup(&mut self, size: usize) -> Result<(), SetupError> {
        self.data = patterns::generate_random_sequence(size, &mut self.rng)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The stored dataset, unmodified since the last `setup`.
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    pub fn unsorted_copy(&self) -> Vec<i32> {
        self.data.clone()
    }

    pub fn run(&self, algorithm: Algorithm) -> Vec<i32> {
        algorithm.sort_vec(self.unsorted_copy())
    }

    pub fn comparison_report(&self) -> Vec<ComparisonCount> {
        comparison_report(&self.data)
    }

    pub fn bubble_sort(&self) -> Vec<i32> {
        self.run(Algorithm::Bubble)
    }

    pub fn selection_sort(&self) -> Vec<i32> {
        self.run(Algorithm::Selection)
    }

    pub fn insertion_sort(&self) -> Vec<i32> {
        self.run(Algorithm::Insertion)
    }

    pub fn shell_sort(&self) -> Vec<i32> {
        self.run(Algorithm::Shell)
    }

    pub fn quick_sort(&self) -> Vec<i32> {
        self.run(Algorithm::Quick)
    }
}
