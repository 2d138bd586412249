//! alignment of benchmark result series.
//!
//! all timings are loaded in file order. the baseline decides the sort order
//! once, every other series (flags included) is reordered with the same
//! permutation, and the aligned series are then split into solved and
//! unsolved problems.

use itertools::Itertools;
use itertools::izip;
use tracing::debug;

pub mod def;
pub mod error;
pub mod perm;
pub mod summary;

use def::ResultSeries;
use def::SolutionFlags;
use def::SortPermutation;
use error::AlignError;
use error::ensure_same_len;
use perm::apply_permutation;
use perm::partition_by_flag;
use perm::sort_permutation;

pub const BASELINE: &str = "baseline";
pub const SINGLE_THREAD: &str = "single-thread";
pub const MULTI_THREAD: &str = "multi-thread";
pub const GPU: &str = "gpu";
pub const SOLVED: &str = "solution flags";

/// the five input series, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResults {
    pub baseline: ResultSeries,
    pub single: ResultSeries,
    pub multi: ResultSeries,
    pub gpu: ResultSeries,
    pub solved: SolutionFlags,
}

impl RawResults {
    /// number of problems, if every series agrees on it
    pub fn check_lengths(&self) -> Result<usize, AlignError> {
        let n = self.baseline.len();
        ensure_same_len(SINGLE_THREAD, n, self.single.len())?;
        ensure_same_len(MULTI_THREAD, n, self.multi.len())?;
        ensure_same_len(GPU, n, self.gpu.len())?;
        ensure_same_len(SOLVED, n, self.solved.len())?;
        Ok(n)
    }
}

/// all series sorted by ascending baseline time
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedResults {
    /// `permutation[k]` is the original index of the problem at rank k
    pub permutation: SortPermutation,
    pub baseline: ResultSeries,
    pub single: ResultSeries,
    pub multi: ResultSeries,
    pub gpu: ResultSeries,
    pub solved: SolutionFlags,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitSeries {
    pub solved: ResultSeries,
    pub unsolved: ResultSeries,
}

/// the two series shown in the solved/unsolved plots
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedSplit {
    pub baseline: SplitSeries,
    pub single: SplitSeries,
}

/// one problem of the aligned table
#[derive(Debug, Clone, serde_derive::Serialize, PartialEq)]
pub struct AlignedRow {
    pub rank: usize,
    pub problem: usize,
    pub baseline: f64,
    pub single: f64,
    pub multi: f64,
    pub gpu: f64,
    pub solved: bool,
}

/// sort every series by the baseline.
///
/// ```
/// # use align::{RawResults, align};
/// let raw = RawResults {
///     baseline: vec![3.0, 1.0, 2.0],
///     single: vec![0.3, 0.1, 0.2],
///     multi: vec![0.03, 0.01, 0.02],
///     gpu: vec![30.0, 10.0, 20.0],
///     solved: vec![true, false, true],
/// };
/// let aligned = align(raw).unwrap();
/// assert_eq!(aligned.baseline, vec![1.0, 2.0, 3.0]);
/// assert_eq!(aligned.solved, vec![false, true, true]);
/// ```
pub fn align(raw: RawResults) -> Result<AlignedResults, AlignError> {
    let n = raw.check_lengths()?;
    let permutation = sort_permutation(&raw.baseline);
    debug!(problems = n, "computed baseline sort order");

    Ok(AlignedResults {
        baseline: apply_permutation(&raw.baseline, &permutation)?,
        single: apply_permutation(&raw.single, &permutation)?,
        multi: apply_permutation(&raw.multi, &permutation)?,
        gpu: apply_permutation(&raw.gpu, &permutation)?,
        solved: apply_permutation(&raw.solved, &permutation)?,
        permutation,
    })
}

impl AlignedResults {
    pub fn len(&self) -> usize {
        self.permutation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permutation.is_empty()
    }

    pub fn solved_count(&self) -> usize {
        self.solved.iter().filter(|s| **s).count()
    }

    /// split an aligned series by the aligned flags
    pub fn split(&self, series: &[f64]) -> Result<SplitSeries, AlignError> {
        let (solved, unsolved) = partition_by_flag(series, &self.solved)?;
        Ok(SplitSeries { solved, unsolved })
    }

    pub fn solved_split(&self) -> Result<SolvedSplit, AlignError> {
        Ok(SolvedSplit {
            baseline: self.split(&self.baseline)?,
            single: self.split(&self.single)?,
        })
    }

    /// the aligned table, one row per problem in baseline order
    pub fn rows(&self) -> Vec<AlignedRow> {
        izip!(
            &self.permutation,
            &self.baseline,
            &self.single,
            &self.multi,
            &self.gpu,
            &self.solved
        )
        .enumerate()
        .map(|(rank, (&problem, &baseline, &single, &multi, &gpu, &solved))| AlignedRow {
            rank,
            problem,
            baseline,
            single,
            multi,
            gpu,
            solved,
        })
        .collect_vec()
    }
}
