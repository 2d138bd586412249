//! definition of result series, flags and permutations

use std::cmp::Ordering;

/// execution times in seconds, one entry per benchmark problem. index i of
/// every series refers to the same problem.
pub type ResultSeries = Vec<f64>;

/// `true` at index i if problem i has a known solution
pub type SolutionFlags = Vec<bool>;

/// indices into a series; applying it reorders the series by ascending
/// baseline value
pub type SortPermutation = Vec<usize>;

/// ordering used to sort timings.
///
/// non-NaN values compare numerically (so `-0.0 == 0.0`), every NaN sorts
/// after every number, and NaNs compare equal to each other. combined with a
/// stable sort this keeps the input order of ties and of NaNs.
///
/// ```
/// # use align::def::nan_last_cmp;
/// # use std::cmp::Ordering;
/// assert_eq!(nan_last_cmp(&1.0, &2.0), Ordering::Less);
/// assert_eq!(nan_last_cmp(&f64::NAN, &f64::INFINITY), Ordering::Greater);
/// assert_eq!(nan_last_cmp(&-0.0, &0.0), Ordering::Equal);
/// ```
pub fn nan_last_cmp(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // both are numbers, partial_cmp is total here
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// the identity permutation `0, 1, ..., n-1`
pub fn identity(n: usize) -> SortPermutation {
    (0..n).collect()
}

/// check that `perm` contains every index in `0..perm.len()` exactly once
pub fn is_permutation(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    for &i in perm {
        match seen.get_mut(i) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    true
}
