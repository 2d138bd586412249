//! sorting by a shared key and partitioning by a flag mask

use itertools::Either;
use itertools::Itertools;

use crate::def::SortPermutation;
use crate::def::nan_last_cmp;
use crate::error::AlignError;
use crate::error::ensure_same_len;

/// indices that sort `baseline` ascending. stable: ties keep their original
/// order. NaNs go last (see [`nan_last_cmp`]).
///
/// ```
/// # use align::perm::sort_permutation;
/// assert_eq!(sort_permutation(&[3.0, 1.0, 2.0]), vec![1, 2, 0]);
/// ```
pub fn sort_permutation(baseline: &[f64]) -> SortPermutation {
    let mut perm: SortPermutation = (0..baseline.len()).collect();
    perm.sort_by(|&i, &j| nan_last_cmp(&baseline[i], &baseline[j]));
    perm
}

/// reorder `series` so that `out[k] == series[perm[k]]`. `perm` must name
/// every index of `series` exactly once.
///
/// works on any element type, so the permutation derived from the baseline
/// can also be applied to the solution flags.
///
/// ```
/// # use align::perm::apply_permutation;
/// let flags = apply_permutation(&[true, false, true], &[1, 2, 0]).unwrap();
/// assert_eq!(flags, vec![false, true, true]);
/// ```
pub fn apply_permutation<T: Clone>(series: &[T], perm: &[usize]) -> Result<Vec<T>, AlignError> {
    ensure_same_len("permutation", perm.len(), series.len())?;
    let mut seen = vec![false; series.len()];
    perm.iter()
        .map(|&i| match seen.get_mut(i) {
            None => Err(AlignError::IndexOutOfRange {
                index: i,
                len: series.len(),
            }),
            Some(true) => Err(AlignError::DuplicateIndex { index: i }),
            Some(s) => {
                *s = true;
                Ok(series[i].clone())
            }
        })
        .collect()
}

/// split `series` into `(solved, unsolved)` by `flags`, keeping the relative
/// order inside each half.
///
/// ```
/// # use align::perm::partition_by_flag;
/// let (solved, unsolved) = partition_by_flag(&[1.0, 2.0, 3.0], &[false, true, true]).unwrap();
/// assert_eq!(solved, vec![2.0, 3.0]);
/// assert_eq!(unsolved, vec![1.0]);
/// ```
pub fn partition_by_flag<T: Clone>(
    series: &[T],
    flags: &[bool],
) -> Result<(Vec<T>, Vec<T>), AlignError> {
    ensure_same_len("solution flags", series.len(), flags.len())?;
    Ok(series
        .iter()
        .zip(flags)
        .partition_map(|(v, &solved)| {
            if solved {
                Either::Left(v.clone())
            } else {
                Either::Right(v.clone())
            }
        }))
}
