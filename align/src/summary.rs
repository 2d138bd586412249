//! descriptive statistics over aligned series

use std::cmp::Ordering;

use itertools::Itertools;

use crate::def::nan_last_cmp;
use crate::perm::sort_permutation;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSummary {
    /// number of non-NaN values
    pub count: usize,
    pub nan_count: usize,
    pub min: Option<f64>,
    pub median: Option<f64>,
    pub max: Option<f64>,
    pub total: f64,
}

impl SeriesSummary {
    pub fn of(series: &[f64]) -> Self {
        let values = series
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .sorted_by(nan_last_cmp)
            .collect_vec();

        SeriesSummary {
            count: values.len(),
            nan_count: series.len() - values.len(),
            min: values.first().copied(),
            median: median(&values),
            max: values.last().copied(),
            total: values.iter().sum(),
        }
    }
}

/// median of an already sorted slice, interpolating between the two middle
/// values for even lengths
fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    match n {
        0 => None,
        _ if n % 2 == 1 => Some(sorted[n / 2]),
        _ => Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0),
    }
}

/// how one series fares against the baseline, problem by problem
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    /// pairs where neither value is NaN
    pub pairs: usize,
    /// problems where the other series is strictly faster than the baseline
    pub faster: usize,
    pub slower: usize,
    pub equal: usize,
    /// geometric mean of `baseline / other`, over pairs where both are
    /// finite and positive
    pub speedup: Option<f64>,
    /// kendall's tau-b between the two series
    pub tau_b: Option<f64>,
}

impl Comparison {
    /// compare `other` against `baseline`. both must be index-aligned; extra
    /// entries in the longer one are ignored.
    pub fn between(baseline: &[f64], other: &[f64]) -> Self {
        let pairs = baseline
            .iter()
            .zip(other)
            .filter(|(b, o)| !b.is_nan() && !o.is_nan())
            .map(|(b, o)| (*b, *o))
            .collect_vec();

        let mut cmp = Comparison {
            pairs: pairs.len(),
            ..Default::default()
        };
        for (b, o) in &pairs {
            match nan_last_cmp(o, b) {
                Ordering::Less => cmp.faster += 1,
                Ordering::Greater => cmp.slower += 1,
                Ordering::Equal => cmp.equal += 1,
            }
        }

        let log_ratios = pairs
            .iter()
            .filter(|(b, o)| b.is_finite() && o.is_finite() && *b > 0.0 && *o > 0.0)
            .map(|(b, o)| (b / o).ln())
            .collect_vec();
        if !log_ratios.is_empty() {
            let mean = log_ratios.iter().sum::<f64>() / log_ratios.len() as f64;
            cmp.speedup = Some(mean.exp());
        }

        let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        cmp.tau_b = rank_correlation(&xs, &ys);
        cmp
    }
}

/// kendall's tau-b on dense ranks. `None` if there are fewer than two pairs
/// or the statistic is undefined (e.g. one side is constant).
pub fn rank_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let (rx, ry) = (dense_ranks(x), dense_ranks(y));
    match kendalls::tau_b(&rx, &ry) {
        Ok((tau, _significance)) if tau.is_finite() => Some(tau),
        _ => None,
    }
}

/// rank of every value, equal values sharing a rank
///
/// ```
/// # use align::summary::dense_ranks;
/// assert_eq!(dense_ranks(&[0.5, 0.1, 0.5, 2.0]), vec![1, 0, 1, 2]);
/// ```
pub fn dense_ranks(series: &[f64]) -> Vec<usize> {
    let perm = sort_permutation(series);
    let mut ranks = vec![0; series.len()];
    let mut rank = 0;
    for (k, &i) in perm.iter().enumerate() {
        if k > 0 && nan_last_cmp(&series[perm[k - 1]], &series[i]) != Ordering::Equal {
            rank += 1;
        }
        ranks[i] = rank;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_odd_series() {
        let s = SeriesSummary::of(&[3.0, 1.0, 2.0]);
        assert_eq!(s.count, 3);
        assert_eq!(s.nan_count, 0);
        assert_eq!(s.min, Some(1.0));
        assert_eq!(s.median, Some(2.0));
        assert_eq!(s.max, Some(3.0));
        assert!((s.total - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_skips_nans() {
        let s = SeriesSummary::of(&[f64::NAN, 4.0, 1.0, 2.0, 3.0]);
        assert_eq!(s.count, 4);
        assert_eq!(s.nan_count, 1);
        assert_eq!(s.median, Some(2.5));
    }

    #[test]
    fn summary_of_empty() {
        let s = SeriesSummary::of(&[]);
        assert_eq!(s, SeriesSummary::default());
    }

    #[test]
    fn comparison_counts() {
        let base = vec![1.0, 2.0, 4.0, 8.0];
        let other = vec![0.5, 2.0, 8.0, f64::NAN];
        let c = Comparison::between(&base, &other);
        assert_eq!(c.pairs, 3);
        assert_eq!(c.faster, 1);
        assert_eq!(c.equal, 1);
        assert_eq!(c.slower, 1);
        // ratios 2, 1, 0.5 -> geometric mean 1
        assert!((c.speedup.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn speedup_ignores_zero_times() {
        let c = Comparison::between(&[0.0, 4.0], &[1.0, 1.0]);
        assert!((c.speedup.unwrap() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn identical_orderings_correlate() {
        let x = vec![1.0, 5.0, 2.0, 7.0];
        let y = vec![10.0, 50.0, 20.0, 70.0];
        let tau = rank_correlation(&x, &y).unwrap();
        assert!((tau - 1.0).abs() < 1e-9);
    }

    #[test]
    fn reversed_orderings_anticorrelate() {
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![3.0, 2.0, 1.0];
        let tau = rank_correlation(&x, &y).unwrap();
        assert!((tau + 1.0).abs() < 1e-9);
    }

    #[test]
    fn correlation_needs_two_pairs() {
        assert_eq!(rank_correlation(&[1.0], &[2.0]), None);
        assert_eq!(rank_correlation(&[1.0, 2.0], &[2.0]), None);
    }
}
