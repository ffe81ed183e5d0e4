use std::collections::HashMap;

/// Frequency histogram of rounded run ROIs.
///
/// Keys are the already rounded ROI values. `f64` isn't `Hash`, so buckets
/// are stored by bit pattern with `-0.0` folded into `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoiHistogram {
    buckets: HashMap<u64, usize>,
    total_samples: usize,
}

fn bucket_key(roi: f64) -> u64 {
    let roi = if roi == 0.0 { 0.0 } else { roi };
    roi.to_bits()
}

impl RoiHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `roi`
    pub fn record(&mut self, roi: f64) {
        *self.buckets.entry(bucket_key(roi)).or_insert(0) += 1;
        self.total_samples += 1;
    }

    /// Number of times `roi` was recorded
    pub fn count(&self, roi: f64) -> usize {
        self.buckets.get(&bucket_key(roi)).copied().unwrap_or(0)
    }

    /// Number of distinct ROI values
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of recorded samples across all buckets
    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    /// The distinct ROI values in ascending order.
    ///
    /// The returned iterator is a one shot snapshot; call again to restart.
    pub fn sorted_keys(&self) -> impl Iterator<Item = f64> + use<> {
        let mut keys: Vec<f64> = self
            .buckets
            .keys()
            .map(|bits| f64::from_bits(*bits))
            .collect();
        keys.sort_by(f64::total_cmp);
        keys.into_iter()
    }

    /// `(roi, count)` pairs in ascending ROI order
    pub fn iter_sorted(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.sorted_keys().map(move |roi| (roi, self.count(roi)))
    }

    /// Share of `runs` that ended with `roi`
    pub fn probability(&self, roi: f64, runs: usize) -> f64 {
        if runs == 0 {
            return 0.0;
        }
        self.count(roi) as f64 / runs as f64
    }

    /// Probability weighted ROI: `sum(roi * count / runs)`.
    ///
    /// With `runs` equal to the number of recorded samples this is the mean
    /// of all samples. An empty histogram or `runs == 0` gives `0.0`.
    ///
    /// Buckets are summed in ascending order so equal histograms always give
    /// bit identical totals.
    pub fn total_roi(&self, runs: usize) -> f64 {
        if runs == 0 {
            return 0.0;
        }
        self.iter_sorted()
            .map(|(roi, count)| roi * (count as f64 / runs as f64))
            .sum()
    }
}

impl Extend<f64> for RoiHistogram {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for roi in iter {
            self.record(roi);
        }
    }
}

impl FromIterator<f64> for RoiHistogram {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut histogram = RoiHistogram::new();
        histogram.extend(iter);
        histogram
    }
}

/// Bucket every sample and compute the probability weighted total ROI over
/// `effective_runs`.
pub fn aggregate<I>(samples: I, effective_runs: usize) -> (RoiHistogram, f64)
where
    I: IntoIterator<Item = f64>,
{
    let histogram: RoiHistogram = samples.into_iter().collect();
    let total_roi = histogram.total_roi(effective_runs);
    (histogram, total_roi)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::spinner::tournament::round_to_precision;

    #[test]
    fn test_record_and_count() {
        let mut histogram = RoiHistogram::new();
        histogram.record(1.5);
        histogram.record(1.5);
        histogram.record(-1.0);

        assert_eq!(histogram.count(1.5), 2);
        assert_eq!(histogram.count(-1.0), 1);
        assert_eq!(histogram.count(3.0), 0);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.total_samples(), 3);
        assert!(!histogram.is_empty());
    }

    #[test]
    fn test_negative_zero_shares_bucket() {
        let histogram: RoiHistogram = vec![0.0, -0.0].into_iter().collect();
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.count(0.0), 2);
    }

    #[test]
    fn test_sorted_keys_ascending() {
        let histogram: RoiHistogram = vec![3.25, -1.0, 0.0, 12.5, -0.5, 3.25]
            .into_iter()
            .collect();
        let keys: Vec<f64> = histogram.sorted_keys().collect();
        assert_eq!(keys, vec![-1.0, -0.5, 0.0, 3.25, 12.5]);

        let pairs: Vec<(f64, usize)> = histogram.iter_sorted().collect();
        assert_eq!(pairs[3], (3.25, 2));
    }

    #[test]
    fn test_sorted_keys_is_one_shot() {
        let histogram: RoiHistogram = vec![2.0, 1.0].into_iter().collect();
        let mut keys = histogram.sorted_keys();
        assert_eq!(keys.next(), Some(1.0));
        assert_eq!(keys.next(), Some(2.0));
        assert_eq!(keys.next(), None);
        assert_eq!(keys.next(), None);
    }

    #[test]
    fn test_aggregate_all_wins() {
        let (histogram, total) = aggregate(vec![2.0; 4], 4);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.count(2.0), 4);
        assert_eq!(total, 2.0);
    }

    #[test]
    fn test_total_roi_matches_mean() {
        let mut rng = StdRng::seed_from_u64(8);
        let samples: Vec<f64> = (0..10_000)
            .map(|_| round_to_precision(rng.random_range(-1.0..5.0), 2))
            .collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;

        let (histogram, total) = aggregate(samples.iter().copied(), samples.len());
        assert_eq!(histogram.total_samples(), samples.len());
        assert_abs_diff_eq!(total, mean, epsilon = 1e-9);
    }

    #[test]
    fn test_total_roi_is_order_independent() {
        let samples = vec![1.0, -1.0, 2.5, 2.5, 0.25, -1.0, 4.0];
        let mut reversed = samples.clone();
        reversed.reverse();

        let (_, a) = aggregate(samples, 7);
        let (_, b) = aggregate(reversed, 7);
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let histogram: RoiHistogram = vec![1.0, 2.0, 2.0, 3.0].into_iter().collect();
        let sum: f64 = histogram
            .sorted_keys()
            .map(|roi| histogram.probability(roi, 4))
            .sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
        assert_eq!(histogram.probability(2.0, 4), 0.5);
    }

    #[test]
    fn test_empty_aggregate() {
        let (histogram, total) = aggregate(Vec::<f64>::new(), 0);
        assert!(histogram.is_empty());
        assert_eq!(total, 0.0);
        assert_eq!(histogram.probability(1.0, 0), 0.0);
    }
}
