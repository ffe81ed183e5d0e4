use std::time::Duration;

use super::config::SpinnerConfig;
use super::histogram::RoiHistogram;

/// Results of a spinner simulation
#[derive(Debug, Clone)]
pub struct SpinResult {
    /// The configuration used for this simulation
    config: SpinnerConfig,
    /// Frequency of every rounded run ROI
    histogram: RoiHistogram,
    /// Probability weighted ROI over all runs
    total_roi: f64,
    /// Number of worker threads
    workers: usize,
    /// Number of runs actually simulated
    effective_runs: usize,
    /// Payout draws that matched no payout
    unmatched_draws: usize,
    /// Wall clock time spent simulating
    elapsed: Duration,
}

impl SpinResult {
    /// Create a new spinner result
    pub fn new(
        config: SpinnerConfig,
        histogram: RoiHistogram,
        total_roi: f64,
        workers: usize,
        effective_runs: usize,
        unmatched_draws: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            config,
            histogram,
            total_roi,
            workers,
            effective_runs,
            unmatched_draws,
            elapsed,
        }
    }

    pub fn config(&self) -> &SpinnerConfig {
        &self.config
    }

    pub fn histogram(&self) -> &RoiHistogram {
        &self.histogram
    }

    /// The expected ROI of a single run
    pub fn total_roi(&self) -> f64 {
        self.total_roi
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs asked for in the configuration
    pub fn requested_runs(&self) -> usize {
        self.config.runs
    }

    /// Runs that were simulated. Never more than [`SpinResult::requested_runs`].
    pub fn effective_runs(&self) -> usize {
        self.effective_runs
    }

    /// Tournaments counted as a zero multiplier because their payout draw
    /// matched no payout
    pub fn unmatched_draws(&self) -> usize {
        self.unmatched_draws
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Arithmetic mean of every recorded sample
    pub fn mean_roi(&self) -> f64 {
        self.histogram.total_roi(self.histogram.total_samples())
    }

    /// `(roi, probability)` pairs in ascending ROI order
    pub fn probabilities(&self) -> Vec<(f64, f64)> {
        self.histogram
            .iter_sorted()
            .map(|(roi, _)| (roi, self.histogram.probability(roi, self.effective_runs)))
            .collect()
    }

    /// Format the histogram and total ROI as plain text
    pub fn to_report(&self) -> String {
        let precision = self.config.rounding as usize;
        let mut output = String::new();

        if self.unmatched_draws > 0 {
            output.push_str(&format!(
                "Warning: {} payout draws matched no payout and were counted as 0\n\n",
                self.unmatched_draws
            ));
        }

        output.push_str("ROI: probability\n");
        for (roi, probability) in self.probabilities() {
            output.push_str(&format!("{:.*}: {:.7}\n", precision, roi, probability));
        }
        output.push('\n');
        output.push_str(&format!("Total ROI: {:.7}\n", self.total_roi));

        output
    }
}
