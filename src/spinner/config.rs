//! # Spinner Configuration
//!
//! A simulation is described by a small JSON document: the hero's win rate,
//! how many runs to simulate, how many tournaments make up one run, the
//! rounding applied to each run's ROI and the payout table.
//!
//! ```json
//! {
//!   "winRate": 36.0,
//!   "runs": 100000,
//!   "rounding": 2,
//!   "tournaments": 500,
//!   "denominator": 100000000,
//!   "payouts": [
//!     {"probability": 1, "win": 11999, "lose": 0},
//!     {"probability": 75000000, "win": 2, "lose": -1},
//!     {"probability": 24999999, "win": 4, "lose": -1}
//!   ]
//! }
//! ```
//!
//! Each payout is picked with probability `probability / denominator`, so
//! the probabilities must add up to the denominator. Capitalized keys
//! (`WinRate`, `Payouts`, `Probability`, ...) are accepted as well.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Result, SpinnerError};

/// Relative tolerance used when comparing the probability sum with the
/// denominator.
pub const PROBABILITY_SUM_EPSILON: f64 = 1e-9;

/// Largest supported rounding precision.
pub const MAX_ROUNDING: u32 = 10;

/// Bound on `|roi| * 10^rounding`. Below it rounding an already rounded ROI
/// returns it unchanged.
pub const MAX_EXACT_SCALED_ROI: f64 = (1u64 << 49) as f64;

/// One weighted outcome class of the payout table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    /// Weight of this payout, relative to the configured denominator
    #[serde(alias = "Probability")]
    pub probability: f64,
    /// Multiplier paid out when the hero wins the tournament
    #[serde(alias = "Win")]
    pub win: i64,
    /// Multiplier paid out when the hero loses the tournament
    #[serde(alias = "Lose")]
    pub lose: i64,
}

impl Payout {
    pub fn new(probability: f64, win: i64, lose: i64) -> Self {
        Self {
            probability,
            win,
            lose,
        }
    }
}

/// Configuration for a spinner simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinnerConfig {
    /// Percentage (0-100) of tournaments the hero wins
    #[serde(alias = "WinRate", default = "default_win_rate")]
    pub win_rate: f64,
    /// Total number of runs requested
    #[serde(alias = "Runs", default = "default_runs")]
    pub runs: usize,
    /// Decimal digits kept for every run's ROI
    #[serde(alias = "Rounding")]
    pub rounding: u32,
    /// Tournaments averaged into one run
    #[serde(alias = "Tournaments")]
    pub tournaments: usize,
    /// Normalizing constant for the payout probabilities
    #[serde(alias = "Denominator")]
    pub denominator: f64,
    /// The payout table, in selection order
    #[serde(alias = "Payouts")]
    pub payouts: Vec<Payout>,
}

fn default_win_rate() -> f64 {
    0.0
}

fn default_runs() -> usize {
    10
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            win_rate: default_win_rate(),
            runs: default_runs(),
            rounding: 2,
            tournaments: 1,
            denominator: 1.0,
            payouts: vec![Payout::new(1.0, 2, -1)],
        }
    }
}

impl SpinnerConfig {
    /// Parse and validate a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SpinnerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: SpinnerConfig =
            serde_json::from_str(&contents).map_err(|source| SpinnerError::ParseConfig {
                path: path.display().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Sum of all configured payout probabilities
    pub fn probability_sum(&self) -> f64 {
        self.payouts.iter().map(|p| p.probability).sum()
    }

    /// Validate the configuration.
    ///
    /// Every check here is fatal: a config that fails validation never
    /// starts a simulation.
    pub fn validate(&self) -> Result<()> {
        if self.payouts.is_empty() {
            return Err(SpinnerError::ValidationError(
                "payouts must contain at least one entry".to_string(),
            ));
        }

        for (idx, payout) in self.payouts.iter().enumerate() {
            if !payout.probability.is_finite() || payout.probability < 0.0 {
                return Err(SpinnerError::ValidationError(format!(
                    "payout {} has invalid probability {}",
                    idx, payout.probability
                )));
            }
        }

        if !self.denominator.is_finite() || self.denominator <= 0.0 {
            return Err(SpinnerError::ValidationError(format!(
                "denominator must be positive, got {}",
                self.denominator
            )));
        }

        let sum = self.probability_sum();
        let tolerance = PROBABILITY_SUM_EPSILON * self.denominator.abs().max(1.0);
        if (sum - self.denominator).abs() > tolerance {
            return Err(SpinnerError::ProbabilitySum {
                sum,
                denominator: self.denominator,
            });
        }

        if !(0.0..=100.0).contains(&self.win_rate) {
            return Err(SpinnerError::ValidationError(format!(
                "win rate must be between 0 and 100, got {}",
                self.win_rate
            )));
        }

        if self.tournaments == 0 {
            return Err(SpinnerError::ValidationError(
                "tournaments must be greater than 0".to_string(),
            ));
        }

        if self.rounding > MAX_ROUNDING {
            return Err(SpinnerError::ValidationError(format!(
                "rounding must be at most {}, got {}",
                MAX_ROUNDING, self.rounding
            )));
        }

        // A run's mean ROI never exceeds the largest multiplier in magnitude.
        let max_multiplier = self.max_multiplier() as f64;
        if max_multiplier * 10f64.powi(self.rounding as i32) > MAX_EXACT_SCALED_ROI {
            return Err(SpinnerError::ValidationError(format!(
                "multiplier {} is too large to round to {} digits",
                max_multiplier, self.rounding
            )));
        }

        Ok(())
    }

    /// Largest absolute win or lose multiplier in the payout table
    pub fn max_multiplier(&self) -> u64 {
        self.payouts
            .iter()
            .map(|p| p.win.unsigned_abs().max(p.lose.unsigned_abs()))
            .max()
            .unwrap_or(0)
    }

    /// Runs each of `workers` workers executes. The remainder is dropped.
    pub fn runs_per_worker(&self, workers: usize) -> usize {
        if workers == 0 {
            return 0;
        }
        self.runs / workers
    }

    /// Number of run samples actually produced by `workers` workers
    pub fn effective_runs(&self, workers: usize) -> usize {
        workers * self.runs_per_worker(workers)
    }
}
