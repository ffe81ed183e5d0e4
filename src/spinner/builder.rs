use std::path::Path;

use super::config::{Payout, SpinnerConfig};
use super::error::{Result, SpinnerError};
use super::runner::{Spinner, default_workers};

/// Builder for constructing Spinner instances
///
/// # Example
///
/// ```
/// use poker_spinner::spinner::{Payout, SpinnerBuilder};
///
/// let spinner = SpinnerBuilder::new()
///     .win_rate(100.0)
///     .runs(4)
///     .tournaments(1)
///     .denominator(1.0)
///     .add_payout(Payout::new(1.0, 2, -1))
///     .workers(2)
///     .build()
///     .unwrap();
///
/// let result = spinner.run().unwrap();
/// assert_eq!(result.total_roi(), 2.0);
/// ```
#[derive(Debug, Default)]
pub struct SpinnerBuilder {
    base: Option<SpinnerConfig>,
    win_rate: Option<f64>,
    runs: Option<usize>,
    rounding: Option<u32>,
    tournaments: Option<usize>,
    denominator: Option<f64>,
    payouts: Vec<Payout>,
    workers: Option<usize>,
    seed: Option<u64>,
}

impl SpinnerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration. Values set on the builder
    /// override it.
    pub fn config(mut self, config: SpinnerConfig) -> Self {
        self.base = Some(config);
        self
    }

    /// Start from a configuration file
    pub fn config_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let config = SpinnerConfig::from_file(path)?;
        Ok(self.config(config))
    }

    /// Set the win rate as a percentage between 0 and 100
    pub fn win_rate(mut self, win_rate: f64) -> Self {
        self.win_rate = Some(win_rate);
        self
    }

    /// Set the total number of runs
    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = Some(runs);
        self
    }

    /// Set the number of decimal digits each run's ROI is rounded to
    pub fn rounding(mut self, rounding: u32) -> Self {
        self.rounding = Some(rounding);
        self
    }

    /// Set the number of tournaments averaged into one run
    pub fn tournaments(mut self, tournaments: usize) -> Self {
        self.tournaments = Some(tournaments);
        self
    }

    /// Set the normalizing constant for payout probabilities
    pub fn denominator(mut self, denominator: f64) -> Self {
        self.denominator = Some(denominator);
        self
    }

    /// Append a payout to the table
    pub fn add_payout(mut self, payout: Payout) -> Self {
        self.payouts.push(payout);
        self
    }

    /// Append multiple payouts to the table
    pub fn payouts(mut self, payouts: Vec<Payout>) -> Self {
        self.payouts.extend(payouts);
        self
    }

    /// Set the number of worker threads. Defaults to the available
    /// parallelism.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Seed the workers' random number generators for reproducibility
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the Spinner
    ///
    /// Payouts added on the builder replace the base configuration's table.
    /// Returns an error if the resulting configuration is invalid.
    pub fn build(self) -> Result<Spinner> {
        let mut config = self.base.unwrap_or_else(|| SpinnerConfig {
            payouts: Vec::new(),
            ..Default::default()
        });

        if let Some(win_rate) = self.win_rate {
            config.win_rate = win_rate;
        }
        if let Some(runs) = self.runs {
            config.runs = runs;
        }
        if let Some(rounding) = self.rounding {
            config.rounding = rounding;
        }
        if let Some(tournaments) = self.tournaments {
            config.tournaments = tournaments;
        }
        if let Some(denominator) = self.denominator {
            config.denominator = denominator;
        }
        if !self.payouts.is_empty() {
            config.payouts = self.payouts;
        }

        config.validate()?;

        let workers = self.workers.unwrap_or_else(default_workers);
        if workers == 0 {
            return Err(SpinnerError::ValidationError(
                "workers must be greater than 0".to_string(),
            ));
        }

        Ok(Spinner::new(config, workers, self.seed))
    }
}
