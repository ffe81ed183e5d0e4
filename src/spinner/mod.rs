//! Monte Carlo estimate of the ROI distribution of spin style tournaments.
//!
//! Spin tournaments pay out a randomly drawn prize multiplier. Given the
//! hero's win rate and the table of possible payouts this module simulates
//! many runs of tournaments in parallel and reports how the average return
//! per run is distributed.
//!
//! - A *tournament* draws a payout from the table and then decides whether
//!   the hero won it, returning that payout's win or lose multiplier.
//! - A *run* averages a fixed number of tournaments and rounds the mean.
//! - The [`Spinner`] splits the requested runs over a pool of worker threads
//!   and folds every run into a [`RoiHistogram`].
//!
//! # Example
//!
//! ```
//! use poker_spinner::spinner::{Payout, SpinnerBuilder};
//!
//! let spinner = SpinnerBuilder::new()
//!     .win_rate(0.0)
//!     .runs(4)
//!     .tournaments(1)
//!     .denominator(1.0)
//!     .add_payout(Payout::new(1.0, 2, -1))
//!     .workers(4)
//!     .build()
//!     .unwrap();
//!
//! let result = spinner.run().unwrap();
//! assert_eq!(result.histogram().count(-1.0), 4);
//! println!("{}", result.to_report());
//! ```

mod builder;
mod config;
mod error;
mod histogram;
mod payout;
mod result;
mod runner;
mod tournament;

pub use builder::SpinnerBuilder;
pub use config::{
    MAX_EXACT_SCALED_ROI, MAX_ROUNDING, PROBABILITY_SUM_EPSILON, Payout, SpinnerConfig,
};
pub use error::{PayoutSelectionError, Result, SpinnerError};
pub use histogram::{RoiHistogram, aggregate};
pub use payout::select_payout;
pub use result::SpinResult;
pub use runner::{Spinner, default_workers};
pub use tournament::{
    RunSample, execute_run, play_tournament, round_to_precision, simulate_tournament,
};
