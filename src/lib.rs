//! # Poker Spinner
//!
//! Estimates the return on investment of playing many lottery style poker
//! tournaments ("spins"), where the prize pool multiplier is drawn at random
//! before the tournament starts.
//!
//! Everything lives in the [`spinner`] module: configuration loading and
//! validation, the weighted payout selector, the per run simulation, the
//! parallel scheduler and the histogram aggregation.

pub mod spinner;
