use rand::Rng;
use tracing::{trace, warn};

use super::config::SpinnerConfig;
use super::error::PayoutSelectionError;
use super::payout::select_payout;

/// The ROI of one run along with diagnostics collected while producing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSample {
    /// Mean multiplier over the run's tournaments, rounded to the configured
    /// precision
    pub roi: f64,
    /// Tournaments whose payout draw matched no payout and were counted as a
    /// zero multiplier
    pub unmatched_draws: usize,
}

/// Play a single tournament.
///
/// Uses one draw to pick the payout and a second, independent draw to decide
/// whether the hero won: `100 * draw < win_rate`.
pub fn play_tournament<R: Rng>(
    config: &SpinnerConfig,
    rng: &mut R,
) -> Result<i64, PayoutSelectionError> {
    let payout = select_payout(&config.payouts, config.denominator, rng.random())?;

    if is_win(config.win_rate, rng) {
        Ok(payout.win)
    } else {
        Ok(payout.lose)
    }
}

/// Play a single tournament and return its multiplier.
///
/// A payout draw that matches no payout counts as a zero multiplier instead
/// of failing the whole simulation. That skews results toward zero, so it is
/// always logged.
pub fn simulate_tournament<R: Rng>(config: &SpinnerConfig, rng: &mut R) -> i64 {
    settle_tournament(config, rng).0
}

/// The multiplier of one tournament and whether its payout draw matched.
fn settle_tournament<R: Rng>(config: &SpinnerConfig, rng: &mut R) -> (i64, bool) {
    match play_tournament(config, rng) {
        Ok(multiplier) => (multiplier, true),
        Err(err) => {
            warn!(%err, "Counting tournament as a zero multiplier");
            (0, false)
        }
    }
}

/// Run `config.tournaments` tournaments and return their mean multiplier,
/// rounded half up to `config.rounding` digits.
pub fn execute_run<R: Rng>(config: &SpinnerConfig, rng: &mut R) -> RunSample {
    let mut multiplier: i64 = 0;
    let mut unmatched_draws = 0;

    for _ in 0..config.tournaments {
        let (m, matched) = settle_tournament(config, rng);
        multiplier += m;
        if !matched {
            unmatched_draws += 1;
        }
    }

    let roi = round_to_precision(
        multiplier as f64 / config.tournaments as f64,
        config.rounding,
    );
    trace!(roi, unmatched_draws, "Completed run");

    RunSample {
        roi,
        unmatched_draws,
    }
}

/// Round half up: `floor(value * 10^precision + 0.5) / 10^precision`
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let shift = 10f64.powi(precision as i32);
    (value * shift + 0.5).floor() / shift
}

fn is_win<R: Rng>(win_rate: f64, rng: &mut R) -> bool {
    100.0 * rng.random::<f64>() < win_rate
}
