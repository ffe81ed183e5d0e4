use super::config::Payout;
use super::error::PayoutSelectionError;

/// Select one payout from the table using a uniform draw in `[0, 1)`.
///
/// Every payout owns the half open interval `[lower, lower + probability /
/// denominator)`, laid out in table order starting at zero. The payout whose
/// interval contains `draw` is returned.
///
/// The intervals are built by summing floating point weights, so their upper
/// end may land a hair below `1.0`. A draw that falls past the last interval
/// (including a draw of exactly `1.0`) returns
/// [`PayoutSelectionError::NoMatch`] rather than being clamped to the last
/// payout.
pub fn select_payout(
    payouts: &[Payout],
    denominator: f64,
    draw: f64,
) -> Result<&Payout, PayoutSelectionError> {
    let mut lower = 0.0;
    for payout in payouts {
        let upper = lower + payout.probability / denominator;
        if lower <= draw && draw < upper {
            return Ok(payout);
        }
        lower = upper;
    }

    Err(PayoutSelectionError::NoMatch { draw })
}
