//! Packet-loss evaluation over capture-tool frame counts.

use crate::classify::Status;
use crate::stats::round2;

/// Loss-rate boundaries. Unlike [`crate::classify::Threshold`], both
/// comparisons are inclusive: a rate exactly on a boundary takes the
/// worse tier.
pub const PASS_LOSS_RATE: f64 = 0.06;
pub const FAIL_LOSS_RATE: f64 = 0.10;

/// Flagged-over-total frame ratio rounded to 2 decimals. `None` when
/// either count is unknown (capture tool failed) or the total is zero.
pub fn loss_rate(total: Option<u64>, flagged: Option<u64>) -> Option<f64> {
    match (total, flagged) {
        (Some(total), Some(flagged)) if total > 0 => {
            Some(round2(flagged as f64 / total as f64))
        }
        _ => None,
    }
}

pub fn classify_loss(rate: Option<f64>) -> Status {
    match rate {
        None => Status::Unknown,
        Some(r) if r >= FAIL_LOSS_RATE => Status::Fail,
        Some(r) if r >= PASS_LOSS_RATE => Status::Warning,
        Some(_) => Status::Pass,
    }
}
