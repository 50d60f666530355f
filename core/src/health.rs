//! Battery health scoring.
//!
//! A pure decision procedure over the raw counters in [`BatteryInfo`]:
//! no I/O, no state, deterministic for a given input.

use crate::types::{BatteryInfo, HealthAssessment, RemainingLife};

/// Cycle count below which no wear penalty applies.
const CYCLE_PENALTY_BASELINE: u64 = 500;

/// Cycles per penalty point beyond the baseline.
const CYCLES_PER_PENALTY_POINT: u64 = 50;

/// Maximum cycle penalty.
const MAX_CYCLE_PENALTY: u64 = 15;

/// Computes a health assessment from raw battery counters.
///
/// The health percentage is defined only when both capacity counters are
/// present and non-zero; a zero capacity is treated the same as a missing
/// one, since dividing by a zero design capacity is meaningless and a zero
/// full-charge reading is abnormal data rather than a real measurement.
///
/// Remaining-life bands are inclusive on their lower bound and evaluated
/// top-down, so a health of exactly 85.0 lands in the highest band.
pub fn compute_health(battery: &BatteryInfo) -> HealthAssessment {
    let health_percentage = match (
        battery.design_capacity_mwh,
        battery.full_charge_capacity_mwh,
    ) {
        (Some(design), Some(full)) if design > 0 && full > 0 => {
            Some(round2(full as f64 / design as f64 * 100.0))
        }
        _ => None,
    };
    let degradation_percentage = health_percentage.map(|health| round2(100.0 - health));

    let cycle_penalty = match battery.cycle_count {
        Some(count) if count > CYCLE_PENALTY_BASELINE => {
            ((count - CYCLE_PENALTY_BASELINE) / CYCLES_PER_PENALTY_POINT).min(MAX_CYCLE_PENALTY)
        }
        _ => 0,
    };

    let estimated_remaining_life = match health_percentage {
        None => RemainingLife::Unknown,
        Some(health) if health >= 85.0 => RemainingLife::Months18To24,
        Some(health) if health >= 70.0 => RemainingLife::Months12To18,
        Some(health) if health >= 60.0 => RemainingLife::Months6To12,
        Some(_) => RemainingLife::Months0To6,
    };

    HealthAssessment {
        health_percentage,
        degradation_percentage,
        cycle_penalty,
        estimated_remaining_life,
    }
}

/// Rounds to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
