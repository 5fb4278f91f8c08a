//! Strength calculation formulas for 1RM and rep-max projection.

use serde::Serialize;

use crate::error::FormulaError;

/// Intercept of the linear rep-to-intensity model.
const INTERCEPT: f64 = 1.0278;

/// Intensity lost per additional repetition.
const SLOPE: f64 = 0.0278;

/// Highest rep count for which the 1RM denominator stays positive.
///
/// `1.0278 - 0.0278 * 37` is already below zero.
pub const MAX_FORMULA_REPS: u32 = 36;

/// Rep targets covered by the rep-max table.
pub const REP_MAX_RANGE: std::ops::RangeInclusive<u32> = 1..=12;

/// Projected load for a given rep count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RepMaxEntry {
    pub reps: u32,
    pub weight: f64,
}

/// Fraction of 1RM that can be lifted for `reps` repetitions.
fn intensity(reps: u32) -> f64 {
    INTERCEPT - SLOPE * reps as f64
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clips a validated rep count into the formula's safe domain.
///
/// Input validation allows up to 99 reps, but the 1RM formula diverges well
/// before that.
pub fn clamp_formula_reps(reps: u32) -> u32 {
    reps.min(MAX_FORMULA_REPS)
}

/// Calculates estimated 1RM from weight and reps.
///
/// For reps == 1, returns the weight directly (actual 1RM). Otherwise uses
/// `weight / (1.0278 - 0.0278 × reps)`.
///
/// # Arguments
/// * `weight_kg` - Weight lifted in kilograms
/// * `reps` - Number of repetitions performed
///
/// # Errors
/// Returns FormulaError if weight is not positive, reps is zero, or reps is
/// above [`MAX_FORMULA_REPS`].
pub fn calculate_one_rep_max(weight_kg: f64, reps: u32) -> Result<f64, FormulaError> {
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(FormulaError::BadWeight(weight_kg));
    }

    if reps == 0 {
        return Err(FormulaError::BadReps(reps));
    }

    if reps > MAX_FORMULA_REPS {
        return Err(FormulaError::UnsafeReps {
            reps,
            max: MAX_FORMULA_REPS,
        });
    }

    if reps == 1 {
        return Ok(weight_kg);
    }

    Ok(weight_kg / intensity(reps))
}

/// Projects the weight liftable for each rep count from 1 to 12.
///
/// Weights are rounded to two decimals and strictly decrease as reps increase.
pub fn estimate_rep_maxes(one_rep_max: f64) -> Vec<RepMaxEntry> {
    REP_MAX_RANGE
        .map(|reps| RepMaxEntry {
            reps,
            weight: round2(one_rep_max * intensity(reps)),
        })
        .collect()
}
