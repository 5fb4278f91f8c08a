//! Domain types for recorded training sets.

use serde::Serialize;

use crate::error::ValidationError;
use crate::validation::{self, REPS, RIR, WEIGHT};

/// One completed training set.
///
/// Only constructible through validation, so every instance satisfies
/// `rir < reps` and the declared field bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SetEntry {
    weight: f64,
    reps: u32,
    rir: u32,
}

impl SetEntry {
    /// Creates a set from already-numeric values.
    ///
    /// Every violated rule is reported, not just the first.
    pub fn new(weight: f64, reps: u32, rir: u32) -> Result<Self, Vec<ValidationError>> {
        validation::collect_set(
            WEIGHT.check(weight),
            REPS.check(reps as f64),
            RIR.check(rir as f64),
        )
    }

    /// Builds a set from values that already passed every check.
    pub(crate) fn from_validated(weight: f64, reps: u32, rir: u32) -> Self {
        Self { weight, reps, rir }
    }

    /// Weight lifted in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    /// Reps in reserve.
    pub fn rir(&self) -> u32 {
        self.rir
    }
}

impl std::fmt::Display for SetEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kg × {} @ RIR {}", self.weight, self.reps, self.rir)
    }
}
