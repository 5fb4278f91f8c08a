//! Error types for the setlog application.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when validating a submitted set.
///
/// These are never fatal: they are collected and shown to the lifter so the
/// entry can be corrected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: Number must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field}: Number must be between {min} and {max} (got {value:?})")]
    NotANumber {
        field: &'static str,
        value: String,
        min: f64,
        max: f64,
    },

    #[error("{field}: Number must be between {min} and {max} (whole numbers only, got {value})")]
    NotWhole {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("RIR cannot be equal to or greater than reps")]
    RirNotBelowReps { reps: u32, rir: u32 },
}

/// Errors that can occur in formula calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[allow(clippy::enum_variant_names)]
pub enum FormulaError {
    #[error("weight must be positive: {0}")]
    BadWeight(f64),

    #[error("repetitions must be positive: {0}")]
    BadReps(u32),

    #[error("repetitions outside the formula's safe range (max {max}): {reps}")]
    UnsafeReps { reps: u32, max: u32 },
}

/// Errors that can occur when submitting a set to a workout.
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("invalid set: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),

    #[error("all {0} sets are already recorded")]
    AlreadyComplete(u32),

    #[error(transparent)]
    Formula(#[from] FormulaError),
}

/// Errors that can occur reading or writing the last-session summary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read {}: {source}", .path.display())]
    CannotRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    CannotWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
