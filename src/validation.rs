//! Input validation for submitted sets.
//!
//! Raw entries arrive as text. Each field is parsed and checked against its
//! declared inclusive bounds, then reps and RIR are checked against each
//! other. All violations for one submission are collected together.

use crate::domain::SetEntry;
use crate::error::ValidationError;

/// A numeric input field with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericField {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    /// Whether fractional values are rejected.
    pub whole: bool,
}

pub const WEIGHT: NumericField = NumericField {
    name: "weight",
    min: 1.0,
    max: 999.0,
    whole: false,
};

pub const REPS: NumericField = NumericField {
    name: "reps",
    min: 1.0,
    max: 99.0,
    whole: true,
};

pub const RIR: NumericField = NumericField {
    name: "rir",
    min: 0.0,
    max: 9.0,
    whole: true,
};

/// Target number of sets for a session.
pub const SET_COUNT: NumericField = NumericField {
    name: "sets",
    min: 1.0,
    max: 20.0,
    whole: true,
};

impl NumericField {
    /// Parses raw text and checks it against this field's rules.
    pub fn parse(&self, raw: &str) -> Result<f64, ValidationError> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ValidationError::NotANumber {
                field: self.name,
                value: trimmed.to_string(),
                min: self.min,
                max: self.max,
            })?;
        self.check(value)
    }

    /// Checks an already-numeric value against this field's rules.
    pub fn check(&self, value: f64) -> Result<f64, ValidationError> {
        if !(self.min <= value && value <= self.max) {
            return Err(ValidationError::OutOfRange {
                field: self.name,
                min: self.min,
                max: self.max,
            });
        }
        if self.whole && value.fract() != 0.0 {
            return Err(ValidationError::NotWhole {
                field: self.name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

/// Outcome of validating a single numeric input.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericValidation {
    pub is_valid: bool,
    /// Empty when valid.
    pub error: String,
}

/// Validates a raw numeric entry against inclusive bounds.
///
/// Valid iff the text parses to a finite number within `[min, max]`. Any
/// failure, including text that is not a number, reports the bound range.
pub fn validate_numeric_input(raw: &str, min: f64, max: f64) -> NumericValidation {
    let field = NumericField {
        name: "value",
        min,
        max,
        whole: false,
    };

    match field.parse(raw) {
        Ok(_) => NumericValidation {
            is_valid: true,
            error: String::new(),
        },
        Err(_) => NumericValidation {
            is_valid: false,
            error: format!("Number must be between {} and {}", min, max),
        },
    }
}

/// Checks that fewer reps were held in reserve than were performed.
pub fn validate_rir(reps: u32, rir: u32) -> Option<ValidationError> {
    (rir >= reps).then_some(ValidationError::RirNotBelowReps { reps, rir })
}

/// Raw text of one set submission.
#[derive(Debug, Clone, Copy)]
pub struct RawSetInput<'a> {
    pub weight: &'a str,
    pub reps: &'a str,
    pub rir: &'a str,
}

impl<'a> RawSetInput<'a> {
    /// Splits a `weight reps rir` line. Missing fields become empty strings
    /// so they are reported as invalid rather than silently dropped.
    pub fn from_line(line: &'a str) -> Self {
        let mut parts = line.split_whitespace();
        Self {
            weight: parts.next().unwrap_or(""),
            reps: parts.next().unwrap_or(""),
            rir: parts.next().unwrap_or(""),
        }
    }
}

/// Validates a raw submission, reporting every violated rule.
pub fn validate_set(input: &RawSetInput<'_>) -> Result<SetEntry, Vec<ValidationError>> {
    collect_set(
        WEIGHT.parse(input.weight),
        REPS.parse(input.reps),
        RIR.parse(input.rir),
    )
}

/// Combines per-field results into a set, applying the RIR rule only once
/// reps and RIR both passed their own checks.
pub(crate) fn collect_set(
    weight: Result<f64, ValidationError>,
    reps: Result<f64, ValidationError>,
    rir: Result<f64, ValidationError>,
) -> Result<SetEntry, Vec<ValidationError>> {
    let rir_rule = match (&reps, &rir) {
        (Ok(reps), Ok(rir)) => validate_rir(*reps as u32, *rir as u32),
        _ => None,
    };

    match (weight, reps, rir, rir_rule) {
        (Ok(weight), Ok(reps), Ok(rir), None) => {
            Ok(SetEntry::from_validated(weight, reps as u32, rir as u32))
        }
        (weight, reps, rir, rir_rule) => Err([weight.err(), reps.err(), rir.err(), rir_rule]
            .into_iter()
            .flatten()
            .collect()),
    }
}
