//! Workout orchestration.
//!
//! Drives a session toward a target number of sets. The session itself has
//! no notion of a target; the remaining-set countdown lives here and is what
//! the prompt loop consults between submissions.

use log::{debug, warn};
use serde::Serialize;

use crate::domain::SetEntry;
use crate::error::{ValidationError, WorkoutError};
use crate::formulas::{RepMaxEntry, calculate_one_rep_max, clamp_formula_reps, estimate_rep_maxes};
use crate::session::{Recommendation, Session, VolumeProjection};
use crate::validation::{RawSetInput, SET_COUNT, validate_set};

/// Everything derived from one accepted set.
#[derive(Debug, Clone, Serialize)]
pub struct SetOutcome {
    pub set: SetEntry,
    /// Estimated 1RM from this set alone.
    pub one_rep_max: f64,
    /// Rep-max table from this set's 1RM.
    pub rep_maxes: Vec<RepMaxEntry>,
    pub total_effective_volume: f64,
    pub remaining_sets: u32,
    /// Volume projections for the remaining sets.
    pub projections: Vec<VolumeProjection>,
    pub recommendation: Option<Recommendation>,
}

/// A session with a target set count.
#[derive(Debug, Clone)]
pub struct Workout {
    target_sets: u32,
    completed: u32,
    session: Session,
}

/// Parses and validates the target set count.
pub fn parse_set_count(raw: &str) -> Result<u32, ValidationError> {
    SET_COUNT.parse(raw).map(|n| n as u32)
}

impl Workout {
    pub fn new(target_sets: u32, session: Session) -> Self {
        Self {
            target_sets,
            completed: 0,
            session,
        }
    }

    pub fn target_sets(&self) -> u32 {
        self.target_sets
    }

    /// Sets still to be performed.
    pub fn remaining_sets(&self) -> u32 {
        self.target_sets.saturating_sub(self.completed)
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_sets() == 0
    }

    /// One-based number of the next set to perform.
    pub fn next_set_number(&self) -> u32 {
        self.completed + 1
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Validates and records one submission.
    ///
    /// The session is only replaced once every derived figure has been
    /// computed, so a failed submission leaves the workout untouched.
    pub fn submit(&mut self, input: &RawSetInput<'_>) -> Result<SetOutcome, WorkoutError> {
        if self.is_complete() {
            return Err(WorkoutError::AlreadyComplete(self.target_sets));
        }

        let set = validate_set(input).map_err(|errors| {
            warn!("Rejected set submission: {} error(s)", errors.len());
            WorkoutError::Invalid(errors)
        })?;

        let next = self.session.record_set(set);
        let one_rep_max = calculate_one_rep_max(set.weight(), clamp_formula_reps(set.reps()))?;
        let remaining_sets = self.remaining_sets() - 1;
        let projections = next.projections(remaining_sets)?;
        let recommendation = next.recommend_next_target(remaining_sets)?;

        debug!(
            "Set {}/{} accepted, {} remaining",
            self.next_set_number(),
            self.target_sets,
            remaining_sets
        );

        let outcome = SetOutcome {
            set,
            one_rep_max,
            rep_maxes: estimate_rep_maxes(one_rep_max),
            total_effective_volume: next.total_effective_volume(),
            remaining_sets,
            projections,
            recommendation,
        };

        self.session = next;
        self.completed += 1;

        Ok(outcome)
    }
}
