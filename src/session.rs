//! Session accumulation and next-set recommendation.
//!
//! A [`Session`] is an immutable value. Recording a set returns a new session
//! with the set appended, the retention window applied, and the total
//! effective volume recomputed from every retained set.

use std::num::NonZeroUsize;

use log::debug;
use serde::Serialize;

use crate::domain::SetEntry;
use crate::error::FormulaError;
use crate::formulas::{calculate_one_rep_max, clamp_formula_reps, estimate_rep_maxes, round2};
use crate::summary::generate_set_summary;
use crate::volume::VolumePolicy;

/// How many recorded sets a session keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Retention {
    /// Keep every set.
    #[default]
    Unbounded,
    /// Keep only the most recent `n` sets, evicting the oldest.
    MostRecent(NonZeroUsize),
}

impl Retention {
    /// Creates a retention window from an optional capacity.
    pub fn from_capacity(capacity: Option<NonZeroUsize>) -> Self {
        capacity.map_or(Retention::Unbounded, Retention::MostRecent)
    }

    fn capacity(&self) -> Option<usize> {
        match self {
            Retention::Unbounded => None,
            Retention::MostRecent(n) => Some(n.get()),
        }
    }
}

/// Projected outcome of doing every remaining set at one rep target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeProjection {
    pub reps: u32,
    pub weight: f64,
    pub effective_reps: f64,
    pub added_volume: f64,
    /// Accumulated plus added volume, rounded to two decimals.
    pub total_volume: f64,
}

/// The rep target that maximizes projected total volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub reps: u32,
    pub weight: f64,
    pub projected_total_volume: f64,
}

impl From<&VolumeProjection> for Recommendation {
    fn from(p: &VolumeProjection) -> Self {
        Self {
            reps: p.reps,
            weight: p.weight,
            projected_total_volume: p.total_volume,
        }
    }
}

/// The sets recorded during one continuous run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    sets: Vec<SetEntry>,
    policy: VolumePolicy,
    retention: Retention,
    total_effective_volume: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(VolumePolicy::default(), Retention::default())
    }
}

impl Session {
    /// Creates an empty session with a fixed volume policy and retention.
    pub fn new(policy: VolumePolicy, retention: Retention) -> Self {
        Self {
            sets: Vec::new(),
            policy,
            retention,
            total_effective_volume: 0.0,
        }
    }

    /// Returns the retained sets, oldest first.
    pub fn sets(&self) -> &[SetEntry] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn policy(&self) -> VolumePolicy {
        self.policy
    }

    pub fn retention(&self) -> Retention {
        self.retention
    }

    /// Returns the most recently recorded set.
    pub fn last_set(&self) -> Option<&SetEntry> {
        self.sets.last()
    }

    /// Sum of effective volume over all retained sets.
    pub fn total_effective_volume(&self) -> f64 {
        self.total_effective_volume
    }

    /// Returns a new session with `set` recorded.
    ///
    /// The oldest sets are evicted first when a retention window is set, and
    /// the total is recomputed from scratch so rounding error cannot build up.
    pub fn record_set(&self, set: SetEntry) -> Session {
        let mut sets = Vec::with_capacity(self.sets.len() + 1);
        sets.extend_from_slice(&self.sets);
        sets.push(set);

        if let Some(capacity) = self.retention.capacity()
            && sets.len() > capacity
        {
            let excess = sets.len() - capacity;
            sets.drain(..excess);
        }

        let total_effective_volume = sets
            .iter()
            .map(|s| self.policy.volume(s.weight(), s.reps(), s.rir()))
            .sum();

        debug!(
            "Recorded {} ({} retained, total effective volume {:.2})",
            set,
            sets.len(),
            total_effective_volume
        );

        Session {
            sets,
            policy: self.policy,
            retention: self.retention,
            total_effective_volume,
        }
    }

    /// Projects total volume for each rep target from 1 to 12, assuming all
    /// `remaining_sets` are done at that target.
    ///
    /// Loads come from the 1RM of the first retained set. Every projected set
    /// assumes the RIR of the most recent set. Returns an empty table for an
    /// empty session.
    pub fn projections(&self, remaining_sets: u32) -> Result<Vec<VolumeProjection>, FormulaError> {
        let (Some(anchor), Some(latest)) = (self.sets.first(), self.sets.last()) else {
            return Ok(Vec::new());
        };

        let one_rep_max =
            calculate_one_rep_max(anchor.weight(), clamp_formula_reps(anchor.reps()))?;
        let rir = latest.rir();

        Ok(estimate_rep_maxes(one_rep_max)
            .into_iter()
            .map(|rm| {
                let effective_reps = self.policy.effective_reps(rm.reps, rir);
                let added_volume = remaining_sets as f64 * rm.weight * effective_reps;
                VolumeProjection {
                    reps: rm.reps,
                    weight: rm.weight,
                    effective_reps,
                    added_volume,
                    total_volume: round2(self.total_effective_volume + added_volume),
                }
            })
            .collect())
    }

    /// Recommends the rep target with the highest projected total volume.
    ///
    /// Ties go to the lower rep count. Returns None for an empty session.
    pub fn recommend_next_target(
        &self,
        remaining_sets: u32,
    ) -> Result<Option<Recommendation>, FormulaError> {
        Ok(best_projection(&self.projections(remaining_sets)?).map(Recommendation::from))
    }

    /// Compact summary of the retained sets.
    pub fn summary(&self) -> String {
        generate_set_summary(&self.sets)
    }
}

/// Picks the projection with the highest total volume, preferring lower reps
/// on ties.
pub fn best_projection(projections: &[VolumeProjection]) -> Option<&VolumeProjection> {
    projections.iter().fold(None, |best, p| match best {
        Some(b) if b.total_volume >= p.total_volume => Some(b),
        _ => Some(p),
    })
}
