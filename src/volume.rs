//! Effective volume model.
//!
//! Only reps performed close to failure count toward productive volume. A
//! policy maps a performed (reps, RIR) pair to a count of effective reps;
//! volume is that count times the load. One policy is chosen per session.

use clap::ValueEnum;
use serde::Serialize;

/// Most reps in a single set that can count as effective.
pub const MAX_EFFECTIVE_REPS: u32 = 5;

/// How effective reps are derived from reps and RIR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VolumePolicy {
    /// Reps performed beyond the RIR count, capped at five.
    #[default]
    Capped,
    /// Up to five reps, scaled down in tiers as RIR grows.
    #[value(name = "tiered")]
    TieredDecay,
}

impl VolumePolicy {
    /// Effective reps for a set of `reps` performed with `rir` in reserve.
    pub fn effective_reps(&self, reps: u32, rir: u32) -> f64 {
        match self {
            VolumePolicy::Capped => reps.saturating_sub(rir).min(MAX_EFFECTIVE_REPS) as f64,
            VolumePolicy::TieredDecay => {
                reps.min(MAX_EFFECTIVE_REPS) as f64 * proximity_scale(rir)
            }
        }
    }

    /// Effective volume of one set: load times effective reps.
    pub fn volume(&self, weight: f64, reps: u32, rir: u32) -> f64 {
        weight * self.effective_reps(reps, rir)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VolumePolicy::Capped => "capped",
            VolumePolicy::TieredDecay => "tiered decay",
        }
    }
}

impl std::fmt::Display for VolumePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Scale factor applied by the tiered policy.
fn proximity_scale(rir: u32) -> f64 {
    match rir {
        0 => 1.0,
        1..=2 => 0.85,
        3..=5 => 0.4,
        _ => 0.0,
    }
}

/// Effective reps under the default (capped) policy.
pub fn calculate_effective_reps(reps: u32, rir: u32) -> f64 {
    VolumePolicy::default().effective_reps(reps, rir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_capped_policy() {
        assert_eq!(calculate_effective_reps(10, 0), 5.0);
        assert_eq!(calculate_effective_reps(3, 0), 3.0);
        assert_eq!(calculate_effective_reps(10, 6), 0.0);
        assert_eq!(calculate_effective_reps(8, 2), 5.0);
        assert_eq!(calculate_effective_reps(6, 3), 3.0);
    }

    #[test]
    fn test_capped_policy_floors_at_zero() {
        // RIR beyond reps only happens in projections, never in recorded sets
        assert_eq!(calculate_effective_reps(2, 4), 0.0);
    }

    #[test]
    fn test_tiered_policy_tiers() {
        let policy = VolumePolicy::TieredDecay;
        assert!(approx_eq(policy.effective_reps(8, 0), 5.0, 1e-9));
        assert!(approx_eq(policy.effective_reps(8, 1), 4.25, 1e-9));
        assert!(approx_eq(policy.effective_reps(8, 2), 4.25, 1e-9));
        assert!(approx_eq(policy.effective_reps(8, 3), 2.0, 1e-9));
        assert!(approx_eq(policy.effective_reps(8, 5), 2.0, 1e-9));
        assert_eq!(policy.effective_reps(8, 6), 0.0);
    }

    #[test]
    fn test_tiered_policy_short_sets() {
        let policy = VolumePolicy::TieredDecay;
        assert!(approx_eq(policy.effective_reps(3, 0), 3.0, 1e-9));
        assert!(approx_eq(policy.effective_reps(3, 1), 2.55, 1e-9));
    }

    #[test]
    fn test_volume() {
        assert_eq!(VolumePolicy::Capped.volume(100.0, 8, 2), 500.0);
        assert!(approx_eq(
            VolumePolicy::TieredDecay.volume(100.0, 8, 2),
            425.0,
            1e-9
        ));
    }

    #[test]
    fn test_policies_differ() {
        let capped = VolumePolicy::Capped.volume(100.0, 8, 4);
        let tiered = VolumePolicy::TieredDecay.volume(100.0, 8, 4);
        assert_eq!(capped, 400.0);
        assert!(approx_eq(tiered, 200.0, 1e-9));
    }
}
