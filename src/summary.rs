//! Session summary rendering.

use serde::Serialize;

use crate::domain::SetEntry;
use crate::session::Session;

/// Renders sets as a compact string grouping identical (weight, reps) pairs.
///
/// Groups keep the order in which each pair first appears. RIR is ignored.
/// A single occurrence renders as `"<weight> <reps>"`, repeats as
/// `"<weight> <count>x<reps>"`, and groups are joined by `", "`.
///
/// ```text
/// [(100, 8), (100, 8), (120, 5)]  =>  "100 2x8, 120 5"
/// ```
pub fn generate_set_summary(sets: &[SetEntry]) -> String {
    // (weight bits, reps) -> count, in first-seen order
    let mut groups: Vec<((u64, u32), f64, usize)> = Vec::new();

    for set in sets {
        let key = (set.weight().to_bits(), set.reps());
        match groups.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, _, count)) => *count += 1,
            None => groups.push((key, set.weight(), 1)),
        }
    }

    groups
        .into_iter()
        .map(|((_, reps), weight, count)| {
            if count > 1 {
                format!("{} {}x{}", weight, count, reps)
            } else {
                format!("{} {}", weight, reps)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Final report for a completed session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub sets_recorded: usize,
    pub total_effective_volume: f64,
    pub summary: String,
}

impl SessionReport {
    pub fn from_session(session: &Session) -> Self {
        Self {
            sets_recorded: session.len(),
            total_effective_volume: session.total_effective_volume(),
            summary: session.summary(),
        }
    }
}

impl std::fmt::Display for SessionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Total Effective Volume: {:.2}",
            self.total_effective_volume
        )?;
        write!(f, "Sets: {}", self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(weight: f64, reps: u32, rir: u32) -> SetEntry {
        SetEntry::new(weight, reps, rir).unwrap()
    }

    #[test]
    fn test_summary_groups_pairs() {
        let sets = vec![set(100.0, 8, 2), set(100.0, 8, 1), set(120.0, 5, 0)];
        assert_eq!(generate_set_summary(&sets), "100 2x8, 120 5");
    }

    #[test]
    fn test_summary_is_idempotent() {
        let sets = vec![set(100.0, 8, 2), set(100.0, 8, 1), set(120.0, 5, 0)];
        assert_eq!(generate_set_summary(&sets), generate_set_summary(&sets));
    }

    #[test]
    fn test_summary_keeps_first_seen_order() {
        let sets = vec![
            set(120.0, 5, 0),
            set(100.0, 8, 2),
            set(120.0, 5, 1),
            set(100.0, 6, 0),
        ];
        assert_eq!(generate_set_summary(&sets), "120 2x5, 100 8, 100 6");
    }

    #[test]
    fn test_summary_ignores_rir() {
        let sets = vec![set(80.0, 10, 0), set(80.0, 10, 3), set(80.0, 10, 5)];
        assert_eq!(generate_set_summary(&sets), "80 3x10");
    }

    #[test]
    fn test_summary_fractional_weight() {
        let sets = vec![set(102.5, 5, 1), set(102.5, 5, 1)];
        assert_eq!(generate_set_summary(&sets), "102.5 2x5");
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(generate_set_summary(&[]), "");
    }

    #[test]
    fn test_report_display() {
        let session = Session::default()
            .record_set(set(100.0, 8, 2))
            .record_set(set(100.0, 8, 2));
        let report = SessionReport::from_session(&session);

        assert_eq!(report.sets_recorded, 2);
        assert_eq!(
            report.to_string(),
            "Total Effective Volume: 1000.00\nSets: 100 2x8"
        );
    }
}
