//! Fleet-wide aggregation results.
//!
//! Totals are derived from the per-status counts so the invariant
//! `total == sum(counts)` holds by construction rather than by query
//! coincidence.

use std::collections::BTreeMap;

/// Summary statistics over the current store contents.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetStats {
    /// Robot count per status string.
    pub robot_status_counts: BTreeMap<String, i64>,
    /// Arithmetic mean of robot battery levels, rounded to two decimal
    /// places; 0 when no robots exist.
    pub average_battery_level: f64,
    /// Task count per status string.
    pub task_status_counts: BTreeMap<String, i64>,
    /// Total robot count, equal to the sum of `robot_status_counts` values.
    pub total_robots: i64,
    /// Total task count, equal to the sum of `task_status_counts` values.
    pub total_tasks: i64,
}

impl FleetStats {
    /// Assemble statistics from per-status counts and raw battery levels.
    #[must_use]
    pub fn from_parts(
        robot_status_counts: BTreeMap<String, i64>,
        battery_levels: &[i32],
        task_status_counts: BTreeMap<String, i64>,
    ) -> Self {
        let total_robots = robot_status_counts.values().sum();
        let total_tasks = task_status_counts.values().sum();
        Self {
            robot_status_counts,
            average_battery_level: mean_to_two_places(battery_levels),
            task_status_counts,
            total_robots,
            total_tasks,
        }
    }
}

/// Mean of the inputs rounded to two decimal places; 0 for an empty slice.
fn mean_to_two_places(values: &[i32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: i64 = values.iter().map(|value| i64::from(*value)).sum();
    let mean = sum as f64 / values.len() as f64;
    (mean * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn counts(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
        pairs
            .iter()
            .map(|(status, count)| ((*status).to_owned(), *count))
            .collect()
    }

    #[rstest]
    fn totals_are_sums_of_status_counts() {
        let stats = FleetStats::from_parts(
            counts(&[("active", 3), ("idle", 1), ("maintenance", 1)]),
            &[85, 92, 67, 45, 78],
            counts(&[("pending", 2), ("done", 4)]),
        );
        assert_eq!(stats.total_robots, 5);
        assert_eq!(stats.total_tasks, 6);
    }

    #[rstest]
    fn average_battery_rounds_to_two_places() {
        let stats = FleetStats::from_parts(counts(&[("active", 3)]), &[1, 1, 0], counts(&[]));
        // 2 / 3 = 0.666... -> 0.67
        assert_eq!(stats.average_battery_level, 0.67);
    }

    #[rstest]
    fn empty_fleet_yields_zeroes() {
        let stats = FleetStats::from_parts(BTreeMap::new(), &[], BTreeMap::new());
        assert_eq!(stats.average_battery_level, 0.0);
        assert_eq!(stats.total_robots, 0);
        assert_eq!(stats.total_tasks, 0);
        assert!(stats.task_status_counts.is_empty());
    }

    #[rstest]
    fn seed_fleet_average_matches_hand_computation() {
        let stats = FleetStats::from_parts(
            counts(&[("active", 3), ("idle", 1), ("maintenance", 1)]),
            &[85, 92, 67, 45, 78],
            counts(&[]),
        );
        assert_eq!(stats.average_battery_level, 73.4);
    }
}
