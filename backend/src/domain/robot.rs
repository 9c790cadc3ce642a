//! Robot read and write models.
//!
//! A robot is a tracked unit with a status, a battery level, and a free-text
//! location. Write models are produced by validated constructors in the
//! inbound adapters; the store only ever sees values that passed validation.

use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Battery levels are whole percentages.
pub const BATTERY_LEVEL_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

/// Operational status of a robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RobotStatus {
    /// Actively executing work.
    Active,
    /// Powered on and awaiting work.
    Idle,
    /// Taken out of rotation for servicing.
    Maintenance,
}

impl RobotStatus {
    /// Canonical lower-case name used on the wire and in the store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idle => "idle",
            Self::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not a recognised [`RobotStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown robot status: {value}")]
pub struct UnknownRobotStatus {
    /// The rejected input.
    pub value: String,
}

impl FromStr for RobotStatus {
    type Err = UnknownRobotStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "idle" => Ok(Self::Idle),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(UnknownRobotStatus {
                value: other.to_owned(),
            }),
        }
    }
}

/// A robot as stored, including its server-assigned identity and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Robot {
    /// Auto-assigned primary key, unique and immutable.
    pub id: i32,
    /// Display name; duplicates are permitted.
    pub name: String,
    /// Current operational status.
    pub status: RobotStatus,
    /// Battery percentage within [`BATTERY_LEVEL_RANGE`].
    pub battery_level: i32,
    /// Free-text location.
    pub location: String,
    /// Server-assigned time of the last write to this row.
    pub last_updated: DateTime<Utc>,
}

/// Validated payload for creating a robot.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRobot {
    /// Non-empty display name.
    pub name: String,
    /// Initial status.
    pub status: RobotStatus,
    /// Battery percentage within [`BATTERY_LEVEL_RANGE`].
    pub battery_level: i32,
    /// Non-empty location.
    pub location: String,
    /// Server-assigned creation timestamp.
    pub last_updated: DateTime<Utc>,
}

/// Validated partial update for a robot.
///
/// Fields left as `None` keep their stored values. `last_updated` is always
/// refreshed, matching the write semantics of the store layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotPatch {
    /// Replacement status, if provided.
    pub status: Option<RobotStatus>,
    /// Replacement battery percentage, if provided.
    pub battery_level: Option<i32>,
    /// Replacement location, if provided.
    pub location: Option<String>,
    /// Server-assigned update timestamp.
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("active", RobotStatus::Active)]
    #[case("idle", RobotStatus::Idle)]
    #[case("maintenance", RobotStatus::Maintenance)]
    fn status_parses_canonical_names(#[case] input: &str, #[case] expected: RobotStatus) {
        assert_eq!(input.parse::<RobotStatus>(), Ok(expected));
        assert_eq!(expected.as_str(), input);
    }

    #[rstest]
    #[case("Active")]
    #[case("")]
    #[case("offline")]
    fn status_rejects_unknown_names(#[case] input: &str) {
        let err = input.parse::<RobotStatus>().expect_err("must reject");
        assert_eq!(err.value, input);
    }

    #[rstest]
    fn battery_range_covers_whole_percentages() {
        assert!(BATTERY_LEVEL_RANGE.contains(&0));
        assert!(BATTERY_LEVEL_RANGE.contains(&100));
        assert!(!BATTERY_LEVEL_RANGE.contains(&101));
        assert!(!BATTERY_LEVEL_RANGE.contains(&-1));
    }
}
