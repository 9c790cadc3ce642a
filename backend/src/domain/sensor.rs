//! Sensor reading read model.
//!
//! Readings are append-only observations attributed to a robot. The API
//! exposes no write path; listings are capped and ordered newest first.

use chrono::{DateTime, Utc};

/// Maximum number of rows any sensor listing may return.
pub const SENSOR_LISTING_CAP: i64 = 100;

/// A timestamped numeric observation attributed to a robot.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// Auto-assigned primary key.
    pub id: i32,
    /// Robot the reading is attributed to.
    pub robot_id: i32,
    /// Free-text sensor category, e.g. `temperature`.
    pub sensor_type: String,
    /// Observed value.
    pub value: f64,
    /// Server-assigned observation timestamp.
    pub timestamp: DateTime<Utc>,
}
