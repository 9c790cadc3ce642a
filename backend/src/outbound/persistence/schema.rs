//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// Tracked robots.
    robots (id) {
        /// Auto-increment primary key.
        id -> Integer,
        /// Display name; duplicates permitted by design.
        name -> Text,
        /// Operational status string (active | idle | maintenance).
        status -> Text,
        /// Battery percentage, 0 to 100.
        battery_level -> Integer,
        /// Free-text location.
        location -> Text,
        /// Server-assigned time of the last write (UTC).
        last_updated -> Timestamp,
    }
}

diesel::table! {
    /// Work items assigned to robots.
    tasks (id) {
        /// Auto-increment primary key.
        id -> Integer,
        /// Owning robot.
        robot_id -> Integer,
        /// Free-text task category.
        task_type -> Text,
        /// Free-text task status.
        status -> Text,
        /// Unranged priority.
        priority -> Integer,
        /// Server-assigned creation time (UTC).
        created_at -> Timestamp,
    }
}

diesel::table! {
    /// Append-only sensor observations.
    sensor_data (id) {
        /// Auto-increment primary key.
        id -> Integer,
        /// Robot the reading is attributed to.
        robot_id -> Integer,
        /// Free-text sensor category.
        sensor_type -> Text,
        /// Observed value.
        value -> Double,
        /// Server-assigned observation time (UTC).
        timestamp -> Timestamp,
    }
}

diesel::joinable!(tasks -> robots (robot_id));
diesel::joinable!(sensor_data -> robots (robot_id));

diesel::allow_tables_to_appear_in_same_query!(robots, tasks, sensor_data);
