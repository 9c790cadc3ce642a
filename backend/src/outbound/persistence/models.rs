//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{robots, sensor_data, tasks};

/// Row struct for reading from the robots table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = robots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct RobotRow {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub battery_level: i32,
    pub location: String,
    pub last_updated: NaiveDateTime,
}

/// Insertable struct for creating new robot records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = robots)]
pub(crate) struct NewRobotRow<'a> {
    pub name: &'a str,
    pub status: &'a str,
    pub battery_level: i32,
    pub location: &'a str,
    pub last_updated: NaiveDateTime,
}

/// Changeset for partial robot updates.
///
/// `None` fields are skipped by Diesel, so omitted payload fields keep their
/// stored values. `last_updated` is always written.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = robots)]
pub(crate) struct RobotChangeset<'a> {
    pub status: Option<&'a str>,
    pub battery_level: Option<i32>,
    pub location: Option<&'a str>,
    pub last_updated: NaiveDateTime,
}

/// Row struct for reading from the tasks table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct TaskRow {
    pub id: i32,
    pub robot_id: i32,
    pub task_type: String,
    pub status: String,
    pub priority: i32,
    pub created_at: NaiveDateTime,
}

/// Row struct for reading from the sensor_data table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sensor_data)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct SensorReadingRow {
    pub id: i32,
    pub robot_id: i32,
    pub sensor_type: String,
    pub value: f64,
    pub timestamp: NaiveDateTime,
}
