//! Transport-agnostic domain types for the fleet dashboard.

mod error;
pub mod ports;
mod robot;
mod sensor;
mod stats;
mod task;

pub use error::{Error, ErrorCode, ErrorValidationError};
pub use robot::{
    BATTERY_LEVEL_RANGE, NewRobot, Robot, RobotPatch, RobotStatus, UnknownRobotStatus,
};
pub use sensor::{SENSOR_LISTING_CAP, SensorReading};
pub use stats::FleetStats;
pub use task::Task;
