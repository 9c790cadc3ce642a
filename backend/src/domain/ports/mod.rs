//! Domain ports: the seams between domain logic and adapters.
//!
//! Each port is an async trait with a thiserror-backed error enum. Fixture
//! implementations back handler tests without I/O; `mockall` mocks are
//! generated under test for expectation-style tests.

mod fleet_stats_query;
mod macros;
mod robot_repository;
mod sensor_reading_repository;
mod task_repository;

pub(crate) use macros::define_port_error;

pub use fleet_stats_query::{FixtureFleetStatsQuery, FleetStatsQuery, FleetStatsQueryError};
pub use robot_repository::{FixtureRobotRepository, RobotRepository, RobotRepositoryError};
pub use sensor_reading_repository::{
    FixtureSensorReadingRepository, SensorReadingRepository, SensorReadingRepositoryError,
};
pub use task_repository::{FixtureTaskRepository, TaskRepository, TaskRepositoryError};

#[cfg(test)]
pub use fleet_stats_query::MockFleetStatsQuery;
#[cfg(test)]
pub use robot_repository::MockRobotRepository;
#[cfg(test)]
pub use sensor_reading_repository::MockSensorReadingRepository;
#[cfg(test)]
pub use task_repository::MockTaskRepository;
