//! Diesel/SQLite persistence adapters implementing the domain ports.

mod diesel_fleet_stats_query;
mod diesel_robot_repository;
mod diesel_sensor_reading_repository;
mod diesel_task_repository;
mod error_mapping;
mod models;
mod pool;
pub(crate) mod schema;
mod setup;

pub use diesel_fleet_stats_query::DieselFleetStatsQuery;
pub use diesel_robot_repository::DieselRobotRepository;
pub use diesel_sensor_reading_repository::DieselSensorReadingRepository;
pub use diesel_task_repository::DieselTaskRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use setup::{MIGRATIONS, SetupError, initialise, run_migrations, seed_fleet};
