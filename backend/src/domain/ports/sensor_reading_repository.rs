//! Port for sensor reading reads.

use async_trait::async_trait;

use crate::domain::SensorReading;

use super::define_port_error;

define_port_error! {
    /// Errors raised by sensor reading repository adapters.
    pub enum SensorReadingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "sensor reading repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "sensor reading repository query failed: {message}",
    }
}

/// Port for reading recent sensor data.
///
/// Listings are ordered by observation timestamp descending (id descending
/// as the tie-break) and capped at
/// [`SENSOR_LISTING_CAP`](crate::domain::SENSOR_LISTING_CAP) rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SensorReadingRepository: Send + Sync {
    /// List the most recent readings, optionally for a single robot.
    async fn list_recent(
        &self,
        robot_id: Option<i32>,
    ) -> Result<Vec<SensorReading>, SensorReadingRepositoryError>;
}

/// Fixture implementation returning no readings.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSensorReadingRepository;

#[async_trait]
impl SensorReadingRepository for FixtureSensorReadingRepository {
    async fn list_recent(
        &self,
        _robot_id: Option<i32>,
    ) -> Result<Vec<SensorReading>, SensorReadingRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None)]
    #[case(Some(3))]
    #[tokio::test]
    async fn fixture_list_returns_empty(#[case] robot_id: Option<i32>) {
        let repo = FixtureSensorReadingRepository;
        let readings = repo
            .list_recent(robot_id)
            .await
            .expect("fixture list succeeds");
        assert!(readings.is_empty());
    }
}
