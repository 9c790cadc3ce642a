//! Port for robot persistence.

use async_trait::async_trait;

use crate::domain::{NewRobot, Robot, RobotPatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by robot repository adapters.
    pub enum RobotRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "robot repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "robot repository query failed: {message}",
    }
}

/// Port for reading and writing robots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RobotRepository: Send + Sync {
    /// List all robots ordered by id ascending.
    async fn list(&self) -> Result<Vec<Robot>, RobotRepositoryError>;

    /// Find one robot by primary key.
    async fn find_by_id(&self, id: i32) -> Result<Option<Robot>, RobotRepositoryError>;

    /// Insert a robot and return its assigned id.
    async fn create(&self, robot: NewRobot) -> Result<i32, RobotRepositoryError>;

    /// Apply a partial update. Returns `false` when no row matched `id`.
    async fn update(&self, id: i32, patch: RobotPatch) -> Result<bool, RobotRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
///
/// Behaves like an empty store: listings are empty, lookups miss, updates
/// match nothing, and creates report id 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRobotRepository;

#[async_trait]
impl RobotRepository for FixtureRobotRepository {
    async fn list(&self) -> Result<Vec<Robot>, RobotRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Robot>, RobotRepositoryError> {
        Ok(None)
    }

    async fn create(&self, _robot: NewRobot) -> Result<i32, RobotRepositoryError> {
        Ok(1)
    }

    async fn update(&self, _id: i32, _patch: RobotPatch) -> Result<bool, RobotRepositoryError> {
        Ok(false)
    }
}
