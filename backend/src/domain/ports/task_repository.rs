//! Port for task reads.

use async_trait::async_trait;

use crate::domain::Task;

use super::define_port_error;

define_port_error! {
    /// Errors raised by task repository adapters.
    pub enum TaskRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "task repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "task repository query failed: {message}",
    }
}

/// Port for reading tasks. The API exposes no task write path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List all tasks ordered by id ascending.
    async fn list(&self) -> Result<Vec<Task>, TaskRepositoryError>;
}

/// Fixture implementation returning an empty task list.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTaskRepository;

#[async_trait]
impl TaskRepository for FixtureTaskRepository {
    async fn list(&self) -> Result<Vec<Task>, TaskRepositoryError> {
        Ok(Vec::new())
    }
}
