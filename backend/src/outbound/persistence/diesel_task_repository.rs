//! SQLite-backed `TaskRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::Task;
use crate::domain::ports::{TaskRepository, TaskRepositoryError};

use super::error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::TaskRow;
use super::pool::DbPool;
use super::schema::tasks;

/// Diesel-backed implementation of the task repository port.
#[derive(Clone)]
pub struct DieselTaskRepository {
    pool: DbPool,
}

impl DieselTaskRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> Result<T, TaskRepositoryError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, TaskRepositoryError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|err| map_basic_pool_error(err, TaskRepositoryError::connection))?;
            f(&mut conn)
        })
        .await
        .map_err(|err| TaskRepositoryError::connection(format!("task join error: {err}")))?
    }
}

fn row_to_task(row: TaskRow) -> Task {
    let TaskRow {
        id,
        robot_id,
        task_type,
        status,
        priority,
        created_at,
    } = row;

    Task {
        id,
        robot_id,
        task_type,
        status,
        priority,
        created_at: created_at.and_utc(),
    }
}

#[async_trait]
impl TaskRepository for DieselTaskRepository {
    async fn list(&self) -> Result<Vec<Task>, TaskRepositoryError> {
        self.run_blocking(|conn| {
            let rows: Vec<TaskRow> = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load(conn)
                .map_err(|err| {
                    map_basic_diesel_error(
                        err,
                        TaskRepositoryError::query,
                        TaskRepositoryError::connection,
                    )
                })?;

            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }
}
