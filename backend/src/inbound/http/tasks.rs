//! Task HTTP handlers.

use actix_web::{get, web};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::TaskRepositoryError;
use crate::domain::{Error, Task};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;

/// Task as rendered on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TaskDto {
    /// Server-assigned identifier.
    pub id: i32,
    /// Owning robot.
    pub robot_id: i32,
    /// Free-text task category.
    pub task_type: String,
    /// Free-text task status.
    pub status: String,
    /// Task priority.
    pub priority: i32,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl From<Task> for TaskDto {
    fn from(value: Task) -> Self {
        Self {
            id: value.id,
            robot_id: value.robot_id,
            task_type: value.task_type,
            status: value.status,
            priority: value.priority,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

/// Response payload for the task listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskListResponse {
    /// All tasks, ordered by id ascending.
    pub tasks: Vec<TaskDto>,
}

fn map_repository_error(err: &TaskRepositoryError) -> Error {
    error!(error = %err, "task repository failure");
    Error::internal(err.to_string())
}

/// List all tasks.
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "All tasks, ordered by id", body = TaskListResponse),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tags = ["tasks"],
    operation_id = "listTasks"
)]
#[get("/tasks")]
pub async fn list_tasks(state: web::Data<HttpState>) -> ApiResult<web::Json<TaskListResponse>> {
    let tasks = state
        .tasks
        .list()
        .await
        .map_err(|err| map_repository_error(&err))?;

    Ok(web::Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
    }))
}
