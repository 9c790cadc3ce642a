//! Task read model.
//!
//! Tasks are read-only from the API's perspective: the schema supports
//! creation but no handler exposes a write path.

use chrono::{DateTime, Utc};

/// A unit of work assigned to a robot.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Auto-assigned primary key.
    pub id: i32,
    /// Owning robot. Robots are never deleted, so this cannot dangle.
    pub robot_id: i32,
    /// Free-text task category.
    pub task_type: String,
    /// Free-text task status.
    pub status: String,
    /// Unranged priority; higher values are not defined to outrank lower.
    pub priority: i32,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}
