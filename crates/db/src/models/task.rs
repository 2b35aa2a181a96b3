//! Task record, DTOs and list filter.

use planboard_core::task_status::TaskStatus;
use planboard_core::types::{RecordId, Timestamp};
use planboard_core::validation::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A task held in the `tasks` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub project_id: RecordId,
    pub status: TaskStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
///
/// `project_id` stays a raw string here: a malformed id names no project
/// and is reported as a missing project, not a malformed body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(length(
        min = 1,
        max = MAX_NAME_LENGTH,
        message = "Task title must be between 1 and 100 characters"
    ))]
    pub title: String,
    #[serde(default)]
    #[validate(length(
        max = MAX_DESCRIPTION_LENGTH,
        message = "Task description must be at most 500 characters"
    ))]
    pub description: String,
    pub project_id: String,
    /// Defaults to `todo` if omitted.
    #[serde(default)]
    pub status: TaskStatus,
}

/// DTO for updating an existing task. Absent (or `null`) fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTask {
    #[validate(length(
        min = 1,
        max = MAX_NAME_LENGTH,
        message = "Task title must be between 1 and 100 characters"
    ))]
    pub title: Option<String>,
    #[validate(length(
        max = MAX_DESCRIPTION_LENGTH,
        message = "Task description must be at most 500 characters"
    ))]
    pub description: Option<String>,
    pub project_id: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Optional, AND-combined criteria for listing tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFilter {
    pub project_id: Option<RecordId>,
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Whether `task` satisfies every criterion that is set.
    pub fn matches(&self, task: &Task) -> bool {
        self.project_id.is_none_or(|id| task.project_id == id)
            && self.status.is_none_or(|status| task.status == status)
    }
}
