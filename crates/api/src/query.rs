//! Query parameter types for API handlers.
//!
//! Status values arrive as raw strings and are parsed with
//! `TaskStatus::from_str_value`, so an unknown value is reported as a
//! validation error naming the accepted values.

use serde::Deserialize;

/// Filters for `GET /tasks` (`?project_id=&status=`), AND-combined.
#[derive(Debug, Default, Deserialize)]
pub struct TaskListParams {
    pub project_id: Option<String>,
    pub status: Option<String>,
}

/// Parameters for `PATCH /tasks/{id}/status` (`?status=`).
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub status: Option<String>,
}
