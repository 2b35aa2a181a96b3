//! Project record and DTOs.

use planboard_core::types::{RecordId, Timestamp};
use planboard_core::validation::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A project held in the `projects` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(
        min = 1,
        max = MAX_NAME_LENGTH,
        message = "Project name must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(
        max = MAX_DESCRIPTION_LENGTH,
        message = "Project description must be at most 500 characters"
    ))]
    pub description: String,
}

/// DTO for updating an existing project. Absent (or `null`) fields are
/// left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(
        min = 1,
        max = MAX_NAME_LENGTH,
        message = "Project name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,
    #[validate(length(
        max = MAX_DESCRIPTION_LENGTH,
        message = "Project description must be at most 500 characters"
    ))]
    pub description: Option<String>,
}
