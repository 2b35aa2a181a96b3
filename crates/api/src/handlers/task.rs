//! Handlers for the `/tasks` resource and the project-scoped task listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use planboard_core::error::CoreError;
use planboard_core::task_status::TaskStatus;
use planboard_core::types::parse_record_id;
use planboard_core::validation::validate_input;
use planboard_db::models::task::{CreateTask, Task, TaskFilter, UpdateTask};
use planboard_db::repositories::TaskRepo;

use super::parse_id;
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::{StatusParams, TaskListParams};
use crate::state::AppState;

const ENTITY: &str = "Task";

/// GET /api/v1/tasks?project_id=&status=
///
/// Both filters are optional and AND-combined. A `project_id` that is not
/// a valid id matches no task.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TaskListParams>,
) -> AppResult<Json<Vec<Task>>> {
    let status = params
        .status
        .as_deref()
        .map(TaskStatus::from_str_value)
        .transpose()?;

    let project_id = match params.project_id.as_deref() {
        None => None,
        Some(raw) => match parse_record_id(raw) {
            Some(id) => Some(id),
            None => return Ok(Json(Vec::new())),
        },
    };

    let filter = TaskFilter { project_id, status };
    Ok(Json(TaskRepo::list(&state.store, &filter).await))
}

/// GET /api/v1/projects/{id}/tasks
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Vec<Task>>> {
    let id = parse_id("Project", &project_id)?;
    let tasks = TaskRepo::list_by_project(&state.store, id)
        .await
        .ok_or_else(|| CoreError::not_found("Project", &project_id))?;
    Ok(Json(tasks))
}

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    validate_input(&input)?;

    let task = TaskRepo::create(&state.store, &input).await?;
    tracing::info!(
        task_id = %task.id,
        project_id = %task.project_id,
        status = %task.status,
        "Task created"
    );

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Task>> {
    let task_id = parse_id(ENTITY, &id)?;
    let task = TaskRepo::find_by_id(&state.store, task_id)
        .await
        .ok_or_else(|| CoreError::not_found(ENTITY, &id))?;
    Ok(Json(task))
}

/// PUT /api/v1/tasks/{id}
///
/// Merge update: only fields present in the body are changed. A new
/// `project_id` must name an existing project.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    let task_id = parse_id(ENTITY, &id)?;
    validate_input(&input)?;

    let task = TaskRepo::update(&state.store, task_id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, &id))?;
    tracing::info!(task_id = %task.id, "Task updated");

    Ok(Json(task))
}

/// PATCH /api/v1/tasks/{id}/status?status=
///
/// Changes only `status` (and `updated_at`).
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppQuery(params): AppQuery<StatusParams>,
) -> AppResult<Json<Task>> {
    let task_id = parse_id(ENTITY, &id)?;
    let raw = params.status.ok_or_else(|| {
        CoreError::Validation("Missing required query parameter 'status'".into())
    })?;
    let status = TaskStatus::from_str_value(&raw)?;

    let task = TaskRepo::update_status(&state.store, task_id, status)
        .await
        .ok_or_else(|| CoreError::not_found(ENTITY, &id))?;
    tracing::info!(task_id = %task.id, status = %task.status, "Task status changed");

    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let task_id = parse_id(ENTITY, &id)?;
    if TaskRepo::delete(&state.store, task_id).await {
        tracing::info!(%task_id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, &id).into())
    }
}
