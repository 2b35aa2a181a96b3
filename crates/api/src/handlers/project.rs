//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use planboard_core::error::CoreError;
use planboard_core::validation::validate_input;
use planboard_db::models::project::{CreateProject, Project, UpdateProject};
use planboard_db::repositories::ProjectRepo;

use super::parse_id;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

const ENTITY: &str = "Project";

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_input(&input)?;

    let project = ProjectRepo::create(&state.store, &input).await;
    tracing::info!(project_id = %project.id, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(ProjectRepo::list(&state.store).await)
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project_id = parse_id(ENTITY, &id)?;
    let project = ProjectRepo::find_by_id(&state.store, project_id)
        .await
        .ok_or_else(|| CoreError::not_found(ENTITY, &id))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
///
/// Merge update: only fields present in the body are changed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project_id = parse_id(ENTITY, &id)?;
    validate_input(&input)?;

    let project = ProjectRepo::update(&state.store, project_id, &input)
        .await
        .ok_or_else(|| CoreError::not_found(ENTITY, &id))?;
    tracing::info!(project_id = %project.id, "Project updated");

    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Also deletes every task of the project.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let project_id = parse_id(ENTITY, &id)?;
    let removed_tasks = ProjectRepo::delete(&state.store, project_id)
        .await
        .ok_or_else(|| CoreError::not_found(ENTITY, &id))?;
    tracing::info!(%project_id, removed_tasks, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
