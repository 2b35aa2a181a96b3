use axum::extract::State;
use axum::{routing::get, Json, Router};
use planboard_core::types::{self, Timestamp};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Time the check was answered.
    pub timestamp: Timestamp,
    pub projects_count: usize,
    pub tasks_count: usize,
}

/// Service banner returned at `/`.
#[derive(Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

/// GET /health -- returns service status and record counts.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.store.stats().await;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: types::now(),
        projects_count: stats.projects_count,
        tasks_count: stats.tasks_count,
    })
}

/// GET / -- identifies the service.
async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Planboard API",
        message: "Welcome to the Planboard API - using in-memory storage",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount root-level routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
}
