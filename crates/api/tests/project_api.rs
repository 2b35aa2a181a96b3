//! HTTP-level integration tests for the `/projects` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_project, create_task, delete, get, id_of, post_json, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_project_returns_201_with_defaults() {
    let app = common::build_test_app();
    let response = post_json(&app, "/api/v1/projects", json!({"name": "Test Project"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Test Project");
    assert_eq!(json["description"], "");
    assert!(json["id"].is_string());
    assert_eq!(json["created_at"], json["updated_at"]);
}

#[tokio::test]
async fn get_project_returns_created_payload() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/projects",
        json!({"name": "Get Me", "description": "details"}),
    )
    .await;
    let created = body_json(response).await;

    let response = get(&app, &format!("/api/v1/projects/{}", id_of(&created))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn get_nonexistent_project_returns_404() {
    let app = common::build_test_app();
    let response = get(&app, "/api/v1/projects/6f1c1c47-0f5e-4b8e-9a57-2d4c1f1c9e11").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_project_id_returns_404() {
    let app = common::build_test_app();
    let response = get(&app, "/api/v1/projects/42").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Project with id 42 not found");
}

#[tokio::test]
async fn list_projects_in_creation_order() {
    let app = common::build_test_app();
    create_project(&app, "P1").await;
    create_project(&app, "P2").await;

    let response = get(&app, "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["P1", "P2"]);
}

#[tokio::test]
async fn repeated_get_is_identical() {
    let app = common::build_test_app();
    create_project(&app, "Stable").await;

    let first = body_json(get(&app, "/api/v1/projects").await).await;
    let second = body_json(get(&app, "/api/v1/projects").await).await;
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn name_over_100_characters_is_rejected_without_storing() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/projects",
        json!({"name": "x".repeat(101)}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let health = body_json(get(&app, "/health").await).await;
    assert_eq!(health["projects_count"], 0);
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(&app, "/api/v1/projects", json!({"name": ""})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn description_over_500_characters_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/projects",
        json!({"name": "ok", "description": "d".repeat(501)}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_name_is_rejected_as_invalid_body() {
    let app = common::build_test_app();
    let response = post_json(&app, "/api/v1/projects", json!({"description": "no name"})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_BODY");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_project_merges_fields() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/projects",
        json!({"name": "Original", "description": "keep"}),
    )
    .await;
    let created = body_json(response).await;
    let id = id_of(&created);

    let uri = format!("/api/v1/projects/{id}");
    let response = put_json(&app, &uri, json!({"name": "Updated"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Updated");
    assert_eq!(json["description"], "keep");
    assert_eq!(json["created_at"], created["created_at"]);
}

#[tokio::test]
async fn update_with_invalid_name_changes_nothing() {
    let app = common::build_test_app();
    let created = create_project(&app, "Before").await;
    let id = id_of(&created);

    let response = put_json(&app, &format!("/api/v1/projects/{id}"), json!({"name": ""})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let current = body_json(get(&app, &format!("/api/v1/projects/{id}")).await).await;
    assert_eq!(current, created);
}

#[tokio::test]
async fn update_nonexistent_project_returns_404() {
    let app = common::build_test_app();
    let response = put_json(
        &app,
        "/api/v1/projects/6f1c1c47-0f5e-4b8e-9a57-2d4c1f1c9e11",
        json!({"name": "Nope"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete / cascade
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_project_returns_204_then_404() {
    let app = common::build_test_app();
    let id = id_of(&create_project(&app, "Delete Me").await);

    let response = delete(&app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(&app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_project_cascades_to_its_tasks_only() {
    let app = common::build_test_app();
    let p1 = id_of(&create_project(&app, "P1").await);
    let p2 = id_of(&create_project(&app, "P2").await);
    create_task(&app, &p1, "T1", "todo").await;
    let t2 = create_task(&app, &p2, "T2", "todo").await;

    let response = delete(&app, &format!("/api/v1/projects/{p1}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let tasks = body_json(get(&app, "/api/v1/tasks").await).await;
    assert_eq!(tasks, json!([t2]));
}

// ---------------------------------------------------------------------------
// Project-scoped task listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_tasks_of_project() {
    let app = common::build_test_app();
    let p1 = id_of(&create_project(&app, "P1").await);
    let p2 = id_of(&create_project(&app, "P2").await);
    let mine = create_task(&app, &p1, "mine", "todo").await;
    create_task(&app, &p2, "theirs", "todo").await;

    let response = get(&app, &format!("/api/v1/projects/{p1}/tasks")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([mine]));
}

#[tokio::test]
async fn list_tasks_of_unknown_project_returns_404() {
    let app = common::build_test_app();
    let response = get(
        &app,
        "/api/v1/projects/6f1c1c47-0f5e-4b8e-9a57-2d4c1f1c9e11/tasks",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_tasks_of_empty_project_returns_empty_list() {
    let app = common::build_test_app();
    let id = id_of(&create_project(&app, "Empty").await);

    let response = get(&app, &format!("/api/v1/projects/{id}/tasks")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
