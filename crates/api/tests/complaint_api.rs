//! HTTP-level integration tests for the `/complaints` CRUD endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Test: POST /api/v1/complaints creates a complaint with status "New"
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_complaint_defaults_to_new(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/complaints",
        json!({
            "title": "Broken streetlight on Lenina 14",
            "author_phone": "79990000001"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert!(body["data"]["id"].is_i64());
    assert_eq!(body["data"]["title"], "Broken streetlight on Lenina 14");
    assert_eq!(body["data"]["status"], "New");
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/complaints rejects an empty title
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_complaint_rejects_empty_title(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/v1/complaints", json!({ "title": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/complaints rejects a malformed author email
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_complaint_rejects_bad_email(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/complaints",
        json!({ "title": "Pothole", "author_email": "not-an-email" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/complaints lists created complaints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_created_complaints(pool: SqlitePool) {
    let app = build_test_app(pool);

    for title in ["First complaint", "Second complaint"] {
        let response = post_json(app.clone(), "/api/v1/complaints", json!({ "title": title })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/v1/complaints").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    let titles: Vec<&str> = items.iter().map(|i| i["title"].as_str().unwrap()).collect();
    assert!(titles.contains(&"First complaint"));
    assert!(titles.contains(&"Second complaint"));
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/complaints/{id} returns the complaint or 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_returns_complaint_or_404(pool: SqlitePool) {
    let app = build_test_app(pool);

    let created = post_json(
        app.clone(),
        "/api/v1/complaints",
        json!({ "title": "Noise at night" }),
    )
    .await;
    let id = body_json(created).await["data"]["id"].as_i64().unwrap();

    let response = get(app.clone(), &format!("/api/v1/complaints/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["title"], "Noise at night");

    let response = get(app, "/api/v1/complaints/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/complaints/by-phone/{phone} filters by author phone
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_phone_filters_complaints(pool: SqlitePool) {
    let app = build_test_app(pool);

    post_json(
        app.clone(),
        "/api/v1/complaints",
        json!({ "title": "Mine", "author_phone": "79990000002" }),
    )
    .await;
    post_json(
        app.clone(),
        "/api/v1/complaints",
        json!({ "title": "Someone else's", "author_phone": "79990000003" }),
    )
    .await;

    let response = get(app, "/api/v1/complaints/by-phone/79990000002").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Mine");
}

// ---------------------------------------------------------------------------
// Test: PUT /api/v1/complaints/{id} patches fields and appends history
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_patches_fields_and_appends_history(pool: SqlitePool) {
    let app = build_test_app(pool);

    let created = post_json(
        app.clone(),
        "/api/v1/complaints",
        json!({ "title": "Trash not collected" }),
    )
    .await;
    let id = body_json(created).await["data"]["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/complaints/{id}"),
        json!({ "description": "Bins overflowing for a week", "assigned_to": "Sanitation dept" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["description"], "Bins overflowing for a week");
    assert_eq!(body["data"]["assigned_to"], "Sanitation dept");
    // Untouched fields survive.
    assert_eq!(body["data"]["title"], "Trash not collected");

    let response = get(app, &format!("/api/v1/complaints/{id}/history")).await;
    let body = body_json(response).await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["field_name"], "Complaint data");
}

// ---------------------------------------------------------------------------
// Test: DELETE /api/v1/complaints/{id} removes the row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_complaint(pool: SqlitePool) {
    let app = build_test_app(pool);

    let created = post_json(
        app.clone(),
        "/api/v1/complaints",
        json!({ "title": "To be withdrawn" }),
    )
    .await;
    let id = body_json(created).await["data"]["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/v1/complaints/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/v1/complaints/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A second delete is a 404, not a silent success.
    let response = delete(app, &format!("/api/v1/complaints/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
