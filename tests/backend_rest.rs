//! Integration tests for the user directory REST backend
//!
//! These tests drive the backend router directly and check the status codes
//! and bodies the gateway relies on.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use user_directory_mcp::router::create_backend_router;
use user_directory_mcp::users::UserStore;

fn create_test_app() -> axum::Router {
    create_backend_router(Arc::new(UserStore::new()))
}

/// Sends a request and returns the status plus the decoded body (`null` when empty)
async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, body)
}

async fn create(app: &axum::Router, name: &str, email: &str) -> Value {
    let payload = json!({ "name": name, "email": email }).to_string();
    let (status, body) = send(app, "POST", "/users", Some(&payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let app = create_test_app();

    let ada = create(&app, "Ada", "ada@x.com").await;
    let alan = create(&app, "Alan", "alan@x.com").await;

    assert_eq!(ada["id"], "1");
    assert_eq!(ada["name"], "Ada");
    assert_eq!(ada["email"], "ada@x.com");
    assert!(ada["createdAt"].as_str().unwrap().ends_with('Z'));
    assert_eq!(alan["id"], "2");
}

#[tokio::test]
async fn test_create_requires_name_and_email() {
    let app = create_test_app();

    for payload in [
        r#"{"name":"Ada"}"#,
        r#"{"email":"ada@x.com"}"#,
        r#"{"name":"","email":"ada@x.com"}"#,
        "not json",
    ] {
        let (status, body) = send(&app, "POST", "/users", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body["error"], "Name and email are required");
    }

    let (status, _) = send(&app, "POST", "/users", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = send(&app, "GET", "/users", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = create_test_app();
    let created = create(&app, "Ada", "ada@x.com").await;

    let (status, body) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = send(&app, "GET", "/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_list_in_insertion_order() {
    let app = create_test_app();
    for name in ["a", "b", "c"] {
        create(&app, name, &format!("{}@x.com", name)).await;
    }

    let (status, body) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_delete_user() {
    let app = create_test_app();
    create(&app, "Ada", "ada@x.com").await;

    let (status, body) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    // Ids are not reused after deletion
    let next = create(&app, "Grace", "grace@x.com").await;
    assert_eq!(next["id"], "2");
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
