//! REST API handlers for the user directory backend
//!
//! Implements the four CRUD endpoints the gateway calls.

use super::{
    models::{CreateUserInput, ErrorResponse},
    state::SharedStore,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{debug, info};

/// Creates routes for user-related operations
pub fn routes() -> Router<SharedStore> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).delete(delete_user))
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("User not found")),
    )
        .into_response()
}

/// Endpoint: GET /users/:id
async fn get_user(State(store): State<SharedStore>, Path(id): Path<String>) -> Response {
    match store.get(&id) {
        Some(user) => Json(user).into_response(),
        None => not_found(),
    }
}

/// Endpoint: GET /users
async fn list_users(State(store): State<SharedStore>) -> impl IntoResponse {
    Json(store.list())
}

/// Endpoint: POST /users
/// A body that does not parse is treated the same as one with missing fields.
async fn create_user(
    State(store): State<SharedStore>,
    body: Result<Json<CreateUserInput>, JsonRejection>,
) -> Response {
    let input = match body {
        Ok(Json(input)) => input,
        Err(e) => {
            debug!("Rejected user body: {}", e.body_text());
            CreateUserInput::default()
        }
    };

    let Some((name, email)) = input.into_parts() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Name and email are required")),
        )
            .into_response();
    };

    let user = store.create(name, email);
    info!(id = %user.id, total = store.len(), "Created user");
    (StatusCode::CREATED, Json(user)).into_response()
}

/// Endpoint: DELETE /users/:id
async fn delete_user(State(store): State<SharedStore>, Path(id): Path<String>) -> Response {
    if store.delete(&id) {
        info!(id = %id, total = store.len(), "Deleted user");
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found()
    }
}
