//! MCP (Model Context Protocol) HTTP route handlers
//!
//! Exposes the dispatcher on a single JSON-RPC endpoint. The HTTP layer only
//! decodes the body and picks a status code; all protocol decisions are made
//! in `dispatch`.

use super::{dispatch::handle_message, helpers::*, models::PARSE_ERROR, state::SharedState};
use axum::{
    body::Bytes, extract::State, http::StatusCode, response::IntoResponse, routing::post, Json,
    Router,
};
use serde_json::Value;
use tracing::warn;

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/mcp", post(handle_mcp)) // Standard endpoint
        .route("/mcp/", post(handle_mcp)) // Trailing slash safety
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
/// The body is parsed as JSON whatever `Content-Type` the client sent.
async fn handle_mcp(State(state): State<SharedState>, body: Bytes) -> impl IntoResponse {
    // Parse JSON-RPC Request (POST)
    let message = match serde_json::from_slice::<Value>(&body) {
        Ok(v) => v,
        Err(e) => {
            warn!("JSON Parse Error: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            );
        }
    };

    let response = handle_message(&state, message).await;
    (http_status_for(&response), Json(response))
}
