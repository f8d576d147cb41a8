//! Routing module for the gateway and backend servers

use crate::mcp::SharedState;
use crate::users::SharedStore;
use axum::{body::Body, extract::Request, middleware::Next, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

/// Creates the gateway router: the MCP endpoint plus a health check.
pub fn create_app_router(state: SharedState) -> Router {
    let routes = Router::new()
        .merge(crate::mcp::routes())
        .with_state(state);
    with_middleware(routes)
}

/// Creates the backend router: the user REST surface plus a health check.
pub fn create_backend_router(store: SharedStore) -> Router {
    let routes = Router::new()
        .merge(crate::users::routes())
        .with_state(store);
    with_middleware(routes)
}

/// Endpoint: GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn with_middleware(routes: Router) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let request_id = Uuid::new_v4().simple().to_string();
        let method = req.method().clone();
        let uri = req.uri().clone();
        info!(%request_id, "REQ: {} {}", method, uri);

        let res = next.run(req).await;
        if !res.status().is_success() {
            warn!(%request_id, "RES: {} {} -> {}", method, uri, res.status());
        }
        res
    });

    // Middleware: CORS (Permissive, any client may call)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    routes
        .route("/health", get(health))
        .layer(log_layer)
        .layer(cors_layer)
}
