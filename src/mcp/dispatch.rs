//! Transport-agnostic JSON-RPC dispatch
//!
//! `handle_message` takes one decoded message and always produces exactly one
//! response value, so any request/response transport can drive it.

use super::{catalog::tool_catalog, helpers::*, models::*, state::GatewayState, tools};
use crate::error::{GatewayError, ToolError};
use futures_util::FutureExt;
use serde_json::{json, Value};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tracing::{error, info, warn};

/// Handles one inbound JSON-RPC message.
///
/// Tool failures come back as successful responses carrying an `isError`
/// envelope. Only envelope problems (`-32600`), unknown methods (`-32601`)
/// and internal failures (`-32603`) produce JSON-RPC error objects.
pub async fn handle_message(state: &GatewayState, message: Value) -> Value {
    let id = request_id(&message);

    match AssertUnwindSafe(route_message(state, message))
        .catch_unwind()
        .await
    {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            error!("Internal error while dispatching (id: {}): {}", id, e);
            rpc_error(id, INTERNAL_ERROR, format!("Internal error: {}", e))
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            error!("Dispatch panicked (id: {}): {}", id, message);
            rpc_error(id, INTERNAL_ERROR, format!("Internal error: {}", message))
        }
    }
}

fn request_id(message: &Value) -> Value {
    message.get("id").cloned().unwrap_or(Value::Null)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}

async fn route_message(state: &GatewayState, message: Value) -> Result<Value, GatewayError> {
    let id = request_id(&message);

    if message.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
        warn!("Rejected message without jsonrpc 2.0 (id: {})", id);
        return Ok(rpc_error(id, INVALID_REQUEST, "Invalid Request"));
    }

    let request: JsonRpcRequest = match serde_json::from_value(message) {
        Ok(req) => req,
        Err(e) => {
            warn!("Rejected malformed request (id: {}): {}", id, e);
            return Ok(rpc_error(id, INVALID_REQUEST, "Invalid Request"));
        }
    };

    let id = request.id.unwrap_or(Value::Null);
    info!("MCP Call: {} (id: {})", request.method, id);

    // Dispatch Method
    let response = match request.method.as_str() {
        "initialize" => rpc_success(id, handle_initialize()),
        "tools/list" => rpc_success(id, handle_tools_list()?),
        "tools/call" => rpc_success(id, handle_tools_call(state, request.params).await?),
        other => {
            warn!("Unknown method: {}", other);
            rpc_error(id, METHOD_NOT_FOUND, format!("Method not found: {}", other))
        }
    };

    Ok(response)
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Result<Value, GatewayError> {
    Ok(json!({ "tools": serde_json::to_value(tool_catalog())? }))
}

/// Handles `tools/call` request. Every tool failure is folded into an
/// `isError` envelope here.
async fn handle_tools_call(
    state: &GatewayState,
    params: Option<Value>,
) -> Result<Value, GatewayError> {
    let params = match params {
        Some(p @ Value::Object(_)) => p,
        _ => {
            return Err(GatewayError::InvalidParams(
                "tools/call requires a params object".to_string(),
            ))
        }
    };
    let call: ToolCallParams = serde_json::from_value(params)
        .map_err(|e| GatewayError::InvalidParams(format!("Invalid tools/call params: {}", e)))?;

    let args = call.arguments.unwrap_or_else(|| json!({}));
    let outcome = match call.name.unwrap_or(Value::Null) {
        Value::String(name) => tools::handle_tool_call(&state.backend, &name, &args).await,
        other => Err(ToolError::UnknownTool(other.to_string())),
    };

    let envelope = outcome.unwrap_or_else(|e| {
        warn!("Tool call failed: {}", e);
        ToolResult::error(e)
    });

    Ok(serde_json::to_value(envelope)?)
}
