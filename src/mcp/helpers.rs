//! MCP Protocol Helpers
//!
//! Helper functions for JSON-RPC envelope construction and tool argument
//! extraction.

use super::models::{INTERNAL_ERROR, INVALID_REQUEST, JSONRPC_VERSION, PARSE_ERROR};
use axum::http::StatusCode;
use serde_json::{json, Value};

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC success envelope.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC error envelope.
pub fn rpc_error(id: Value, code: i64, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// HTTP status to send alongside a JSON-RPC response.
///
/// Envelope and parse failures are client errors, internal errors are
/// server errors, and everything else (tool failures included) is a 200.
pub fn http_status_for(response: &Value) -> StatusCode {
    match response.pointer("/error/code").and_then(Value::as_i64) {
        Some(PARSE_ERROR) | Some(INVALID_REQUEST) => StatusCode::BAD_REQUEST,
        Some(INTERNAL_ERROR) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    }
}

/// Reads an identifier argument. Strings and integers are accepted;
/// empty strings and every other type count as absent.
pub fn id_arg(args: &Value, key: &str) -> Option<String> {
    match args.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a non-empty string argument.
pub fn str_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::models::METHOD_NOT_FOUND;

    #[test]
    fn status_follows_error_code() {
        assert_eq!(
            http_status_for(&rpc_error(Value::Null, INVALID_REQUEST, "Invalid Request")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            http_status_for(&rpc_error(json!(1), INTERNAL_ERROR, "Internal error: boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            http_status_for(&rpc_error(json!(1), METHOD_NOT_FOUND, "Method not found: x")),
            StatusCode::OK
        );
        assert_eq!(http_status_for(&rpc_success(json!(1), json!({}))), StatusCode::OK);
    }

    #[test]
    fn id_arg_accepts_strings_and_integers() {
        assert_eq!(id_arg(&json!({ "id": "7" }), "id"), Some("7".into()));
        assert_eq!(id_arg(&json!({ "id": 7 }), "id"), Some("7".into()));
        assert_eq!(id_arg(&json!({ "id": "" }), "id"), None);
        assert_eq!(id_arg(&json!({ "id": null }), "id"), None);
        assert_eq!(id_arg(&json!({ "id": true }), "id"), None);
        assert_eq!(id_arg(&json!({}), "id"), None);
        assert_eq!(id_arg(&Value::Null, "id"), None);
    }

    #[test]
    fn str_arg_rejects_empty_and_non_strings() {
        let args = json!({ "name": "Ada", "email": "", "age": 3 });
        assert_eq!(str_arg(&args, "name"), Some("Ada"));
        assert_eq!(str_arg(&args, "email"), None);
        assert_eq!(str_arg(&args, "age"), None);
    }
}
