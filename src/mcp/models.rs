//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

pub const GET_USER_TOOL: &str = "get_user";
pub const GET_ALL_USERS_TOOL: &str = "get_all_users";
pub const CREATE_USER_TOOL: &str = "create_user";
/// Second registration of the create tool, backed by the same implementation
pub const CREATE_USER_FINISHED_TOOL: &str = "create_user_finished";
pub const DELETE_USER_TOOL: &str = "delete_user";

/// Server identifier
pub const SERVER_NAME: &str = "user-management-server";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const JSONRPC_VERSION: &str = "2.0";

// JSON-RPC error codes
pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INTERNAL_ERROR: i64 = -32603;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, must be "2.0"
    pub jsonrpc: String,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    #[serde(default)]
    pub params: Option<Value>,

    /// Request identifier
    #[serde(default)]
    pub id: Option<Value>,
}

/// Params of a `tools/call` request
#[derive(Debug, Deserialize)]
pub struct ToolCallParams {
    /// Kept raw so that a non-string name is reported as an unknown tool
    #[serde(default)]
    pub name: Option<Value>,

    #[serde(default)]
    pub arguments: Option<Value>,
}

/// One entry of the tool catalog
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// A single content block of a tool result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// Uniform envelope every tool call produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,

    #[serde(rename = "isError", default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ToolResult {
    /// Successful result carrying one text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: None,
        }
    }

    /// Failed result; the text is prefixed with `Error: `.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: format!("Error: {}", message),
            }],
            is_error: Some(true),
        }
    }

    /// Text of the first content block.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|c| match c {
            ToolContent::Text { text } => text.as_str(),
        })
    }

    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }
}
