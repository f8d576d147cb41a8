//! Error types for the user directory gateway
//!
//! Tool-level failures (`ToolError`) are reported to callers inside a tool
//! result envelope; only `GatewayError` ever becomes a JSON-RPC error object.

use std::fmt;
use thiserror::Error;

/// The backend operation a tool was performing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetUser,
    GetAllUsers,
    CreateUser,
    DeleteUser,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::GetUser => "get user",
            Operation::GetAllUsers => "get all users",
            Operation::CreateUser => "create user",
            Operation::DeleteUser => "delete user",
        };
        f.write_str(label)
    }
}

/// Failure talking to the backend store
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend returned status {0}")]
    Status(u16),

    /// The create endpoint only distinguishes ok from not-ok.
    #[error("Failed to create user")]
    CreateRejected,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid backend URL: {0}")]
    Url(String),
}

/// Failure raised by a tool handler
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("User ID is required")]
    MissingUserId,

    #[error("Name and email are required")]
    MissingNameOrEmail,

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Failed to {operation}: {source}")]
    Backend {
        operation: Operation,
        #[source]
        source: BackendError,
    },
}

impl ToolError {
    pub fn backend(operation: Operation, source: impl Into<BackendError>) -> Self {
        ToolError::Backend {
            operation,
            source: source.into(),
        }
    }
}

/// Failure in the dispatch layer itself, surfaced as `-32603`
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    InvalidParams(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Startup configuration failure
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Backend URL cannot be used as a base: {0}")]
    InvalidBackendUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
