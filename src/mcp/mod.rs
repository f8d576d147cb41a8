//! Model Context Protocol (MCP) Module
//!
//! This module contains the gateway that turns MCP tool calls into backend
//! REST calls, including:
//! - Protocol models (JsonRpcRequest, ToolResult, constants)
//! - RPC helpers (success/error responses, argument extraction)
//! - Static tool catalog
//! - Backend client and tool handlers
//! - Transport-agnostic dispatch, plus HTTP and stdio transports

pub mod catalog;
pub mod client;
pub mod dispatch;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod stdio;
pub mod tools;

// Re-export commonly used types and functions
pub use client::BackendClient;
pub use dispatch::handle_message;
pub use handlers::routes;
pub use state::{GatewayState, SharedState};
