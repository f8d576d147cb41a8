//! User Directory Library
//!
//! A minimal user directory exposed two ways: an in-memory REST backend and
//! an MCP (Model Context Protocol) gateway that translates tool calls into
//! calls against that backend.

// Domain modules
pub mod mcp;
pub mod users;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
