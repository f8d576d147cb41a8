//! User Directory Backend Module
//!
//! The REST-facing store the gateway talks to:
//! - Domain models (User, create input, error body)
//! - In-memory store with monotonically increasing ids
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::User;
pub use state::{SharedStore, UserStore};
