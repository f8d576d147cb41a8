//! Gateway State
//!
//! The gateway keeps no per-request state; the only thing it carries is the
//! backend client configured at startup.

use super::client::BackendClient;
use crate::config::GatewayConfig;
use crate::error::ConfigError;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<GatewayState>;

pub struct GatewayState {
    pub backend: BackendClient,
}

impl GatewayState {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self, ConfigError> {
        let backend = BackendClient::new(config.backend_url.clone(), config.backend_timeout())?;
        Ok(Self::new(backend))
    }
}
