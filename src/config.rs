//! Command-line and environment configuration
//!
//! Every value is read once at startup; nothing is reloaded while serving.

use clap::{Args, Parser, Subcommand};
use reqwest::Url;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "user-directory", version, about = "User directory REST backend and MCP gateway")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the MCP gateway that translates tool calls into backend REST calls
    Gateway(GatewayConfig),
    /// Serve the in-memory user store over REST
    Backend(BackendConfig),
}

#[derive(Debug, Clone, Args)]
pub struct GatewayConfig {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Base location of the user backend
    #[arg(long, env = "BACKEND_URL", default_value = "http://backend:3000")]
    pub backend_url: Url,

    /// Per-request timeout for backend calls, 0 disables it
    #[arg(long, env = "BACKEND_TIMEOUT_SECS", default_value_t = 30)]
    pub backend_timeout_secs: u64,

    /// Serve JSON-RPC over stdin/stdout instead of HTTP
    #[arg(long)]
    pub stdio: bool,
}

impl GatewayConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn backend_timeout(&self) -> Option<Duration> {
        (self.backend_timeout_secs > 0).then(|| Duration::from_secs(self.backend_timeout_secs))
    }
}

#[derive(Debug, Clone, Args)]
pub struct BackendConfig {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
}

impl BackendConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
