use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use user_directory_mcp::config::{BackendConfig, Cli, Command, GatewayConfig};
use user_directory_mcp::mcp::stdio::run_stdio;
use user_directory_mcp::mcp::GatewayState;
use user_directory_mcp::router::{create_app_router, create_backend_router};
use user_directory_mcp::users::UserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is reserved for the stdio transport.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Gateway(config) => run_gateway(config).await,
        Command::Backend(config) => run_backend(config).await,
    }
}

async fn run_gateway(config: GatewayConfig) -> anyhow::Result<()> {
    let state = GatewayState::from_config(&config).context("invalid gateway configuration")?;
    info!("Using backend at {}", state.backend.base_url());

    if config.stdio {
        return run_stdio(&state).await.context("stdio transport failed");
    }

    // Build application router with all routes and middleware
    let app = create_app_router(Arc::new(state));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("MCP server running on http://{}", addr);
    info!("MCP Inspector: Connect to http://localhost:{}/mcp", config.port);

    axum::serve(listener, app).await.context("gateway server failed")
}

async fn run_backend(config: BackendConfig) -> anyhow::Result<()> {
    // Initialize application state
    let store = Arc::new(UserStore::new());
    let app = create_backend_router(store);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Backend server running on port {}", config.port);

    axum::serve(listener, app).await.context("backend server failed")
}
