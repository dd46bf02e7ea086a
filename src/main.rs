use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use schooldesk::router::init_router;
use schooldesk::state::init_app_state;
use schooldesk_config::{LoggingConfig, ServerConfig};
use schooldesk_observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing(&LoggingConfig::from_env());

    let server_config = ServerConfig::from_env();
    let state = init_app_state(&server_config)?;
    info!(schools = state.store.len().await, "Tenant directory ready");

    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(address = %address, "Server running");
    info!("OpenAPI document available at /api-docs/openapi.json");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
