#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::error::HostError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "formpilot host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = config::HostConfig::from_env()?;
    if config.api_base_url.is_empty() {
        tracing::warn!("FORMPILOT_API_BASE_URL not set; clients default to the page origin");
    }

    let app = routes::app(&config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, api_base = %config.api_base_url, "formpilot listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
