//! API Server Binary Entry Point

use anyhow::Context;
use sow_api_server::{config, start_server, ApiState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config file (optional) + API_SERVER_ADDR override
    let config = config::load_from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = ApiState::new(config);

    tracing::info!("Starting SOW Generation API Server");
    start_server(state)
        .await
        .context("API server terminated with an error")?;

    Ok(())
}
