//! REST API Server for Statement of Work generation
//!
//! Endpoints:
//! - `POST /generate`: render a SOW request as a DOCX download
//! - `GET /health`: liveness check

pub mod config;
mod handlers;
mod types;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use handlers::*;
pub use types::*;

/// API server state shared across handlers
#[derive(Clone, Default)]
pub struct ApiState {
    /// Loaded configuration
    pub config: Arc<Config>,
}

impl ApiState {
    /// Create new API state
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the API router with all endpoints
pub fn build_router(state: ApiState) -> Router {
    let body_limit = state.config.max_body_bytes();

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Document generation
        .route("/generate", post(generate_sow))
        // Middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API on an already bound listener
pub async fn serve(listener: TcpListener, state: ApiState) -> Result<(), std::io::Error> {
    let app = build_router(state);
    axum::serve(listener, app).await
}

/// Start the API server on the configured address
pub async fn start_server(state: ApiState) -> Result<(), std::io::Error> {
    let addr = state.config.addr();
    tracing::info!("Starting API server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    serve(listener, state).await
}
