mod config;
mod errors;
mod llm_client;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CompletionService, GroqClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Parser API v{}", env!("CARGO_PKG_VERSION"));

    // A missing key disables parsing but keeps the server (and /health) up.
    let completion: Option<Arc<dyn CompletionService>> = match &config.groq_api_key {
        Some(key) => {
            let client = GroqClient::new(key.clone(), config.groq_api_url.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(client))
        }
        None => {
            warn!("GROQ_API_KEY not set; resume parsing is disabled");
            None
        }
    };

    let state = AppState { completion };

    let app = build_router(state, config.max_upload_bytes).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
