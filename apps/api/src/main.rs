mod advising;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod scholarships;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scholarships::ScholarshipCatalog;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Fails fast when no Gemini key is configured
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Advisor API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::from_config(&config)?;
    info!(
        "LLM client initialized (model: {}, timeout: {:?})",
        llm.model(),
        config.llm_timeout
    );

    let catalog = ScholarshipCatalog::load(config.scholarships_path.as_deref())?;
    match &config.scholarships_path {
        Some(path) => info!(
            "Loaded {} scholarships from {}",
            catalog.len(),
            path.display()
        ),
        None => info!("Loaded {} built-in scholarships", catalog.len()),
    }

    let state = AppState {
        llm: Arc::new(llm),
        catalog: Arc::new(catalog),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
