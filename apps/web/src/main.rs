mod config;
mod errors;
mod models;
mod projector;
mod render;
mod routes;
mod source;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::render::build_environment;
use crate::routes::build_router;
use crate::source::HttpProfileSource;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{crate_target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting folio-web v{}", env!("CARGO_PKG_VERSION"));

    // One shared HTTP client for profile fetches and the image proxy
    let http = reqwest::Client::builder().build()?;
    let source = Arc::new(HttpProfileSource::new(
        config.upstream_base_url.clone(),
        http.clone(),
    ));
    info!("Profile source: {}", config.upstream_base_url);

    // Compile embedded templates up front so a bad template fails at startup
    let templates = Arc::new(build_environment()?);

    let state = AppState {
        source,
        http,
        templates,
        config: config.clone(),
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
