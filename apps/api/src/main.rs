use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use content_api::config::Config;
use content_api::routes::build_app;
use content_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "content_api={},tower_http={}",
                &config.rust_log, &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Content API v{}", env!("CARGO_PKG_VERSION"));

    if config.cors_allowed_origins.is_empty() {
        info!("CORS: permissive (CORS_ALLOWED_ORIGINS not set)");
    } else {
        info!("CORS: allowing {:?}", config.cors_allowed_origins);
    }

    let state = AppState::in_memory(config.clone());
    info!("In-memory content store initialized");

    let app = build_app(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
