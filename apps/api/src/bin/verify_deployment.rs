use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use content_api::verify::{Verifier, VerifyConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = VerifyConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("content_api=info,verify_deployment=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!("API base URL: {}", config.api_base_url);
    match &config.frontend_url {
        Some(url) => info!("Frontend URL: {url}"),
        None => info!("Frontend URL: not set"),
    }
    info!("Test user ID: {}", config.user_id);

    let verifier = Verifier::new(config).context("Failed to build HTTP client")?;
    let report = verifier.run_all().await;

    if report.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}
