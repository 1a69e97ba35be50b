use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_USER_ID: &str = "test_deployment_verification";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Verifier configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    pub api_base_url: Url,
    /// Frontend checks are skipped when unset.
    pub frontend_url: Option<Url>,
    /// Owner whose stored content the retrieval check lists.
    pub user_id: String,
    pub timeout: Duration,
}

impl VerifyConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = std::env::var("VERIFY_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = Url::parse(&api_base_url)
            .with_context(|| format!("VERIFY_API_BASE_URL '{api_base_url}' is not a valid URL"))?;

        let frontend_url = match std::env::var("VERIFY_FRONTEND_URL") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                Url::parse(raw.trim())
                    .with_context(|| format!("VERIFY_FRONTEND_URL '{raw}' is not a valid URL"))?,
            ),
            _ => None,
        };

        let timeout_secs = match std::env::var("VERIFY_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("VERIFY_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url,
            frontend_url,
            user_id: std::env::var("VERIFY_USER_ID").unwrap_or_else(|_| DEFAULT_USER_ID.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn for_base_url(api_base_url: Url) -> Self {
        Self {
            api_base_url,
            frontend_url: None,
            user_id: DEFAULT_USER_ID.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
