use anyhow::{Context, Result};

const DEFAULT_MAX_AGENT_RESPONSE_BYTES: usize = 64 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Empty means permissive CORS.
    pub cors_allowed_origins: Vec<String>,
    pub max_agent_response_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_allowed_origins: parse_origins(
                &std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            ),
            max_agent_response_bytes: match std::env::var("MAX_AGENT_RESPONSE_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_AGENT_RESPONSE_BYTES must be a positive integer")?,
                Err(_) => DEFAULT_MAX_AGENT_RESPONSE_BYTES,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            cors_allowed_origins: Vec::new(),
            max_agent_response_bytes: DEFAULT_MAX_AGENT_RESPONSE_BYTES,
        }
    }
}

/// Splits a comma-separated origin list, dropping blanks and trailing slashes.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
