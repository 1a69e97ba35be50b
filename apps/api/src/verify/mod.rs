//! Deployment verifier: runs HTTP, TLS, DNS, CORS and parser checks against a
//! running Content API and reports one outcome per check.

pub mod checks;
pub mod config;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

pub use checks::Verifier;
pub use config::VerifyConfig;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(String),

    #[error("DNS resolution failed: {0}")]
    Dns(String),

    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
    Skip,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    pub fn pass(name: &'static str, message: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Pass, message)
    }

    pub fn warn(name: &'static str, message: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Warn, message)
    }

    pub fn fail(name: &'static str, message: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Fail, message)
    }

    pub fn skip(name: &'static str, message: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Skip, message)
    }

    fn new(name: &'static str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name,
            status,
            message: message.into(),
        }
    }

    fn log(&self) {
        match self.status {
            CheckStatus::Pass => info!(check = self.name, "PASS: {}", self.message),
            CheckStatus::Warn => warn!(check = self.name, "WARN: {}", self.message),
            CheckStatus::Fail => error!(check = self.name, "FAIL: {}", self.message),
            CheckStatus::Skip => info!(check = self.name, "SKIP: {}", self.message),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationReport {
    pub results: Vec<CheckResult>,
}

impl VerificationReport {
    pub fn record(&mut self, result: CheckResult) {
        result.log();
        self.results.push(result);
    }

    pub fn count(&self, status: CheckStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    pub fn has_failures(&self) -> bool {
        self.count(CheckStatus::Fail) > 0
    }

    pub fn status_of(&self, name: &str) -> Option<CheckStatus> {
        self.results.iter().find(|r| r.name == name).map(|r| r.status)
    }

    pub fn log_summary(&self) {
        info!(
            total = self.results.len(),
            passed = self.count(CheckStatus::Pass),
            warned = self.count(CheckStatus::Warn),
            failed = self.count(CheckStatus::Fail),
            skipped = self.count(CheckStatus::Skip),
            "Verification summary"
        );
        if self.has_failures() {
            let failed: Vec<&str> = self
                .results
                .iter()
                .filter(|r| r.status == CheckStatus::Fail)
                .map(|r| r.name)
                .collect();
            error!("Failed checks: {}", failed.join(", "));
        } else {
            info!("All checks passed");
        }
    }
}
