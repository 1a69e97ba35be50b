//! Individual deployment checks.
//!
//! Every check turns transport and decoding errors into a `Fail` outcome so
//! one broken endpoint never aborts the run.

use std::collections::{BTreeMap, BTreeSet};

use reqwest::{header, redirect, Client, Method, StatusCode, Url};
use serde_json::{json, Value};
use tracing::debug;

use crate::content::models::{ParseResponse, StoredContent};
use crate::parser::fixtures::MULTI_PLATFORM_SAMPLE;
use crate::parser::Platform;
use crate::verify::{CheckResult, CheckStatus, VerificationReport, VerifyConfig, VerifyError};

/// Origin sent in the CORS preflight when no frontend URL is configured.
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

pub struct Verifier {
    config: VerifyConfig,
    /// `api_base_url` with its path ending in `/`, so joins keep any prefix.
    base: Url,
    client: Client,
    /// Same settings, but redirects are returned instead of followed.
    no_redirect: Client,
}

impl Verifier {
    pub fn new(config: VerifyConfig) -> Result<Self, VerifyError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let no_redirect = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect::Policy::none())
            .build()?;
        let base = with_trailing_slash(config.api_base_url.clone());
        Ok(Self {
            config,
            base,
            client,
            no_redirect,
        })
    }

    /// Runs every check in order. Once the health check fails, the rest are
    /// recorded as skipped.
    pub async fn run_all(&self) -> VerificationReport {
        let mut report = VerificationReport::default();

        report.record(self.check_dns_resolution().await);

        let health = self.check_health().await;
        let healthy = health.status == CheckStatus::Pass;
        report.record(health);

        if !healthy {
            for name in [
                "https",
                "http_redirect",
                "api_endpoints",
                "api_docs",
                "frontend",
                "websocket",
                "cors",
                "error_handling",
                "parser_sample",
                "content_retrieval",
                "media_urls",
            ] {
                report.record(CheckResult::skip(name, "backend is not healthy"));
            }
            report.log_summary();
            return report;
        }

        report.record(self.check_https().await);
        report.record(self.check_http_redirect().await);
        report.record(self.check_api_endpoints().await);
        report.record(self.check_api_docs().await);
        report.record(self.check_frontend().await);
        report.record(self.check_websocket().await);
        report.record(self.check_cors().await);
        report.record(self.check_error_handling().await);
        report.record(self.check_parser_sample().await);

        let (retrieval, items) = self.check_content_retrieval().await;
        report.record(retrieval);
        report.record(check_media_urls(items.as_deref()));

        report.log_summary();
        report
    }

    /// Resolves `path` below the base URL. A leading `/` does not reset the
    /// base path, so `"/health"` under `https://host/prod` is `/prod/health`.
    fn endpoint(&self, path: &str) -> Result<Url, VerifyError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| VerifyError::Url(format!("{path}: {e}")))
    }

    async fn get_json(&self, path: &str) -> Result<(StatusCode, Value), VerifyError> {
        let response = self.client.get(self.endpoint(path)?).send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Ok((status, body))
    }

    pub async fn check_dns_resolution(&self) -> CheckResult {
        const NAME: &str = "dns_resolution";
        let url = &self.config.api_base_url;

        let Some(host) = url.host_str() else {
            return CheckResult::fail(NAME, format!("{url} has no host"));
        };
        let port = url.port_or_known_default().unwrap_or(80);

        match resolve(host, port).await {
            Ok(addrs) if addrs.is_empty() => {
                CheckResult::fail(NAME, format!("{host} resolved to no addresses"))
            }
            Ok(addrs) => {
                CheckResult::pass(NAME, format!("{host} resolved to {}", addrs.join(", ")))
            }
            Err(e) => CheckResult::fail(NAME, e.to_string()),
        }
    }

    pub async fn check_health(&self) -> CheckResult {
        const NAME: &str = "health";
        match self.get_json("/health").await {
            Ok((status, body)) if status == StatusCode::OK && body["status"] == "healthy" => {
                CheckResult::pass(NAME, format!("backend is healthy: {body}"))
            }
            Ok((status, body)) if status == StatusCode::OK => {
                CheckResult::fail(NAME, format!("unexpected health status: {body}"))
            }
            Ok((status, _)) => CheckResult::fail(NAME, format!("health check returned {status}")),
            Err(e) => CheckResult::fail(NAME, format!("failed to connect to backend: {e}")),
        }
    }

    pub async fn check_https(&self) -> CheckResult {
        const NAME: &str = "https";
        if self.config.api_base_url.scheme() != "https" {
            return CheckResult::skip(NAME, "API base URL is not https");
        }

        let url = match self.endpoint("/health") {
            Ok(url) => url,
            Err(e) => return CheckResult::fail(NAME, e.to_string()),
        };

        // reqwest rejects untrusted certificates, so reaching here means the chain is valid.
        match self.client.get(url).send().await {
            Ok(response) if response.url().scheme() != "https" => {
                CheckResult::fail(NAME, format!("request ended on {}", response.url()))
            }
            Ok(response) if response.status() == StatusCode::OK => {
                CheckResult::pass(NAME, "HTTPS is configured and the certificate is trusted")
            }
            Ok(response) => CheckResult::fail(
                NAME,
                format!("TLS handshake succeeded but health returned {}", response.status()),
            ),
            Err(e) => CheckResult::fail(NAME, format!("TLS request failed: {e}")),
        }
    }

    pub async fn check_http_redirect(&self) -> CheckResult {
        const NAME: &str = "http_redirect";
        if self.config.api_base_url.scheme() != "https" {
            return CheckResult::skip(NAME, "API base URL is not https");
        }

        let mut url = match self.endpoint("/health") {
            Ok(url) => url,
            Err(e) => return CheckResult::fail(NAME, e.to_string()),
        };
        if url.set_scheme("http").is_err() || url.set_port(None).is_err() {
            return CheckResult::fail(NAME, format!("cannot derive http URL from {url}"));
        }

        let response = match self.no_redirect.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => return CheckResult::fail(NAME, format!("{url}: {e}")),
        };

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if status != StatusCode::MOVED_PERMANENTLY && status != StatusCode::PERMANENT_REDIRECT {
            return CheckResult::fail(NAME, format!("expected 301/308 from {url}, got {status}"));
        }
        if !location.starts_with("https://") {
            return CheckResult::fail(NAME, format!("redirect target is not https: '{location}'"));
        }
        CheckResult::pass(NAME, format!("{status} redirect to {location}"))
    }

    pub async fn check_api_endpoints(&self) -> CheckResult {
        const NAME: &str = "api_endpoints";
        let mut unexpected = Vec::new();
        let mut seen = Vec::new();

        for path in ["/health", "/api/health"] {
            match self.get_json(path).await {
                Ok((status, _)) if status == StatusCode::OK || status == StatusCode::NOT_FOUND => {
                    seen.push(format!("GET {path} {}", status.as_u16()));
                }
                Ok((status, _)) => unexpected.push(format!("GET {path} {}", status.as_u16())),
                Err(e) => return CheckResult::fail(NAME, format!("GET {path}: {e}")),
            }
        }

        if unexpected.is_empty() {
            CheckResult::pass(NAME, seen.join(", "))
        } else {
            CheckResult::warn(NAME, format!("unexpected status: {}", unexpected.join(", ")))
        }
    }

    /// Interactive API docs are optional; their absence only warns.
    pub async fn check_api_docs(&self) -> CheckResult {
        const NAME: &str = "api_docs";
        let url = match self.endpoint("/docs") {
            Ok(url) => url,
            Err(e) => return CheckResult::fail(NAME, e.to_string()),
        };

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return CheckResult::fail(NAME, format!("GET /docs: {e}")),
        };
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return CheckResult::warn(NAME, "API docs are not published at /docs");
        }
        if status != StatusCode::OK {
            return CheckResult::warn(NAME, format!("GET /docs returned {status}"));
        }

        match response.text().await {
            Ok(body) if looks_like_api_docs(&body) => {
                CheckResult::pass(NAME, "API docs are accessible at /docs")
            }
            Ok(_) => CheckResult::warn(NAME, "/docs does not mention swagger or openapi"),
            Err(e) => CheckResult::fail(NAME, e.to_string()),
        }
    }

    pub async fn check_frontend(&self) -> CheckResult {
        const NAME: &str = "frontend";
        let Some(url) = self.config.frontend_url.clone() else {
            return CheckResult::skip(NAME, "VERIFY_FRONTEND_URL not set");
        };

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => return CheckResult::fail(NAME, format!("{url}: {e}")),
        };
        let status = response.status();
        if status != StatusCode::OK {
            return CheckResult::fail(NAME, format!("{url} returned {status}"));
        }

        match response.text().await {
            Ok(body) if looks_like_html(&body) => {
                CheckResult::pass(NAME, format!("{url} serves HTML ({} bytes)", body.len()))
            }
            Ok(_) => CheckResult::fail(NAME, format!("{url} returned non-HTML content")),
            Err(e) => CheckResult::fail(NAME, e.to_string()),
        }
    }

    /// A plain GET against a WebSocket route is answered with 426 or 400.
    pub async fn check_websocket(&self) -> CheckResult {
        const NAME: &str = "websocket";
        let url = match self.endpoint("/ws/stream-generation") {
            Ok(url) => url,
            Err(e) => return CheckResult::fail(NAME, e.to_string()),
        };

        let status = match self.client.get(url).send().await {
            Ok(response) => response.status(),
            Err(e) => return CheckResult::fail(NAME, format!("WebSocket check failed: {e}")),
        };

        if status == StatusCode::UPGRADE_REQUIRED {
            CheckResult::pass(NAME, "WebSocket endpoint is configured (426 Upgrade Required)")
        } else if status == StatusCode::BAD_REQUEST {
            CheckResult::pass(NAME, "WebSocket endpoint exists (400 for plain HTTP)")
        } else if status == StatusCode::NOT_FOUND {
            CheckResult::warn(NAME, "WebSocket endpoint may not be configured (404)")
        } else {
            CheckResult::warn(NAME, format!("WebSocket endpoint returned {status}"))
        }
    }

    pub async fn check_cors(&self) -> CheckResult {
        const NAME: &str = "cors";
        let origin = self
            .config
            .frontend_url
            .as_ref()
            .map(|url| url.origin().ascii_serialization())
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let url = match self.endpoint("/api/content/parse") {
            Ok(url) => url,
            Err(e) => return CheckResult::fail(NAME, e.to_string()),
        };

        let response = self
            .client
            .request(Method::OPTIONS, url)
            .header(header::ORIGIN, &origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .send()
            .await;

        match response {
            Ok(response) => match response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN) {
                Some(allowed) => CheckResult::pass(
                    NAME,
                    format!("allowed origin: {}", allowed.to_str().unwrap_or("<binary>")),
                ),
                None => CheckResult::warn(NAME, format!("no CORS headers for origin {origin}")),
            },
            Err(e) => CheckResult::fail(NAME, format!("preflight failed: {e}")),
        }
    }

    pub async fn check_error_handling(&self) -> CheckResult {
        const NAME: &str = "error_handling";
        match self.get_json("/api/nonexistent-endpoint").await {
            Ok((status, _)) if status == StatusCode::NOT_FOUND => {
                CheckResult::pass(NAME, "unknown routes return 404")
            }
            Ok((status, _)) => CheckResult::warn(NAME, format!("unknown route returned {status}")),
            Err(e) => CheckResult::fail(NAME, e.to_string()),
        }
    }

    pub async fn check_parser_sample(&self) -> CheckResult {
        const NAME: &str = "parser_sample";
        match self.submit_sample().await {
            Ok(result) => result,
            Err(e) => CheckResult::fail(NAME, e.to_string()),
        }
    }

    async fn submit_sample(&self) -> Result<CheckResult, VerifyError> {
        const NAME: &str = "parser_sample";
        let expected: BTreeSet<String> = [Platform::Twitter, Platform::Linkedin, Platform::PitchDeck]
            .iter()
            .map(|p| p.to_string())
            .collect();

        let response = self
            .client
            .post(self.endpoint("/api/content/parse")?)
            .json(&json!({
                "agent_response": MULTI_PLATFORM_SAMPLE,
                "platform": "linkedin",
                "requested_platforms": ["twitter", "linkedin", "pitch_deck"],
            }))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(CheckResult::fail(NAME, "parse endpoint not found"));
        }
        if !status.is_success() {
            return Ok(CheckResult::fail(NAME, format!("parse endpoint returned {status}")));
        }

        let parsed: ParseResponse = response
            .json()
            .await
            .map_err(|e| VerifyError::UnexpectedBody(e.to_string()))?;

        let found: BTreeSet<String> = parsed
            .content_items
            .iter()
            .map(|item| item.platform.to_string())
            .collect();
        debug!(?found, score = parsed.completeness_score, "Parser sample response");

        if found != expected {
            return Ok(CheckResult::fail(
                NAME,
                format!(
                    "expected {expected:?}, found {found:?}, missing {:?}",
                    expected.difference(&found).collect::<Vec<_>>()
                ),
            ));
        }
        if (parsed.completeness_score - 1.0).abs() > f64::EPSILON {
            return Ok(CheckResult::fail(
                NAME,
                format!("completeness score {:.2}, expected 1.00", parsed.completeness_score),
            ));
        }
        Ok(CheckResult::pass(
            NAME,
            "twitter, linkedin and pitch_deck detected with full completeness",
        ))
    }

    /// Lists the configured user's content and reports the platform mix.
    pub async fn check_content_retrieval(&self) -> (CheckResult, Option<Vec<StoredContent>>) {
        const NAME: &str = "content_retrieval";

        let items = match self.fetch_content().await {
            Ok(items) => items,
            Err(e) => return (CheckResult::fail(NAME, e.to_string()), None),
        };

        if items.is_empty() {
            let msg = format!("no content stored for user '{}'", self.config.user_id);
            return (CheckResult::warn(NAME, msg), Some(items));
        }

        let distribution = platform_distribution(&items);
        let summary = distribution
            .iter()
            .map(|(platform, count)| format!("{platform}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");

        (
            CheckResult::pass(NAME, format!("{} items ({summary})", items.len())),
            Some(items),
        )
    }

    async fn fetch_content(&self) -> Result<Vec<StoredContent>, VerifyError> {
        let response = self
            .client
            .get(self.endpoint("/api/content")?)
            .query(&[("user_id", self.config.user_id.as_str())])
            .send()
            .await?
            .error_for_status()?;

        response
            .json()
            .await
            .map_err(|e| VerifyError::UnexpectedBody(e.to_string()))
    }
}

/// Informational: how many retrieved items carry media URLs.
pub fn check_media_urls(items: Option<&[StoredContent]>) -> CheckResult {
    const NAME: &str = "media_urls";
    match items {
        None | Some([]) => CheckResult::skip(NAME, "no content items to inspect"),
        Some(items) => {
            let with_media = items.iter().filter(|i| !i.media_urls.is_empty()).count();
            CheckResult::pass(
                NAME,
                format!("{with_media} of {} items have media URLs", items.len()),
            )
        }
    }
}

fn platform_distribution(items: &[StoredContent]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.platform.to_string()).or_insert(0) += 1;
    }
    counts
}

fn looks_like_html(body: &str) -> bool {
    let head = body.trim_start().to_ascii_lowercase();
    head.starts_with("<!doctype html") || head.contains("<html")
}

fn looks_like_api_docs(body: &str) -> bool {
    let body = body.to_ascii_lowercase();
    body.contains("swagger") || body.contains("openapi")
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

async fn resolve(host: &str, port: u16) -> Result<Vec<String>, VerifyError> {
    let addrs = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| VerifyError::Dns(format!("{host}: {e}")))?;

    let mut ips: Vec<String> = addrs.map(|addr| addr.ip().to_string()).collect();
    ips.sort();
    ips.dedup();
    Ok(ips)
}

#[cfg(test)]
mod tests {
    use axum::response::Html;
    use axum::routing::get;
    use axum::Router;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::routes::build_app;
    use crate::state::AppState;

    async fn serve(app: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Url::parse(&format!("http://{addr}")).unwrap()
    }

    async fn spawn_app() -> Url {
        serve(build_app(AppState::in_memory(Config::default()))).await
    }

    /// The API plus a docs page and a WebSocket route, mounted under `/prod`
    /// the way a gateway stage would expose it.
    async fn spawn_staged_app() -> Url {
        let extras = Router::new()
            .route(
                "/docs",
                get(|| async { Html("<html><title>Swagger UI</title>openapi.json</html>") }),
            )
            .route(
                "/ws/stream-generation",
                get(|| async { axum::http::StatusCode::UPGRADE_REQUIRED }),
            );
        let app = extras.merge(build_app(AppState::in_memory(Config::default())));
        let base = serve(Router::new().nest("/prod", app)).await;
        base.join("prod").unwrap()
    }

    fn stored(platform: Platform, media: &[&str]) -> StoredContent {
        StoredContent {
            id: Uuid::new_v4(),
            user_id: "u".to_string(),
            platform,
            content: "body".to_string(),
            hashtags: vec![],
            media_urls: media.iter().map(|m| m.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_all_applicable_checks_pass_against_local_app() {
        let base = spawn_app().await;
        let config = VerifyConfig::for_base_url(base.clone());

        // Seed content so retrieval has something to report.
        reqwest::Client::new()
            .post(base.join("/api/content").unwrap())
            .json(&json!({
                "user_id": config.user_id,
                "agent_response": MULTI_PLATFORM_SAMPLE,
                "media_urls": ["https://cdn.example.com/launch.png"],
            }))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();

        let report = Verifier::new(config).unwrap().run_all().await;

        for name in [
            "dns_resolution",
            "health",
            "api_endpoints",
            "cors",
            "error_handling",
            "parser_sample",
            "content_retrieval",
            "media_urls",
        ] {
            assert_eq!(report.status_of(name), Some(CheckStatus::Pass), "{name}");
        }
        for name in ["https", "http_redirect", "frontend"] {
            assert_eq!(report.status_of(name), Some(CheckStatus::Skip), "{name}");
        }
        // The service publishes neither docs nor a WebSocket route.
        for name in ["api_docs", "websocket"] {
            assert_eq!(report.status_of(name), Some(CheckStatus::Warn), "{name}");
        }
        assert!(!report.has_failures());
        assert_eq!(report.results.len(), 13);
    }

    #[tokio::test]
    async fn test_checks_keep_base_path_prefix() {
        let base = spawn_staged_app().await;
        assert!(!base.path().ends_with('/'));

        let verifier = Verifier::new(VerifyConfig::for_base_url(base)).unwrap();
        assert_eq!(
            verifier.endpoint("/health").unwrap().path(),
            "/prod/health"
        );

        assert_eq!(verifier.check_health().await.status, CheckStatus::Pass);
        assert_eq!(verifier.check_parser_sample().await.status, CheckStatus::Pass);
        assert_eq!(verifier.check_error_handling().await.status, CheckStatus::Pass);
    }

    #[tokio::test]
    async fn test_docs_and_websocket_pass_when_served() {
        let verifier = Verifier::new(VerifyConfig::for_base_url(spawn_staged_app().await)).unwrap();

        let docs = verifier.check_api_docs().await;
        assert_eq!(docs.status, CheckStatus::Pass, "{}", docs.message);

        let ws = verifier.check_websocket().await;
        assert_eq!(ws.status, CheckStatus::Pass, "{}", ws.message);
        assert!(ws.message.contains("426"));
    }

    #[tokio::test]
    async fn test_docs_without_openapi_marker_warns() {
        let app = Router::new().route("/docs", get(|| async { Html("<html>hello</html>") }));
        let verifier = Verifier::new(VerifyConfig::for_base_url(serve(app).await)).unwrap();

        let result = verifier.check_api_docs().await;
        assert_eq!(result.status, CheckStatus::Warn);
        assert!(result.message.contains("swagger"));
    }

    #[tokio::test]
    async fn test_websocket_bad_request_counts_as_configured() {
        let app = Router::new().route(
            "/ws/stream-generation",
            get(|| async { axum::http::StatusCode::BAD_REQUEST }),
        );
        let verifier = Verifier::new(VerifyConfig::for_base_url(serve(app).await)).unwrap();
        assert_eq!(verifier.check_websocket().await.status, CheckStatus::Pass);
    }

    #[tokio::test]
    async fn test_empty_store_warns_on_retrieval() {
        let base = spawn_app().await;
        let verifier = Verifier::new(VerifyConfig::for_base_url(base)).unwrap();

        let (result, items) = verifier.check_content_retrieval().await;
        assert_eq!(result.status, CheckStatus::Warn);
        assert_eq!(items.map(|i| i.len()), Some(0));
    }

    #[tokio::test]
    async fn test_unreachable_backend_fails_health_and_skips_rest() {
        let base = Url::parse("http://127.0.0.1:1").unwrap();
        let mut config = VerifyConfig::for_base_url(base);
        config.timeout = std::time::Duration::from_secs(2);

        let report = Verifier::new(config).unwrap().run_all().await;

        assert_eq!(report.status_of("dns_resolution"), Some(CheckStatus::Pass));
        assert_eq!(report.status_of("health"), Some(CheckStatus::Fail));
        assert_eq!(report.status_of("parser_sample"), Some(CheckStatus::Skip));
        assert_eq!(report.status_of("api_docs"), Some(CheckStatus::Skip));
        assert_eq!(report.status_of("websocket"), Some(CheckStatus::Skip));
        assert_eq!(report.count(CheckStatus::Skip), 11);
        assert!(report.has_failures());
    }

    #[tokio::test]
    async fn test_frontend_check_accepts_html() {
        let base = spawn_app().await;
        let mut config = VerifyConfig::for_base_url(base.clone());
        // The API serves JSON, not HTML, so pointing the frontend at it must fail.
        config.frontend_url = Some(base.join("/health").unwrap());

        let result = Verifier::new(config).unwrap().check_frontend().await;
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.message.contains("non-HTML"));
    }

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let url = with_trailing_slash(Url::parse("https://api.example.com/prod").unwrap());
        assert_eq!(url.as_str(), "https://api.example.com/prod/");

        let root = with_trailing_slash(Url::parse("http://localhost:8080").unwrap());
        assert_eq!(root.join("health").unwrap().as_str(), "http://localhost:8080/health");
    }

    #[test]
    fn test_looks_like_html() {
        assert!(looks_like_html("<!DOCTYPE html><html></html>"));
        assert!(looks_like_html("\n  <html lang=\"en\">"));
        assert!(!looks_like_html("{\"status\":\"healthy\"}"));
    }

    #[test]
    fn test_media_urls_counts_items_with_media() {
        let items = vec![
            stored(Platform::Twitter, &["https://cdn/a.png"]),
            stored(Platform::Linkedin, &[]),
        ];
        let result = check_media_urls(Some(items.as_slice()));
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.message, "1 of 2 items have media URLs");

        assert_eq!(check_media_urls(None).status, CheckStatus::Skip);
        assert_eq!(check_media_urls(Some(&[][..])).status, CheckStatus::Skip);
    }

    #[test]
    fn test_platform_distribution_is_sorted() {
        let items = vec![
            stored(Platform::Twitter, &[]),
            stored(Platform::Linkedin, &[]),
            stored(Platform::Twitter, &[]),
        ];
        let dist = platform_distribution(&items);
        assert_eq!(
            dist.into_iter().collect::<Vec<_>>(),
            vec![("linkedin".to_string(), 1), ("twitter".to_string(), 2)]
        );
    }
}
