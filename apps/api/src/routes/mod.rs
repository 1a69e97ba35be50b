pub mod health;

use axum::{
    http::{header, HeaderValue, Method, Uri},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::Config;
use crate::content::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::health_handler))
        // Content API
        .route(
            "/api/content",
            get(handlers::handle_list).post(handlers::handle_create),
        )
        .route("/api/content/parse", post(handlers::handle_parse))
        .route("/api/content/:id", get(handlers::handle_get))
        .fallback(not_found)
        .with_state(state)
}

/// Router with the HTTP tracing and CORS layers the binary serves.
pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Permissive when no origins are configured, otherwise an explicit allow-list.
pub fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
