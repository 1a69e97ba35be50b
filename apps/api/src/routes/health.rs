use axum::Json;
use serde_json::{json, Value};

/// GET /health, GET /api/health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "content-api"
    }))
}
