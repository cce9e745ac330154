use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Liveness banner.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Job Recommendation API is running!",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
/// Reports which upstream API keys are configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "openai_configured": state.config.openai_configured(),
        "firecrawl_configured": state.config.firecrawl_configured(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
