use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::scrape_client::ScrapeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    NotConfigured(String),

    #[error("Scrape error: {0}")]
    Scrape(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("{0}")]
    NoJobs(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Llm(e.to_string())
    }
}

impl From<ScrapeError> for AppError {
    fn from(e: ScrapeError) -> Self {
        AppError::Scrape(e.to_string())
    }
}

/// Malformed or mistyped request bodies are reported like any other validation failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                msg.clone(),
            ),
            AppError::NotConfigured(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NOT_CONFIGURED",
                    msg.clone(),
                )
            }
            AppError::Scrape(msg) => {
                tracing::error!("Scrape error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SCRAPE_ERROR",
                    format!("Error scraping job data: {msg}"),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    format!("Error generating recommendations: {msg}"),
                )
            }
            AppError::NoJobs(msg) => {
                tracing::warn!("No jobs: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NO_JOBS_FOUND",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_422() {
        let response = AppError::Validation("num_jobs out of range".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_upstream_errors_map_to_500() {
        for err in [
            AppError::NotConfigured("OpenAI API key not configured".to_string()),
            AppError::Scrape("timeout".to_string()),
            AppError::Llm("bad json".to_string()),
            AppError::NoJobs("No job data found on the provided URL".to_string()),
        ] {
            assert_eq!(
                err.into_response().status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_llm_error_converts_with_message() {
        let err: AppError = LlmError::EmptyContent.into();
        assert!(matches!(err, AppError::Llm(ref m) if m.contains("empty content")));
    }
}
