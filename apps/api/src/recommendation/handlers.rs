//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{FromRequest, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::recommendation::models::{JobRecommendationRequest, JobRecommendationResponse};
use crate::recommendation::service::RecommendationService;
use crate::recommendation::source::{MarkdownRegexJobSource, StructuredJobSource};
use crate::recommendation::validation::validate_request;
use crate::state::AppState;

/// JSON body extractor whose rejections use the `AppError` envelope.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct RequestJson<T>(pub T);

/// POST /recommend-jobs
///
/// Full workflow: scrape listing page → LLM link extraction → structured
/// extraction per posting → LLM ranking. Upstream failures are reported in
/// the envelope (`success: false`) rather than as HTTP errors.
pub async fn handle_recommend_jobs(
    State(state): State<AppState>,
    RequestJson(request): RequestJson<JobRecommendationRequest>,
) -> Result<Json<JobRecommendationResponse>, AppError> {
    validate_request(&request)?;
    let llm = state.require_llm()?;
    let scraper = state.require_scraper()?;

    let source = StructuredJobSource {
        scraper: scraper.clone(),
        llm: llm.clone(),
    };
    let response = RecommendationService::new(llm.clone())
        .recommend(&source, &request)
        .await;

    info!(
        "Recommendation finished: success={} analyzed={}",
        response.success, response.total_jobs_analyzed
    );
    Ok(Json(response))
}

/// POST /recommend-jobs-demo
///
/// Ranks the fixed mock listings. Only the LLM key is required.
pub async fn handle_recommend_jobs_demo(
    State(state): State<AppState>,
    RequestJson(request): RequestJson<JobRecommendationRequest>,
) -> Result<Json<JobRecommendationResponse>, AppError> {
    validate_request(&request)?;
    let llm = state.require_llm()?;

    let response = RecommendationService::new(llm.clone())
        .recommend_demo(&request)
        .await?;

    Ok(Json(response))
}

/// POST /recommend-jobs-real
///
/// Scrapes the page's main content once and recovers listings by regex.
pub async fn handle_recommend_jobs_real(
    State(state): State<AppState>,
    RequestJson(request): RequestJson<JobRecommendationRequest>,
) -> Result<Json<JobRecommendationResponse>, AppError> {
    validate_request(&request)?;
    let llm = state.require_llm()?;
    let scraper = state.require_scraper()?;

    let source = MarkdownRegexJobSource {
        scraper: scraper.clone(),
    };
    let response = RecommendationService::new(llm.clone())
        .recommend_from_markdown(&source, &request)
        .await?;

    Ok(Json(response))
}
