//! Recommendation workflow: collect listings → rank via LLM → envelope.
//!
//! Three entry points share the ranking step and differ in where listings
//! come from and how failures surface:
//! - `recommend`: any `JobSource`; every failure becomes `success: false`.
//! - `recommend_demo`: mock listings; failures propagate as `AppError`.
//! - `recommend_from_markdown`: regex listings; failures propagate as `AppError`.

use std::time::Instant;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::recommendation::models::{JobRecommendationRequest, JobRecommendationResponse};
use crate::recommendation::ranker::{rank_jobs, RankingStyle};
use crate::recommendation::source::{JobCollection, JobSource, MockJobSource};

fn elapsed_seconds(start: Instant) -> f64 {
    (start.elapsed().as_secs_f64() * 100.0).round() / 100.0
}

#[derive(Clone)]
pub struct RecommendationService {
    llm: LlmClient,
}

impl RecommendationService {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Main flow. Never returns an error: failures are reported in the envelope.
    pub async fn recommend(
        &self,
        source: &dyn JobSource,
        request: &JobRecommendationRequest,
    ) -> JobRecommendationResponse {
        let start = Instant::now();

        let mut response = match self.run(source, request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Recommendation request failed: {e}");
                JobRecommendationResponse::failure(format!("Error processing request: {e}"), 0)
            }
        };

        response.processing_time_seconds = Some(elapsed_seconds(start));
        response
    }

    async fn run(
        &self,
        source: &dyn JobSource,
        request: &JobRecommendationRequest,
    ) -> Result<JobRecommendationResponse, AppError> {
        let url = request.jobs_page_url();
        info!("Scraping jobs from: {url}");

        let JobCollection { jobs_found, jobs } = source.collect(url, request.num_jobs).await?;

        if jobs_found == 0 {
            return Ok(JobRecommendationResponse::failure(
                "No job links found on the provided page",
                0,
            ));
        }

        if jobs.is_empty() {
            return Ok(JobRecommendationResponse::failure(
                "No job data could be extracted from the job links",
                jobs_found,
            ));
        }

        let recommendations = rank_jobs(
            &self.llm,
            &request.resume_text,
            &jobs,
            request.num_recommendations,
            RankingStyle::WithReasons,
        )
        .await?;

        Ok(JobRecommendationResponse {
            success: true,
            message: format!(
                "Successfully analyzed {} jobs and generated {} recommendations",
                jobs.len(),
                recommendations.len()
            ),
            total_jobs_found: jobs_found,
            total_jobs_analyzed: jobs.len(),
            recommendations,
            all_jobs: Some(jobs),
            processing_time_seconds: None,
        })
    }

    /// Demo flow over the fixed mock listings.
    pub async fn recommend_demo(
        &self,
        request: &JobRecommendationRequest,
    ) -> Result<JobRecommendationResponse, AppError> {
        let start = Instant::now();
        let JobCollection { jobs, .. } = MockJobSource
            .collect(request.jobs_page_url(), request.num_jobs)
            .await?;

        let recommendations = rank_jobs(
            &self.llm,
            &request.resume_text,
            &jobs,
            request.num_recommendations,
            RankingStyle::WithReasons,
        )
        .await?;

        Ok(JobRecommendationResponse {
            success: true,
            message: format!(
                "Demo: Successfully analyzed {} mock jobs and generated {} recommendations",
                jobs.len(),
                recommendations.len()
            ),
            total_jobs_found: jobs.len(),
            total_jobs_analyzed: jobs.len(),
            recommendations,
            all_jobs: Some(jobs),
            processing_time_seconds: Some(elapsed_seconds(start)),
        })
    }

    /// Alternate flow: listings recovered by regex from the page's main content.
    pub async fn recommend_from_markdown(
        &self,
        source: &dyn JobSource,
        request: &JobRecommendationRequest,
    ) -> Result<JobRecommendationResponse, AppError> {
        let start = Instant::now();
        let JobCollection { jobs, .. } = source
            .collect(request.jobs_page_url(), request.num_jobs)
            .await?;

        let recommendations = rank_jobs(
            &self.llm,
            &request.resume_text,
            &jobs,
            request.num_recommendations,
            RankingStyle::Brief,
        )
        .await?;

        Ok(JobRecommendationResponse {
            success: true,
            message: format!(
                "Successfully analyzed {} real jobs and generated {} recommendations",
                jobs.len(),
                recommendations.len()
            ),
            total_jobs_found: jobs.len(),
            total_jobs_analyzed: jobs.len(),
            recommendations,
            all_jobs: Some(jobs),
            processing_time_seconds: Some(elapsed_seconds(start)),
        })
    }
}
