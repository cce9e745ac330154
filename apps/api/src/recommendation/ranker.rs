//! Recommendation Generator: asks the LLM to rank listings against a resume.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{render_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::recommendation::models::{JobData, JobRecommendation};
use crate::recommendation::prompts::{
    RANKING_BRIEF_PROMPT_TEMPLATE, RANKING_WITH_REASONS_PROMPT_TEMPLATE,
};

/// Which fields the LLM is asked to return per recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingStyle {
    /// Title, compensation, apply link and a `match_reason`.
    WithReasons,
    /// Title, compensation and apply link only.
    Brief,
}

/// The model is told to return a bare array but sometimes wraps it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RankingReply {
    List(Vec<JobRecommendation>),
    Wrapped {
        recommendations: Vec<JobRecommendation>,
    },
}

impl RankingReply {
    fn into_vec(self) -> Vec<JobRecommendation> {
        match self {
            RankingReply::List(v) => v,
            RankingReply::Wrapped { recommendations } => recommendations,
        }
    }
}

pub fn build_prompt(
    resume_text: &str,
    jobs: &[JobData],
    num_recommendations: u32,
    style: RankingStyle,
) -> Result<String, AppError> {
    let template = match style {
        RankingStyle::WithReasons => RANKING_WITH_REASONS_PROMPT_TEMPLATE,
        RankingStyle::Brief => RANKING_BRIEF_PROMPT_TEMPLATE,
    };
    let jobs_json = serde_json::to_string_pretty(jobs)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize job listings: {e}")))?;

    Ok(render_template(
        template,
        &[
            ("num_recommendations", num_recommendations.to_string().as_str()),
            ("json_only_instruction", JSON_ONLY_INSTRUCTION),
            ("resume_text", resume_text),
            ("jobs_json", jobs_json.as_str()),
        ],
    ))
}

/// Ranks `jobs` against `resume_text` and returns at most `num_recommendations`.
///
/// An empty job list short-circuits without an LLM call.
pub async fn rank_jobs(
    llm: &LlmClient,
    resume_text: &str,
    jobs: &[JobData],
    num_recommendations: u32,
    style: RankingStyle,
) -> Result<Vec<JobRecommendation>, AppError> {
    if jobs.is_empty() {
        return Ok(vec![]);
    }

    info!("Generating recommendations based on {} jobs...", jobs.len());

    let prompt = build_prompt(resume_text, jobs, num_recommendations, style)?;
    let reply: RankingReply = llm
        .call_json(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Error parsing AI recommendations: {e}")))?;

    let mut recommendations = reply.into_vec();
    recommendations.truncate(num_recommendations as usize);
    if style == RankingStyle::Brief {
        for rec in &mut recommendations {
            rec.match_reason = None;
        }
    }

    Ok(recommendations)
}
