//! Request / response types shared by the HTTP surface and the CLI.

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_JOBS_PAGE_URL: &str = "https://jobs.ashbyhq.com/openai";
pub const DEFAULT_NUM_JOBS: u32 = 5;
pub const DEFAULT_NUM_RECOMMENDATIONS: u32 = 3;

fn default_num_jobs() -> u32 {
    DEFAULT_NUM_JOBS
}

fn default_num_recommendations() -> u32 {
    DEFAULT_NUM_RECOMMENDATIONS
}

/// Accepts `null` wherever a string is expected and maps it to `""`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecommendationRequest {
    pub resume_text: String,
    #[serde(default)]
    pub jobs_page_url: Option<String>,
    #[serde(default = "default_num_jobs")]
    pub num_jobs: u32,
    #[serde(default = "default_num_recommendations")]
    pub num_recommendations: u32,
}

impl JobRecommendationRequest {
    pub fn new(resume_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            jobs_page_url: None,
            num_jobs: DEFAULT_NUM_JOBS,
            num_recommendations: DEFAULT_NUM_RECOMMENDATIONS,
        }
    }

    /// The page to scrape, falling back to the default careers page.
    pub fn jobs_page_url(&self) -> &str {
        self.jobs_page_url
            .as_deref()
            .unwrap_or(DEFAULT_JOBS_PAGE_URL)
    }
}

/// A single job listing, as extracted from a posting page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobData {
    pub job_title: String,
    pub location: String,
    pub compensation: String,
    pub key_skills: Vec<String>,
    pub apply_link: String,
    #[serde(default)]
    pub sub_division_of_organization: Option<String>,
}

/// A ranked listing returned by the LLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub compensation: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub apply_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecommendationResponse {
    pub success: bool,
    pub message: String,
    pub total_jobs_found: usize,
    pub total_jobs_analyzed: usize,
    pub recommendations: Vec<JobRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_jobs: Option<Vec<JobData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time_seconds: Option<f64>,
}

impl JobRecommendationResponse {
    /// An unsuccessful envelope with no recommendations.
    pub fn failure(message: impl Into<String>, total_jobs_found: usize) -> Self {
        Self {
            success: false,
            message: message.into(),
            total_jobs_found,
            total_jobs_analyzed: 0,
            recommendations: vec![],
            all_jobs: None,
            processing_time_seconds: None,
        }
    }
}
