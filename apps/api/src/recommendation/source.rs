//! Job Sources: pluggable strategies that turn a careers page into listings.
//!
//! - `StructuredJobSource`: LLM link extraction + per-posting structured extraction.
//! - `MarkdownRegexJobSource`: one markdown scrape + regex over labelled lines.
//! - `MockJobSource`: fixed demo listings, no network.
//!
//! The workflow in `service` only sees `&dyn JobSource`.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::recommendation::detail_extractor::extract_job_details;
use crate::recommendation::link_extractor::extract_job_links;
use crate::recommendation::mock_jobs::mock_jobs;
use crate::recommendation::models::JobData;
use crate::recommendation::regex_extractor::extract_listings;
use crate::scrape_client::{ScrapeClient, ScrapeOptions};

/// Listings gathered from a page.
#[derive(Debug, Clone, Default)]
pub struct JobCollection {
    /// Postings discovered on the page (links, matches or mock entries).
    pub jobs_found: usize,
    /// Postings whose details were recovered. Never longer than `jobs_found`.
    pub jobs: Vec<JobData>,
}

#[async_trait]
pub trait JobSource: Send + Sync {
    async fn collect(&self, jobs_page_url: &str, num_jobs: u32) -> Result<JobCollection, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// StructuredJobSource
// ────────────────────────────────────────────────────────────────────────────

pub struct StructuredJobSource {
    pub scraper: ScrapeClient,
    pub llm: LlmClient,
}

#[async_trait]
impl JobSource for StructuredJobSource {
    async fn collect(&self, jobs_page_url: &str, num_jobs: u32) -> Result<JobCollection, AppError> {
        let links = extract_job_links(&self.scraper, &self.llm, jobs_page_url, num_jobs).await;
        if links.is_empty() {
            return Ok(JobCollection::default());
        }

        info!(
            "Extracting detailed data from {} job postings...",
            links.len()
        );
        let jobs = extract_job_details(&self.scraper, &links).await;

        Ok(JobCollection {
            jobs_found: links.len(),
            jobs,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MarkdownRegexJobSource
// ────────────────────────────────────────────────────────────────────────────

pub struct MarkdownRegexJobSource {
    pub scraper: ScrapeClient,
}

#[async_trait]
impl JobSource for MarkdownRegexJobSource {
    async fn collect(&self, jobs_page_url: &str, num_jobs: u32) -> Result<JobCollection, AppError> {
        let markdown = self
            .scraper
            .scrape_markdown(jobs_page_url, &ScrapeOptions::main_content())
            .await?;

        if markdown.trim().is_empty() {
            return Err(AppError::Scrape(
                "Failed to scrape job data from URL".to_string(),
            ));
        }

        let jobs = extract_listings(&markdown, num_jobs as usize);
        if jobs.is_empty() {
            return Err(AppError::NoJobs(
                "No job data found on the provided URL".to_string(),
            ));
        }

        info!("Matched {} listings in scraped markdown", jobs.len());
        Ok(JobCollection {
            jobs_found: jobs.len(),
            jobs,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MockJobSource
// ────────────────────────────────────────────────────────────────────────────

/// Serves the first `num_jobs` demo listings; the URL is ignored.
pub struct MockJobSource;

#[async_trait]
impl JobSource for MockJobSource {
    async fn collect(&self, _jobs_page_url: &str, num_jobs: u32) -> Result<JobCollection, AppError> {
        let jobs: Vec<JobData> = mock_jobs().into_iter().take(num_jobs as usize).collect();
        Ok(JobCollection {
            jobs_found: jobs.len(),
            jobs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::completion_body;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_source_caps_at_num_jobs() {
        let collection = MockJobSource.collect("ignored", 2).await.unwrap();
        assert_eq!(collection.jobs_found, 2);
        assert_eq!(collection.jobs[0].job_title, "Data Engineering Manager");

        let collection = MockJobSource.collect("ignored", 20).await.unwrap();
        assert_eq!(collection.jobs.len(), 5);
    }

    #[tokio::test]
    async fn test_regex_source_requests_main_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/scrape")
            .match_body(Matcher::PartialJson(json!({"onlyMainContent": true, "includeTags": ["main"]})))
            .with_status(200)
            .with_body(
                json!({"success": true, "data": {"markdown":
                    "Role: Platform Engineer\nCompensation: $200K\nApply: https://jobs.example.com/p\n"}})
                .to_string(),
            )
            .create_async()
            .await;

        let source = MarkdownRegexJobSource {
            scraper: ScrapeClient::new("fc".to_string(), &server.url()).unwrap(),
        };
        let collection = source.collect("https://jobs.example.com", 5).await.unwrap();

        assert_eq!(collection.jobs_found, 1);
        assert_eq!(collection.jobs[0].job_title, "Platform Engineer");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_regex_source_no_matches_is_no_jobs() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/scrape")
            .with_status(200)
            .with_body(json!({"success": true, "data": {"markdown": "Nothing here"}}).to_string())
            .create_async()
            .await;

        let source = MarkdownRegexJobSource {
            scraper: ScrapeClient::new("fc".to_string(), &server.url()).unwrap(),
        };
        let err = source.collect("https://jobs.example.com", 5).await.unwrap_err();
        assert!(matches!(err, AppError::NoJobs(_)));
    }

    #[tokio::test]
    async fn test_regex_source_empty_markdown_is_scrape_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/scrape")
            .with_status(200)
            .with_body(json!({"success": true, "data": {"markdown": "  "}}).to_string())
            .create_async()
            .await;

        let source = MarkdownRegexJobSource {
            scraper: ScrapeClient::new("fc".to_string(), &server.url()).unwrap(),
        };
        let err = source.collect("https://jobs.example.com", 5).await.unwrap_err();
        assert!(matches!(err, AppError::Scrape(ref m) if m == "Failed to scrape job data from URL"));
    }

    #[tokio::test]
    async fn test_structured_source_counts_links_and_details() {
        let mut firecrawl = mockito::Server::new_async().await;
        let _listing = firecrawl
            .mock("POST", "/v1/scrape")
            .match_body(Matcher::PartialJson(json!({"formats": ["markdown"]})))
            .with_status(200)
            .with_body(json!({"success": true, "data": {"markdown": "careers"}}).to_string())
            .create_async()
            .await;
        let _detail = firecrawl
            .mock("POST", "/v1/scrape")
            .match_body(Matcher::PartialJson(json!({"url": "https://jobs.example.com/1", "formats": ["extract"]})))
            .with_status(200)
            .with_body(
                json!({"success": true, "data": {"extract": {
                    "job_title": "ML Engineer",
                    "sub_division_of_organization": "Research",
                    "key_skills": ["PyTorch"],
                    "compensation": "$300K",
                    "location": "Remote",
                    "apply_link": "https://jobs.example.com/1/apply"
                }}})
                .to_string(),
            )
            .create_async()
            .await;
        let _detail_failed = firecrawl
            .mock("POST", "/v1/scrape")
            .match_body(Matcher::PartialJson(json!({"url": "https://jobs.example.com/2", "formats": ["extract"]})))
            .with_status(500)
            .create_async()
            .await;

        let mut openai = mockito::Server::new_async().await;
        let _links = openai
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(completion_body(
                r#"{"apply_links": ["https://jobs.example.com/1", "https://jobs.example.com/2"]}"#,
            ))
            .create_async()
            .await;

        let source = StructuredJobSource {
            scraper: ScrapeClient::new("fc".to_string(), &firecrawl.url()).unwrap(),
            llm: LlmClient::new("sk".to_string(), &openai.url(), 1).unwrap(),
        };
        let collection = source.collect("https://jobs.example.com", 5).await.unwrap();

        assert_eq!(collection.jobs_found, 2);
        assert_eq!(collection.jobs.len(), 1);
        assert_eq!(collection.jobs[0].job_title, "ML Engineer");
    }
}
