//! Scrape Client: the single point of entry for all Firecrawl calls.
//!
//! Two modes are used: plain markdown scraping of a listing page, and
//! schema-constrained structured extraction of a single posting.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

const SCRAPE_PATH: &str = "/v1/scrape";

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Scrape unsuccessful: {0}")]
    Unsuccessful(String),

    #[error("Scrape response missing {0}")]
    MissingData(&'static str),
}

/// Page-load options for markdown scraping.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeOptions {
    /// Milliseconds to wait for client-side rendering before capture.
    pub wait_for: u32,
    /// Firecrawl-side timeout in milliseconds.
    pub timeout: u32,
    pub include_tags: Vec<String>,
    pub only_main_content: bool,
}

impl ScrapeOptions {
    /// Full careers listing page; used by link extraction.
    pub fn listing() -> Self {
        Self {
            wait_for: 2000,
            timeout: 30000,
            include_tags: vec![],
            only_main_content: false,
        }
    }

    /// Only the `<main>` element; used by regex extraction.
    pub fn main_content() -> Self {
        Self {
            include_tags: vec!["main".to_string()],
            only_main_content: true,
            ..Self::listing()
        }
    }
}

/// A browser action Firecrawl performs before capturing the page.
#[derive(Debug, Clone, Serialize)]
pub struct PageAction {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub selector: String,
}

impl PageAction {
    pub fn click(selector: &str) -> Self {
        Self {
            kind: "click",
            selector: selector.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkdownRequest<'a> {
    url: &'a str,
    formats: [&'static str; 1],
    wait_for: u32,
    timeout: u32,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    include_tags: &'a [String],
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    only_main_content: bool,
}

#[derive(Debug, Serialize)]
struct ExtractRequest<'a> {
    url: &'a str,
    formats: [&'static str; 1],
    #[serde(skip_serializing_if = "<[PageAction]>::is_empty")]
    actions: &'a [PageAction],
    extract: ExtractSpec<'a>,
}

#[derive(Debug, Serialize)]
struct ExtractSpec<'a> {
    schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct ScrapeResponse {
    #[serde(default)]
    success: bool,
    data: Option<ScrapeData>,
    error: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScrapeData {
    markdown: Option<String>,
    extract: Option<Value>,
}

/// Firecrawl v1 client.
#[derive(Clone)]
pub struct ScrapeClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl ScrapeClient {
    pub fn new(api_key: String, base_url: &str) -> Result<Self, ScrapeError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(90))
                .build()?,
            api_key,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SCRAPE_PATH),
        })
    }

    /// Scrapes `url` and returns the page rendered as markdown.
    pub async fn scrape_markdown(
        &self,
        url: &str,
        options: &ScrapeOptions,
    ) -> Result<String, ScrapeError> {
        info!("Scraping jobs page: {}", url);

        let body = MarkdownRequest {
            url,
            formats: ["markdown"],
            wait_for: options.wait_for,
            timeout: options.timeout,
            include_tags: &options.include_tags,
            only_main_content: options.only_main_content,
        };

        let data = self.post(&body).await?;
        let markdown = data.markdown.ok_or(ScrapeError::MissingData("data.markdown"))?;

        debug!("Scraped {} characters of markdown from {}", markdown.len(), url);
        Ok(markdown)
    }

    /// Runs schema-constrained extraction on `url` and returns the raw extract object.
    pub async fn extract(
        &self,
        url: &str,
        schema: &Value,
        actions: &[PageAction],
    ) -> Result<Value, ScrapeError> {
        let body = ExtractRequest {
            url,
            formats: ["extract"],
            actions,
            extract: ExtractSpec { schema },
        };

        let data = self.post(&body).await?;
        data.extract.ok_or(ScrapeError::MissingData("data.extract"))
    }

    async fn post<B: Serialize>(&self, body: &B) -> Result<ScrapeData, ScrapeError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ScrapeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ScrapeResponse = response.json().await?;
        if !parsed.success {
            let message = parsed
                .error
                .or(parsed.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(ScrapeError::Unsuccessful(message));
        }

        parsed.data.ok_or(ScrapeError::MissingData("data"))
    }
}
