use anyhow::Result;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::scrape_client::ScrapeClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when `OPENAI_API_KEY` is unset.
    pub llm: Option<LlmClient>,
    /// `None` when `FIRECRAWL_API_KEY` is unset.
    pub scraper: Option<ScrapeClient>,
}

impl AppState {
    /// Builds a client for every service whose key is configured.
    pub fn from_config(config: Config) -> Result<Self> {
        let llm = config
            .openai_api_key
            .clone()
            .map(|key| LlmClient::new(key, &config.openai_base_url, config.llm_max_attempts))
            .transpose()?;
        let scraper = config
            .firecrawl_api_key
            .clone()
            .map(|key| ScrapeClient::new(key, &config.firecrawl_base_url))
            .transpose()?;

        Ok(Self {
            config,
            llm,
            scraper,
        })
    }

    pub fn require_llm(&self) -> Result<&LlmClient, AppError> {
        self.llm
            .as_ref()
            .ok_or_else(|| AppError::NotConfigured("OpenAI API key not configured".to_string()))
    }

    pub fn require_scraper(&self) -> Result<&ScrapeClient, AppError> {
        self.scraper
            .as_ref()
            .ok_or_else(|| AppError::NotConfigured("Firecrawl API key not configured".to_string()))
    }
}
