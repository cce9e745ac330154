use anyhow::{Context, Result};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_FIRECRAWL_BASE_URL: &str = "https://api.firecrawl.dev";

/// Application configuration loaded from environment variables.
///
/// API keys are optional at startup: `/health` reports which ones are present
/// and each endpoint rejects requests that need a missing key.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub firecrawl_api_key: Option<String>,
    pub openai_base_url: String,
    pub firecrawl_base_url: String,
    pub llm_max_attempts: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            firecrawl_api_key: optional_env("FIRECRAWL_API_KEY"),
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            firecrawl_base_url: optional_env("FIRECRAWL_BASE_URL")
                .unwrap_or_else(|| DEFAULT_FIRECRAWL_BASE_URL.to_string()),
            llm_max_attempts: optional_env("LLM_MAX_ATTEMPTS")
                .map(|v| v.parse::<u32>())
                .transpose()
                .context("LLM_MAX_ATTEMPTS must be a positive integer")?
                .unwrap_or(1)
                .max(1),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn openai_configured(&self) -> bool {
        self.openai_api_key.is_some()
    }

    pub fn firecrawl_configured(&self) -> bool {
        self.firecrawl_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai_api_key: None,
            firecrawl_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            firecrawl_base_url: DEFAULT_FIRECRAWL_BASE_URL.to_string(),
            llm_max_attempts: 1,
            port: 8000,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads an env var, treating empty or whitespace-only values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_keys() {
        let config = Config::default();
        assert!(!config.openai_configured());
        assert!(!config.firecrawl_configured());
        assert_eq!(config.port, 8000);
        assert_eq!(config.llm_max_attempts, 1);
    }

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("JOB_RECOMMENDER_TEST_BLANK", "   ");
        assert_eq!(optional_env("JOB_RECOMMENDER_TEST_BLANK"), None);

        std::env::set_var("JOB_RECOMMENDER_TEST_SET", " sk-123 ");
        assert_eq!(
            optional_env("JOB_RECOMMENDER_TEST_SET").as_deref(),
            Some("sk-123")
        );
    }
}
