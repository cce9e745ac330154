//! Link Extractor: finds application links on a careers page.
//!
//! Flow: scrape page as markdown → truncate → ask the LLM for `apply_links`.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{info, warn};

use crate::llm_client::prompts::{render_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::recommendation::prompts::LINK_EXTRACTION_PROMPT_TEMPLATE;
use crate::scrape_client::{ScrapeClient, ScrapeOptions};

/// Markdown beyond this many characters is not sent to the LLM.
pub const MAX_MARKDOWN_CHARS: usize = 50_000;

#[derive(Debug, Deserialize)]
struct ApplyLinks {
    #[serde(default)]
    apply_links: Vec<String>,
}

/// Returns the first `max_chars` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn build_link_prompt(markdown: &str, num_jobs: u32) -> String {
    render_template(
        LINK_EXTRACTION_PROMPT_TEMPLATE,
        &[
            ("num_jobs", num_jobs.to_string().as_str()),
            ("json_only_instruction", JSON_ONLY_INSTRUCTION),
            ("markdown", truncate_chars(markdown, MAX_MARKDOWN_CHARS)),
        ],
    )
}

/// Trims, drops blanks and duplicates (keeping first occurrence), and caps at `limit`.
fn normalize_links(links: Vec<String>, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .filter(|l| seen.insert(l.clone()))
        .take(limit)
        .collect()
}

/// Scrapes `jobs_page_url` and asks the LLM for up to `num_jobs` application links.
///
/// A failed scrape or an unusable LLM reply is logged and yields no links.
pub async fn extract_job_links(
    scraper: &ScrapeClient,
    llm: &LlmClient,
    jobs_page_url: &str,
    num_jobs: u32,
) -> Vec<String> {
    let markdown = match scraper
        .scrape_markdown(jobs_page_url, &ScrapeOptions::listing())
        .await
    {
        Ok(markdown) => markdown,
        Err(e) => {
            warn!("Failed to scrape jobs page {}: {}", jobs_page_url, e);
            return vec![];
        }
    };

    if markdown.trim().is_empty() {
        return vec![];
    }

    let prompt = build_link_prompt(&markdown, num_jobs);
    let reply: ApplyLinks = match llm.call_json(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Link extraction failed for {}: {}", jobs_page_url, e);
            return vec![];
        }
    };

    let links = normalize_links(reply.apply_links, num_jobs as usize);
    info!("Extracted {} apply links from {}", links.len(), jobs_page_url);
    links
}
