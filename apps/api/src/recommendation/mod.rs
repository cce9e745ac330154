// Job recommendation workflow: scrape → extract → rank via LLM → respond.
// All LLM calls go through llm_client and all scraping through scrape_client.

pub mod detail_extractor;
pub mod handlers;
pub mod link_extractor;
pub mod mock_jobs;
pub mod models;
pub mod prompts;
pub mod ranker;
pub mod regex_extractor;
pub mod service;
pub mod source;
pub mod validation;
