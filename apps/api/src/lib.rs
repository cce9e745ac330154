//! Job recommender: scrapes a careers page, extracts listings and asks an
//! LLM to rank them against a resume.
//!
//! Served over HTTP by the `api` binary and run once by the `job-agent` CLI.

pub mod cli;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod recommendation;
pub mod resume;
pub mod routes;
pub mod scrape_client;
pub mod state;
pub mod telemetry;
