//! Regex-based listing extraction over scraped markdown.
//!
//! Cheaper than structured extraction (one scrape, no per-posting calls) but
//! only finds listings laid out as labelled lines:
//!
//! ```text
//! Job Title: Data Engineer
//! Compensation: $255K – $405K
//! Apply: https://jobs.example.com/1
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::recommendation::models::JobData;

/// Title, then a later salary line, then a later apply line. Labels may be bold.
const LISTING_PATTERN: &str = r"(?is)(?:job title|position|role)\**:[ \t*]*([^\n]+)\n.*?(?:salary|compensation)\**:[ \t*]*([^\n]+)\n.*?(?:apply|link)\**:[ \t*]*([^\n]+)";

fn listing_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LISTING_PATTERN).expect("listing pattern is valid"))
}

fn markdown_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]]*\]\((\S+?)\)").expect("link pattern is valid"))
}

fn clean_value(raw: &str) -> String {
    raw.trim().trim_matches('*').trim().to_string()
}

/// `[Apply here](https://x)` → `https://x`; anything else is returned cleaned.
fn clean_link(raw: &str) -> String {
    markdown_link_regex()
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| clean_value(raw))
}

/// Extracts at most `limit` listings from `markdown`, in document order.
///
/// Only title, compensation and apply link are recovered; the other
/// `JobData` fields are left empty.
pub fn extract_listings(markdown: &str, limit: usize) -> Vec<JobData> {
    listing_regex()
        .captures_iter(markdown)
        .map(|caps| JobData {
            job_title: clean_value(&caps[1]),
            location: String::new(),
            compensation: clean_value(&caps[2]),
            key_skills: vec![],
            apply_link: clean_link(&caps[3]),
            sub_division_of_organization: None,
        })
        .filter(|job| !job.job_title.is_empty())
        .take(limit)
        .collect()
}
