//! Detail Extractor: structured extraction of one posting per link.

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::recommendation::models::JobData;
use crate::scrape_client::{PageAction, ScrapeClient};

/// Element clicked before extraction so the full overview is rendered.
pub const JOB_OVERVIEW_SELECTOR: &str = "#job-overview";

/// JSON schema handed to the structured-extraction API. Mirrors `JobData`.
pub fn job_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "job_title": {"type": "string"},
            "sub_division_of_organization": {"type": "string"},
            "key_skills": {"type": "array", "items": {"type": "string"}},
            "compensation": {"type": "string"},
            "location": {"type": "string"},
            "apply_link": {"type": "string"}
        },
        "required": [
            "job_title",
            "sub_division_of_organization",
            "key_skills",
            "compensation",
            "location",
            "apply_link"
        ]
    })
}

/// Extracts `JobData` from every link, skipping the ones that fail.
///
/// Links are processed sequentially in input order.
pub async fn extract_job_details(scraper: &ScrapeClient, links: &[String]) -> Vec<JobData> {
    let schema = job_schema();
    let actions = [PageAction::click(JOB_OVERVIEW_SELECTOR)];
    let total = links.len();
    let mut jobs = Vec::with_capacity(total);

    for (index, link) in links.iter().enumerate() {
        let extract = match scraper.extract(link, &schema, &actions).await {
            Ok(v) => v,
            Err(e) => {
                warn!("Failed to extract data for job {}/{}: {}", index + 1, total, e);
                continue;
            }
        };

        match serde_json::from_value::<JobData>(extract) {
            Ok(job) => {
                info!("Extracted data for job {}/{}", index + 1, total);
                jobs.push(job);
            }
            Err(e) => {
                warn!(
                    "Extraction for job {}/{} did not match schema: {}",
                    index + 1,
                    total,
                    e
                );
            }
        }
    }

    jobs
}
