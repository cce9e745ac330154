use std::ops::RangeInclusive;

use crate::errors::AppError;
use crate::recommendation::models::JobRecommendationRequest;

pub const MIN_RESUME_CHARS: usize = 100;
pub const NUM_JOBS_RANGE: RangeInclusive<u32> = 1..=20;
pub const NUM_RECOMMENDATIONS_RANGE: RangeInclusive<u32> = 1..=10;

/// Checks required fields, numeric ranges and the URL scheme.
/// All violations are reported together.
pub fn validate_request(request: &JobRecommendationRequest) -> Result<(), AppError> {
    let mut problems = Vec::new();

    let resume_chars = request.resume_text.chars().count();
    if resume_chars < MIN_RESUME_CHARS {
        problems.push(format!(
            "resume_text must be at least {MIN_RESUME_CHARS} characters (got {resume_chars})"
        ));
    }

    if !NUM_JOBS_RANGE.contains(&request.num_jobs) {
        problems.push(format!(
            "num_jobs must be between {} and {} (got {})",
            NUM_JOBS_RANGE.start(),
            NUM_JOBS_RANGE.end(),
            request.num_jobs
        ));
    }

    if !NUM_RECOMMENDATIONS_RANGE.contains(&request.num_recommendations) {
        problems.push(format!(
            "num_recommendations must be between {} and {} (got {})",
            NUM_RECOMMENDATIONS_RANGE.start(),
            NUM_RECOMMENDATIONS_RANGE.end(),
            request.num_recommendations
        ));
    }

    if let Some(url) = request.jobs_page_url.as_deref() {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            problems.push("URL must start with http:// or https://".to_string());
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume() -> String {
        "Senior data engineer with eight years building Spark and Airflow pipelines, \
         leading teams, and owning data quality across analytics platforms."
            .to_string()
    }

    fn message(result: Result<(), AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_request(&JobRecommendationRequest::new(resume())).is_ok());
    }

    #[test]
    fn test_short_resume_rejected() {
        let msg = message(validate_request(&JobRecommendationRequest::new("too short")));
        assert!(msg.contains("resume_text"));
    }

    #[test]
    fn test_resume_length_counts_characters_not_bytes() {
        // 99 multi-byte characters is well over 100 bytes but still too short.
        let req = JobRecommendationRequest::new("é".repeat(99));
        assert!(validate_request(&req).is_err());
        let req = JobRecommendationRequest::new("é".repeat(100));
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn test_num_jobs_bounds() {
        let mut req = JobRecommendationRequest::new(resume());
        req.num_jobs = 0;
        assert!(message(validate_request(&req)).contains("num_jobs"));
        req.num_jobs = 21;
        assert!(validate_request(&req).is_err());
        req.num_jobs = 20;
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn test_num_recommendations_bounds() {
        let mut req = JobRecommendationRequest::new(resume());
        req.num_recommendations = 11;
        assert!(message(validate_request(&req)).contains("num_recommendations"));
        req.num_recommendations = 1;
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn test_url_scheme_checked() {
        let mut req = JobRecommendationRequest::new(resume());
        req.jobs_page_url = Some("ftp://jobs.example.com".to_string());
        assert!(message(validate_request(&req)).contains("http://"));
        req.jobs_page_url = Some("http://jobs.example.com".to_string());
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn test_all_problems_reported_together() {
        let mut req = JobRecommendationRequest::new("short");
        req.num_jobs = 0;
        req.num_recommendations = 0;
        let msg = message(validate_request(&req));
        assert_eq!(msg.split("; ").count(), 3);
    }
}
