//! CLI interface for running the recommendation workflow once.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use crate::config::Config;
use crate::recommendation::mock_jobs::find_mock_job;
use crate::recommendation::models::{
    JobRecommendationRequest, JobRecommendationResponse, DEFAULT_JOBS_PAGE_URL,
    DEFAULT_NUM_JOBS, DEFAULT_NUM_RECOMMENDATIONS,
};
use crate::recommendation::service::RecommendationService;
use crate::recommendation::source::{MarkdownRegexJobSource, StructuredJobSource};
use crate::recommendation::validation::validate_request;
use crate::resume::load_resume;
use crate::state::AppState;
use crate::telemetry::LogOutput;

/// Where listings come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// LLM link extraction + structured extraction per posting
    Structured,
    /// One markdown scrape + regex over labelled lines
    Regex,
    /// Built-in mock listings, no scraping
    Demo,
}

#[derive(Debug, Parser)]
#[command(name = "job-agent")]
#[command(about = "Recommend roles from a careers page that fit your resume")]
pub struct Cli {
    /// Path to resume file (TXT, MD, PDF)
    #[arg(short, long)]
    pub resume: PathBuf,

    /// Careers page to scrape
    #[arg(short, long, default_value = DEFAULT_JOBS_PAGE_URL)]
    pub url: String,

    /// Number of postings to extract and analyze (1-20)
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_JOBS)]
    pub num_jobs: u32,

    /// Number of recommendations to return (1-10)
    #[arg(short = 'k', long, default_value_t = DEFAULT_NUM_RECOMMENDATIONS)]
    pub num_recommendations: u32,

    /// Extraction strategy
    #[arg(short, long, value_enum, default_value_t = Mode::Structured)]
    pub mode: Mode,

    /// Print the full response envelope as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Logs go to stderr so stdout carries only the report or JSON envelope.
    pub const LOG_OUTPUT: LogOutput = LogOutput::Stderr;

    /// Log level and whether it overrides `RUST_LOG`. `--verbose` always wins.
    pub fn log_level<'a>(&self, configured: &'a str) -> (&'a str, bool) {
        if self.verbose {
            ("debug", true)
        } else {
            (configured, false)
        }
    }
}

/// Loads the resume, validates the request and runs the selected flow.
pub async fn run(cli: &Cli, config: Config) -> Result<JobRecommendationResponse> {
    let resume_text = load_resume(&cli.resume).await?;

    let request = JobRecommendationRequest {
        resume_text,
        jobs_page_url: Some(cli.url.clone()),
        num_jobs: cli.num_jobs,
        num_recommendations: cli.num_recommendations,
    };
    validate_request(&request)?;

    let state = AppState::from_config(config)?;
    let llm = state.require_llm()?.clone();
    let service = RecommendationService::new(llm.clone());

    info!("Running {:?} flow against {}", cli.mode, request.jobs_page_url());

    let response = match cli.mode {
        Mode::Structured => {
            let source = StructuredJobSource {
                scraper: state.require_scraper()?.clone(),
                llm,
            };
            service.recommend(&source, &request).await
        }
        Mode::Regex => {
            let source = MarkdownRegexJobSource {
                scraper: state.require_scraper()?.clone(),
            };
            service.recommend_from_markdown(&source, &request).await?
        }
        Mode::Demo => service.recommend_demo(&request).await?,
    };

    Ok(response)
}

/// Human-readable ranked list.
pub fn render_report(response: &JobRecommendationResponse, mode: Mode) -> String {
    let mut out = String::new();

    if !response.success {
        let _ = writeln!(out, "{}", response.message);
        return out;
    }

    let _ = writeln!(
        out,
        "Analyzed {} of {} postings",
        response.total_jobs_analyzed, response.total_jobs_found
    );

    if response.recommendations.is_empty() {
        let _ = writeln!(out, "No recommendations generated.");
        return out;
    }

    let _ = writeln!(out, "\nRECOMMENDED JOBS BASED ON YOUR RESUME:");
    let _ = writeln!(out, "{}", "=".repeat(60));

    let all_jobs = response.all_jobs.as_deref().unwrap_or_default();
    for (i, rec) in response.recommendations.iter().enumerate() {
        let _ = writeln!(out, "\nRank #{}: {}", i + 1, rec.job_title);
        if !rec.compensation.is_empty() {
            let _ = writeln!(out, "Compensation: {}", rec.compensation);
        }
        let _ = writeln!(out, "Apply here: {}", rec.apply_link);
        if let Some(reason) = &rec.match_reason {
            let _ = writeln!(out, "Why: {reason}");
        }
        if mode == Mode::Demo {
            if let Some(job) = find_mock_job(all_jobs, &rec.apply_link, &rec.job_title) {
                let skills: Vec<&str> = job.key_skills.iter().take(5).map(String::as_str).collect();
                let _ = writeln!(out, "Key Skills Match: {}", skills.join(", "));
            }
        }
    }

    let _ = writeln!(out, "\n{}", "=".repeat(60));
    if let Some(secs) = response.processing_time_seconds {
        let _ = writeln!(out, "Completed in {secs:.2}s");
    }
    out
}

/// Pretty JSON envelope.
pub fn render_json(response: &JobRecommendationResponse) -> Result<String> {
    serde_json::to_string_pretty(response).context("Failed to serialize response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::mock_jobs::mock_jobs;
    use crate::recommendation::models::JobRecommendation;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["job-agent", "--resume", "cv.txt"]).unwrap();
        assert_eq!(cli.url, DEFAULT_JOBS_PAGE_URL);
        assert_eq!(cli.num_jobs, 5);
        assert_eq!(cli.num_recommendations, 3);
        assert_eq!(cli.mode, Mode::Structured);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_mode_parsing() {
        let cli = Cli::try_parse_from(["job-agent", "-r", "cv.pdf", "--mode", "demo", "-k", "2"])
            .unwrap();
        assert_eq!(cli.mode, Mode::Demo);
        assert_eq!(cli.num_recommendations, 2);

        assert!(Cli::try_parse_from(["job-agent", "-r", "cv.pdf", "--mode", "crawl"]).is_err());
    }

    #[test]
    fn test_cli_logs_to_stderr() {
        assert_eq!(Cli::LOG_OUTPUT, LogOutput::Stderr);
    }

    #[test]
    fn test_verbose_overrides_configured_level() {
        let cli = Cli::try_parse_from(["job-agent", "-r", "cv.txt", "-v"]).unwrap();
        assert_eq!(cli.log_level("warn"), ("debug", true));

        let cli = Cli::try_parse_from(["job-agent", "-r", "cv.txt"]).unwrap();
        assert_eq!(cli.log_level("warn"), ("warn", false));
    }

    #[test]
    fn test_cli_requires_resume() {
        assert!(Cli::try_parse_from(["job-agent"]).is_err());
    }

    #[test]
    fn test_report_includes_demo_skills() {
        let jobs = mock_jobs();
        let response = JobRecommendationResponse {
            success: true,
            message: "ok".to_string(),
            total_jobs_found: 5,
            total_jobs_analyzed: 5,
            recommendations: vec![JobRecommendation {
                job_title: jobs[4].job_title.clone(),
                compensation: jobs[4].compensation.clone(),
                apply_link: jobs[4].apply_link.clone(),
                match_reason: Some("Ran the data platform".to_string()),
            }],
            all_jobs: Some(jobs),
            processing_time_seconds: Some(1.234),
        };

        let report = render_report(&response, Mode::Demo);
        assert!(report.contains("Rank #1: Engineering Manager, Data Infrastructure"));
        assert!(report.contains("Why: Ran the data platform"));
        assert!(report.contains("Key Skills Match: Data Infrastructure, Terraform, Kubernetes, SRE, Apache Spark"));
        assert!(report.contains("Completed in 1.23s"));
    }

    #[test]
    fn test_report_for_failure_is_message_only() {
        let response = JobRecommendationResponse::failure("No job links found on the provided page", 0);
        assert_eq!(
            render_report(&response, Mode::Structured),
            "No job links found on the provided page\n"
        );
    }

    #[tokio::test]
    async fn test_run_rejects_short_resume_before_network() {
        use std::io::Write;
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "Too short").unwrap();

        let cli = Cli::try_parse_from(["job-agent", "-r", file.path().to_str().unwrap()]).unwrap();
        let err = run(&cli, Config::default()).await.unwrap_err();
        assert!(err.to_string().contains("resume_text"));
    }

    #[tokio::test]
    async fn test_run_demo_requires_openai_key() {
        use std::io::Write;
        let mut file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
        writeln!(file, "{}", "Experienced data engineer. ".repeat(8)).unwrap();

        let cli = Cli::try_parse_from([
            "job-agent",
            "-r",
            file.path().to_str().unwrap(),
            "--mode",
            "demo",
        ])
        .unwrap();
        let err = run(&cli, Config::default()).await.unwrap_err();
        assert!(err.to_string().contains("OpenAI API key not configured"));
    }
}
