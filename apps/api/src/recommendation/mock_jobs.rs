//! Fixed listings served by the demo flow in place of a live scrape.

use crate::recommendation::models::JobData;

fn job(
    title: &str,
    compensation: &str,
    skills: &[&str],
    apply_link: &str,
) -> JobData {
    JobData {
        job_title: title.to_string(),
        location: "San Francisco".to_string(),
        compensation: compensation.to_string(),
        key_skills: skills.iter().map(|s| s.to_string()).collect(),
        apply_link: apply_link.to_string(),
        sub_division_of_organization: Some("Applied AI".to_string()),
    }
}

pub fn mock_jobs() -> Vec<JobData> {
    vec![
        job(
            "Data Engineering Manager",
            "$405K – $490K • Offers Equity",
            &[
                "data engineering",
                "leadership",
                "data strategy",
                "data architecture",
                "data quality",
                "data governance",
                "programming languages (Python, Scala, Java)",
            ],
            "https://jobs.ashbyhq.com/openai/b3394315-e8da-4f54-9926-dfe32a1e4913/application",
        ),
        job(
            "Data Engineer, Analytics",
            "$255K – $405K • Offers Equity",
            &[
                "3+ years of experience as a data engineer",
                "8+ years of software engineering experience",
                "Proficiency in Python, Scala, or Java",
                "Experience with Hadoop, Flink, HDFS, S3",
                "Expertise with ETL schedulers like Airflow, Dagster, Prefect",
                "Solid understanding of Spark",
            ],
            "https://jobs.ashbyhq.com/openai/fc5bbc77-a30c-4e7a-9acc-8a2e748545b4/application",
        ),
        job(
            "Backend Software Engineer (Evals)",
            "$255K – $405K • Offers Equity",
            &[
                "Backend engineering",
                "Python",
                "FastAPI",
                "Postgres",
                "Distributed systems",
                "APIs",
                "Data processing pipelines",
                "AI agents",
                "Evaluation methods for LLMs",
            ],
            "https://jobs.ashbyhq.com/openai/3d064454-c0c3-4225-bc2c-6d8c0f8735b2/application",
        ),
        job(
            "Backend Software Engineer, Growth",
            "$160K – $385K • Offers Equity",
            &[
                "data analysis",
                "product ideation",
                "experimentation",
                "A/B testing",
                "backend systems",
                "collaboration with cross-functional teams",
            ],
            "https://jobs.ashbyhq.com/openai/dd2025b9-4d18-4ad7-a78c-7a643419ecc5/application",
        ),
        job(
            "Engineering Manager, Data Infrastructure",
            "$325K – $405K • Offers Equity",
            &[
                "Data Infrastructure",
                "Terraform",
                "Kubernetes",
                "SRE",
                "Apache Spark",
                "Apache Iceberg",
                "Airflow",
                "Kafka",
                "Flink",
                "Chronon",
            ],
            "https://jobs.ashbyhq.com/openai/4f5a0df1-22d7-49a6-8ea1-c15c886fbade/application",
        ),
    ]
}

/// Finds the mock listing a recommendation points at, by apply link then title.
pub fn find_mock_job<'a>(jobs: &'a [JobData], apply_link: &str, title: &str) -> Option<&'a JobData> {
    jobs.iter()
        .find(|j| j.apply_link == apply_link)
        .or_else(|| jobs.iter().find(|j| j.job_title == title))
}
