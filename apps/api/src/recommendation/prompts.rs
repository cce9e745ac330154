// LLM prompt templates for the recommendation workflow.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Link extraction prompt template.
/// Replace: {num_jobs}, {json_only_instruction}, {markdown}
pub const LINK_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract up to {num_jobs} job application links from the given markdown content.
Return the result as a JSON object with a single key 'apply_links' containing an array of strings (the links).
{json_only_instruction}

Example of the expected format:
{"apply_links": ["https://example.com/job1", "https://example.com/job2"]}

Markdown content:
{markdown}"#;

/// Ranking prompt template that asks for a rationale per role.
/// Replace: {num_recommendations}, {json_only_instruction}, {resume_text}, {jobs_json}
pub const RANKING_WITH_REASONS_PROMPT_TEMPLATE: &str = r#"Please analyze the resume and job listings, and return a JSON list of the top {num_recommendations} roles that best fit the candidate's experience and skills.
Include only the job title, compensation, and apply link for each recommended role, plus a brief match reason.
{json_only_instruction}
Use a JSON array of objects in the following format:

[
  {
    "job_title": "Job Title",
    "compensation": "Compensation (if available, otherwise empty string)",
    "apply_link": "Application URL",
    "match_reason": "Brief explanation of why this job matches the candidate's background"
  }
]

Based on the following resume:
{resume_text}

And the following job listings:
{jobs_json}"#;

/// Ranking prompt template without rationale, for thinly extracted listings.
/// Replace: {num_recommendations}, {json_only_instruction}, {resume_text}, {jobs_json}
pub const RANKING_BRIEF_PROMPT_TEMPLATE: &str = r#"Please analyze the resume and job listings, and return a JSON list of the top {num_recommendations} roles that best fit the candidate's experience and skills.
Include only the job title, compensation, and apply link for each recommended role.
{json_only_instruction}
Use a JSON array of objects in the following format:

[
  {
    "job_title": "Job Title",
    "compensation": "Compensation (if available, otherwise empty string)",
    "apply_link": "Application URL"
  }
]

Based on the following resume:
{resume_text}

And the following job listings:
{jobs_json}"#;
