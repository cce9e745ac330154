//! Resume loading for the CLI: plain text, markdown or PDF.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use tokio::fs;

/// Reads a resume file and returns its text. The format is chosen by extension.
pub async fn load_resume(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let text = match extension.as_str() {
        "pdf" => {
            let bytes = fs::read(path)
                .await
                .with_context(|| format!("Failed to read resume '{}'", path.display()))?;
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
                anyhow!("Failed to extract text from PDF '{}': {}", path.display(), e)
            })?
        }
        "txt" | "md" | "markdown" | "" => fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read resume '{}'", path.display()))?,
        other => bail!("Unsupported resume format '.{other}' (expected .txt, .md or .pdf)"),
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        bail!("Resume '{}' contains no text", path.display());
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_plain_text_resume() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "  Jane Doe\nData Engineer  ").unwrap();

        let text = load_resume(file.path()).await.unwrap();
        assert_eq!(text, "Jane Doe\nData Engineer");
    }

    #[tokio::test]
    async fn test_unsupported_extension_rejected() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let err = load_resume(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Unsupported resume format"));
    }

    #[tokio::test]
    async fn test_empty_resume_rejected() {
        let file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
        let err = load_resume(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("contains no text"));
    }

    #[tokio::test]
    async fn test_missing_file_reports_path() {
        let err = load_resume(Path::new("/nonexistent/resume.txt"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/resume.txt"));
    }
}
