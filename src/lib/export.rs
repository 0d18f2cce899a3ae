//! Export affordances for a generated summary: a plain-text file download and
//! a base64 data URI serving as a clipboard substitute.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const SUMMARY_FILENAME: &str = "summary.txt";
pub const SUMMARY_MIME: &str = "text/plain";

/// Writes the summary to `path` and returns the written path.
pub async fn save_summary(path: impl AsRef<Path>, summary: &str) -> std::io::Result<PathBuf> {
    let path = path.as_ref();
    tokio::fs::write(path, summary.as_bytes()).await?;
    tracing::info!(path = %path.display(), "Saved summary");
    Ok(path.to_path_buf())
}

/// Encodes the summary as a `data:` URI that downloads as plain text.
pub fn data_uri(summary: &str) -> String {
    let b64 = STANDARD.encode(summary.as_bytes());
    format!("data:{};base64,{}", SUMMARY_MIME, b64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_known_vector() {
        assert_eq!(data_uri("hello"), "data:text/plain;base64,aGVsbG8=");
    }

    #[test]
    fn test_data_uri_empty_summary() {
        assert_eq!(data_uri(""), "data:text/plain;base64,");
    }

    #[tokio::test]
    async fn test_save_summary_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SUMMARY_FILENAME);

        let written = save_summary(&path, "A short summary.").await.unwrap();
        assert_eq!(written, path);

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(contents, "A short summary.");
    }
}
