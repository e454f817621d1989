//! JSON file article source
//!
//! Reads an exported array of [`ArticleRow`] objects, e.g.
//!
//! ```json
//! [{"id": 1, "keywords_rus": "граф", "keywords_eng": "graph",
//!   "section_title": "S1", "conference_title": "РИИ-2023", "pages": "1.2.15"}]
//! ```

use super::{ArticleRow, ArticleSource, ConferenceFilter, SourceResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Article rows stored in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonFileSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ArticleSource for JsonFileSource {
    async fn fetch(&self, filter: &ConferenceFilter) -> SourceResult<Vec<ArticleRow>> {
        filter.ensure_non_empty()?;

        let text = tokio::fs::read_to_string(&self.path).await?;
        let rows: Vec<ArticleRow> = serde_json::from_str(&text)?;
        debug!("Read {} rows from {:?}", rows.len(), self.path);

        Ok(rows
            .into_iter()
            .filter(|row| filter.matches(&row.conference_title))
            .collect())
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "keywords_rus": "граф", "keywords_eng": null,
                 "section_title": "S1", "conference_title": "РИИ-2023", "pages": "1.2.15"},
                {"id": 2, "section_title": "S9", "conference_title": "other"}
            ]"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&path);
        let rows = source.fetch(&ConferenceFilter::single("РИИ-2023")).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].keywords_rus.as_deref(), Some("граф"));
        assert_eq!(rows[0].keywords_eng, None);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));
        let err = source.fetch(&ConferenceFilter::single("C")).await.unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_file_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = JsonFileSource::new(&path)
            .fetch(&ConferenceFilter::single("C"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }
}
