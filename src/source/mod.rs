//! Article data sources
//!
//! The graph job reads its input through the [`ArticleSource`] trait. Any
//! store that can produce [`ArticleRow`]s for a set of conferences fits:
//! - [`MySqlSource`]: the conference database, via `sqlx`
//! - [`JsonFileSource`]: an exported array of rows on disk
//! - [`MemorySource`]: rows held in process (tests, embedding)

pub mod json;
pub mod memory;
pub mod mysql;
pub mod record;

pub use json::JsonFileSource;
pub use memory::MemorySource;
pub use mysql::{MySqlSource, MySqlSourceConfig};
pub use record::{ArticleRecord, ArticleRow};

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while fetching article rows
#[derive(Error, Debug)]
pub enum SourceError {
    /// Database connectivity or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O error reading a file-based source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON rows
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No conference to filter on
    #[error("Conference filter is empty")]
    EmptyFilter,
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Conference short titles to select, combined with logical OR
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConferenceFilter {
    titles: Vec<String>,
}

impl ConferenceFilter {
    /// Build a filter; duplicate titles are collapsed, order kept
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for title in titles {
            let title = title.into();
            if !unique.contains(&title) {
                unique.push(title);
            }
        }
        ConferenceFilter { titles: unique }
    }

    pub fn single(title: impl Into<String>) -> Self {
        let title: String = title.into();
        Self::new([title])
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn matches(&self, conference_title: &str) -> bool {
        self.titles.iter().any(|t| t == conference_title)
    }

    /// Fail with [`SourceError::EmptyFilter`] when there is nothing to select
    pub fn ensure_non_empty(&self) -> SourceResult<()> {
        if self.is_empty() {
            Err(SourceError::EmptyFilter)
        } else {
            Ok(())
        }
    }
}

/// Read-only supplier of article rows.
///
/// A fetch completes or fails as a whole; implementations never hand back a
/// partial result. Rows come back in a stable order so that repeated runs
/// assign identical indices.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch all rows belonging to any conference in `filter`
    async fn fetch(&self, filter: &ConferenceFilter) -> SourceResult<Vec<ArticleRow>>;

    /// Short name for logs
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_dedup_and_match() {
        let filter = ConferenceFilter::new(["РИИ-2023", "ИИ-2024", "РИИ-2023"]);
        assert_eq!(filter.titles().len(), 2);
        assert!(filter.matches("РИИ-2023"));
        assert!(filter.matches("ИИ-2024"));
        assert!(!filter.matches("other"));
    }

    #[test]
    fn test_empty_filter_rejected() {
        let filter = ConferenceFilter::default();
        assert!(filter.is_empty());
        assert!(matches!(filter.ensure_non_empty(), Err(SourceError::EmptyFilter)));
        assert!(ConferenceFilter::single("C1").ensure_non_empty().is_ok());
    }
}
