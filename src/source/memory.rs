//! In-process article source

use super::{ArticleRow, ArticleSource, ConferenceFilter, SourceResult};
use async_trait::async_trait;

/// Rows held in memory, returned in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<ArticleRow>,
}

impl MemorySource {
    pub fn new(rows: Vec<ArticleRow>) -> Self {
        MemorySource { rows }
    }

    pub fn push(&mut self, row: ArticleRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<ArticleRow> for MemorySource {
    fn from_iter<I: IntoIterator<Item = ArticleRow>>(iter: I) -> Self {
        MemorySource::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl ArticleSource for MemorySource {
    async fn fetch(&self, filter: &ConferenceFilter) -> SourceResult<Vec<ArticleRow>> {
        filter.ensure_non_empty()?;
        Ok(self
            .rows
            .iter()
            .filter(|row| filter.matches(&row.conference_title))
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
