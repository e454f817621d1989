//! Article rows and records
//!
//! [`ArticleRow`] is what a data source yields. [`ArticleRecord`] is the
//! cleaned-up form the graph builder works on.

use confgraph_similarity::combine_keyword_fields;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Raw article row as read from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRow {
    /// Article id (`Rid.id`)
    pub id: i64,
    /// Russian keywords, nullable
    #[serde(default)]
    pub keywords_rus: Option<String>,
    /// English keywords, nullable
    #[serde(default)]
    pub keywords_eng: Option<String>,
    /// Section short title
    pub section_title: String,
    /// Conference short title
    pub conference_title: String,
    /// Pages field, e.g. `"1.2.15"`
    #[serde(default)]
    pub pages: Option<String>,
}

impl ArticleRow {
    pub fn new(
        id: i64,
        section_title: impl Into<String>,
        conference_title: impl Into<String>,
    ) -> Self {
        ArticleRow {
            id,
            keywords_rus: None,
            keywords_eng: None,
            section_title: section_title.into(),
            conference_title: conference_title.into(),
            pages: None,
        }
    }

    pub fn with_keywords(mut self, rus: Option<&str>, eng: Option<&str>) -> Self {
        self.keywords_rus = rus.map(str::to_string);
        self.keywords_eng = eng.map(str::to_string);
        self
    }

    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = Some(pages.into());
        self
    }
}

/// Article as seen by the graph builder. Immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub id: i64,
    pub section_title: String,
    pub conference_title: String,
    pub pages: String,
    /// Both keyword fields joined with `,`
    pub keywords_raw: String,
}

impl ArticleRecord {
    /// Build a record from a row. Missing fields fall back to empty text.
    pub fn from_row(row: ArticleRow) -> Self {
        if row.keywords_rus.is_none() && row.keywords_eng.is_none() {
            warn!(article = row.id, "Article has no keywords; it will not be linked");
        }

        let pages = match row.pages {
            Some(pages) => {
                if !pages.contains('.') {
                    warn!(
                        article = row.id,
                        pages = %pages,
                        "Pages field has no '.'; using whole field as label"
                    );
                }
                pages
            }
            None => {
                warn!(article = row.id, "Pages field is missing; using empty label");
                String::new()
            }
        };

        let keywords_raw =
            combine_keyword_fields(row.keywords_rus.as_deref(), row.keywords_eng.as_deref());

        ArticleRecord {
            id: row.id,
            section_title: row.section_title,
            conference_title: row.conference_title,
            pages,
            keywords_raw,
        }
    }
}

impl From<ArticleRow> for ArticleRecord {
    fn from(row: ArticleRow) -> Self {
        ArticleRecord::from_row(row)
    }
}
