//! confgraph: keyword similarity graph of conference articles
//!
//! Reads conference articles (keywords, section, conference, pages) from a
//! data source, links articles whose keyword sets overlap enough, and writes
//! a three-level node graph (articles, sections, conferences) as JSON for a
//! renderer.
//!
//! # Pipeline
//!
//! ```text
//! ArticleSource -> ArticleRecord -> normalize_keywords -> jaccard_percent
//!               -> GraphBuilder -> GraphDocument -> DocumentEmitter
//! ```
//!
//! Keyword normalization, scoring and pairwise linking live in the
//! `confgraph-similarity` crate; this crate adds the data model, the
//! data sources, graph construction and the output document.
//!
//! ## Example Usage
//!
//! ```rust
//! use confgraph::graph::GraphBuilder;
//! use confgraph::source::{ArticleRecord, ArticleRow};
//!
//! let rows = vec![
//!     ArticleRow::new(1, "S1", "C1").with_keywords(None, Some("graph, ai")).with_pages("1.1.3"),
//!     ArticleRow::new(2, "S1", "C1").with_keywords(None, Some("graph; ml")).with_pages("1.1.7"),
//!     ArticleRow::new(3, "S1", "C1").with_keywords(None, Some("db")).with_pages("1.1.9"),
//! ];
//! let records: Vec<ArticleRecord> = rows.into_iter().map(ArticleRecord::from).collect();
//!
//! let graph = GraphBuilder::default().build(&records);
//! assert_eq!(graph.summary.edges, 1);
//! assert_eq!(graph.document.sections[0].sec_length, 3);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod emit;
pub mod graph;
pub mod pipeline;
pub mod source;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, JobConfig, SourceConfig};
pub use emit::{DocumentEmitter, EmitError, EmitResult};
pub use graph::{
    GraphBuilder, GraphDocument, GraphNode, GraphSummary, NodeIndex, NodeLevel, SimilarityGraph,
    TypeText,
};
pub use pipeline::{open_source, JobError, JobResult, SimilarityJob};
pub use source::{
    ArticleRecord, ArticleRow, ArticleSource, ConferenceFilter, JsonFileSource, MemorySource,
    MySqlSource, SourceError, SourceResult,
};

pub use confgraph_similarity::{
    is_linked, jaccard_percent, normalize_keywords, shared_keywords, KeywordSet, LinkConfig,
    PairingStrategy,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
