//! Similarity graph model and construction
//!
//! Three node levels share one index space:
//! - level 0: articles, linked to each other by keyword similarity
//! - level 1: sections, one per distinct section title
//! - level 2: conferences, one per distinct conference title

pub mod builder;
pub mod document;
pub mod node;
pub mod types;

// Re-export main types
pub use builder::{GraphBuilder, GraphSummary, SimilarityGraph};
pub use document::GraphDocument;
pub use node::{page_label, GraphNode};
pub use types::{NodeIndex, NodeLevel, TypeText};
