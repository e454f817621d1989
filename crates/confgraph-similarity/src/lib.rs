//! Keyword similarity primitives for confgraph
//!
//! Three leaf components, each free of I/O:
//! - [`keywords`]: free-text keyword fields to canonical token sets
//! - [`jaccard`]: symmetric overlap score between two token sets
//! - [`linking`]: thresholded all-pairs adjacency over a list of sets

pub mod common;
pub mod jaccard;
pub mod keywords;
pub mod linking;

pub use common::{KeywordSet, DEFAULT_SIMILARITY_THRESHOLD};
pub use jaccard::{is_linked, jaccard_percent, shared_keywords};
pub use keywords::{combine_keyword_fields, normalize_keywords, KEYWORD_DELIMITERS};
pub use linking::{link_similar, LinkConfig, LinkResult, PairingStrategy};
