//! Shared types for the similarity crate

use std::collections::HashSet;

/// Normalized keyword tokens of one article.
///
/// Tokens are lowercase, trimmed and non-empty. Order carries no meaning.
pub type KeywordSet = HashSet<String>;

/// Link threshold in percent used when nothing else is configured.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 10.0;
