//! Graph node as consumed by the renderer
//!
//! Field order and names follow the document format exactly; the display
//! flags that never vary are still stored so a loaded document round-trips.

use super::types::{NodeIndex, NodeLevel, TypeText};
use serde::{Deserialize, Serialize};

/// A node of the three-level similarity graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Document-wide dense index
    pub id: NodeIndex,

    /// Grouping key: section prop for articles and sections, 0 for conferences
    pub prop: usize,

    pub type_text: TypeText,

    /// Display label
    pub num_text: String,

    #[serde(rename = "type")]
    pub shape: String,

    pub num: u32,

    pub score: u32,

    pub is_base: bool,

    /// Similar-article indices, only populated on article nodes
    pub connections: Vec<NodeIndex>,

    pub sec_start: bool,

    pub sec_end: bool,

    pub font_style: String,

    pub arrow_out: bool,

    pub arrow_in: bool,

    pub level: NodeLevel,

    pub is_label: bool,

    /// Number of articles the node stands for
    pub sec_length: usize,

    pub grey: bool,

    pub yellow: bool,

    /// Section or conference name
    pub sector_name: String,
}

impl GraphNode {
    /// Create a node with the fixed display defaults
    pub fn new(
        id: NodeIndex,
        level: NodeLevel,
        prop: usize,
        num_text: impl Into<String>,
        sec_length: usize,
        sector_name: impl Into<String>,
    ) -> Self {
        GraphNode {
            id,
            prop,
            type_text: level.type_text(),
            num_text: num_text.into(),
            shape: "circle".to_string(),
            num: 1,
            score: 1,
            is_base: true,
            connections: Vec::new(),
            sec_start: true,
            sec_end: true,
            font_style: "normal".to_string(),
            arrow_out: false,
            arrow_in: false,
            level,
            is_label: true,
            sec_length,
            grey: false,
            yellow: false,
            sector_name: sector_name.into(),
        }
    }

    /// Article node: labelled by its page number, counts as one item
    pub fn article(id: NodeIndex, prop: usize, pages: &str, section: &str) -> Self {
        Self::new(id, NodeLevel::Article, prop, page_label(pages), 1, section)
    }

    /// Section node: labelled by the section name
    pub fn section(id: NodeIndex, prop: usize, name: &str, article_count: usize) -> Self {
        Self::new(id, NodeLevel::Section, prop, name, article_count, name)
    }

    /// Conference node: always prop 0
    pub fn conference(id: NodeIndex, name: &str, article_count: usize) -> Self {
        Self::new(id, NodeLevel::Conference, 0, name, article_count, name)
    }

    /// Append a similar-article link
    pub fn connect(&mut self, other: NodeIndex) {
        self.connections.push(other);
    }

    pub fn degree(&self) -> usize {
        self.connections.len()
    }
}

/// Text after the last `.` of a pages field, or the whole field without one
pub fn page_label(pages: &str) -> &str {
    match pages.rfind('.') {
        Some(pos) => &pages[pos + 1..],
        None => pages,
    }
}
