//! Core type definitions for the similarity graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a node in the output document.
///
/// Indices are dense and unique across all three levels: articles first,
/// then sections, then conferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeIndex(pub usize);

impl NodeIndex {
    pub fn new(index: usize) -> Self {
        NodeIndex(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl From<usize> for NodeIndex {
    fn from(index: usize) -> Self {
        NodeIndex(index)
    }
}

/// Graph layer of a node, serialized as `0`, `1` or `2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum NodeLevel {
    Article,
    Section,
    Conference,
}

impl NodeLevel {
    pub fn as_u8(&self) -> u8 {
        match self {
            NodeLevel::Article => 0,
            NodeLevel::Section => 1,
            NodeLevel::Conference => 2,
        }
    }

    /// Single-letter tag used by the renderer
    pub fn type_text(&self) -> TypeText {
        match self {
            NodeLevel::Article => TypeText::Article,
            NodeLevel::Section => TypeText::Section,
            NodeLevel::Conference => TypeText::Conference,
        }
    }
}

impl From<NodeLevel> for u8 {
    fn from(level: NodeLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for NodeLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(NodeLevel::Article),
            1 => Ok(NodeLevel::Section),
            2 => Ok(NodeLevel::Conference),
            other => Err(format!("invalid node level {}", other)),
        }
    }
}

impl fmt::Display for NodeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeLevel::Article => "article",
            NodeLevel::Section => "section",
            NodeLevel::Conference => "conference",
        };
        write!(f, "{}", name)
    }
}

/// `typeText` tag: "A" article, "P" section, "C" conference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeText {
    #[serde(rename = "A")]
    Article,
    #[serde(rename = "P")]
    Section,
    #[serde(rename = "C")]
    Conference,
}

impl TypeText {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeText::Article => "A",
            TypeText::Section => "P",
            TypeText::Conference => "C",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_index() {
        let idx = NodeIndex::new(42);
        assert_eq!(idx.as_usize(), 42);
        assert_eq!(format!("{}", idx), "NodeIndex(42)");

        let idx2: NodeIndex = 7.into();
        assert_eq!(idx2.as_usize(), 7);
        assert_eq!(serde_json::to_string(&idx2).unwrap(), "7");
    }

    #[test]
    fn test_level_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&NodeLevel::Article).unwrap(), "0");
        assert_eq!(serde_json::to_string(&NodeLevel::Conference).unwrap(), "2");

        let level: NodeLevel = serde_json::from_str("1").unwrap();
        assert_eq!(level, NodeLevel::Section);
        assert!(serde_json::from_str::<NodeLevel>("3").is_err());
    }

    #[test]
    fn test_type_text() {
        assert_eq!(NodeLevel::Article.type_text().as_str(), "A");
        assert_eq!(NodeLevel::Section.type_text().as_str(), "P");
        assert_eq!(serde_json::to_string(&TypeText::Conference).unwrap(), "\"C\"");
    }

    #[test]
    fn test_level_ordering() {
        assert!(NodeLevel::Article < NodeLevel::Section);
        assert!(NodeLevel::Section < NodeLevel::Conference);
    }
}
