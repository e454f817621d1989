//! Output document: the three node levels

use super::node::GraphNode;
use super::types::NodeLevel;
use serde::{Deserialize, Serialize};

type Levels = (Vec<GraphNode>, Vec<GraphNode>, Vec<GraphNode>);

/// `[articleNodes, sectionNodes, confNodes]`, each in index order.
///
/// Serialized as a JSON array of three arrays.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Levels", into = "Levels")]
pub struct GraphDocument {
    pub articles: Vec<GraphNode>,
    pub sections: Vec<GraphNode>,
    pub conferences: Vec<GraphNode>,
}

impl From<Levels> for GraphDocument {
    fn from((articles, sections, conferences): Levels) -> Self {
        GraphDocument {
            articles,
            sections,
            conferences,
        }
    }
}

impl From<GraphDocument> for Levels {
    fn from(doc: GraphDocument) -> Self {
        (doc.articles, doc.sections, doc.conferences)
    }
}

impl GraphDocument {
    /// Nodes of one level
    pub fn level(&self, level: NodeLevel) -> &[GraphNode] {
        match level {
            NodeLevel::Article => &self.articles,
            NodeLevel::Section => &self.sections,
            NodeLevel::Conference => &self.conferences,
        }
    }

    /// All nodes, articles first
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.articles
            .iter()
            .chain(self.sections.iter())
            .chain(self.conferences.iter())
    }

    pub fn node_count(&self) -> usize {
        self.articles.len() + self.sections.len() + self.conferences.len()
    }

    /// Undirected similarity links between articles
    pub fn edge_count(&self) -> usize {
        self.articles.iter().map(GraphNode::degree).sum::<usize>() / 2
    }
}
