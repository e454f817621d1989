//! Similarity graph construction
//!
//! Turns a flat list of [`ArticleRecord`]s into the three-level
//! [`GraphDocument`]:
//! 1. grouping: section `prop` in first-seen order, keyword sets per article
//! 2. index assignment: articles, then sections, then conferences
//! 3. node materialization with labels and article counts
//! 4. article-to-article links by thresholded Jaccard similarity

use super::document::GraphDocument;
use super::node::GraphNode;
use super::types::NodeIndex;
use crate::source::ArticleRecord;
use confgraph_similarity::{link_similar, normalize_keywords, KeywordSet, LinkConfig};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Counts describing a built graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphSummary {
    pub articles: usize,
    pub sections: usize,
    pub conferences: usize,
    /// Undirected similarity links
    pub edges: usize,
    /// Article pairs that were scored
    pub pairs_evaluated: usize,
    /// Records dropped because their article id was already seen
    pub duplicates_skipped: usize,
}

/// Output of [`GraphBuilder::build`]
#[derive(Debug, Clone)]
pub struct SimilarityGraph {
    pub document: GraphDocument,
    pub summary: GraphSummary,
}

/// One article after the grouping pass
struct GroupedArticle<'a> {
    record: &'a ArticleRecord,
    prop: usize,
    keywords: KeywordSet,
}

/// Section bookkeeping: display group and article count
struct SectionGroup {
    prop: usize,
    article_count: usize,
}

/// Accumulated state of the grouping pass
#[derive(Default)]
struct Grouping<'a> {
    articles: Vec<GroupedArticle<'a>>,
    sections: IndexMap<&'a str, SectionGroup>,
    conferences: IndexMap<&'a str, usize>,
    duplicates_skipped: usize,
}

impl<'a> Grouping<'a> {
    /// Group records by section and conference.
    ///
    /// An article id seen twice keeps its first record. Later rows are not
    /// merged: they do not overwrite its keywords, section or pages, and
    /// they are not counted in any section or conference total.
    fn collect(records: &'a [ArticleRecord]) -> Self {
        let mut grouping = Grouping::default();
        let mut seen_ids = HashSet::with_capacity(records.len());

        for record in records {
            if !seen_ids.insert(record.id) {
                warn!(article = record.id, "Duplicate article id; keeping the first record");
                grouping.duplicates_skipped += 1;
                continue;
            }

            let next_prop = grouping.sections.len();
            let section = grouping
                .sections
                .entry(record.section_title.as_str())
                .or_insert(SectionGroup {
                    prop: next_prop,
                    article_count: 0,
                });
            section.article_count += 1;
            let prop = section.prop;

            *grouping
                .conferences
                .entry(record.conference_title.as_str())
                .or_insert(0) += 1;

            grouping.articles.push(GroupedArticle {
                record,
                prop,
                keywords: normalize_keywords(Some(&record.keywords_raw)),
            });
        }

        grouping
    }
}

/// Builds the similarity graph document
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    link_config: LinkConfig,
}

impl GraphBuilder {
    pub fn new(link_config: LinkConfig) -> Self {
        GraphBuilder { link_config }
    }

    pub fn link_config(&self) -> &LinkConfig {
        &self.link_config
    }

    /// Build the graph. Total over any input: bad fields degrade to
    /// fallback labels and empty keyword sets.
    pub fn build(&self, records: &[ArticleRecord]) -> SimilarityGraph {
        let grouping = Grouping::collect(records);

        let article_count = grouping.articles.len();
        let section_base = article_count;
        let conference_base = section_base + grouping.sections.len();

        let mut articles: Vec<GraphNode> = grouping
            .articles
            .iter()
            .enumerate()
            .map(|(idx, article)| {
                GraphNode::article(
                    NodeIndex::new(idx),
                    article.prop,
                    &article.record.pages,
                    &article.record.section_title,
                )
            })
            .collect();

        let sections: Vec<GraphNode> = grouping
            .sections
            .iter()
            .enumerate()
            .map(|(offset, (name, group))| {
                GraphNode::section(
                    NodeIndex::new(section_base + offset),
                    group.prop,
                    name,
                    group.article_count,
                )
            })
            .collect();

        let conferences: Vec<GraphNode> = grouping
            .conferences
            .iter()
            .enumerate()
            .map(|(offset, (name, &count))| {
                GraphNode::conference(NodeIndex::new(conference_base + offset), name, count)
            })
            .collect();

        debug!(
            "Assigned {} article, {} section and {} conference indices",
            articles.len(),
            sections.len(),
            conferences.len()
        );

        // Article positions double as node indices since articles start at 0
        let keyword_sets: Vec<KeywordSet> = grouping
            .articles
            .into_iter()
            .map(|article| article.keywords)
            .collect();
        let links = link_similar(&keyword_sets, &self.link_config);

        for (node, neighbors) in articles.iter_mut().zip(links.adjacency.iter()) {
            for &neighbor in neighbors {
                node.connect(NodeIndex::new(neighbor));
            }
        }

        let summary = GraphSummary {
            articles: articles.len(),
            sections: sections.len(),
            conferences: conferences.len(),
            edges: links.edge_count,
            pairs_evaluated: links.pairs_evaluated,
            duplicates_skipped: grouping.duplicates_skipped,
        };

        info!(
            "Built graph: {} articles, {} sections, {} conferences, {} links (threshold {}%)",
            summary.articles,
            summary.sections,
            summary.conferences,
            summary.edges,
            self.link_config.threshold
        );

        SimilarityGraph {
            document: GraphDocument {
                articles,
                sections,
                conferences,
            },
            summary,
        }
    }
}
