//! Thresholded pairwise linking
//!
//! Builds a symmetric adjacency list over a slice of keyword sets. Every
//! unordered pair `(i, j)` with `i < j` is considered once, in `i`-ascending
//! then `j`-ascending order, so neighbor lists come out in first-detected
//! order.

use super::common::{KeywordSet, DEFAULT_SIMILARITY_THRESHOLD};
use super::jaccard::{is_linked, jaccard_percent};
use std::collections::{BTreeSet, HashMap};

/// How candidate pairs are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PairingStrategy {
    /// Score all n*(n-1)/2 pairs
    #[default]
    Exhaustive,
    /// Score only pairs sharing at least one token (token -> sets index).
    /// Falls back to `Exhaustive` when the threshold is not positive.
    InvertedIndex,
}

/// Linking configuration
#[derive(Debug, Clone, Copy)]
pub struct LinkConfig {
    /// Minimum score in percent for a link (inclusive)
    pub threshold: f64,
    /// Candidate enumeration
    pub strategy: PairingStrategy,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            strategy: PairingStrategy::Exhaustive,
        }
    }
}

/// Result of pairwise linking
#[derive(Debug, Clone, Default)]
pub struct LinkResult {
    /// Neighbor indices per input position
    pub adjacency: Vec<Vec<usize>>,
    /// Number of undirected links
    pub edge_count: usize,
    /// Number of pairs actually scored
    pub pairs_evaluated: usize,
}

impl LinkResult {
    /// Neighbors of position `idx`
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }
}

/// Link every pair of sets whose Jaccard score reaches the threshold.
pub fn link_similar(sets: &[KeywordSet], config: &LinkConfig) -> LinkResult {
    let n = sets.len();
    let mut result = LinkResult {
        adjacency: vec![Vec::new(); n],
        edge_count: 0,
        pairs_evaluated: 0,
    };

    match effective_strategy(config) {
        PairingStrategy::Exhaustive => {
            for i in 0..n {
                for j in (i + 1)..n {
                    evaluate_pair(sets, i, j, config.threshold, &mut result);
                }
            }
        }
        PairingStrategy::InvertedIndex => {
            let postings = build_postings(sets);
            for i in 0..n {
                // Ordered so links are appended in the same order as the exhaustive scan
                let candidates: BTreeSet<usize> = sets[i]
                    .iter()
                    .filter_map(|token| postings.get(token.as_str()))
                    .flat_map(|list| list.iter().copied())
                    .filter(|&j| j > i)
                    .collect();

                for j in candidates {
                    evaluate_pair(sets, i, j, config.threshold, &mut result);
                }
            }
        }
    }

    result
}

fn effective_strategy(config: &LinkConfig) -> PairingStrategy {
    // A non-positive threshold links zero-overlap pairs too
    if config.threshold <= 0.0 {
        PairingStrategy::Exhaustive
    } else {
        config.strategy
    }
}

fn evaluate_pair(sets: &[KeywordSet], i: usize, j: usize, threshold: f64, result: &mut LinkResult) {
    result.pairs_evaluated += 1;
    let score = jaccard_percent(&sets[i], &sets[j]);
    if is_linked(score, threshold) {
        result.adjacency[i].push(j);
        result.adjacency[j].push(i);
        result.edge_count += 1;
    }
}

fn build_postings(sets: &[KeywordSet]) -> HashMap<&str, Vec<usize>> {
    let mut postings: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, set) in sets.iter().enumerate() {
        for token in set {
            postings.entry(token.as_str()).or_default().push(idx);
        }
    }
    postings
}
