//! Jaccard similarity between keyword sets

use super::common::KeywordSet;

/// Jaccard index of two sets as a percentage, rounded to 2 decimals.
///
/// Two empty sets score `0.0`: articles without keywords are never similar.
pub fn jaccard_percent(a: &KeywordSet, b: &KeywordSet) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    // Iterate the smaller set for the intersection
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|t| large.contains(*t)).count();
    let union = a.len() + b.len() - intersection;

    round2(intersection as f64 / union as f64 * 100.0)
}

/// Whether a score reaches the link threshold (inclusive).
pub fn is_linked(score: f64, threshold: f64) -> bool {
    score >= threshold
}

/// Tokens present in both sets, sorted.
pub fn shared_keywords(a: &KeywordSet, b: &KeywordSet) -> Vec<String> {
    let mut shared: Vec<String> = a.intersection(b).cloned().collect();
    shared.sort();
    shared
}

/// Round to 2 decimals, halfway cases to the even neighbor
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
