//! Keyword normalization
//!
//! Turns free-text keyword fields into [`KeywordSet`]s.

use super::common::KeywordSet;

/// Characters that separate keywords inside a field.
pub const KEYWORD_DELIMITERS: [char; 2] = [';', ','];

/// Normalize a raw keyword field into a token set.
///
/// The whole text is lowercased, split on `;` and `,`, and every token is
/// trimmed. Empty tokens are dropped. `None`, `""` and whitespace-only
/// input all give the empty set.
pub fn normalize_keywords(text: Option<&str>) -> KeywordSet {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return KeywordSet::new(),
    };

    text.to_lowercase()
        .split(&KEYWORD_DELIMITERS[..])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join the Russian and English keyword fields of an article.
///
/// The fields are joined with a literal `,`. Because `,` is also a keyword
/// delimiter, the last Russian token and the first English token stay apart
/// after normalization. Missing fields count as empty.
pub fn combine_keyword_fields(rus: Option<&str>, eng: Option<&str>) -> String {
    format!("{},{}", rus.unwrap_or(""), eng.unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> KeywordSet {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize_keywords(None).is_empty());
        assert!(normalize_keywords(Some("")).is_empty());
        assert!(normalize_keywords(Some("   \t ")).is_empty());
        assert!(normalize_keywords(Some(" ; , ;")).is_empty());
    }

    #[test]
    fn test_normalize_splits_and_case_folds() {
        let result = normalize_keywords(Some("A, b ; C"));
        assert_eq!(result, set(&["a", "b", "c"]));
    }

    #[test]
    fn test_normalize_deduplicates() {
        let result = normalize_keywords(Some("Graph; graph ,GRAPH, neural networks"));
        assert_eq!(result, set(&["graph", "neural networks"]));
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        let result = normalize_keywords(Some("  machine   learning ;deep learning"));
        assert!(result.contains("machine   learning"));
        assert!(result.contains("deep learning"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_normalize_cyrillic() {
        let result = normalize_keywords(Some("Нейронные Сети; ГРАФ"));
        assert_eq!(result, set(&["нейронные сети", "граф"]));
    }

    #[test]
    fn test_combine_fields() {
        assert_eq!(combine_keyword_fields(Some("граф"), Some("graph")), "граф,graph");
        assert_eq!(combine_keyword_fields(None, Some("graph")), ",graph");
        assert_eq!(combine_keyword_fields(None, None), ",");
    }

    #[test]
    fn test_combined_fields_normalize_to_union() {
        let combined = combine_keyword_fields(Some("Граф; онтология"), Some("Graph; ontology"));
        let result = normalize_keywords(Some(&combined));
        assert_eq!(result, set(&["граф", "онтология", "graph", "ontology"]));

        let only_commas = combine_keyword_fields(None, None);
        assert!(normalize_keywords(Some(&only_commas)).is_empty());
    }
}
