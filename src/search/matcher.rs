//! Approximate field matching
//!
//! Computes a normalized match cost in [0, 1] between a query and a single
//! text field: 0 means the query is an exact (case-insensitive) substring of
//! the field, 1 means no detectable similarity. Typo tolerance comes from
//! normalized Damerau-Levenshtein distance, so insertions, deletions,
//! substitutions and transpositions within a small fraction of the term
//! length all stay near 0.

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Scale applied when one token merely contains the other; a containment
/// match is much closer than its raw length difference suggests
const CONTAINMENT_SCALE: f64 = 0.25;

/// A field value submitted for matching: either a single text, or a list
/// where a match against any element counts
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

/// One weighted field of a document
#[derive(Debug, Clone)]
pub struct WeightedField {
    pub weight: f64,
    pub value: FieldValue,
}

impl WeightedField {
    pub fn text(weight: f64, value: &str) -> Self {
        Self {
            weight,
            value: FieldValue::Text(value.to_string()),
        }
    }

    pub fn list(weight: f64, values: &[String]) -> Self {
        Self {
            weight,
            value: FieldValue::List(values.to_vec()),
        }
    }
}

/// A query normalized and tokenized once, reused against every document in
/// the corpus snapshot
#[derive(Debug, Clone)]
pub struct QueryTerms {
    full: String,
    terms: Vec<String>,
}

impl QueryTerms {
    pub fn new(raw: &str) -> Self {
        let full = normalize(raw);
        let terms = full.unicode_words().map(str::to_string).collect();
        Self { full, terms }
    }
}

/// Normalize text for matching: NFKC, trimmed, lowercased
pub fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().trim().to_lowercase()
}

/// Match a query against one field value.
///
/// Returns `None` when the field is empty or absent; an empty field never
/// contributes a candidate match and never penalizes the document.
pub fn field_cost(query: &QueryTerms, value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Text(text) => text_cost(query, text),
        FieldValue::List(items) => items
            .iter()
            .filter_map(|item| text_cost(query, item))
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)),
    }
}

fn text_cost(query: &QueryTerms, text: &str) -> Option<f64> {
    let haystack = normalize(text);
    if haystack.is_empty() {
        return None;
    }

    // Exact substring wins outright
    if !query.full.is_empty() && haystack.contains(&query.full) {
        return Some(0.0);
    }

    if query.terms.is_empty() {
        return None;
    }
    let tokens: Vec<&str> = haystack.unicode_words().collect();
    if tokens.is_empty() {
        return None;
    }

    // Each query term takes its cheapest cost against the field's tokens;
    // the field cost is the char-length-weighted mean, so a one-letter typo
    // in a long term barely registers while a completely unmatched term
    // drags the whole query down.
    let mut weighted_sum = 0.0;
    let mut total_len = 0usize;
    for term in &query.terms {
        let best = tokens
            .iter()
            .map(|token| term_cost(term, token))
            .fold(1.0f64, f64::min);
        let len = term.chars().count();
        weighted_sum += best * len as f64;
        total_len += len;
    }

    Some(weighted_sum / total_len as f64)
}

/// Cost of matching a single query term against a single field token
fn term_cost(term: &str, token: &str) -> f64 {
    if term == token {
        return 0.0;
    }

    if token.contains(term) || term.contains(token) {
        let term_len = term.chars().count();
        let token_len = token.chars().count();
        let (shorter, longer) = if term_len < token_len {
            (term_len, token_len)
        } else {
            (token_len, term_len)
        };
        if longer == 0 {
            return 1.0;
        }
        return (1.0 - shorter as f64 / longer as f64) * CONTAINMENT_SCALE;
    }

    1.0 - strsim::normalized_damerau_levenshtein(term, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cost(query: &str, text: &str) -> Option<f64> {
        field_cost(
            &QueryTerms::new(query),
            &FieldValue::Text(text.to_string()),
        )
    }

    #[test]
    fn test_exact_substring_is_zero() {
        assert_eq!(cost("password", "How to Reset Your Password"), Some(0.0));
        assert_eq!(cost("reset your", "How to Reset Your Password"), Some(0.0));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(cost("PASSWORD", "how to reset your password"), Some(0.0));
        assert_eq!(cost("password", "HOW TO RESET YOUR PASSWORD"), Some(0.0));
    }

    #[test]
    fn test_single_typo_scores_near_zero() {
        // One substitution in an eight-letter word
        let c = cost("pasword", "Reset your password now").unwrap();
        assert!(c < 0.2, "typo cost should be near zero, got {}", c);
    }

    #[test]
    fn test_transposition_tolerated() {
        let c = cost("passwrod", "password").unwrap();
        assert!(c < 0.2, "transposition cost should be near zero, got {}", c);
    }

    #[test]
    fn test_multi_word_query_with_typo() {
        let c = cost("reset pasword", "How to Reset Your Password").unwrap();
        assert!(c < 0.3, "expected a qualifying match, got {}", c);
    }

    #[test]
    fn test_gibberish_scores_high() {
        let c = cost("zzzzxqq", "How to Reset Your Password").unwrap();
        assert!(c > 0.6, "gibberish should score near 1, got {}", c);
    }

    #[test]
    fn test_unrelated_title_scores_above_threshold() {
        let c = cost("reset pasword", "Troubleshooting Login Issues").unwrap();
        assert!(c > 0.4, "unrelated title should not qualify, got {}", c);
    }

    #[test]
    fn test_empty_field_yields_no_candidate() {
        assert_eq!(cost("query", ""), None);
        assert_eq!(cost("query", "   "), None);
    }

    #[test]
    fn test_cost_is_bounded() {
        let cases = [
            ("reset", "password"),
            ("getting started", "Welcome guide for new users"),
            ("a", "b"),
            ("résumé", "resume tips"),
        ];
        for (query, text) in cases {
            let c = cost(query, text).unwrap();
            assert!(
                (0.0..=1.0).contains(&c),
                "cost {} out of bounds for {:?}/{:?}",
                c,
                query,
                text
            );
        }
    }

    #[test]
    fn test_containment_scores_low() {
        // "install" inside "installation" is a close match, not a distant one
        let c = cost("install", "Installation guide").unwrap();
        assert!(c < 0.15, "containment should score low, got {}", c);
    }

    #[test]
    fn test_list_field_matches_any_element() {
        let query = QueryTerms::new("security");
        let tags = FieldValue::List(vec![
            "billing".to_string(),
            "security".to_string(),
            "account".to_string(),
        ]);
        assert_eq!(field_cost(&query, &tags), Some(0.0));
    }

    #[test]
    fn test_list_field_takes_cheapest_element() {
        let query = QueryTerms::new("securty");
        let tags = FieldValue::List(vec!["billing".to_string(), "security".to_string()]);
        let c = field_cost(&query, &tags).unwrap();
        assert!(c < 0.2, "typo against best tag should be cheap, got {}", c);
    }

    #[test]
    fn test_empty_list_yields_no_candidate() {
        let query = QueryTerms::new("anything");
        assert_eq!(field_cost(&query, &FieldValue::List(vec![])), None);
    }

    #[test]
    fn test_unicode_normalization_applies() {
        // Fullwidth and composed forms normalize to the same text
        assert_eq!(cost("ｐａｓｓｗｏｒｄ", "password help"), Some(0.0));
    }

    #[test]
    fn test_punctuation_only_query_without_substring() {
        // No word tokens and no substring hit: no fuzzy candidate
        assert_eq!(cost("!!!", "Reset your password"), None);
        // But the substring path still applies
        assert_eq!(cost("!!!", "Danger!!! Do not do this"), Some(0.0));
    }
}
