//! Result ranking and relevance tiers
//!
//! Orders scored documents best-first (0 is a perfect match), truncates to
//! the requested count and bands each score into a coarse relevance tier
//! for display. The sort is stable: equal scores keep their corpus snapshot
//! order, which callers rely on for deterministic pagination.

use serde::Serialize;
use std::cmp::Ordering;

/// Coarse relevance banding derived solely from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    High,
    Medium,
    Low,
}

/// Band a score: `high` below 0.3, `medium` below 0.6, `low` otherwise.
///
/// Independent of the inclusion threshold, so a result admitted under a
/// 0.4 threshold can still band `low`.
pub fn relevance(score: f64) -> Relevance {
    if score < 0.3 {
        Relevance::High
    } else if score < 0.6 {
        Relevance::Medium
    } else {
        Relevance::Low
    }
}

/// A document paired with its match score
#[derive(Debug, Clone)]
pub struct ScoredDocument<T> {
    pub item: T,
    pub score: f64,
}

/// Filter, sort and truncate scored documents.
///
/// Scores above the threshold are dropped (the scorer already excludes
/// them; this keeps the invariant local). An empty input is an empty
/// output, never an error.
pub fn rank<T>(
    mut scored: Vec<ScoredDocument<T>>,
    threshold: f64,
    limit: usize,
) -> Vec<ScoredDocument<T>> {
    scored.retain(|doc| doc.score <= threshold);
    scored.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, score: f64) -> ScoredDocument<String> {
        ScoredDocument {
            item: id.to_string(),
            score,
        }
    }

    #[test]
    fn test_sorted_best_first() {
        let ranked = rank(vec![doc("b", 0.2), doc("a", 0.05), doc("c", 0.3)], 0.4, 10);
        let ids: Vec<&str> = ranked.iter().map(|d| d.item.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scores_monotonic_by_rank() {
        let ranked = rank(
            vec![doc("a", 0.3), doc("b", 0.1), doc("c", 0.2), doc("d", 0.0)],
            0.4,
            10,
        );
        for pair in ranked.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_snapshot_order() {
        let ranked = rank(
            vec![doc("first", 0.2), doc("second", 0.2), doc("third", 0.2)],
            0.4,
            10,
        );
        let ids: Vec<&str> = ranked.iter().map(|d| d.item.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_over_threshold_dropped() {
        let ranked = rank(vec![doc("a", 0.2), doc("b", 0.41)], 0.4, 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item, "a");
    }

    #[test]
    fn test_score_equal_to_threshold_kept() {
        let ranked = rank(vec![doc("a", 0.4)], 0.4, 10);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_truncated_to_limit() {
        let docs: Vec<_> = (0..10).map(|i| doc(&i.to_string(), i as f64 * 0.01)).collect();
        let ranked = rank(docs, 0.4, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].item, "0");
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        let ranked = rank(Vec::<ScoredDocument<String>>::new(), 0.3, 5);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_relevance_bands_at_boundaries() {
        assert_eq!(relevance(0.0), Relevance::High);
        assert_eq!(relevance(0.2999), Relevance::High);
        assert_eq!(relevance(0.3), Relevance::Medium);
        assert_eq!(relevance(0.5999), Relevance::Medium);
        assert_eq!(relevance(0.6), Relevance::Low);
        assert_eq!(relevance(1.0), Relevance::Low);
    }

    #[test]
    fn test_relevance_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Relevance::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&Relevance::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(serde_json::to_string(&Relevance::Low).unwrap(), "\"low\"");
    }
}
