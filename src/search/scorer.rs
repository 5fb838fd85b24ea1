//! Document scoring
//!
//! Combines per-field match costs into a single document score using the
//! "best field wins, weighted" rule: the document score is the minimum
//! weighted cost across fields that matched within the threshold. A perfect
//! title hit surfaces a document even when its body is unrelated, and a
//! distance-perfect match on a low-weight field still scores 0.

/// How strongly a field's weight pulls its cost toward zero. With weights
/// in (0, 1] the multiplier stays within [0.5, 1), so a weighted score
/// never exceeds the raw field cost.
pub const WEIGHT_PULL: f64 = 0.5;

/// Article field weights (documentation search)
pub const ARTICLE_TITLE_WEIGHT: f64 = 0.4;
pub const ARTICLE_CONTENT_WEIGHT: f64 = 0.3;
pub const ARTICLE_EXCERPT_WEIGHT: f64 = 0.2;
pub const ARTICLE_TAGS_WEIGHT: f64 = 0.1;

/// Category field weights
pub const CATEGORY_NAME_WEIGHT: f64 = 0.6;
pub const CATEGORY_DESCRIPTION_WEIGHT: f64 = 0.4;

/// Scale a field cost by its weight
pub fn weighted_cost(weight: f64, cost: f64) -> f64 {
    cost * (1.0 - WEIGHT_PULL * weight)
}

/// Score one document from its `(weight, cost)` pairs, one per field that
/// had content.
///
/// A field matches when its cost is within `threshold`; documents with no
/// matching field return `None` and are omitted from results entirely
/// rather than scored 1.0.
pub fn document_score(field_costs: &[(f64, f64)], threshold: f64) -> Option<f64> {
    field_costs
        .iter()
        .filter(|(_, cost)| *cost <= threshold)
        .map(|(weight, cost)| weighted_cost(*weight, *cost))
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}
