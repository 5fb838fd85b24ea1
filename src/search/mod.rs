//! Fuzzy document search engine
//!
//! Pure, stateless pipeline over a corpus snapshot supplied at call time:
//! field matching, weighted best-field scoring, ranking with relevance
//! tiers, excerpt building and multi-type coordination.

pub mod engine;
pub mod excerpt;
pub mod matcher;
pub mod ranker;
pub mod scorer;

pub use engine::{SearchCoordinator, SearchQuery};
pub use matcher::{FieldValue, QueryTerms, WeightedField};
pub use ranker::{Relevance, ScoredDocument};
