//! Search configuration: match thresholds and default result limits
//!
//! The article threshold is deployment-tunable through the
//! `SEARCH_THRESHOLD` environment variable; the category threshold and the
//! global-search threshold are fixed. That asymmetry mirrors the platform's
//! observed behavior and is intentional.

/// Default maximum match cost for documentation (article) search
pub const DEFAULT_ARTICLE_THRESHOLD: f64 = 0.3;

/// Fixed maximum match cost for category search
pub const CATEGORY_THRESHOLD: f64 = 0.4;

/// Fixed maximum match cost applied to both entity types in global search
pub const GLOBAL_THRESHOLD: f64 = 0.4;

/// Default result limits per call site
pub const DEFAULT_ARTICLE_LIMIT: usize = 5;
pub const DEFAULT_CATEGORY_LIMIT: usize = 10;
pub const DEFAULT_GLOBAL_LIMIT: usize = 10;

/// Environment variable overriding the article search threshold
pub const SEARCH_THRESHOLD_ENV: &str = "SEARCH_THRESHOLD";

/// Per-mode match thresholds, built fresh per process start
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub article_threshold: f64,
    pub category_threshold: f64,
    pub global_threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            article_threshold: DEFAULT_ARTICLE_THRESHOLD,
            category_threshold: CATEGORY_THRESHOLD,
            global_threshold: GLOBAL_THRESHOLD,
        }
    }
}

impl SearchConfig {
    /// Build the configuration, honoring `SEARCH_THRESHOLD` for articles.
    ///
    /// Unparseable or out-of-range values fall back to the default rather
    /// than failing startup.
    pub fn from_env() -> Self {
        let article_threshold = std::env::var(SEARCH_THRESHOLD_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|t| (0.0..=1.0).contains(t))
            .unwrap_or(DEFAULT_ARTICLE_THRESHOLD);

        Self {
            article_threshold,
            ..Self::default()
        }
    }

    /// Configuration with an explicit article threshold
    #[cfg(test)]
    pub fn with_article_threshold(threshold: f64) -> Self {
        Self {
            article_threshold: threshold,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = SearchConfig::default();
        assert_eq!(config.article_threshold, 0.3);
        assert_eq!(config.category_threshold, 0.4);
        assert_eq!(config.global_threshold, 0.4);
    }

    #[test]
    fn test_explicit_article_threshold_leaves_others_fixed() {
        let config = SearchConfig::with_article_threshold(0.5);
        assert_eq!(config.article_threshold, 0.5);
        // Category and global thresholds are not tunable
        assert_eq!(config.category_threshold, CATEGORY_THRESHOLD);
        assert_eq!(config.global_threshold, GLOBAL_THRESHOLD);
    }
}
