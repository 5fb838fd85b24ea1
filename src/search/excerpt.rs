//! Excerpt building
//!
//! Derives a bounded preview string from a document's long-form content,
//! independent of matching. Runs only on the final ranked page so discarded
//! documents cost nothing.

/// Maximum excerpt length in characters, before the ellipsis marker
pub const EXCERPT_MAX_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Build a preview string: prefer the long-form `content` when non-empty,
/// otherwise the `fallback` summary; truncate at exactly 200 characters
/// with an ellipsis marker when the chosen source is longer. Both sources
/// empty yields an empty string, never a placeholder.
pub fn build_excerpt(content: &str, fallback: &str) -> String {
    let source = if !content.is_empty() { content } else { fallback };
    if source.is_empty() {
        return String::new();
    }

    // nth(MAX) lands on the first character past the limit; its byte offset
    // is the char-safe cut point
    match source.char_indices().nth(EXCERPT_MAX_CHARS) {
        None => source.to_string(),
        Some((cut, _)) => format!("{}{}", &source[..cut], ELLIPSIS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_content() {
        assert_eq!(build_excerpt("full content", "summary"), "full content");
    }

    #[test]
    fn test_falls_back_when_content_empty() {
        assert_eq!(build_excerpt("", "summary"), "summary");
    }

    #[test]
    fn test_both_empty_yields_empty() {
        assert_eq!(build_excerpt("", ""), "");
    }

    #[test]
    fn test_long_content_truncated_with_ellipsis() {
        let content = "a".repeat(500);
        let excerpt = build_excerpt(&content, "");
        assert_eq!(excerpt.chars().count(), EXCERPT_MAX_CHARS + ELLIPSIS.len());
        assert!(excerpt.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_exactly_max_chars_not_truncated() {
        let content = "b".repeat(EXCERPT_MAX_CHARS);
        let excerpt = build_excerpt(&content, "");
        assert_eq!(excerpt, content);
        assert!(!excerpt.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_one_over_max_is_truncated() {
        let content = "c".repeat(EXCERPT_MAX_CHARS + 1);
        let excerpt = build_excerpt(&content, "");
        assert_eq!(excerpt.chars().count(), EXCERPT_MAX_CHARS + ELLIPSIS.len());
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // Multi-byte characters must not be split mid-codepoint
        let content = "é".repeat(300);
        let excerpt = build_excerpt(&content, "");
        assert_eq!(
            excerpt.chars().count(),
            EXCERPT_MAX_CHARS + ELLIPSIS.len()
        );
        assert!(excerpt.starts_with('é'));
    }

    #[test]
    fn test_long_fallback_also_truncated() {
        let fallback = "d".repeat(250);
        let excerpt = build_excerpt("", &fallback);
        assert_eq!(excerpt.chars().count(), EXCERPT_MAX_CHARS + ELLIPSIS.len());
    }

    #[test]
    fn test_length_invariant() {
        // No excerpt ever exceeds 203 characters
        let just_under = "x".repeat(199);
        let exact = "x".repeat(200);
        let huge = "x".repeat(10_000);
        for source in ["short", just_under.as_str(), exact.as_str(), huge.as_str()] {
            let excerpt = build_excerpt(source, "");
            assert!(excerpt.chars().count() <= EXCERPT_MAX_CHARS + ELLIPSIS.len());
        }
    }
}
