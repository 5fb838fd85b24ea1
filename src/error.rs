//! Error types and request validation for the help-center search service

use serde::Serialize;
use std::fmt;

/// Maximum query length accepted by the search endpoints, in characters
pub const MAX_QUERY_CHARS: usize = 100;

/// Result-count limit bounds for a single search call
pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 20;

/// One field-level validation failure, surfaced verbatim in the
/// `details` array of a validation error response
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Application error types
#[derive(Debug)]
pub enum AppError {
    Validation(Vec<ValidationIssue>),
    Corpus(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(issues) => {
                let details: Vec<String> = issues
                    .iter()
                    .map(|i| format!("{}: {}", i.field, i.message))
                    .collect();
                write!(f, "Validation error: {}", details.join("; "))
            }
            AppError::Corpus(msg) => write!(f, "Corpus error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Get the error code for response payloads and exit-code mapping
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::Corpus(_) => "corpus_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<crate::corpus::CorpusError> for AppError {
    fn from(err: crate::corpus::CorpusError) -> Self {
        AppError::Corpus(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Validate a search request before any matching runs.
///
/// The query must be 1-100 characters after trimming; the limit, when
/// present, must lie in 1-20. All failures are collected so the caller
/// sees every offending field at once, not just the first.
pub fn validate_search_request(query: &str, limit: Option<usize>) -> Result<(), AppError> {
    let mut issues = Vec::new();

    let trimmed = query.trim();
    if trimmed.is_empty() {
        issues.push(ValidationIssue::new("query", "query must not be empty"));
    } else if trimmed.chars().count() > MAX_QUERY_CHARS {
        issues.push(ValidationIssue::new(
            "query",
            "query must be at most 100 characters",
        ));
    }

    if let Some(limit) = limit {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            issues.push(ValidationIssue::new(
                "limit",
                "limit must be between 1 and 20",
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(issues))
    }
}
