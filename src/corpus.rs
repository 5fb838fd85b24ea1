//! Corpus snapshots for the search engine
//!
//! The search core never queries storage; it receives in-memory snapshots of
//! published articles and active categories. This module is the thin
//! data-access collaborator that materializes those snapshots from a JSON
//! corpus file. One malformed record must not deny search to all users, so
//! records that fail to decode are skipped with a warning and the rest of
//! the corpus stays searchable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read corpus file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Corpus file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Category reference denormalized onto each article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// A help-center article as stored in the corpus file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_flag")]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub category: CategoryRef,
}

/// A help-center category as stored in the corpus file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_flag")]
    pub is_active: bool,
}

fn default_flag() -> bool {
    true
}

/// An active category paired with its published-article count, the shape
/// the category search pipeline consumes
#[derive(Debug, Clone)]
pub struct CategorySnapshot {
    pub category: Category,
    pub article_count: usize,
}

/// Raw corpus file shape; records are held as JSON values so that one bad
/// record can be skipped without rejecting the whole file
#[derive(Debug, Deserialize)]
struct CorpusFile {
    #[serde(default)]
    articles: Vec<serde_json::Value>,
    #[serde(default)]
    categories: Vec<serde_json::Value>,
}

/// In-memory corpus, loaded once and shared read-only across requests
#[derive(Debug, Default)]
pub struct CorpusStore {
    articles: Vec<Article>,
    categories: Vec<Category>,
}

impl CorpusStore {
    /// Load a corpus from a JSON file
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let raw = fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CorpusFile = serde_json::from_str(&raw)?;

        let articles = collect_records::<Article>(file.articles, "article");
        let categories = collect_records::<Category>(file.categories, "category");

        debug!(
            "Loaded corpus: {} articles, {} categories",
            articles.len(),
            categories.len()
        );

        Ok(Self {
            articles,
            categories,
        })
    }

    /// Build a store from already-decoded records
    #[cfg(test)]
    pub fn from_parts(articles: Vec<Article>, categories: Vec<Category>) -> Self {
        Self {
            articles,
            categories,
        }
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Snapshot of published articles, newest first.
    ///
    /// The ordering matters downstream: the ranker's sort is stable, so the
    /// snapshot order is the tie-break between equal scores.
    pub fn published_articles(&self) -> Vec<Article> {
        let mut snapshot: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| a.is_published)
            .cloned()
            .collect();
        snapshot.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        snapshot
    }

    /// Snapshot of active categories, each with its published-article count
    pub fn active_categories(&self) -> Vec<CategorySnapshot> {
        self.categories
            .iter()
            .filter(|c| c.is_active)
            .map(|category| {
                let article_count = self
                    .articles
                    .iter()
                    .filter(|a| a.is_published && a.category.name == category.name)
                    .count();
                CategorySnapshot {
                    category: category.clone(),
                    article_count,
                }
            })
            .collect()
    }
}

/// Decode each record individually, skipping the ones that fail
fn collect_records<T: serde::de::DeserializeOwned>(
    values: Vec<serde_json::Value>,
    kind: &str,
) -> Vec<T> {
    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping malformed {} record at index {}: {}", kind, index, e),
        }
    }
    records
}
