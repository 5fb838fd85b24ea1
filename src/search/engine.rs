//! Search coordination
//!
//! Ties together field matching, document scoring, ranking and excerpt
//! building for the three request shapes: article search, category search
//! and global (two-type) search. The coordinator owns validation and the
//! response payload types; callers hand over a corpus snapshot and
//! serialize what comes back.

use crate::config::{
    DEFAULT_ARTICLE_LIMIT, DEFAULT_CATEGORY_LIMIT, DEFAULT_GLOBAL_LIMIT, SearchConfig,
};
use crate::corpus::{Article, CategoryRef, CategorySnapshot};
use crate::error::{validate_search_request, AppError};
use crate::search::excerpt::build_excerpt;
use crate::search::matcher::{self, QueryTerms, WeightedField};
use crate::search::ranker::{self, Relevance, ScoredDocument};
use crate::search::scorer;
use serde::{Deserialize, Serialize};

/// A search request as received from the route layer or the CLI
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// One article result in the documentation search payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleHit {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub slug: String,
    pub url: String,
    pub category: CategoryRef,
    pub score: f64,
    pub relevance: Relevance,
}

#[derive(Debug, Serialize)]
pub struct ArticleSearchResponse {
    pub results: Vec<ArticleHit>,
    pub query: String,
    pub total: usize,
}

/// One category result; categories carry no relevance tier on the wire
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryHit {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub icon: String,
    pub color: String,
    pub article_count: usize,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct CategorySearchResponse {
    pub results: Vec<CategoryHit>,
    pub query: String,
    pub total: usize,
}

/// Source entity type tag on global search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Article,
    Category,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalArticleHit {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub slug: String,
    pub category: CategoryRef,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub score: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalCategoryHit {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub icon: String,
    pub color: String,
    pub article_count: usize,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub score: f64,
}

/// Global search keeps the two entity types in labeled buckets rather than
/// interleaving them by score
#[derive(Debug, Serialize)]
pub struct GlobalBuckets {
    pub articles: Vec<GlobalArticleHit>,
    pub categories: Vec<GlobalCategoryHit>,
}

#[derive(Debug, Serialize)]
pub struct GlobalSearchResponse {
    pub results: GlobalBuckets,
    pub query: String,
    pub total: usize,
}

/// Search coordinator: per-mode thresholds in, ranked payloads out.
///
/// Stateless between calls; every invocation works solely on the snapshot
/// it is handed, so arbitrarily many searches can run concurrently.
#[derive(Debug, Clone)]
pub struct SearchCoordinator {
    config: SearchConfig,
}

impl SearchCoordinator {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Documentation search over published articles
    pub fn search_articles(
        &self,
        articles: &[Article],
        request: &SearchQuery,
    ) -> Result<ArticleSearchResponse, AppError> {
        validate_search_request(&request.query, request.limit)?;
        let limit = request.limit.unwrap_or(DEFAULT_ARTICLE_LIMIT);
        let threshold = self.config.article_threshold;

        let query = QueryTerms::new(&request.query);
        let scored = score_documents(&query, articles, threshold, article_fields);
        let ranked = ranker::rank(scored, threshold, limit);

        let results: Vec<ArticleHit> = ranked
            .iter()
            .map(|doc| article_hit(doc.item, doc.score))
            .collect();

        Ok(ArticleSearchResponse {
            total: results.len(),
            results,
            query: request.query.clone(),
        })
    }

    /// Category search over active categories
    pub fn search_categories(
        &self,
        categories: &[CategorySnapshot],
        request: &SearchQuery,
    ) -> Result<CategorySearchResponse, AppError> {
        validate_search_request(&request.query, request.limit)?;
        let limit = request.limit.unwrap_or(DEFAULT_CATEGORY_LIMIT);
        let threshold = self.config.category_threshold;

        let query = QueryTerms::new(&request.query);
        let scored = score_documents(&query, categories, threshold, category_fields);
        let ranked = ranker::rank(scored, threshold, limit);

        let results: Vec<CategoryHit> = ranked
            .iter()
            .map(|doc| category_hit(doc.item, doc.score))
            .collect();

        Ok(CategorySearchResponse {
            total: results.len(),
            results,
            query: request.query.clone(),
        })
    }

    /// Global search: both entity types, fixed slot allocation.
    ///
    /// Articles get `ceil(limit/2)` slots, categories `floor(limit/2)`;
    /// the buckets are concatenated as-is, never re-interleaved by score.
    pub fn search_global(
        &self,
        articles: &[Article],
        categories: &[CategorySnapshot],
        request: &SearchQuery,
    ) -> Result<GlobalSearchResponse, AppError> {
        validate_search_request(&request.query, request.limit)?;
        let limit = request.limit.unwrap_or(DEFAULT_GLOBAL_LIMIT);
        let article_slots = limit.div_ceil(2);
        let category_slots = limit / 2;
        let threshold = self.config.global_threshold;

        let query = QueryTerms::new(&request.query);

        let ranked_articles = ranker::rank(
            score_documents(&query, articles, threshold, article_fields),
            threshold,
            article_slots,
        );
        let ranked_categories = ranker::rank(
            score_documents(&query, categories, threshold, category_fields),
            threshold,
            category_slots,
        );

        let article_bucket: Vec<GlobalArticleHit> = ranked_articles
            .iter()
            .map(|doc| global_article_hit(doc.item, doc.score))
            .collect();
        let category_bucket: Vec<GlobalCategoryHit> = ranked_categories
            .iter()
            .map(|doc| global_category_hit(doc.item, doc.score))
            .collect();

        Ok(GlobalSearchResponse {
            total: article_bucket.len() + category_bucket.len(),
            results: GlobalBuckets {
                articles: article_bucket,
                categories: category_bucket,
            },
            query: request.query.clone(),
        })
    }
}

/// Score every document in the snapshot, omitting the ones with no field
/// match within the threshold. Snapshot order is preserved for the stable
/// tie-break downstream.
fn score_documents<'a, T, F>(
    query: &QueryTerms,
    items: &'a [T],
    threshold: f64,
    extract_fields: F,
) -> Vec<ScoredDocument<&'a T>>
where
    F: Fn(&T) -> Vec<WeightedField>,
{
    let mut scored = Vec::new();
    for item in items {
        let fields = extract_fields(item);
        let costs: Vec<(f64, f64)> = fields
            .iter()
            .filter_map(|field| {
                matcher::field_cost(query, &field.value).map(|cost| (field.weight, cost))
            })
            .collect();
        if let Some(score) = scorer::document_score(&costs, threshold) {
            scored.push(ScoredDocument { item, score });
        }
    }
    scored
}

fn article_fields(article: &Article) -> Vec<WeightedField> {
    vec![
        WeightedField::text(scorer::ARTICLE_TITLE_WEIGHT, &article.title),
        WeightedField::text(scorer::ARTICLE_CONTENT_WEIGHT, &article.content),
        WeightedField::text(
            scorer::ARTICLE_EXCERPT_WEIGHT,
            article.excerpt.as_deref().unwrap_or(""),
        ),
        WeightedField::list(scorer::ARTICLE_TAGS_WEIGHT, &article.tags),
    ]
}

fn category_fields(snapshot: &CategorySnapshot) -> Vec<WeightedField> {
    vec![
        WeightedField::text(scorer::CATEGORY_NAME_WEIGHT, &snapshot.category.name),
        WeightedField::text(
            scorer::CATEGORY_DESCRIPTION_WEIGHT,
            &snapshot.category.description,
        ),
    ]
}

fn article_hit(article: &Article, score: f64) -> ArticleHit {
    ArticleHit {
        id: article.id.clone(),
        title: article.title.clone(),
        excerpt: build_excerpt(&article.content, article.excerpt.as_deref().unwrap_or("")),
        slug: article.slug.clone(),
        url: format!("/docs/{}", article.slug),
        category: article.category.clone(),
        score,
        relevance: ranker::relevance(score),
    }
}

fn category_hit(snapshot: &CategorySnapshot, score: f64) -> CategoryHit {
    CategoryHit {
        id: snapshot.category.id.clone(),
        name: snapshot.category.name.clone(),
        description: snapshot.category.description.clone(),
        slug: snapshot.category.slug.clone(),
        icon: snapshot.category.icon.clone(),
        color: snapshot.category.color.clone(),
        article_count: snapshot.article_count,
        score,
    }
}

fn global_article_hit(article: &Article, score: f64) -> GlobalArticleHit {
    GlobalArticleHit {
        id: article.id.clone(),
        title: article.title.clone(),
        excerpt: build_excerpt(&article.content, article.excerpt.as_deref().unwrap_or("")),
        slug: article.slug.clone(),
        category: article.category.clone(),
        kind: EntityKind::Article,
        score,
    }
}

fn global_category_hit(snapshot: &CategorySnapshot, score: f64) -> GlobalCategoryHit {
    GlobalCategoryHit {
        id: snapshot.category.id.clone(),
        name: snapshot.category.name.clone(),
        description: snapshot.category.description.clone(),
        slug: snapshot.category.slug.clone(),
        icon: snapshot.category.icon.clone(),
        color: snapshot.category.color.clone(),
        article_count: snapshot.article_count,
        kind: EntityKind::Category,
        score,
    }
}
