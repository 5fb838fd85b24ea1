//! HTTP API for the search service
//!
//! Thin route layer over the search coordinator: each handler fetches a
//! corpus snapshot, invokes the engine and serializes the payload.
//! Searches share no mutable state, so any number can run concurrently.

use crate::corpus::CorpusStore;
use crate::error::AppError;
use crate::search::{SearchCoordinator, SearchQuery};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

/// Shared read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CorpusStore>,
    pub coordinator: Arc<SearchCoordinator>,
}

impl AppState {
    pub fn new(store: CorpusStore, coordinator: SearchCoordinator) -> Self {
        Self {
            store: Arc::new(store),
            coordinator: Arc::new(coordinator),
        }
    }
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search/articles", post(search_articles))
        .route("/search/categories", post(search_categories))
        .route("/search/global", post(search_global))
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("helpsearch listening on {}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn search_articles(
    State(state): State<AppState>,
    Json(request): Json<SearchQuery>,
) -> Result<Response, AppError> {
    let articles = state.store.published_articles();
    let response = state.coordinator.search_articles(&articles, &request)?;
    Ok(Json(response).into_response())
}

async fn search_categories(
    State(state): State<AppState>,
    Json(request): Json<SearchQuery>,
) -> Result<Response, AppError> {
    let categories = state.store.active_categories();
    let response = state.coordinator.search_categories(&categories, &request)?;
    Ok(Json(response).into_response())
}

async fn search_global(
    State(state): State<AppState>,
    Json(request): Json<SearchQuery>,
) -> Result<Response, AppError> {
    let articles = state.store.published_articles();
    let categories = state.store.active_categories();
    let response = state
        .coordinator
        .search_global(&articles, &categories, &request)?;
    Ok(Json(response).into_response())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Validation error", "details": details })),
            )
                .into_response(),
            other => {
                error!("Search request failed ({}): {}", other.error_code(), other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Search failed" })),
                )
                    .into_response()
            }
        }
    }
}
