//! Search page and JSON search proxy / Meklēšanas lapa un JSON starpniekserveris

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::backend::{
    BackendError, CategoriesResponse, ErrorDetail, SearchHit, SearchQuery, MAX_TOP_K,
};
use crate::highlight::{query_to_tokens, Highlighter};
use crate::render::{
    categories_error_status, render_page, render_results, search_error_status, PageView,
};
use crate::state::AppState;

pub const EMPTY_QUERY_DETAIL: &str = "Meklēšanas pieprasījums nedrīkst būt tukšs";

/// Query string of the search page
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// JSON search request / Meklēšanas pieprasījums
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Signed so out-of-range values are clamped instead of rejected
    #[serde(default)]
    pub top_k: Option<i64>,
}

impl SearchRequest {
    /// Requested result count clamped to 1..=20, `fallback` when absent
    pub fn top_k_or(&self, fallback: usize) -> usize {
        self.top_k
            .map(|k| k.clamp(1, MAX_TOP_K as i64) as usize)
            .unwrap_or(fallback)
    }
}

/// Backend hit plus its highlighted snippet
#[derive(Debug, Serialize)]
pub struct HighlightedHit {
    #[serde(flatten)]
    pub hit: SearchHit,
    pub highlighted: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<HighlightedHit>,
}

fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(ErrorDetail { detail: Some(detail.into()) })).into_response()
}

/// Map a backend failure onto the proxy's own answer
fn backend_error_response(err: &BackendError) -> Response {
    match err {
        BackendError::Status { status, detail } if (400..500).contains(status) => {
            let code = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST);
            error_response(code, detail.clone().unwrap_or_else(|| err.to_string()))
        }
        _ => error_response(StatusCode::BAD_GATEWAY, err.to_string()),
    }
}

/// Search page: category filter, query box, highlighted results / Meklēšanas lapa
pub async fn index_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let (categories, mut status) = match state.backend.list_categories().await {
        Ok(categories) => (categories, None),
        Err(e) => {
            tracing::warn!("Failed to load categories: {}", e);
            (Vec::new(), Some(categories_error_status(&e)))
        }
    };

    let query = params.query.trim();
    let selected = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let mut results_html = String::new();
    if !query.is_empty() {
        // Tokens belong to this request only
        let tokens = query_to_tokens(query);
        let request = SearchQuery::new(query, selected.map(str::to_string), state.top_k);

        match state.backend.search(&request).await {
            Ok(hits) => {
                tracing::debug!("Rendering {} hits for {} tokens", hits.len(), tokens.len());
                let view = render_results(&hits, &tokens);
                status = Some(view.status);
                results_html = view.cards_html;
            }
            Err(e) => {
                tracing::warn!("Search failed: {}", e);
                status = Some(search_error_status(&e));
            }
        }
    }

    Html(render_page(&PageView {
        query,
        categories: &categories,
        selected_category: selected,
        status,
        results_html,
    }))
}

/// Category list proxy / Kategoriju saraksts
pub async fn categories(State(state): State<Arc<AppState>>) -> Response {
    match state.backend.list_categories().await {
        Ok(categories) => Json(CategoriesResponse { categories }).into_response(),
        Err(e) => {
            tracing::warn!("Failed to load categories: {}", e);
            backend_error_response(&e)
        }
    }
}

/// Search proxy returning highlighted snippets / Meklēšana ar iezīmētiem fragmentiem
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Response {
    let query = req.query.trim();
    if query.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, EMPTY_QUERY_DETAIL);
    }

    let top_k = req.top_k_or(state.top_k);
    let request = SearchQuery::new(query, req.category.clone(), top_k);
    let hits = match state.backend.search(&request).await {
        Ok(hits) => hits,
        Err(e) => {
            tracing::warn!("Search failed: {}", e);
            return backend_error_response(&e);
        }
    };

    let highlighter = Highlighter::new(&query_to_tokens(query));
    let results = hits
        .into_iter()
        .map(|hit| HighlightedHit {
            highlighted: highlighter.highlight(&hit.chunk),
            hit,
        })
        .collect();

    Json(SearchResponse { results }).into_response()
}
