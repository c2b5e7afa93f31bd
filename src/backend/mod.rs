//! Search backend collaborator / Meklēšanas servera klients
//!
//! Architecture principle: the ranking engine lives elsewhere, this crate only
//! consumes it through the `SearchBackend` trait.
//! - list_categories: category names for the filter / kategoriju saraksts
//! - search: ranked text chunks for a query / meklēšana

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use http::HttpSearchBackend;

/// Default number of results requested / Noklusētais rezultātu skaits
pub const DEFAULT_TOP_K: usize = 5;
/// Upper bound accepted by the backend / Maksimālais rezultātu skaits
pub const MAX_TOP_K: usize = 20;

/// One ranked chunk returned by the backend / Viens meklēšanas rezultāts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Category (top-level corpus directory) / Kategorija
    pub category: String,
    /// Source file name / Avota fails
    pub source: String,
    /// Text chunk, untrusted / Teksta fragments
    pub chunk: String,
    /// Relevance score / Atbilstība
    pub score: f64,
}

/// Search request sent to the backend / Meklēšanas pieprasījums
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub category: Option<String>,
    pub top_k: usize,
}

impl SearchQuery {
    /// Build a request; blank category means "all", `top_k` is clamped to 1..=20
    pub fn new(query: impl Into<String>, category: Option<String>, top_k: usize) -> Self {
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Self {
            query: query.into(),
            category,
            top_k: top_k.clamp(1, MAX_TOP_K),
        }
    }
}

/// `GET /api/categories` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<String>,
}

/// `POST /api/search` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// Error body of a non-2xx answer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Backend call failure / Servera kļūda
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
}

impl BackendError {
    /// Message supplied by the backend itself, if any
    pub fn user_detail(&self) -> Option<&str> {
        match self {
            BackendError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Search backend capabilities / Meklēšanas servera saskarne
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run a search / Veic meklēšanu
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, BackendError>;

    /// List known categories / Kategoriju saraksts
    async fn list_categories(&self) -> Result<Vec<String>, BackendError>;
}
