//! HTTP search backend (reqwest) / HTTP meklēšanas klients

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::{
    BackendError, CategoriesResponse, ErrorDetail, SearchBackend, SearchHit, SearchQuery,
    SearchResponse,
};
use crate::config::BackendConfig;

/// Talks to the search backend over JSON/HTTP / Sazinās ar meklēšanas serveri
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpSearchBackend {
    /// Create a client for `config.base_url` / Izveido klientu
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| BackendError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        // Url::join drops the last path segment unless it ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base_url
            .join(path)
            .map_err(|e| BackendError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorDetail>(&body)
                .ok()
                .and_then(|e| e.detail);
            tracing::warn!("Search backend answered HTTP {} (detail: {:?})", status, detail);
            return Err(BackendError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_slice(&body).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, BackendError> {
        let url = self.endpoint("api/search")?;
        tracing::debug!(
            "Searching {} query={:?} category={:?} top_k={}",
            url,
            query.query,
            query.category,
            query.top_k
        );

        let response = self.client.post(url).json(query).send().await.map_err(|e| {
            tracing::warn!("Search request failed: {}", e);
            BackendError::from(e)
        })?;

        let payload: SearchResponse = Self::read_json(response).await?;
        tracing::debug!("Search backend returned {} results", payload.results.len());
        Ok(payload.results)
    }

    async fn list_categories(&self) -> Result<Vec<String>, BackendError> {
        let url = self.endpoint("api/categories")?;
        tracing::debug!("Loading categories from {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!("Category request failed: {}", e);
            BackendError::from(e)
        })?;

        let payload: CategoriesResponse = Self::read_json(response).await?;
        Ok(payload.categories)
    }
}
