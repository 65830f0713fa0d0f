// ABOUTME: HTTP catalog provider querying a hosted wellness search index
// ABOUTME: HttpCatalog client with API key header and bounded per-request timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

use crate::catalog::{CatalogProvider, SearchQuery};
use crate::config::CatalogConfig;
use crate::errors::{AppError, AppResult};
use crate::models::WellnessItem;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Header carrying the catalog API key
const API_KEY_HEADER: &str = "X-Api-Key";

/// Response envelope returned by the search service
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<WellnessItem>,
}

/// Client for a hosted wellness catalog search index.
///
/// Posts one [`SearchQuery`] descriptor per request to
/// `{base_url}/indexes/{index}/query` and deserializes the hit envelope.
/// Every request carries the configured bounded timeout; there are no
/// retries, a failed query fails the whole assembly pass.
pub struct HttpCatalog {
    client: reqwest::Client,
    query_url: Url,
    api_key: Option<String>,
}

impl HttpCatalog {
    /// Build a catalog client from configuration
    ///
    /// # Errors
    /// Returns a config error when the base URL does not parse or the HTTP
    /// client cannot be constructed
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| AppError::config(format!("invalid catalog URL: {e}")))?;
        let query_url = base
            .join(&format!("indexes/{}/query", config.index))
            .map_err(|e| AppError::config(format!("invalid catalog index path: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            query_url,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalog {
    fn name(&self) -> &'static str {
        "http-catalog"
    }

    async fn search(&self, query: &SearchQuery) -> AppResult<Vec<WellnessItem>> {
        let mut request = self.client.post(self.query_url.clone()).json(query);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                "catalog",
                format!("search returned HTTP {status}"),
            ));
        }

        let envelope: SearchResponse = response.json().await?;
        tracing::debug!(
            category = %query.category,
            hit_count = envelope.hits.len(),
            "catalog query"
        );
        Ok(envelope.hits)
    }
}
