// ABOUTME: Catalog search abstractions: query descriptors and the provider trait seam
// ABOUTME: SearchQuery definition plus CatalogProvider implementations (static, HTTP)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

//! # Catalog Search
//!
//! The engine never talks to a concrete search backend. It issues
//! [`SearchQuery`] descriptors through the [`CatalogProvider`] trait and
//! receives ordered [`WellnessItem`] hits back. Ranking and relevance are
//! the provider's concern.
//!
//! Two providers ship with the crate:
//! - [`StaticCatalog`]: in-memory catalog for tests, seeds, and the CLI
//! - [`HttpCatalog`]: client for a hosted search index

use crate::errors::AppResult;
use crate::models::{Category, DifficultyLevel, WellnessItem};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod http;
mod memory;

pub use http::HttpCatalog;
pub use memory::StaticCatalog;

/// A single catalog query descriptor, one per category per assembly pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text query: the profile's goal tags joined into one phrase
    pub text: String,
    /// Exact-match category facet
    pub category: Category,
    /// Difficulty facet. `None` means no constraint; a concrete level
    /// matches that level *or* beginner, so novice-safe content is never
    /// filtered out by a stricter request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<DifficultyLevel>,
    /// Restrict to indoor content; only ever set on exercise queries
    #[serde(default)]
    pub indoor_only: bool,
    /// Maximum number of hits to return
    pub result_size: usize,
}

/// A searchable wellness catalog.
///
/// Implementations own transport, ranking, and relevance. They return hits
/// in relevance order and must tolerate queries that match nothing.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Execute one query and return its ordered hits.
    ///
    /// # Errors
    /// Returns an error when the backend cannot be reached or returns a
    /// malformed response. Zero hits is not an error.
    async fn search(&self, query: &SearchQuery) -> AppResult<Vec<WellnessItem>>;
}
