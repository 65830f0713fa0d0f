// ABOUTME: In-memory catalog provider applying facet filters and goal-term relevance
// ABOUTME: StaticCatalog with JSON loading for tests, seed data, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

use crate::catalog::{CatalogProvider, SearchQuery};
use crate::errors::AppResult;
use crate::models::{DifficultyLevel, WellnessItem};
use async_trait::async_trait;
use std::path::Path;

/// An in-memory catalog over a fixed item set.
///
/// Applies the descriptor's facet filters (category, difficulty with
/// beginner fallback, indoor), orders the survivors by naive goal-term
/// relevance, and truncates to `result_size`. Good enough for seeds and
/// tests; a hosted index does real ranking.
#[derive(Debug)]
pub struct StaticCatalog {
    items: Vec<WellnessItem>,
}

impl StaticCatalog {
    /// Create a catalog over the given items
    #[must_use]
    pub fn new(items: Vec<WellnessItem>) -> Self {
        Self { items }
    }

    /// Load a catalog from a JSON array of items
    ///
    /// # Errors
    /// Returns a serialization error when the JSON does not parse
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let items: Vec<WellnessItem> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or parsed
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Number of items in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn matches_facets(item: &WellnessItem, query: &SearchQuery) -> bool {
        if item.category() != query.category {
            return false;
        }
        if let Some(level) = query.difficulty {
            // Requested level OR beginner: novice-safe content stays eligible
            if item.difficulty != level && item.difficulty != DifficultyLevel::Beginner {
                return false;
            }
        }
        if query.indoor_only && !item.is_indoor() {
            return false;
        }
        true
    }

    /// Count how many query terms appear in the item's goal tags, name, or
    /// description (case-insensitive substring match)
    fn relevance(item: &WellnessItem, text: &str) -> usize {
        let name = item.name.to_lowercase();
        let description = item.description.to_lowercase();
        let goals: Vec<String> = item.goals.iter().map(|g| g.to_lowercase()).collect();

        text.split_whitespace()
            .map(str::to_lowercase)
            .filter(|term| {
                name.contains(term.as_str())
                    || description.contains(term.as_str())
                    || goals.iter().any(|goal| goal.contains(term.as_str()))
            })
            .count()
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    fn name(&self) -> &'static str {
        "static-catalog"
    }

    async fn search(&self, query: &SearchQuery) -> AppResult<Vec<WellnessItem>> {
        let mut hits: Vec<WellnessItem> = self
            .items
            .iter()
            .filter(|item| Self::matches_facets(item, query))
            .cloned()
            .collect();

        // Stable sort keeps catalog order for equally relevant items
        hits.sort_by_key(|item| std::cmp::Reverse(Self::relevance(item, &query.text)));
        hits.truncate(query.result_size);

        tracing::debug!(
            category = %query.category,
            hit_count = hits.len(),
            "static catalog query"
        );

        Ok(hits)
    }
}
