// ABOUTME: Kit assembly engine: plans queries, filters hits, and aggregates the final kit
// ABOUTME: KitAssembler drives the planner, filter pipeline, and equipment gap analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

//! # Kit Assembly Engine
//!
//! A single synchronous pass from `(profile, catalog)` to `(kit, alerts)`:
//!
//! 1. [`planner`] builds one query per category, in the fixed order
//!    exercise, supplement, gear, `meal_plan`
//! 2. each category's hits run through the [`filter`] pipeline
//! 3. survivors and alerts fold into the running kit, in category order
//! 4. [`equipment`] analyzes the merged kit once and appends advisories
//!
//! The engine performs no I/O beyond the [`CatalogProvider`] calls, never
//! mutates catalog records, and caches nothing between invocations.

pub mod equipment;
pub mod filter;
pub mod planner;

pub use filter::CategoryOutcome;

use crate::catalog::CatalogProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{UserProfile, WellnessKit};

/// Assembles wellness kits against a catalog provider.
pub struct KitAssembler<'a> {
    catalog: &'a dyn CatalogProvider,
}

impl<'a> KitAssembler<'a> {
    /// Create an assembler over the given catalog
    #[must_use]
    pub const fn new(catalog: &'a dyn CatalogProvider) -> Self {
        Self { catalog }
    }

    /// Assemble a kit for the profile.
    ///
    /// Queries are issued sequentially in category order. If any query
    /// fails, the whole pass is abandoned: the result is an empty kit
    /// carrying a single `error`-kind alert, and results already fetched
    /// are discarded. Zero hits in every category is not a failure; it
    /// yields an empty kit with no alerts.
    ///
    /// # Errors
    /// Returns `invalid_input` when the profile has no goals selected;
    /// assembly is gated on a non-empty goal set.
    pub async fn assemble(&self, profile: &UserProfile) -> AppResult<WellnessKit> {
        if !profile.has_goals() {
            return Err(AppError::invalid_input(
                "at least one goal must be selected before assembling a kit",
            ));
        }

        let mut kit = WellnessKit::empty();
        for query in planner::plan_queries(profile) {
            let hits = match self.catalog.search(&query).await {
                Ok(hits) => hits,
                Err(error) => {
                    tracing::warn!(
                        provider = self.catalog.name(),
                        category = %query.category,
                        %error,
                        "catalog query failed, abandoning assembly"
                    );
                    return Ok(WellnessKit::failed());
                }
            };

            let outcome = filter::filter_hits(profile, hits);
            kit.items.extend(outcome.survivors);
            kit.alerts.extend(outcome.alerts);
        }

        kit.alerts.extend(equipment::equipment_gap_alerts(&kit.items));

        tracing::debug!(
            item_count = kit.items.len(),
            alert_count = kit.alerts.len(),
            "kit assembled"
        );
        Ok(kit)
    }
}
