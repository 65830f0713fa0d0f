// ABOUTME: Assembled wellness kit with its alerts, grouped view, and summary projection
// ABOUTME: WellnessKit and KitSummary definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

use crate::models::{Alert, Category, WellnessItem};
use serde::{Deserialize, Serialize};

/// The engine's output for one assembly pass.
///
/// Items appear in insertion order: category order first, catalog result
/// order within each category. The kit exists only for the invocation that
/// produced it; nothing is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellnessKit {
    /// Included items
    pub items: Vec<WellnessItem>,
    /// All alerts, in emission order
    pub alerts: Vec<Alert>,
}

impl WellnessKit {
    /// An empty kit with no alerts
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// An empty kit carrying the single generic assembly-failure alert
    #[must_use]
    pub fn failed() -> Self {
        Self {
            items: Vec::new(),
            alerts: vec![Alert::assembly_error()],
        }
    }

    /// Grouped view for presentation: category to ordered sub-sequence of
    /// kit items. Categories with no items are omitted; per-category
    /// internal order is preserved.
    #[must_use]
    pub fn grouped(&self) -> Vec<(Category, Vec<&WellnessItem>)> {
        Category::ALL
            .iter()
            .filter_map(|&category| {
                let items: Vec<&WellnessItem> = self
                    .items
                    .iter()
                    .filter(|item| item.category() == category)
                    .collect();
                (!items.is_empty()).then_some((category, items))
            })
            .collect()
    }

    /// Derive aggregate metrics from the kit. Pure projection, recomputed
    /// on demand.
    #[must_use]
    pub fn summary(&self) -> KitSummary {
        let mut categories: Vec<Category> = Vec::new();
        let mut total_calorie_burn = 0_u32;
        let mut total_cost_usd = 0.0_f64;

        for item in &self.items {
            let category = item.category();
            if !categories.contains(&category) {
                categories.push(category);
            }
            total_calorie_burn += item.calories_per_30min();
            total_cost_usd += item.price_usd;
        }

        KitSummary {
            item_count: self.items.len(),
            category_count: categories.len(),
            total_calorie_burn,
            total_cost_usd,
        }
    }
}

/// Aggregate metrics derived from a kit
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct KitSummary {
    /// Number of items in the kit
    pub item_count: usize,
    /// Number of distinct categories represented
    pub category_count: usize,
    /// Sum of calories burned per 30 minutes across exercise items
    pub total_calorie_burn: u32,
    /// Sum of item prices in USD
    pub total_cost_usd: f64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    fn item(value: serde_json::Value) -> WellnessItem {
        serde_json::from_value(value).unwrap()
    }

    fn sample_kit() -> WellnessKit {
        WellnessKit {
            items: vec![
                item(json!({
                    "category": "exercise", "id": "e1", "name": "Hill Sprints",
                    "calories_per_30min": 400, "price_usd": 0.0
                })),
                item(json!({
                    "category": "exercise", "id": "e2", "name": "Rowing",
                    "calories_per_30min": 300, "price_usd": 0.0
                })),
                item(json!({
                    "category": "gear", "id": "g1", "name": "Yoga Mat", "price_usd": 35.0
                })),
                item(json!({
                    "category": "supplement", "id": "s1", "name": "Whey Isolate",
                    "price_usd": 45.0
                })),
            ],
            alerts: Vec::new(),
        }
    }

    #[test]
    fn test_summary_counts_and_sums() {
        let summary = sample_kit().summary();
        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.category_count, 3);
        assert_eq!(summary.total_calorie_burn, 700);
        assert!((summary.total_cost_usd - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_of_empty_kit_is_zero() {
        let summary = WellnessKit::empty().summary();
        assert_eq!(summary, KitSummary::default());
    }

    #[test]
    fn test_grouped_follows_category_order_and_skips_empty() {
        let kit = sample_kit();
        let grouped = kit.grouped();

        let categories: Vec<Category> = grouped.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            [Category::Exercise, Category::Supplement, Category::Gear]
        );

        let exercise_names: Vec<&str> = grouped[0].1.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(exercise_names, ["Hill Sprints", "Rowing"]);
    }

    #[test]
    fn test_failed_kit_has_single_error_alert() {
        let kit = WellnessKit::failed();
        assert!(kit.items.is_empty());
        assert_eq!(kit.alerts.len(), 1);
        assert_eq!(kit.alerts[0].kind, crate::models::AlertKind::Error);
    }
}
