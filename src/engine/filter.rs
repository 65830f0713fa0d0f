// ABOUTME: Item filter pipeline applying allergy, budget, diet, and weather rules per hit
// ABOUTME: Produces surviving items plus exclusion and advisory alerts in hit order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

use crate::constants::markers;
use crate::models::{Alert, BudgetTier, DietPreference, UserProfile, WeatherPreference, WellnessItem};

/// Survivors and alerts produced by filtering one category's hits
#[derive(Debug, Default)]
pub struct CategoryOutcome {
    /// Items that passed every hard rule, in original hit order
    pub survivors: Vec<WellnessItem>,
    /// Alerts emitted while processing, in hit order
    pub alerts: Vec<Alert>,
}

/// Filter one category's hits against the profile.
///
/// Rules run per hit in a fixed sequence, short-circuiting on exclusion:
/// 1. allergy (hard exclude, with alert)
/// 2. budget (hard exclude, silent)
/// 3. diet, meal plans only (hard exclude, silent)
/// 4. weather (advisory only, item stays in)
///
/// At most one alert is emitted per hit.
#[must_use]
pub fn filter_hits(profile: &UserProfile, hits: Vec<WellnessItem>) -> CategoryOutcome {
    let mut outcome = CategoryOutcome::default();

    for hit in hits {
        let conflicts = allergen_conflicts(&hit, &profile.allergies);
        if !conflicts.is_empty() {
            tracing::debug!(item = %hit.name, "excluded by allergy rule");
            outcome.alerts.push(Alert::allergy_exclusion(&hit.name, &conflicts));
            continue;
        }

        if exceeds_budget(&hit, profile.budget) {
            // Budget is a preference, not a safety concern: no alert
            tracing::debug!(item = %hit.name, price_usd = hit.price_usd, "excluded by budget rule");
            continue;
        }

        if violates_diet(&hit, &profile.diet) {
            tracing::debug!(item = %hit.name, "excluded by diet rule");
            continue;
        }

        if weather_mismatch(&hit, &profile.weather) {
            outcome
                .alerts
                .push(Alert::weather_advisory(&hit.name, profile.weather.as_str()));
        }

        outcome.survivors.push(hit);
    }

    outcome
}

/// Allergens the item declares that appear in the allergy set, in the
/// item's own listed order
fn allergen_conflicts<'a>(item: &'a WellnessItem, allergies: &[String]) -> Vec<&'a str> {
    item.allergens
        .iter()
        .filter(|allergen| allergies.contains(allergen))
        .map(String::as_str)
        .collect()
}

/// Whether the item's price exceeds the tier's ceiling
fn exceeds_budget(item: &WellnessItem, tier: BudgetTier) -> bool {
    tier.ceiling_usd()
        .is_some_and(|ceiling| item.price_usd > ceiling)
}

/// Whether a meal plan declares a concrete diet type incompatible with the
/// profile diet. Plans with no declared type, or a `flexible` type, pass.
fn violates_diet(item: &WellnessItem, diet: &DietPreference) -> bool {
    match diet {
        DietPreference::Any => false,
        DietPreference::Specific(preferred) => item
            .diet_type()
            .is_some_and(|declared| declared != markers::FLEXIBLE_DIET && declared != preferred),
    }
}

/// Whether the item declares weather suitability that covers neither `any`
/// nor the preferred weather. An empty suitability set suits everywhere.
fn weather_mismatch(item: &WellnessItem, weather: &WeatherPreference) -> bool {
    match weather {
        WeatherPreference::Any => false,
        WeatherPreference::Specific(preferred) => {
            !item.weather_suitability.is_empty()
                && !item
                    .weather_suitability
                    .iter()
                    .any(|tag| tag == markers::ANY || tag == preferred)
        }
    }
}
