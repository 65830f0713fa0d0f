// ABOUTME: Compatibility alert types emitted during kit assembly
// ABOUTME: Alert and AlertKind definitions with canonical message constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of compatibility alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// An item was excluded because it carries a declared allergen
    AllergyExclusion,
    /// An item was kept but flagged as unsuited to the preferred weather
    WeatherAdvisory,
    /// Included exercises require equipment no included gear covers
    EquipmentAdvisory,
    /// Assembly failed as a whole
    Error,
}

/// A human-readable compatibility alert.
///
/// Alerts are collected in emission order: per-category filter alerts in
/// category order, then equipment advisories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    /// Alert kind
    pub kind: AlertKind,
    /// Message shown to the user
    pub message: String,
}

impl Alert {
    /// Exclusion alert for an item carrying allergens from the user's
    /// allergy set. Conflicts are comma-joined in the item's listed order.
    #[must_use]
    pub fn allergy_exclusion(item_name: &str, conflicts: &[&str]) -> Self {
        Self {
            kind: AlertKind::AllergyExclusion,
            message: format!(
                "\"{item_name}\" contains {} - excluded from your kit due to allergy settings",
                conflicts.join(", ")
            ),
        }
    }

    /// Advisory for an item unsuited to the preferred weather; the item
    /// stays in the kit.
    #[must_use]
    pub fn weather_advisory(item_name: &str, weather: &str) -> Self {
        Self {
            kind: AlertKind::WeatherAdvisory,
            message: format!(
                "\"{item_name}\" may not be ideal for {weather} weather - included but flagged"
            ),
        }
    }

    /// Advisory recommending gear for an unmet exercise equipment need
    #[must_use]
    pub fn equipment_advisory(equipment_tag: &str) -> Self {
        Self {
            kind: AlertKind::EquipmentAdvisory,
            message: format!(
                "Your exercises need \"{equipment_tag}\" - consider adding matching gear to your kit"
            ),
        }
    }

    /// Generic alert for a failed assembly pass
    #[must_use]
    pub fn assembly_error() -> Self {
        Self {
            kind: AlertKind::Error,
            message: "Error building kit. Please try again.".to_owned(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
