// ABOUTME: Equipment gap analyzer cross-referencing exercise needs against included gear
// ABOUTME: Emits one advisory per unmet equipment tag, in first-seen order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

use crate::models::{Alert, Category, WellnessItem};

/// Cross-reference equipment required by included exercises against the
/// kit's gear items.
///
/// A need is met when any included gear item's name contains the
/// equipment tag as a case-insensitive substring. Unmet needs each
/// produce one advisory, in first-seen order across the exercise items.
/// Never removes items; pure over the provisional kit, so running it
/// twice yields the same alerts.
#[must_use]
pub fn equipment_gap_alerts(items: &[WellnessItem]) -> Vec<Alert> {
    let mut needs: Vec<&str> = Vec::new();
    for item in items.iter().filter(|i| i.category() == Category::Exercise) {
        for tag in item.equipment() {
            if !tag.is_empty() && !needs.contains(&tag.as_str()) {
                needs.push(tag);
            }
        }
    }

    let gear_names: Vec<String> = items
        .iter()
        .filter(|i| i.category() == Category::Gear)
        .map(|i| i.name.to_lowercase())
        .collect();

    needs
        .into_iter()
        .filter(|need| {
            let need_lower = need.to_lowercase();
            !gear_names.iter().any(|gear| gear.contains(&need_lower))
        })
        .map(Alert::equipment_advisory)
        .collect()
}
