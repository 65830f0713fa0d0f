// ABOUTME: Wellness catalog item models with category-dependent detail variants
// ABOUTME: WellnessItem, Category, CategoryDetails, DifficultyLevel, and Macros definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fixed catalog categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Exercises and workout routines
    Exercise,
    /// Supplements with dosage guidance
    Supplement,
    /// Physical equipment and accessories
    Gear,
    /// Structured meal plans
    MealPlan,
}

impl Category {
    /// Fixed assembly order. Queries are issued, kit items grouped, and
    /// alerts emitted in this order.
    pub const ALL: [Self; 4] = [Self::Exercise, Self::Supplement, Self::Gear, Self::MealPlan];

    /// Canonical snake_case name used in catalog records and queries
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exercise => "exercise",
            Self::Supplement => "supplement",
            Self::Gear => "gear",
            Self::MealPlan => "meal_plan",
        }
    }

    /// Human-readable section label for presentation
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exercise => "Exercises",
            Self::Supplement => "Supplements",
            Self::Gear => "Gear",
            Self::MealPlan => "Meal Plans",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty tier of a catalog item
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Novice-safe content, always eligible regardless of requested level
    #[default]
    Beginner,
    /// Intermediate tier
    Intermediate,
    /// Advanced tier
    Advanced,
}

impl DifficultyLevel {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse a difficulty level from a string, falling back to beginner
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Beginner,
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macro breakdown for a meal plan, in grams
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Macros {
    /// Protein per day (grams)
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrates per day (grams)
    #[serde(default)]
    pub carbs_g: f64,
    /// Fat per day (grams)
    #[serde(default)]
    pub fat_g: f64,
}

/// Category-dependent fields of a catalog item.
///
/// Internally tagged on `category`, so a record's JSON carries
/// `"category": "exercise"` alongside that category's fields and nothing
/// else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CategoryDetails {
    /// Exercise-specific fields
    Exercise {
        /// Session length in minutes
        #[serde(default)]
        duration_minutes: u32,
        /// Calories burned per 30 minutes
        #[serde(default)]
        calories_per_30min: u32,
        /// Targeted muscle groups
        #[serde(default)]
        muscle_groups: Vec<String>,
        /// Equipment tags required to perform the exercise
        #[serde(default)]
        equipment: Vec<String>,
        /// Whether the exercise can be done indoors
        #[serde(default)]
        indoor: bool,
    },
    /// Supplement-specific fields
    Supplement {
        /// Free-text dosage guidance
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dosage: Option<String>,
    },
    /// Gear carries no category-specific fields
    Gear,
    /// Meal-plan-specific fields
    MealPlan {
        /// Daily calorie target
        #[serde(default)]
        calories_daily: u32,
        /// Macro breakdown
        #[serde(default, skip_serializing_if = "Option::is_none")]
        macros: Option<Macros>,
        /// Meals per day
        #[serde(default)]
        meals_per_day: u32,
        /// Diet type label (`flexible` is compatible with every diet)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diet_type: Option<String>,
    },
}

/// An immutable wellness catalog record.
///
/// Instances are owned by the external catalog; the engine treats them as
/// read-only values. Every collection and numeric field defaults so that a
/// hit missing fields still deserializes (absent numerics as zero, absent
/// collections as empty).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellnessItem {
    /// Unique catalog identifier
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Subcategory label (e.g. "cardio", "protein", "recovery")
    #[serde(default)]
    pub subcategory: String,
    /// Difficulty tier
    #[serde(default)]
    pub difficulty: DifficultyLevel,
    /// Goal tags this item serves
    #[serde(default)]
    pub goals: Vec<String>,
    /// Weather conditions the item suits; empty or containing `any` means
    /// suitable everywhere
    #[serde(default)]
    pub weather_suitability: Vec<String>,
    /// Allergen tags present in the item
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Benefit tags
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// 0-5 user rating
    #[serde(default)]
    pub rating: f64,
    /// Approximate price in USD; zero when not applicable
    #[serde(default)]
    pub price_usd: f64,
    /// Category tag plus category-dependent fields
    #[serde(flatten)]
    pub details: CategoryDetails,
}

impl WellnessItem {
    /// The item's category, derived from its detail variant
    #[must_use]
    pub const fn category(&self) -> Category {
        match self.details {
            CategoryDetails::Exercise { .. } => Category::Exercise,
            CategoryDetails::Supplement { .. } => Category::Supplement,
            CategoryDetails::Gear => Category::Gear,
            CategoryDetails::MealPlan { .. } => Category::MealPlan,
        }
    }

    /// Equipment tags required by this item; empty for non-exercises
    #[must_use]
    pub fn equipment(&self) -> &[String] {
        match &self.details {
            CategoryDetails::Exercise { equipment, .. } => equipment,
            _ => &[],
        }
    }

    /// Calories burned per 30 minutes; zero for non-exercises
    #[must_use]
    pub const fn calories_per_30min(&self) -> u32 {
        match self.details {
            CategoryDetails::Exercise {
                calories_per_30min, ..
            } => calories_per_30min,
            _ => 0,
        }
    }

    /// Declared diet type; `None` for non-meal-plans or undeclared plans
    #[must_use]
    pub fn diet_type(&self) -> Option<&str> {
        match &self.details {
            CategoryDetails::MealPlan { diet_type, .. } => diet_type.as_deref(),
            _ => None,
        }
    }

    /// Whether the exercise can be performed indoors; false for non-exercises
    #[must_use]
    pub const fn is_indoor(&self) -> bool {
        match self.details {
            CategoryDetails::Exercise { indoor, .. } => indoor,
            _ => false,
        }
    }
}
