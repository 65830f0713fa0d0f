// ABOUTME: User profile value object with goal, difficulty, allergy, budget, weather, and diet preferences
// ABOUTME: UserProfile, BudgetTier, DifficultyPreference, WeatherPreference, and DietPreference definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

use crate::constants::{budget, markers};
use crate::models::DifficultyLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Budget tier constraining item prices
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    /// No price ceiling
    #[default]
    Any,
    /// Items up to 50 USD
    Budget,
    /// Items up to 200 USD
    Moderate,
    /// No price ceiling
    Premium,
}

impl BudgetTier {
    /// Price ceiling in USD implied by this tier, if any
    #[must_use]
    pub const fn ceiling_usd(self) -> Option<f64> {
        match self {
            Self::Budget => Some(budget::BUDGET_CEILING_USD),
            Self::Moderate => Some(budget::MODERATE_CEILING_USD),
            Self::Any | Self::Premium => None,
        }
    }

    /// Parse a budget tier from a string, falling back to `any`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "budget" => Self::Budget,
            "moderate" => Self::Moderate,
            "premium" => Self::Premium,
            _ => Self::Any,
        }
    }
}

/// Difficulty preference: a wildcard or a concrete level
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum DifficultyPreference {
    /// No difficulty constraint
    #[default]
    Any,
    /// Requested difficulty level (beginner content stays eligible)
    Level(DifficultyLevel),
}

impl From<String> for DifficultyPreference {
    fn from(s: String) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case(markers::ANY) {
            Self::Any
        } else {
            Self::Level(DifficultyLevel::from_str_lossy(&s))
        }
    }
}

impl From<DifficultyPreference> for String {
    fn from(pref: DifficultyPreference) -> Self {
        match pref {
            DifficultyPreference::Any => markers::ANY.to_owned(),
            DifficultyPreference::Level(level) => level.as_str().to_owned(),
        }
    }
}

/// Weather preference: a wildcard or a concrete condition tag
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum WeatherPreference {
    /// No weather constraint
    #[default]
    Any,
    /// Specific weather condition (e.g. "cold", "hot", "rainy")
    Specific(String),
}

impl WeatherPreference {
    /// The preference value as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => markers::ANY,
            Self::Specific(weather) => weather,
        }
    }
}

impl From<String> for WeatherPreference {
    fn from(s: String) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case(markers::ANY) {
            Self::Any
        } else {
            Self::Specific(s)
        }
    }
}

impl From<WeatherPreference> for String {
    fn from(pref: WeatherPreference) -> Self {
        pref.as_str().to_owned()
    }
}

impl fmt::Display for WeatherPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diet preference: a wildcard or a concrete diet label
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum DietPreference {
    /// No diet constraint
    #[default]
    Any,
    /// Specific diet label (e.g. "vegan", "keto", "mediterranean")
    Specific(String),
}

impl DietPreference {
    /// The preference value as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => markers::ANY,
            Self::Specific(diet) => diet,
        }
    }
}

impl From<String> for DietPreference {
    fn from(s: String) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case(markers::ANY) {
            Self::Any
        } else {
            Self::Specific(s)
        }
    }
}

impl From<DietPreference> for String {
    fn from(pref: DietPreference) -> Self {
        pref.as_str().to_owned()
    }
}

/// A snapshot of the user's goals and constraints for one assembly pass.
///
/// Created and mutated only upstream (user input capture); the engine
/// receives an immutable snapshot per invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Selected goal tags; assembly requires at least one
    #[serde(default)]
    pub goals: Vec<String>,
    /// Difficulty preference
    #[serde(default)]
    pub difficulty: DifficultyPreference,
    /// Allergy tags; items carrying any of these are hard-excluded
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Budget tier
    #[serde(default)]
    pub budget: BudgetTier,
    /// Weather preference
    #[serde(default)]
    pub weather: WeatherPreference,
    /// Restrict exercise queries to indoor content
    #[serde(default)]
    pub indoor_only: bool,
    /// Diet preference, applied to meal plans only
    #[serde(default)]
    pub diet: DietPreference,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            goals: Vec::new(),
            difficulty: DifficultyPreference::Level(DifficultyLevel::Beginner),
            allergies: Vec::new(),
            budget: BudgetTier::Any,
            weather: WeatherPreference::Any,
            indoor_only: false,
            diet: DietPreference::Any,
        }
    }
}

impl UserProfile {
    /// Whether at least one goal is selected (the assembly precondition)
    #[must_use]
    pub fn has_goals(&self) -> bool {
        !self.goals.is_empty()
    }

    /// Goal tags joined into the single search phrase used for every
    /// category query
    #[must_use]
    pub fn search_phrase(&self) -> String {
        self.goals.join(" ")
    }
}
