// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Provides catalog item builders, a seeded catalog, and profile helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use healthforge::catalog::StaticCatalog;
use healthforge::models::{UserProfile, WellnessItem};
use serde_json::{json, Value};

/// Deserialize a catalog item from inline JSON
pub fn item(value: Value) -> WellnessItem {
    serde_json::from_value(value).expect("fixture item must deserialize")
}

/// A profile with the given goals and otherwise default preferences
pub fn profile_with_goals(goals: &[&str]) -> UserProfile {
    UserProfile {
        goals: goals.iter().map(|g| (*g).to_owned()).collect(),
        ..UserProfile::default()
    }
}

/// Seeded catalog echoing a small slice of the production index: a few
/// items per category with realistic tags, prices, and allergens.
pub fn seeded_catalog() -> StaticCatalog {
    StaticCatalog::new(vec![
        // Exercises
        item(json!({
            "category": "exercise", "id": "ex-001", "name": "Jump Rope Intervals",
            "subcategory": "cardio", "difficulty": "beginner",
            "duration_minutes": 20, "calories_per_30min": 340,
            "muscle_groups": ["calves", "shoulders"], "equipment": ["jump rope"],
            "indoor": true, "goals": ["weight loss", "endurance"],
            "weather_suitability": ["any"], "rating": 4.5, "price_usd": 0.0,
            "description": "High-intensity rope intervals for conditioning"
        })),
        item(json!({
            "category": "exercise", "id": "ex-002", "name": "Trail Running",
            "subcategory": "cardio", "difficulty": "intermediate",
            "duration_minutes": 45, "calories_per_30min": 380,
            "muscle_groups": ["quadriceps", "calves"], "equipment": [],
            "indoor": false, "goals": ["weight loss", "endurance"],
            "weather_suitability": ["mild", "hot"], "rating": 4.7, "price_usd": 0.0,
            "description": "Outdoor endurance running on varied terrain"
        })),
        item(json!({
            "category": "exercise", "id": "ex-003", "name": "Resistance Band Circuit",
            "subcategory": "strength", "difficulty": "beginner",
            "duration_minutes": 30, "calories_per_30min": 220,
            "muscle_groups": ["back", "arms"], "equipment": ["resistance band"],
            "indoor": true, "goals": ["muscle building", "general fitness"],
            "weather_suitability": ["any"], "rating": 4.2, "price_usd": 0.0,
            "description": "Full-body strength circuit with bands"
        })),
        item(json!({
            "category": "exercise", "id": "ex-004", "name": "Barbell Complexes",
            "subcategory": "strength", "difficulty": "advanced",
            "duration_minutes": 40, "calories_per_30min": 310,
            "muscle_groups": ["full body"], "equipment": ["barbell"],
            "indoor": true, "goals": ["muscle building"],
            "weather_suitability": ["any"], "rating": 4.6, "price_usd": 0.0,
            "description": "Heavy compound sequences for experienced lifters"
        })),
        // Supplements
        item(json!({
            "category": "supplement", "id": "sup-001", "name": "Whey Protein Isolate",
            "subcategory": "protein", "difficulty": "beginner",
            "dosage": "1 scoop (30g) after training",
            "goals": ["muscle building", "weight loss"], "allergens": ["dairy"],
            "benefits": ["muscle recovery"], "weather_suitability": [],
            "rating": 4.8, "price_usd": 45.0,
            "description": "Fast-absorbing protein for recovery"
        })),
        item(json!({
            "category": "supplement", "id": "sup-002", "name": "Almond Energy Blend",
            "subcategory": "energy", "difficulty": "beginner",
            "dosage": "2 capsules before training",
            "goals": ["endurance", "weight loss"], "allergens": ["nuts"],
            "benefits": ["sustained energy"], "weather_suitability": [],
            "rating": 4.1, "price_usd": 20.0,
            "description": "Nut-based pre-workout energy support"
        })),
        item(json!({
            "category": "supplement", "id": "sup-003", "name": "Magnesium Glycinate",
            "subcategory": "recovery", "difficulty": "beginner",
            "dosage": "200mg before bed",
            "goals": ["better sleep", "stress relief", "weight loss"], "allergens": [],
            "benefits": ["sleep quality"], "weather_suitability": [],
            "rating": 4.4, "price_usd": 18.0,
            "description": "Highly bioavailable magnesium for rest"
        })),
        // Gear
        item(json!({
            "category": "gear", "id": "gear-001", "name": "Yoga Mat",
            "subcategory": "floor work", "difficulty": "beginner",
            "goals": ["flexibility", "general fitness", "weight loss"],
            "weather_suitability": [], "rating": 4.3, "price_usd": 35.0,
            "description": "Non-slip mat for floor training"
        })),
        item(json!({
            "category": "gear", "id": "gear-002", "name": "Smart Rowing Machine",
            "subcategory": "cardio machines", "difficulty": "beginner",
            "goals": ["endurance", "weight loss"],
            "weather_suitability": [], "rating": 4.9, "price_usd": 899.0,
            "description": "Connected rower with guided workouts"
        })),
        item(json!({
            "category": "gear", "id": "gear-003", "name": "Insulated Running Jacket",
            "subcategory": "apparel", "difficulty": "beginner",
            "goals": ["endurance", "weight loss"],
            "weather_suitability": ["cold", "rainy"], "rating": 4.0, "price_usd": 80.0,
            "description": "Wind-resistant layer for outdoor sessions"
        })),
        // Meal plans
        item(json!({
            "category": "meal_plan", "id": "meal-001", "name": "Lean Deficit Plan",
            "subcategory": "weight management", "difficulty": "beginner",
            "calories_daily": 1700, "meals_per_day": 4,
            "macros": { "protein_g": 140.0, "carbs_g": 150.0, "fat_g": 50.0 },
            "diet_type": "flexible", "goals": ["weight loss"],
            "allergens": [], "weather_suitability": [], "rating": 4.2, "price_usd": 29.0,
            "description": "Sustainable calorie deficit with high protein"
        })),
        item(json!({
            "category": "meal_plan", "id": "meal-002", "name": "Keto Reset",
            "subcategory": "low carb", "difficulty": "intermediate",
            "calories_daily": 1800, "meals_per_day": 3,
            "macros": { "protein_g": 120.0, "carbs_g": 40.0, "fat_g": 130.0 },
            "diet_type": "keto", "goals": ["weight loss"],
            "allergens": ["eggs"], "weather_suitability": [], "rating": 4.0, "price_usd": 39.0,
            "description": "Strict ketogenic reset cycle"
        })),
        item(json!({
            "category": "meal_plan", "id": "meal-003", "name": "Plant Power Plan",
            "subcategory": "plant based", "difficulty": "beginner",
            "calories_daily": 2000, "meals_per_day": 3,
            "macros": { "protein_g": 110.0, "carbs_g": 220.0, "fat_g": 60.0 },
            "diet_type": "vegan", "goals": ["weight loss", "general fitness"],
            "allergens": ["soy"], "weather_suitability": [], "rating": 4.5, "price_usd": 32.0,
            "description": "Whole-food vegan meal structure"
        })),
    ])
}
