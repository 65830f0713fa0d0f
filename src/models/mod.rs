// ABOUTME: Core data models for wellness catalog items, user profiles, kits, and alerts
// ABOUTME: Re-exports WellnessItem, UserProfile, WellnessKit and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

//! # Data Models
//!
//! Core data structures shared by the engine, catalog providers, and CLI.
//!
//! ## Design Principles
//!
//! - **Read-only catalog records**: [`WellnessItem`] instances are owned by
//!   the external catalog; the engine never mutates or persists them.
//! - **Category-dependent fields are typed**: fields meaningful only for
//!   one category live in the [`CategoryDetails`] variant for that
//!   category, so "which fields apply here" is a compile-time fact.
//! - **Tolerant deserialization**: absent numeric fields read as zero and
//!   absent collections as empty, so malformed hits never abort assembly.

mod alert;
mod item;
mod kit;
mod profile;

// Catalog item domain
pub use item::{Category, CategoryDetails, DifficultyLevel, Macros, WellnessItem};

// User profile domain
pub use profile::{
    BudgetTier, DietPreference, DifficultyPreference, UserProfile, WeatherPreference,
};

// Alert domain
pub use alert::{Alert, AlertKind};

// Kit domain
pub use kit::{KitSummary, WellnessKit};
