// ABOUTME: Main library entry point for the HealthForge kit assembly engine
// ABOUTME: Assembles personalized wellness kits from catalog hits with compatibility alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

#![deny(unsafe_code)]

//! # HealthForge
//!
//! A personalized wellness kit assembly engine. Given a user's goals and
//! constraints plus per-category catalog search results, the engine
//! produces a kit of exercise, supplement, gear, and meal-plan items
//! together with human-readable compatibility alerts.
//!
//! ## Features
//!
//! - **Constraint-aware filtering**: allergy exclusions, budget ceilings,
//!   diet compatibility, and weather advisories
//! - **Equipment gap analysis**: flags exercise equipment no included
//!   gear covers
//! - **Pluggable catalog**: a trait seam over the search backend, with
//!   in-memory and HTTP providers included
//! - **Pure engine**: no internal caching, no persistence; each pass
//!   works on an immutable profile snapshot and fresh hits
//!
//! ## Architecture
//!
//! - **Models**: catalog items, user profiles, kits, and alerts
//! - **Catalog**: the `CatalogProvider` seam and its implementations
//! - **Engine**: query planner, filter pipeline, equipment analyzer, and
//!   the `KitAssembler` that folds them into a kit
//! - **Config**: environment-driven catalog settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use healthforge::catalog::StaticCatalog;
//! use healthforge::engine::KitAssembler;
//! use healthforge::errors::AppResult;
//! use healthforge::models::UserProfile;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let catalog = StaticCatalog::from_json_file("catalog.json")?;
//!     let profile = UserProfile {
//!         goals: vec!["weight loss".into()],
//!         ..UserProfile::default()
//!     };
//!
//!     let kit = KitAssembler::new(&catalog).assemble(&profile).await?;
//!     println!("{} items, {} alerts", kit.items.len(), kit.alerts.len());
//!     Ok(())
//! }
//! ```

/// Catalog search abstractions and provider implementations
pub mod catalog;

/// Environment-based configuration
pub mod config;

/// Application constants and configuration defaults
pub mod constants;

/// Kit assembly engine: planner, filter pipeline, and analyzers
pub mod engine;

/// Unified error handling with standard error codes
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Core data models for items, profiles, kits, and alerts
pub mod models;
