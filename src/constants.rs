// ABOUTME: System-wide constants for kit assembly, catalog queries, and configuration
// ABOUTME: Contains result sizes, budget ceilings, filter markers, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

//! Application constants and configuration defaults

/// Catalog query result limits
pub mod limits {
    /// Hits requested for the exercise category. Exercises get more slots
    /// because a kit holds a short routine rather than a single move.
    pub const EXERCISE_RESULT_SIZE: usize = 5;

    /// Hits requested for every non-exercise category
    pub const DEFAULT_RESULT_SIZE: usize = 3;
}

/// Budget tier price ceilings
pub mod budget {
    /// Maximum item price (USD) under the `budget` tier
    pub const BUDGET_CEILING_USD: f64 = 50.0;

    /// Maximum item price (USD) under the `moderate` tier
    pub const MODERATE_CEILING_USD: f64 = 200.0;
}

/// Filter marker values shared with the catalog
pub mod markers {
    /// Wildcard preference value accepted for difficulty, weather, and diet
    pub const ANY: &str = "any";

    /// Diet type compatible with every diet preference
    pub const FLEXIBLE_DIET: &str = "flexible";
}

/// Environment variable names for catalog configuration
pub mod env_config {
    /// Base URL of the catalog search service
    pub const CATALOG_URL: &str = "HEALTHFORGE_CATALOG_URL";

    /// Name of the catalog index to query
    pub const CATALOG_INDEX: &str = "HEALTHFORGE_CATALOG_INDEX";

    /// API key sent with catalog requests
    pub const CATALOG_API_KEY: &str = "HEALTHFORGE_CATALOG_API_KEY";

    /// Per-request timeout for catalog queries, in seconds
    pub const CATALOG_TIMEOUT_SECS: &str = "HEALTHFORGE_CATALOG_TIMEOUT_SECS";

    /// Log level for the CLI (trace, debug, info, warn, error)
    pub const LOG_LEVEL: &str = "HEALTHFORGE_LOG_LEVEL";

    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "HEALTHFORGE_LOG_FORMAT";
}

/// Default values for catalog configuration
pub mod defaults {
    /// Default catalog index name
    pub const CATALOG_INDEX: &str = "wellness_items";

    /// Default per-request timeout for catalog queries, in seconds
    pub const CATALOG_TIMEOUT_SECS: u64 = 10;
}
