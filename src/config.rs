// ABOUTME: Environment configuration for the catalog search collaborator
// ABOUTME: CatalogConfig::from_env with defaulting helpers for URL, index, key, and timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

//! Environment-based configuration for deployment-specific settings

use crate::constants::{defaults, env_config};
use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Configuration for the hosted catalog search service
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the search service
    pub base_url: String,
    /// Index name to query
    pub index: String,
    /// Optional API key sent with every request
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Load catalog configuration from the environment.
    ///
    /// `HEALTHFORGE_CATALOG_URL` is required; index, API key, and timeout
    /// fall back to defaults.
    ///
    /// # Errors
    /// Returns an error when the URL is missing or unparsable, or the
    /// timeout is not a number
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(env_config::CATALOG_URL)
            .with_context(|| format!("{} must be set", env_config::CATALOG_URL))?;
        Url::parse(&base_url)
            .with_context(|| format!("{} is not a valid URL", env_config::CATALOG_URL))?;

        let timeout_secs = env_var_or(
            env_config::CATALOG_TIMEOUT_SECS,
            &defaults::CATALOG_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .with_context(|| format!("{} must be a number", env_config::CATALOG_TIMEOUT_SECS))?;

        Ok(Self {
            base_url,
            index: env_var_or(env_config::CATALOG_INDEX, defaults::CATALOG_INDEX),
            api_key: env::var(env_config::CATALOG_API_KEY).ok(),
            timeout_secs,
        })
    }
}

/// Read an environment variable, falling back to a default
fn env_var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_owned())
}
