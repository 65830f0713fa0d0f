// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures tracing subscriber level and output format from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

//! Structured logging configuration

use crate::constants::env_config;
use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    #[default]
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a format from a string, falling back to pretty
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Load logging configuration from the environment, defaulting to
    /// `info` level and pretty output
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            level: env::var(env_config::LOG_LEVEL).unwrap_or_else(|_| "info".into()),
            format: LogFormat::from_str_lossy(
                &env::var(env_config::LOG_FORMAT).unwrap_or_default(),
            ),
        }
    }

    /// Debug-level configuration for verbose CLI runs
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: "debug".into(),
            ..Self::default()
        }
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
/// Returns an error when the level directive does not parse or a
/// subscriber is already installed
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("invalid log level: {}", config.level))?;

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(true).json())
            .try_init()
            .context("failed to install logging subscriber")?,
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true))
            .try_init()
            .context("failed to install logging subscriber")?,
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(false))
            .try_init()
            .context("failed to install logging subscriber")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str_lossy() {
        assert_eq!(LogFormat::from_str_lossy("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_lossy("COMPACT"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_lossy("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_debug_config_uses_debug_level() {
        assert_eq!(LoggingConfig::debug().level, "debug");
    }
}
