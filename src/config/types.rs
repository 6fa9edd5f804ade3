//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::validation;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Property filter registrations, evaluated in declaration order
    #[serde(default)]
    pub property_filters: Vec<PropertyFilterSpec>,

    /// Also scrub property bags of chained source exceptions
    pub scrub_chained: bool,

    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            property_filters: Vec::new(),
            scrub_chained: true,
            debug: false,
            log_path: default_log_path(),
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    /// Delegates to the comprehensive validation module.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

/// One property filter registration.
///
/// # Examples
///
/// Suppress by exact property name:
/// ```toml
/// [[property_filters]]
/// kind = "name"
/// names = ["Password", "ApiKey"]
/// ```
///
/// Suppress when the rendered value matches a regex:
/// ```toml
/// [[property_filters]]
/// kind = "value-pattern"
/// pattern = "(?i)bearer [a-z0-9]+"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PropertyFilterSpec {
    /// Exact-name suppression
    Name {
        /// Property names to suppress
        names: Vec<String>,
    },
    /// Rendered-value regex suppression
    ValuePattern {
        /// Regex applied to the rendered property value
        pattern: String,
    },
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("exfilter")
        })
        .join("logs")
}
