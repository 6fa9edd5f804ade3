//! Configuration validation.

use anyhow::{bail, Result};
use regex::Regex;

use super::types::PropertyFilterSpec;
use super::Config;

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    // Validate log path
    if !config.log_path.as_os_str().is_empty()
        && config.log_path.to_string_lossy().contains('\0')
    {
        bail!("Invalid log_path: contains null character");
    }

    // Validate property filter registrations
    for (i, spec) in config.property_filters.iter().enumerate() {
        match spec {
            PropertyFilterSpec::Name { names } => {
                if names.is_empty() {
                    bail!("property_filters[{}]: names cannot be empty", i);
                }
                for name in names {
                    if name.is_empty() {
                        bail!("property_filters[{}]: names must not contain empty strings", i);
                    }
                }
            }
            PropertyFilterSpec::ValuePattern { pattern } => {
                if pattern.is_empty() {
                    bail!("property_filters[{}]: pattern cannot be empty", i);
                }
                if let Err(e) = Regex::new(pattern) {
                    bail!(
                        "property_filters[{}]: invalid regex pattern '{}': {}",
                        i,
                        pattern,
                        e
                    );
                }
            }
        }
    }

    Ok(())
}
