use std::path::Path;

use crate::config::types::RunConfig;
use crate::error::WavefrontError;

/// Parse a YAML run configuration file into a [`RunConfig`].
///
/// Only the structure is checked here; use
/// [`validate_config`](crate::config::validate_config) for ranges.
///
/// # Errors
///
/// Returns [`WavefrontError::Io`] if the file cannot be read,
/// or [`WavefrontError::Yaml`] if the YAML is malformed.
pub fn parse_config(path: &Path) -> Result<RunConfig, WavefrontError> {
    let content = std::fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Parse a YAML run configuration from a string.
///
/// # Errors
///
/// Returns [`WavefrontError::Yaml`] if the YAML is malformed.
pub fn parse_config_str(yaml: &str) -> Result<RunConfig, WavefrontError> {
    let config: RunConfig = serde_yaml::from_str(yaml)?;
    Ok(config)
}
