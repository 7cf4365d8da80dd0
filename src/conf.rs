//! Agent configuration loading
//!
//! Loads the user-authored agent configuration document into the generic
//! tree consumed by the translator. The agent config is usually JSON; YAML
//! documents are accepted as well, dispatched on the file extension.

use std::path::Path;

use thiserror::Error;

use crate::tree::Value;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Error parsing a JSON configuration document
    #[error("Failed to parse JSON config: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing a YAML configuration document
    #[error("Failed to parse YAML config: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Load a configuration tree from a file
///
/// Files ending in `.json` are parsed as JSON; everything else as YAML.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load<P: AsRef<Path>>(path: P) -> Result<Value, ConfError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    tracing::debug!(path = %path.display(), "loading agent configuration");

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => from_json_str(&contents),
        _ => from_yaml_str(&contents),
    }
}

/// Parse a configuration tree from a JSON document
pub fn from_json_str(contents: &str) -> Result<Value, ConfError> {
    Ok(serde_json::from_str(contents)?)
}

/// Parse a configuration tree from a YAML document
pub fn from_yaml_str(contents: &str) -> Result<Value, ConfError> {
    Ok(serde_yaml::from_str(contents)?)
}
