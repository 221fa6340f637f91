//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::{ConfigError, RouteTable};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Invalid route table: {0}")]
    Table(#[from] ConfigError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RouterConfig, LoadError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_config(&config).map_err(LoadError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load a configuration file and build its route table.
pub fn load_route_table(path: &Path) -> Result<(RouterConfig, RouteTable), LoadError> {
    let config = load_config(path)?;
    let table = RouteTable::from_config(&config)?;
    Ok((config, table))
}
