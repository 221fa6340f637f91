//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration (or use the reference routes)
//! - Initialize logging
//! - Build the route table
//!
//! # Design Decisions
//! - Fail fast: an invalid route table is fatal, the application never
//!   starts with one
//! - Logging starts right after config is parsed so table errors are logged

use std::path::Path;
use std::sync::Arc;

use crate::config::{load_config, LoadError, RouterConfig};
use crate::observability::init_logging;
use crate::routing::RouteTable;

/// Everything the navigation layer needs once startup succeeds.
#[derive(Debug)]
pub struct Startup {
    pub config: RouterConfig,
    pub table: Arc<RouteTable>,
}

/// Load configuration from `path` (reference routes when `None`), start
/// logging and build the route table.
pub fn start(path: Option<&Path>) -> Result<Startup, LoadError> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };

    init_logging(&config.observability);

    let table = RouteTable::from_config(&config).map_err(|e| {
        tracing::error!(error = %e, "Route table rejected");
        e
    })?;

    tracing::info!(
        config = ?path,
        routes = table.len(),
        fallback = table.redirect_target().unwrap_or("<view>"),
        "Route table ready"
    );

    Ok(Startup {
        config,
        table: Arc::new(table),
    })
}
