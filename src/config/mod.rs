//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → RouteTable::from_config (duplicate & redirect checks)
//!     → shared via Arc with the navigator
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no runtime route registration
//! - All fields have defaults; an empty file yields the reference routes
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_route_table, parse_config, LoadError};
pub use schema::{FallbackConfig, LogFormat, ObservabilityConfig, RouteDefinition, RouterConfig};
pub use validation::{validate_config, ValidationError};
