//! Client-side route table for single-page applications.

pub mod config;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use navigation::Navigator;
pub use routing::{ConfigError, RouteTable, ViewDescriptor};
