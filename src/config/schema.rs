//! Configuration schema definitions.
//!
//! This module defines the complete route configuration for an application.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::ViewDescriptor;

/// Root configuration for the router.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Route definitions, in registration order.
    pub routes: Vec<RouteDefinition>,

    /// What to do when no route matches.
    pub fallback: FallbackConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Route definition mapping a path pattern to a view.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteDefinition {
    /// Exact path to match (e.g., "/login").
    pub pattern: String,

    /// View rendered for this route.
    #[serde(flatten)]
    pub view: ViewDescriptor,
}

impl RouteDefinition {
    pub fn new(pattern: impl Into<String>, view: ViewDescriptor) -> Self {
        Self {
            pattern: pattern.into(),
            view,
        }
    }
}

/// Fallback route configuration.
///
/// Exactly one of `redirect_to` or `view` must be set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Registered pattern whose view is used for unmatched paths.
    pub redirect_to: Option<String>,

    /// Explicit view for unmatched paths.
    pub view: Option<ViewDescriptor>,
}

impl FallbackConfig {
    pub fn redirect(target: impl Into<String>) -> Self {
        Self {
            redirect_to: Some(target.into()),
            view: None,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Reference routes: home, register, login and profile, each bound as `vm`.
const REFERENCE_ROUTES: &[(&str, &str)] = &[
    ("/", "home"),
    ("/register", "register"),
    ("/login", "login"),
    ("/profile", "profile"),
];

impl Default for RouterConfig {
    fn default() -> Self {
        let routes = REFERENCE_ROUTES
            .iter()
            .map(|(pattern, name)| {
                RouteDefinition::new(
                    *pattern,
                    ViewDescriptor::new(
                        format!("./views/{}.html", name),
                        format!("{}Ctrl", name),
                        "vm",
                    ),
                )
            })
            .collect();

        Self {
            routes,
            fallback: FallbackConfig::redirect("/"),
            observability: ObservabilityConfig::default(),
        }
    }
}
