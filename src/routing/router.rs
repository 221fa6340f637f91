//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Store route entries in registration order
//! - Reject ambiguous tables at build time
//! - Resolve every path to exactly one view descriptor
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc, no locks)
//! - O(n) ordered scan, first match wins
//! - Unmatched paths resolve to the default view rather than an error

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::schema::{FallbackConfig, RouterConfig};
use crate::routing::matcher::{ExactPath, PathMatcher};

/// What to render for a route and under which name its controller is exposed.
///
/// The router never interprets these fields; it only carries them to the
/// view renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ViewDescriptor {
    /// Template location (e.g., "./views/home.html").
    #[serde(alias = "template_url")]
    pub template_ref: String,

    /// Name of the controller backing the view.
    #[serde(alias = "controller")]
    pub controller_name: String,

    /// Local name the controller is bound to inside the template.
    #[serde(alias = "controller_as", default = "default_binding_alias")]
    pub binding_alias: String,
}

pub(crate) fn default_binding_alias() -> String {
    "vm".to_string()
}

impl ViewDescriptor {
    pub fn new(
        template_ref: impl Into<String>,
        controller_name: impl Into<String>,
        binding_alias: impl Into<String>,
    ) -> Self {
        Self {
            template_ref: template_ref.into(),
            controller_name: controller_name.into(),
            binding_alias: binding_alias.into(),
        }
    }
}

impl std::fmt::Display for ViewDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} as {} @ {}",
            self.controller_name, self.binding_alias, self.template_ref
        )
    }
}

/// A single pattern -> view mapping.
#[derive(Debug)]
pub struct RouteEntry {
    matcher: Box<dyn PathMatcher>,
    view: ViewDescriptor,
}

impl RouteEntry {
    /// Create an exact-match route entry.
    pub fn new(pattern: impl Into<String>, view: ViewDescriptor) -> Self {
        Self::with_matcher(Box::new(ExactPath::new(pattern)), view)
    }

    /// Create a route entry from any matcher.
    pub fn with_matcher(matcher: Box<dyn PathMatcher>, view: ViewDescriptor) -> Self {
        Self { matcher, view }
    }

    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }

    pub fn view(&self) -> &ViewDescriptor {
        &self.view
    }
}

/// Errors raised while building a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Two entries share a pattern but map to different views.
    #[error("Route pattern '{pattern}' is registered with conflicting views ({first} vs {second})")]
    DuplicatePattern {
        pattern: String,
        first: ViewDescriptor,
        second: ViewDescriptor,
    },

    /// The fallback redirects to a pattern that is not in the table.
    #[error("Fallback redirect target '{0}' is not a registered route")]
    UnknownRedirectTarget(String),
}

/// How a path was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// A registered pattern matched.
    Matched,
    /// Nothing matched; the default view was used.
    Fallback,
}

/// Result of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    /// Effective location: the matched pattern, the redirect target on a
    /// fallback, or the requested path when the fallback is not a redirect.
    pub path: &'a str,
    pub view: &'a ViewDescriptor,
    pub outcome: Outcome,
}

/// Immutable, ordered route table with a default view.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    default_view: ViewDescriptor,
    redirect_target: Option<String>,
}

impl RouteTable {
    /// Build a table from ordered entries and an explicit default view.
    pub fn new(
        entries: Vec<RouteEntry>,
        default_view: ViewDescriptor,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            entries: dedup_entries(entries)?,
            default_view,
            redirect_target: None,
        })
    }

    /// Build a table whose default is the view registered under `target`.
    pub fn with_redirect(
        entries: Vec<RouteEntry>,
        target: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let target = target.into();
        let entries = dedup_entries(entries)?;
        let default_view = entries
            .iter()
            .find(|e| e.matcher.matches(&target))
            .map(|e| e.view.clone())
            .ok_or_else(|| ConfigError::UnknownRedirectTarget(target.clone()))?;

        Ok(Self {
            entries,
            default_view,
            redirect_target: Some(target),
        })
    }

    /// Build a table from route configuration.
    pub fn from_config(config: &RouterConfig) -> Result<Self, ConfigError> {
        let entries = config
            .routes
            .iter()
            .map(|r| RouteEntry::new(r.pattern.clone(), r.view.clone()))
            .collect();

        let table = match &config.fallback {
            FallbackConfig { redirect_to: Some(target), .. } => {
                Self::with_redirect(entries, target.clone())?
            }
            FallbackConfig { view: Some(view), .. } => Self::new(entries, view.clone())?,
            // Validation rejects this; fall back to the first route so the
            // table stays total.
            FallbackConfig { .. } => {
                let target = config
                    .routes
                    .first()
                    .map(|r| r.pattern.clone())
                    .unwrap_or_else(|| "/".to_string());
                Self::with_redirect(entries, target)?
            }
        };

        tracing::debug!(
            routes = table.len(),
            redirect_target = ?table.redirect_target,
            "Route table built"
        );
        Ok(table)
    }

    /// Resolve a path to its view. Never fails.
    pub fn resolve(&self, path: &str) -> &ViewDescriptor {
        self.entries
            .iter()
            .find(|e| e.matcher.matches(path))
            .map(|e| &e.view)
            .unwrap_or(&self.default_view)
    }

    /// Resolve a path, reporting whether it matched or fell back.
    pub fn resolve_route<'a>(&'a self, path: &'a str) -> Resolution<'a> {
        match self.entries.iter().find(|e| e.matcher.matches(path)) {
            Some(entry) => Resolution {
                path: entry.pattern(),
                view: &entry.view,
                outcome: Outcome::Matched,
            },
            None => Resolution {
                path: self.redirect_target.as_deref().unwrap_or(path),
                view: &self.default_view,
                outcome: Outcome::Fallback,
            },
        }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn default_view(&self) -> &ViewDescriptor {
        &self.default_view
    }

    /// Pattern the fallback redirects to, if the default was configured as a redirect.
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect_target.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drop identical duplicates (first wins) and reject conflicting ones.
fn dedup_entries(entries: Vec<RouteEntry>) -> Result<Vec<RouteEntry>, ConfigError> {
    let mut kept: Vec<RouteEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        match kept.iter().find(|k| k.pattern() == entry.pattern()) {
            Some(existing) if existing.view == entry.view => {
                tracing::debug!(pattern = %entry.pattern(), "Ignoring duplicate route");
            }
            Some(existing) => {
                return Err(ConfigError::DuplicatePattern {
                    pattern: entry.pattern().to_string(),
                    first: existing.view.clone(),
                    second: entry.view.clone(),
                });
            }
            None => kept.push(entry),
        }
    }

    Ok(kept)
}
