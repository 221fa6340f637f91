//! Navigation events.

use serde::Serialize;
use uuid::Uuid;

/// Who initiated a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationSource {
    /// Link click, address bar, back/forward.
    User,
    /// Programmatic redirect from application code.
    Program,
}

/// A request to move to a new location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEvent {
    /// Unique ID used to correlate log lines for this navigation.
    pub id: Uuid,

    /// Raw target as delivered by the platform (not yet normalized).
    pub target: String,

    pub source: NavigationSource,
}

impl NavigationEvent {
    pub fn new(target: impl Into<String>, source: NavigationSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            target: target.into(),
            source,
        }
    }

    /// A user-initiated navigation.
    pub fn user(target: impl Into<String>) -> Self {
        Self::new(target, NavigationSource::User)
    }

    /// A programmatic navigation.
    pub fn program(target: impl Into<String>) -> Self {
        Self::new(target, NavigationSource::Program)
    }
}
