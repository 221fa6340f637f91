//! Navigation session state machine.
//!
//! # States
//! - Idle: no navigation has happened yet
//! - Unresolved: a navigation event arrived, its view is not chosen yet
//! - Resolved: the view for the latest event is chosen
//!
//! # State Transitions
//! ```text
//! Idle | Resolved → Unresolved: begin(event)
//! Unresolved     → Resolved:   complete(resolution)
//! ```
//!
//! # Design Decisions
//! - One step per event, no intermediate states (no guards, no async resolvers)
//! - The resolved view is cloned into the session so it outlives the borrow
//!   of the route table

use serde::Serialize;
use uuid::Uuid;

use crate::navigation::event::NavigationEvent;
use crate::routing::{Outcome, Resolution, ViewDescriptor};

/// Current navigation state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum NavigationState {
    #[default]
    Idle,
    Unresolved {
        event: Uuid,
        path: String,
    },
    Resolved {
        event: Uuid,
        path: String,
        view: ViewDescriptor,
        outcome: Outcome,
    },
}

impl NavigationState {
    pub fn is_resolved(&self) -> bool {
        matches!(self, NavigationState::Resolved { .. })
    }

    /// View of the last resolved navigation.
    pub fn view(&self) -> Option<&ViewDescriptor> {
        match self {
            NavigationState::Resolved { view, .. } => Some(view),
            _ => None,
        }
    }

    /// Current location, if any navigation has started.
    pub fn path(&self) -> Option<&str> {
        match self {
            NavigationState::Idle => None,
            NavigationState::Unresolved { path, .. } | NavigationState::Resolved { path, .. } => {
                Some(path)
            }
        }
    }
}

/// Per-application navigation session.
#[derive(Debug, Default)]
pub struct Session {
    state: NavigationState,
    completed: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `event` arrived for the normalized `path`.
    pub fn begin(&mut self, event: &NavigationEvent, path: String) -> &NavigationState {
        if let NavigationState::Unresolved { event: pending, .. } = &self.state {
            tracing::warn!(pending = %pending, next = %event.id, "Navigation started before previous one resolved");
        }
        self.state = NavigationState::Unresolved {
            event: event.id,
            path,
        };
        &self.state
    }

    /// Record the resolution of the pending navigation.
    pub fn complete(&mut self, resolution: &Resolution<'_>) -> &NavigationState {
        let event = match &self.state {
            NavigationState::Unresolved { event, .. } => *event,
            _ => {
                tracing::warn!("Resolution completed without a pending navigation");
                Uuid::nil()
            }
        };

        self.state = NavigationState::Resolved {
            event,
            path: resolution.path.to_string(),
            view: resolution.view.clone(),
            outcome: resolution.outcome,
        };
        self.completed += 1;
        &self.state
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Number of navigations resolved so far.
    pub fn completed(&self) -> u64 {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> ViewDescriptor {
        ViewDescriptor::new("./views/home.html", "homeCtrl", "vm")
    }

    #[test]
    fn test_state_transitions() {
        let mut session = Session::new();
        assert_eq!(session.state(), &NavigationState::Idle);
        assert_eq!(session.state().path(), None);

        let event = NavigationEvent::user("/x");
        let state = session.begin(&event, "/x".into());
        assert_eq!(
            state,
            &NavigationState::Unresolved {
                event: event.id,
                path: "/x".into()
            }
        );
        assert!(!state.is_resolved());

        let view = home();
        let state = session.complete(&Resolution {
            path: "/",
            view: &view,
            outcome: Outcome::Fallback,
        });
        assert!(state.is_resolved());
        assert_eq!(state.path(), Some("/"));
        assert_eq!(state.view(), Some(&view));
        assert_eq!(session.completed(), 1);
    }

    #[test]
    fn test_complete_without_begin_uses_nil_event() {
        let mut session = Session::new();
        let view = home();

        let state = session.complete(&Resolution {
            path: "/",
            view: &view,
            outcome: Outcome::Matched,
        });

        match state {
            NavigationState::Resolved { event, .. } => assert!(event.is_nil()),
            other => panic!("unexpected state: {:?}", other),
        }
    }
}
