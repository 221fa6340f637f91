//! Navigation event loop.
//!
//! # Responsibilities
//! - Normalize each navigation target
//! - Resolve it against the shared route table
//! - Advance the session and hand the result to the renderer
//!
//! # Design Decisions
//! - One consumer: events are handled strictly in arrival order, event n is
//!   fully resolved and rendered before event n+1 is read
//! - Resolution is synchronous; the loop only awaits between events
//! - Renderer failures are logged, the navigation still counts as resolved

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use crate::navigation::event::NavigationEvent;
use crate::navigation::renderer::ViewRenderer;
use crate::navigation::session::{NavigationState, Session};
use crate::routing::{normalize_path, Outcome, RouteTable};

/// Default capacity of the navigation event channel.
pub const DEFAULT_QUEUE_SIZE: usize = 64;

/// Create a bounded channel for navigation events.
pub fn channel() -> (mpsc::Sender<NavigationEvent>, mpsc::Receiver<NavigationEvent>) {
    mpsc::channel(DEFAULT_QUEUE_SIZE)
}

/// Drives a navigation session against a route table.
pub struct Navigator<R> {
    table: Arc<RouteTable>,
    renderer: R,
    session: Session,
}

impl<R: ViewRenderer> Navigator<R> {
    pub fn new(table: Arc<RouteTable>, renderer: R) -> Self {
        Self {
            table,
            renderer,
            session: Session::new(),
        }
    }

    /// Handle one navigation event synchronously.
    pub fn navigate(&mut self, event: NavigationEvent) -> &NavigationState {
        let path = normalize_path(&event.target);
        self.session.begin(&event, path.clone());

        let resolution = self.table.resolve_route(&path);
        match resolution.outcome {
            Outcome::Matched => tracing::debug!(
                event_id = %event.id,
                target = %event.target,
                route = %resolution.path,
                "Route matched"
            ),
            Outcome::Fallback => tracing::debug!(
                event_id = %event.id,
                target = %event.target,
                redirect = %resolution.path,
                "No route matched, using fallback"
            ),
        }

        if let Err(e) = self.renderer.render(&event, &resolution) {
            tracing::error!(event_id = %event.id, error = %e, "Failed to render view");
        }

        self.session.complete(&resolution)
    }

    /// Process events until the channel closes or shutdown fires.
    ///
    /// Returns the navigator so callers can inspect the final session.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<NavigationEvent>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Self {
        tracing::info!(routes = self.table.len(), "Navigator started");

        // A dropped coordinator is not a shutdown request.
        let mut shutdown_closed = false;

        loop {
            tokio::select! {
                biased;
                signal = shutdown.recv(), if !shutdown_closed => match signal {
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::debug!("Shutdown coordinator dropped, draining until channel closes");
                        shutdown_closed = true;
                    }
                    Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                        tracing::info!("Shutdown received, stopping navigator");
                        break;
                    }
                },
                event = events.recv() => match event {
                    Some(event) => {
                        self.navigate(event);
                    }
                    None => {
                        tracing::debug!("Navigation channel closed");
                        break;
                    }
                },
            }
        }

        tracing::info!(navigations = self.session.completed(), "Navigator stopped");
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
