//! Shared utilities for integration tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use spa_router::config::RouterConfig;
use spa_router::navigation::{NavigationEvent, RenderError, ViewRenderer};
use spa_router::routing::{Outcome, Resolution, RouteTable, ViewDescriptor};

/// Route table built from the reference configuration.
#[allow(dead_code)]
pub fn reference_table() -> Arc<RouteTable> {
    Arc::new(RouteTable::from_config(&RouterConfig::default()).unwrap())
}

/// View descriptor following the reference naming scheme.
#[allow(dead_code)]
pub fn view(name: &str) -> ViewDescriptor {
    ViewDescriptor::new(format!("./views/{}.html", name), format!("{}Ctrl", name), "vm")
}

/// Write `content` to a uniquely named file in the temp directory.
#[allow(dead_code)]
pub fn write_temp_config(content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("spa-router-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(&path, content).unwrap();
    path
}

/// One rendered navigation, as seen by the renderer.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct Rendered {
    pub target: String,
    pub path: String,
    pub controller: String,
    pub outcome: Outcome,
}

/// Renderer that records every call into a shared log.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct SharedRecorder {
    pub log: Arc<Mutex<Vec<Rendered>>>,
}

impl ViewRenderer for SharedRecorder {
    fn render(
        &mut self,
        event: &NavigationEvent,
        resolution: &Resolution<'_>,
    ) -> Result<(), RenderError> {
        self.log.lock().unwrap().push(Rendered {
            target: event.target.clone(),
            path: resolution.path.to_string(),
            controller: resolution.view.controller_name.clone(),
            outcome: resolution.outcome,
        });
        Ok(())
    }
}
