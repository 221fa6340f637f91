//! View renderer seam.
//!
//! The router does not render anything. It hands each resolution to a
//! [`ViewRenderer`], which fetches the template and binds the controller
//! however the host application sees fit.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::navigation::event::NavigationEvent;
use crate::routing::Resolution;

/// Errors reported by a renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Render failed: {0}")]
    Other(String),
}

/// Receives every resolved navigation.
pub trait ViewRenderer: Send {
    fn render(
        &mut self,
        event: &NavigationEvent,
        resolution: &Resolution<'_>,
    ) -> Result<(), RenderError>;
}

#[derive(Serialize)]
struct RenderLine<'a> {
    event: &'a NavigationEvent,
    #[serde(flatten)]
    resolution: &'a Resolution<'a>,
}

/// Writes one JSON object per render, newline-delimited.
#[derive(Debug)]
pub struct JsonRenderer<W> {
    out: W,
}

impl<W: Write + Send> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ViewRenderer for JsonRenderer<W> {
    fn render(
        &mut self,
        event: &NavigationEvent,
        resolution: &Resolution<'_>,
    ) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.out, &RenderLine { event, resolution })?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{Outcome, ViewDescriptor};

    #[test]
    fn test_json_renderer_writes_one_line_per_render() {
        let mut renderer = JsonRenderer::new(Vec::new());
        let view = ViewDescriptor::new("./views/login.html", "loginCtrl", "vm");
        let event = NavigationEvent::user("/login/");

        let resolution = Resolution {
            path: "/login",
            view: &view,
            outcome: Outcome::Matched,
        };
        renderer.render(&event, &resolution).unwrap();
        renderer.render(&event, &resolution).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["event"]["target"], "/login/");
        assert_eq!(value["event"]["source"], "user");
        assert_eq!(value["path"], "/login");
        assert_eq!(value["outcome"], "matched");
        assert_eq!(value["view"]["controller_name"], "loginCtrl");
    }
}
