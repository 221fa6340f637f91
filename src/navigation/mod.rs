//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Platform navigation (link, back/forward, redirect)
//!     → input.rs (one target per line)
//!     → event.rs (NavigationEvent with ID)
//!     → navigator.rs (in-order loop)
//!         → routing (normalize + resolve)
//!         → session.rs (Unresolved → Resolved)
//!         → renderer.rs (hand off to the view layer)
//! ```

pub mod event;
pub mod input;
pub mod navigator;
pub mod renderer;
pub mod session;

pub use event::{NavigationEvent, NavigationSource};
pub use input::forward_lines;
pub use navigator::{channel, Navigator};
pub use renderer::{JsonRenderer, RenderError, ViewRenderer};
pub use session::{NavigationState, Session};
