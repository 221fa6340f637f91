//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stderr (pretty for development, JSON for machine parsing)
//! ```
//!
//! # Design Decisions
//! - Navigation event ID is attached to every log line of a navigation
//! - Fallbacks are logged at debug, not warn: they are expected behavior

pub mod logging;

pub use logging::init_logging;
