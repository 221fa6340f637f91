//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target (raw string)
//!     → path.rs (normalize)
//!     → router.rs (ordered lookup)
//!     → matcher.rs (evaluate pattern)
//!     → Return: matched view or the default view
//!
//! Route Compilation (at startup):
//!     RouterConfig.routes
//!     → Reject conflicting duplicates
//!     → Resolve fallback (explicit view or redirect target)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact matching only
//! - Deterministic: same input always resolves to the same view
//! - First match wins (registration order)
//! - Resolution is total: there is no "no match" result

pub mod matcher;
pub mod path;
pub mod router;

pub use matcher::{ExactPath, PathMatcher};
pub use path::{is_normalized, normalize_path};
pub use router::{ConfigError, Outcome, Resolution, RouteEntry, RouteTable, ViewDescriptor};
