//! Route pattern matching.
//!
//! # Responsibilities
//! - Compare a normalized navigation path against a route pattern
//!
//! # Design Decisions
//! - Exact, case-sensitive, byte-for-byte comparison
//! - No wildcards or path parameters
//! - Matching sits behind a trait so richer patterns can be added later
//!   without touching the resolver

/// Trait for matching navigation paths against a route pattern.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this pattern.
    fn matches(&self, path: &str) -> bool;

    /// The pattern as registered.
    fn pattern(&self) -> &str;
}

/// Matches a path that is exactly equal to the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactPath {
    pattern: String,
}

impl ExactPath {
    /// Create a new exact-match pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl PathMatcher for ExactPath {
    fn matches(&self, path: &str) -> bool {
        self.pattern == path
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }
}
