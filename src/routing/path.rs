//! Navigation path normalization.
//!
//! The resolver compares paths byte-for-byte, so raw navigation targets are
//! brought into one canonical form first: a single leading `/`, no empty
//! segments, no trailing `/` except for the root itself, and no query or
//! fragment suffix.

/// Normalize a raw navigation target.
pub fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();
    let end = trimmed.find(['?', '#']).unwrap_or(trimmed.len());

    let mut normalized = String::with_capacity(end + 1);
    for segment in trimmed[..end].split('/').filter(|s| !s.is_empty()) {
        normalized.push('/');
        normalized.push_str(segment);
    }

    if normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// Returns true if `path` is already in normalized form.
pub fn is_normalized(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    path.starts_with('/')
        && !path.ends_with('/')
        && !path.contains("//")
        && !path.contains(['?', '#'])
        && path.trim() == path
}
