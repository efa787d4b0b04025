//! Deterministic display names for suites and hooks.
//!
//! Anonymous nodes are labeled from run-scoped counters recorded at creation
//! time. The counters increment on every creation, named or not, so ordinals
//! are strictly monotonic across the whole run; the ordinal only surfaces in
//! the display name when the node is anonymous. Everything here is a pure
//! function of already-recorded snapshots.

/// Resolves a suite's display name: the explicit name if one was given,
/// otherwise `describe #<ordinal>`.
pub fn resolve_suite_name(explicit: Option<&str>, ordinal: u32) -> String {
    match explicit {
        Some(name) => name.to_string(),
        None => format!("describe #{}", ordinal),
    }
}

/// Resolves a hook's display name: the explicit name if one was given,
/// otherwise `before #<ordinal>`.
pub fn resolve_hook_name(explicit: Option<&str>, ordinal: u32) -> String {
    match explicit {
        Some(name) => name.to_string(),
        None => format!("before #{}", ordinal),
    }
}

/// Builds a test's qualified name: the resolved ancestor suite names, root to
/// immediate parent, space-joined ahead of the test's own name.
pub fn qualified_name(ancestors: &[String], name: &str) -> String {
    if ancestors.is_empty() {
        return name.to_string();
    }
    let mut qualified = ancestors.join(" ");
    qualified.push(' ');
    qualified.push_str(name);
    qualified
}
