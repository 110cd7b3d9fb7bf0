//! Project-scoped path resolution for restore.
//!
//! Scoped restore operates on archives whose entry paths are prefixed by
//! a top-level folder name (merged with `WalkBase::Parent`). The project
//! name is derived externally, typically from the archive's filename, and
//! passed in; it is never inferred from stream content.

/// Filters and rewrites one entry path by project-name prefix.
///
/// Returns:
/// - the remainder after `project + "/"` when the path belongs to the
///   project;
/// - the path unchanged when it contains no separator at all (loose
///   top-level files are always included);
/// - `None` otherwise (the entry belongs to a different project).
///
/// Callers must normalize backslash separators before resolving.
///
/// # Examples
///
/// ```
/// use treemerge_core::extract::resolve_scope;
///
/// assert_eq!(resolve_scope("projA/src/main.rs", "projA"), Some("src/main.rs"));
/// assert_eq!(resolve_scope("readme.txt", "projA"), Some("readme.txt"));
/// assert_eq!(resolve_scope("projB/z.txt", "projA"), None);
/// ```
#[must_use]
pub fn resolve_scope<'a>(path: &'a str, project: &str) -> Option<&'a str> {
    if let Some(rest) = path.strip_prefix(project)
        && let Some(rest) = rest.strip_prefix('/')
    {
        return Some(rest);
    }

    if !path.contains('/') {
        return Some(path);
    }

    None
}
