//! Common utility functions shared across the codebase.

use std::path::{Path, PathBuf};

/// Canonicalize `path`, falling back to the path as given when it cannot be resolved.
pub fn resolve_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Express `path` relative to `root` with `/` separators and no leading slash.
///
/// Paths outside `root` keep their full (resolved) form, minus the leading slash.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use transcan::utils::relative_path;
///
/// let root = Path::new("/nonexistent/shop");
/// assert_eq!(
///     relative_path(Path::new("/nonexistent/shop/templates/index.html"), root),
///     "templates/index.html"
/// );
/// assert_eq!(relative_path(Path::new("/elsewhere/a.php"), root), "elsewhere/a.php");
/// ```
pub fn relative_path(path: &Path, root: &Path) -> String {
    let resolved = resolve_path(path);
    let relative = resolved.strip_prefix(root).unwrap_or(&resolved);
    relative
        .to_string_lossy()
        .replace('\\', "/")
        .trim_start_matches('/')
        .to_string()
}
