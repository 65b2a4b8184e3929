//! Path utilities: expand ~, resolve data files against a base directory.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

pub fn is_absolute(path: &str) -> bool {
    PathBuf::from(path).is_absolute()
}

/// Resolve `file` against `base` unless it is already absolute (after ~ expansion).
pub fn resolve_in(base: &Path, file: &str) -> PathBuf {
    let p = expand_tilde(file);
    if p.is_absolute() { p } else { base.join(p) }
}
