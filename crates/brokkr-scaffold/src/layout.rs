//! Project directory skeleton
//!
//! The scaffold root holds three fixed subdirectories: `.vscode` for editor
//! configuration, `spec` for tests, and `src` for sources. Creation is
//! idempotent so an operator can keep an existing directory and still end up
//! with the full skeleton.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::error::Result;

/// Subdirectories created under every project root
pub const SUBDIRS: [&str; 3] = [".vscode", "spec", "src"];

/// Resolve the project root for a given working directory and project name
pub fn project_root(cwd: &Utf8Path, name: &str) -> Utf8PathBuf {
    cwd.join(name)
}

/// Create the project root and its fixed subdirectories
///
/// Existing directories and files are left untouched; missing pieces are
/// created. Safe to call repeatedly.
pub fn ensure_layout(root: &Utf8Path) -> Result<()> {
    debug!("Ensuring project layout at: {}", root);

    fs::create_dir_all(root)?;
    for subdir in SUBDIRS {
        fs::create_dir_all(root.join(subdir))?;
    }

    Ok(())
}

/// Delete the project root recursively and recreate the skeleton
pub fn reset_layout(root: &Utf8Path) -> Result<()> {
    if root.exists() {
        debug!("Removing existing project root: {}", root);
        fs::remove_dir_all(root)?;
    }
    ensure_layout(root)
}
