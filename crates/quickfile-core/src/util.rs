//! Path helpers for writing inside a workspace

use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors related to path validation
#[derive(Error, Debug)]
pub enum PathError {
    #[error("Path traversal attempt detected: {0}")]
    TraversalAttempt(String),

    #[error("Path escapes workspace root: {0}")]
    EscapesRoot(String),

    #[error("Invalid path component: {0}")]
    InvalidComponent(String),
}

/// Convert `/`-separated label segments into a relative path
///
/// Empty segments are skipped, so `"/src//app/"` becomes `src/app`.
pub fn label_to_relative<'a>(segments: impl IntoIterator<Item = &'a str>) -> PathBuf {
    segments
        .into_iter()
        .flat_map(|s| s.split('/'))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Join an untrusted relative path onto `root`, refusing to leave it
///
/// # Errors
/// Returns an error if the path would escape the root directory
pub fn safe_join(root: &Path, untrusted_path: &Path) -> Result<PathBuf, PathError> {
    let normalized = normalize_path(untrusted_path)?;
    let joined = root.join(&normalized);

    verify_under_root(root, &joined)?;

    Ok(joined)
}

/// Drop `.` components and resolve `..` without climbing above the start
fn normalize_path(path: &Path) -> Result<PathBuf, PathError> {
    let mut normalized = PathBuf::new();
    let mut depth: usize = 0;

    for component in path.components() {
        match component {
            Component::Normal(c) => {
                if c.to_string_lossy().contains('\0') {
                    return Err(PathError::InvalidComponent(
                        "Null byte in path".to_string(),
                    ));
                }
                normalized.push(c);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return Err(PathError::TraversalAttempt(path.display().to_string()));
                }
                normalized.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(PathError::InvalidComponent(
                    "Absolute path not allowed".to_string(),
                ));
            }
        }
    }

    Ok(normalized)
}

/// Verify that a path is under the given root
///
/// The deepest part of `path` that already exists is resolved through any
/// symlinks and must stay inside the canonical root, so a symlinked folder
/// cannot redirect writes outside the workspace. A root that does not exist
/// yet is only checked lexically.
fn verify_under_root(root: &Path, path: &Path) -> Result<(), PathError> {
    let escapes = || PathError::EscapesRoot(path.display().to_string());

    if !path.starts_with(root) {
        return Err(escapes());
    }

    let Ok(canonical_root) = root.canonicalize() else {
        return Ok(());
    };

    let existing = path
        .ancestors()
        .find(|p| fs::symlink_metadata(p).is_ok())
        .unwrap_or(root);
    // Dangling symlinks fail to canonicalize and are refused too
    let canonical = existing.canonicalize().map_err(|_| escapes())?;

    if canonical.starts_with(&canonical_root) {
        Ok(())
    } else {
        Err(escapes())
    }
}
