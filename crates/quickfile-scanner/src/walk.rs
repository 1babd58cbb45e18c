//! Recursive folder enumeration
//!
//! Folders are reported as `/`-rooted labels relative to the workspace root,
//! with the root itself reported as [`ROOT_LABEL`].

use crate::error::{ScanError, ScanResult};
use crate::ignore::IgnoreList;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Label for the workspace root
pub const ROOT_LABEL: &str = "/";

/// Lazy, depth-first iterator over the folders of a workspace
///
/// Siblings are visited in file-name order. Ignored folders are neither
/// yielded nor descended into. The iterator cannot be restarted.
pub struct Folders {
    root: PathBuf,
    walker: walkdir::IntoIter,
    ignore: IgnoreList,
}

/// Start enumerating the folders under `root`
///
/// # Errors
/// Returns an error if `root` does not exist or is not a directory
pub fn list_folders(root: &Path, ignore: IgnoreList) -> ScanResult<Folders> {
    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScanError::InvalidRoot(root.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    if !metadata.is_dir() {
        return Err(ScanError::InvalidRoot(root.to_path_buf()));
    }

    debug!(root = %root.display(), patterns = ignore.len(), "listing folders");

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    Ok(Folders {
        root: root.to_path_buf(),
        walker,
        ignore,
    })
}

impl Folders {
    fn label(&self, entry: &DirEntry) -> String {
        let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        format!("{ROOT_LABEL}{}", segments.join("/"))
    }
}

impl Iterator for Folders {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            if entry.depth() > 0 {
                let name = entry.file_name().to_string_lossy();
                if let Some(category) = self.ignore.category_for(&name) {
                    debug!(path = %entry.path().display(), category, "pruned ignored folder");
                    self.walker.skip_current_dir();
                    continue;
                }
            }

            return Some(self.label(&entry));
        }
    }
}
