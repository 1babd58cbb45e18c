//! File and directory creation

use crate::notify::{Notice, Notifier, Opener};
use crate::shorthand::{join_label, Entry, ParsedTarget};
use crate::util::{label_to_relative, safe_join, PathError};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while creating one entry
#[derive(Error, Debug)]
pub enum ApplyError {
    #[error("IO error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Path security error: {0}")]
    PathSecurity(#[from] PathError),
}

/// What happened to one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Created(PathBuf),
    /// The target was left untouched
    AlreadyExists(PathBuf),
}

/// Result of one entry of a batch
#[derive(Debug)]
pub struct EntryReport {
    /// Workspace-relative path as shown to the user
    pub label: String,
    pub result: Result<ApplyOutcome, ApplyError>,
}

/// Creates files and directories under a workspace root
pub struct Writer<'a> {
    root: PathBuf,
    notifier: &'a dyn Notifier,
    opener: Option<&'a dyn Opener>,
}

impl<'a> Writer<'a> {
    pub fn new(root: impl Into<PathBuf>, notifier: &'a dyn Notifier) -> Self {
        Self {
            root: root.into(),
            notifier,
            opener: None,
        }
    }

    /// Open each created file with `opener`
    #[must_use]
    pub fn with_opener(mut self, opener: &'a dyn Opener) -> Self {
        self.opener = Some(opener);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn notify(&self, notice: &Notice) {
        self.notifier.notify(notice);
    }

    /// Apply every entry of `target` in order
    ///
    /// Entries are independent: a failure is reported and the remaining
    /// entries are still attempted. Nothing already created is undone.
    pub fn apply_all(&self, target: &ParsedTarget) -> Vec<EntryReport> {
        target
            .entries()
            .iter()
            .map(|entry| EntryReport {
                label: target.relative_path(entry),
                result: self.apply(target.base_folder(), target.sub_path(), entry),
            })
            .collect()
    }

    /// Create one entry and notify about the outcome
    ///
    /// # Errors
    /// Returns an error if the path escapes the root or the filesystem
    /// refuses the operation. An existing target is not an error.
    pub fn apply(
        &self,
        base_folder: &str,
        sub_path: &[String],
        entry: &Entry,
    ) -> Result<ApplyOutcome, ApplyError> {
        let label = join_label(base_folder, sub_path, &entry.name);
        let result = self.create(base_folder, sub_path, entry);

        let notice = match &result {
            Ok(ApplyOutcome::Created(path)) => {
                debug!(path = %path.display(), "created");
                Notice::Created(label)
            }
            Ok(ApplyOutcome::AlreadyExists(path)) => {
                debug!(path = %path.display(), "already exists");
                Notice::AlreadyExists(label)
            }
            Err(e) => {
                warn!("Failed to create {label}: {e}");
                Notice::Failed {
                    path: label,
                    reason: e.to_string(),
                }
            }
        };
        self.notifier.notify(&notice);

        if let (Ok(ApplyOutcome::Created(path)), Some(opener)) = (&result, self.opener) {
            if !entry.is_directory {
                if let Err(e) = opener.open(path) {
                    warn!("Failed to open {}: {e}", path.display());
                }
            }
        }

        result
    }

    fn create(
        &self,
        base_folder: &str,
        sub_path: &[String],
        entry: &Entry,
    ) -> Result<ApplyOutcome, ApplyError> {
        let relative = label_to_relative(
            std::iter::once(base_folder)
                .chain(sub_path.iter().map(String::as_str))
                .chain(std::iter::once(entry.name.as_str())),
        );
        let full_path = safe_join(&self.root, &relative)?;

        if entry.is_directory {
            create_directory(&full_path)
        } else {
            create_file(&full_path)
        }
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ApplyError + '_ {
    move |source| ApplyError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn create_directory(path: &Path) -> Result<ApplyOutcome, ApplyError> {
    if fs::symlink_metadata(path).is_ok() {
        return Ok(ApplyOutcome::AlreadyExists(path.to_path_buf()));
    }

    fs::create_dir_all(path).map_err(io_error(path))?;
    Ok(ApplyOutcome::Created(path.to_path_buf()))
}

fn create_file(path: &Path) -> Result<ApplyOutcome, ApplyError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    // create_new refuses to touch anything already at the path
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(ApplyOutcome::Created(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            Ok(ApplyOutcome::AlreadyExists(path.to_path_buf()))
        }
        Err(e) => Err(io_error(path)(e)),
    }
}
