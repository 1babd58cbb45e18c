//! The "create new file/folder" command, end to end
//!
//! Every failure is turned into a [`Notice`] before it is returned, so a
//! front end only has to decide on an exit status.

use crate::apply::{ApplyOutcome, EntryReport, Writer};
use crate::notify::Notice;
use crate::shorthand::{resolve, ParseError};
use quickfile_scanner::{list_folders, Folders, IgnoreList, ScanError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that abort a command
#[derive(Debug, Error)]
pub enum CommandError {
    /// Workspace root is missing or not a directory
    #[error("No workspace folder is open: {}", .0.display())]
    NoWorkspace(PathBuf),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Scanner error: {0}")]
    Scan(ScanError),
}

impl From<ScanError> for CommandError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::InvalidRoot(path) => Self::NoWorkspace(path),
            other => Self::Scan(other),
        }
    }
}

impl CommandError {
    /// Get the error code for CLI responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoWorkspace(_) => "NO_WORKSPACE",
            Self::Parse(_) => "INVALID_INPUT",
            Self::Scan(_) => "SCANNER_ERROR",
        }
    }
}

/// Per-entry results of one create command
#[derive(Debug, Default)]
pub struct CreateSummary {
    pub reports: Vec<EntryReport>,
}

impl CreateSummary {
    /// True when the input was blank and nothing was attempted
    pub fn is_noop(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn created(&self) -> usize {
        self.count(|r| matches!(r.result, Ok(ApplyOutcome::Created(_))))
    }

    pub fn existing(&self) -> usize {
        self.count(|r| matches!(r.result, Ok(ApplyOutcome::AlreadyExists(_))))
    }

    pub fn failed(&self) -> usize {
        self.count(|r| r.result.is_err())
    }

    fn count(&self, pred: impl Fn(&EntryReport) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(r)).count()
    }
}

/// Check that `root` can serve as a workspace
///
/// # Errors
/// Returns [`CommandError::NoWorkspace`] if it is missing or not a directory
pub fn ensure_workspace(root: &Path) -> Result<(), CommandError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(CommandError::NoWorkspace(root.to_path_buf()))
    }
}

/// Enumerate the folders a user can pick from
///
/// # Errors
/// Returns [`CommandError::NoWorkspace`] if the root is unusable
pub fn workspace_folders(root: &Path, ignore: IgnoreList) -> Result<Folders, CommandError> {
    Ok(list_folders(root, ignore)?)
}

/// Resolve `raw_input` against `base_folder` and create every entry
///
/// Blank input is a no-op. A parse error aborts before anything is written.
///
/// # Errors
/// Returns an error if there is no workspace or the input cannot be parsed.
/// Failures of individual entries are reported in the summary instead.
pub fn create(
    writer: &Writer<'_>,
    base_folder: &str,
    raw_input: &str,
) -> Result<CreateSummary, CommandError> {
    if let Err(e) = ensure_workspace(writer.root()) {
        writer.notify(&Notice::NoWorkspace);
        return Err(e);
    }

    let target = match resolve(base_folder, raw_input) {
        Ok(Some(target)) => target,
        Ok(None) => return Ok(CreateSummary::default()),
        Err(e) => {
            writer.notify(&Notice::InvalidInput(e.to_string()));
            return Err(e.into());
        }
    };

    info!(
        base = base_folder,
        entries = target.entries().len(),
        "creating entries"
    );

    Ok(CreateSummary {
        reports: writer.apply_all(&target),
    })
}
