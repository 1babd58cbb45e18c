//! Hooks for reporting to the user and opening created files
//!
//! The writer and the command boundary never print or launch anything
//! themselves; front ends supply a [`Notifier`] and optionally an [`Opener`].

use std::fmt;
use std::io;
use std::path::Path;

pub const GENERIC_ERROR: &str = "Oops! Something went wrong. We're on it!";
pub const NO_WORKSPACE_ERROR: &str = "No workspace folder is open.";

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// A user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A file or directory was created (relative path)
    Created(String),
    /// Nothing was written because the target exists (relative path)
    AlreadyExists(String),
    /// Creating one entry failed
    Failed { path: String, reason: String },
    /// The typed shorthand could not be parsed
    InvalidInput(String),
    /// No usable workspace root
    NoWorkspace,
}

impl Notice {
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            Self::Created(_) => Level::Info,
            Self::AlreadyExists(_) => Level::Warning,
            Self::Failed { .. } | Self::InvalidInput(_) | Self::NoWorkspace => Level::Error,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created(path) => write!(f, "'{path}' created successfully!"),
            Self::AlreadyExists(path) => write!(f, "'{path}' already exists"),
            Self::Failed { .. } => f.write_str(GENERIC_ERROR),
            Self::InvalidInput(message) => f.write_str(message),
            Self::NoWorkspace => f.write_str(NO_WORKSPACE_ERROR),
        }
    }
}

/// Receives notices as they happen
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

impl<F: Fn(&Notice)> Notifier for F {
    fn notify(&self, notice: &Notice) {
        self(notice);
    }
}

/// Opens a freshly created file for editing
pub trait Opener {
    /// # Errors
    /// Returns an error if the editor could not be launched
    fn open(&self, path: &Path) -> io::Result<()>;
}
