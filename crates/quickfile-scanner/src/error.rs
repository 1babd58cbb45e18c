//! Error types for the quickfile scanner

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur during scanning
#[derive(Error, Debug)]
pub enum ScanError {
    /// Workspace root is missing or not a directory
    #[error("Invalid workspace root: {}", .0.display())]
    InvalidRoot(PathBuf),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
