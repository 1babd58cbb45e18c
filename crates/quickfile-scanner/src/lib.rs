//! quickfile Scanner - workspace folder discovery
//!
//! This crate provides read-only, lazy enumeration of the folders under a
//! workspace root, pruning anything matched by the ignore list.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod error;
pub mod ignore;
pub mod walk;

pub use error::{ScanError, ScanResult};
pub use ignore::IgnoreList;
pub use walk::{list_folders, Folders, ROOT_LABEL};
