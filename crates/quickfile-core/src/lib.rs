//! quickfile Core - shorthand resolution and file creation
//!
//! This crate turns a typed shorthand such as `pages/{index,about}.tsx` into
//! a list of create operations, and applies them under a workspace root
//! without ever overwriting existing files.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod apply;
pub mod command;
pub mod config;
pub mod notify;
pub mod shorthand;
pub mod util;

pub use quickfile_scanner;

pub use apply::{ApplyError, ApplyOutcome, Writer};
pub use command::{CommandError, CreateSummary};
pub use config::Settings;
pub use notify::{Notice, Notifier, Opener};
pub use shorthand::{resolve, Entry, ParseError, ParsedTarget};
