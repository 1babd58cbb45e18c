//! Apply resolved entries to the filesystem

pub mod write;

pub use write::{ApplyError, ApplyOutcome, EntryReport, Writer};
