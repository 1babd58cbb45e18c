//! CLI command handlers
//!
//! One module per subcommand.

pub mod folders;
pub mod ignore;
pub mod new;
pub mod resolve;

/// Make a `--folder` value look like a picker label (`src` -> `/src`)
pub fn folder_label(folder: &str) -> String {
    let trimmed = folder.trim().trim_matches('/');
    format!("/{trimmed}")
}
