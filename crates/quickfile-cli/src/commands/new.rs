//! `quickfile new`
//!
//! Picks a base folder, asks for the shorthand, and creates the entries.

use crate::commands::folder_label;
use crate::editor::EditorOpener;
use crate::picker::{pick_folder, prompt_name};
use crate::terminal::TerminalNotifier;
use quickfile_core::command::{self, CommandError};
use quickfile_core::{Notice, Settings, Writer};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

/// Execute the new command
pub fn execute(
    root: &Path,
    settings: Settings,
    input: Option<String>,
    folder: Option<String>,
    edit: bool,
) -> anyhow::Result<ExitCode> {
    let notifier = TerminalNotifier;
    let opener = EditorOpener::from_env();

    let base_folder = match folder {
        Some(folder) => folder_label(&folder),
        None => {
            let folders: Vec<String> = match command::workspace_folders(root, settings.ignore) {
                Ok(folders) => folders.collect(),
                Err(CommandError::NoWorkspace(_)) => {
                    eprintln!("{}", Notice::NoWorkspace);
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e.into()),
            };
            let stdin = io::stdin();
            match pick_folder(&folders, &mut stdin.lock(), &mut io::stdout())? {
                Some(folder) => folder,
                None => {
                    debug!("folder selection cancelled");
                    return Ok(ExitCode::SUCCESS);
                }
            }
        }
    };

    let input = match input {
        Some(input) => input,
        None => {
            let stdin = io::stdin();
            match prompt_name(&mut stdin.lock(), &mut io::stdout())? {
                Some(input) => input,
                None => {
                    debug!("name prompt cancelled");
                    return Ok(ExitCode::SUCCESS);
                }
            }
        }
    };

    let mut writer = Writer::new(root, &notifier);
    if edit {
        writer = writer.with_opener(&opener);
    }

    match command::create(&writer, &base_folder, &input) {
        Ok(summary) if summary.failed() > 0 => Ok(ExitCode::FAILURE),
        Ok(_) => Ok(ExitCode::SUCCESS),
        // Already shown to the user by the notifier
        Err(CommandError::NoWorkspace(_) | CommandError::Parse(_)) => Ok(ExitCode::FAILURE),
        Err(e) => Err(e.into()),
    }
}
