//! `quickfile folders`

use quickfile_core::command;
use quickfile_core::Settings;
use std::path::Path;

/// Execute the folders command
pub fn execute(root: &Path, settings: Settings, json: bool) -> anyhow::Result<()> {
    let folders = command::workspace_folders(root, settings.ignore)?;

    if json {
        let folders: Vec<String> = folders.collect();
        println!("{}", serde_json::to_string_pretty(&folders)?);
    } else {
        for folder in folders {
            println!("{folder}");
        }
    }

    Ok(())
}
