//! `quickfile resolve`
//!
//! Prints the plan for an input; never touches the filesystem.

use crate::commands::folder_label;
use quickfile_core::resolve;

/// Execute the resolve command
pub fn execute(folder: &str, input: &str, json: bool) -> anyhow::Result<()> {
    let base_folder = folder_label(folder);
    let Some(target) = resolve(&base_folder, input)? else {
        if json {
            println!("null");
        } else {
            println!("Nothing to create");
        }
        return Ok(());
    };

    let paths: Vec<String> = target
        .entries()
        .iter()
        .map(|entry| target.relative_path(entry))
        .collect();

    if json {
        let output = serde_json::json!({
            "base_folder": target.base_folder(),
            "sub_path": target.sub_path(),
            "entries": target.entries(),
            "paths": paths,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for (entry, path) in target.entries().iter().zip(&paths) {
            let kind = if entry.is_directory { "dir " } else { "file" };
            println!("{kind}  {path}");
        }
    }

    Ok(())
}
