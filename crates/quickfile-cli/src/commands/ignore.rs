//! `quickfile ignore`

use quickfile_core::Settings;

/// Execute the ignore command
pub fn execute(settings: &Settings, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&settings.ignore)?);
        return Ok(());
    }

    match &settings.source {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: built-in defaults"),
    }

    for (category, patterns) in settings.ignore.by_category() {
        println!();
        println!("{category}:");
        for pattern in patterns {
            println!("  {pattern}");
        }
    }

    Ok(())
}
