//! Opening created files in the user's editor

use quickfile_core::Opener;
use std::io;
use std::path::Path;
use std::process::Command;

/// Launches `$VISUAL` or `$EDITOR` on a file and waits for it
pub struct EditorOpener {
    command: Option<String>,
}

impl EditorOpener {
    pub fn from_env() -> Self {
        let command = ["VISUAL", "EDITOR"]
            .into_iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty());
        Self { command }
    }
}

impl Opener for EditorOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        let command = self.command.as_deref().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "neither VISUAL nor EDITOR is set")
        })?;

        // Editors are often configured with flags, e.g. `code --wait`
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty editor command"))?;

        let status = Command::new(program).args(parts).arg(path).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("{program} exited with {status}")))
        }
    }
}
