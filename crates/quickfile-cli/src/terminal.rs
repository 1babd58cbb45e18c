//! Printing notices to the terminal

use quickfile_core::notify::Level;
use quickfile_core::{Notice, Notifier};

/// Prints informational notices to stdout and everything else to stderr
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.level() {
            Level::Info => println!("{notice}"),
            Level::Warning | Level::Error => eprintln!("{notice}"),
        }
    }
}
