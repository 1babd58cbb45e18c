//! quickfile CLI - create files and folders from shorthand
//!
//! Provides `quickfile new`, `quickfile folders`, `quickfile resolve` and
//! `quickfile ignore`.

mod commands;
mod editor;
mod picker;
mod terminal;

use clap::{Parser, Subcommand};
use quickfile_core::Settings;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quickfile")]
#[command(about = "quickfile - create files and folders from shorthand")]
#[command(version)]
struct Cli {
    /// Workspace root (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    root: Option<PathBuf>,

    /// Config file (defaults to <root>/.quickfile.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create files or folders, e.g. `pages/{index,about}.tsx` or `utils/`
    New {
        /// What to create (prompted for when omitted)
        input: Option<String>,
        /// Base folder such as `/src` (picked interactively when omitted)
        #[arg(short, long)]
        folder: Option<String>,
        /// Open created files in $VISUAL or $EDITOR
        #[arg(long)]
        edit: bool,
    },
    /// List the folders that can be picked
    Folders {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show what an input would create without touching the filesystem
    Resolve {
        /// Shorthand to resolve
        input: String,
        /// Base folder
        #[arg(short, long, default_value = "/")]
        folder: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective ignore list
    Ignore {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let config = cli.config.as_deref();

    match cli.command {
        Commands::New {
            input,
            folder,
            edit,
        } => {
            let settings = Settings::load(&root, config)?;
            commands::new::execute(&root, settings, input, folder, edit)
        }
        Commands::Folders { json } => {
            commands::folders::execute(&root, Settings::load(&root, config)?, json)?;
            Ok(ExitCode::SUCCESS)
        }
        // Pure string work; never reads the config
        Commands::Resolve {
            input,
            folder,
            json,
        } => {
            commands::resolve::execute(&folder, &input, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Ignore { json } => {
            commands::ignore::execute(&Settings::load(&root, config)?, json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
