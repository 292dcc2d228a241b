//! # notes-index CLI
//!
//! Scans a notes root and writes `data/notes.json`. With no arguments it
//! indexes the current directory.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `notes-index [build]` | Scan the root and write the index |
//! | `notes-index categories` | List discovered categories |

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use notes_index::{categories, config, export};

/// Build the JSON index of categorized HTML notes.
#[derive(Parser)]
#[command(
    name = "notes-index",
    about = "Build the JSON index of categorized HTML notes for a static homepage",
    version
)]
struct Cli {
    /// Root directory holding one subdirectory per category.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Path to configuration file (TOML).
    ///
    /// Defaults to `<root>/notes-index.toml`; built-in defaults are used
    /// when that file does not exist.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the root and write the index (the default).
    Build {
        /// Write here instead of the configured output path.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the JSON to stdout without writing any file.
        #[arg(long)]
        dry_run: bool,
    },

    /// List discovered categories in index order.
    Categories,
}

fn main() -> anyhow::Result<()> {
    // stderr, so `build --dry-run` output stays clean JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::resolve_config(&cli.root, cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Build {
        output: None,
        dry_run: false,
    }) {
        Commands::Build { output, dry_run } => {
            export::run_build(&cli.root, &cfg, output.as_deref(), dry_run)?;
        }
        Commands::Categories => {
            categories::list_categories(&cli.root, &cfg)?;
        }
    }

    Ok(())
}
