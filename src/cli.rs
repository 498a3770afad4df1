use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed daily task tracker CLI.
/// Storage defaults to ~/.taskday/ or paths passed via --file and
/// --categories.
#[derive(Parser)]
#[command(name = "td", version, about = "Daily task management CLI")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Path to the category list file.
    #[arg(long, global = true)]
    pub categories: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
