use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed to-do tracker.
/// Storage defaults to ~/.quickdo/tasks.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "qd", version, about = "Daily to-do tracking CLI")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
