//! # qd - Quick to-do CLI
//!
//! A minimal, file-backed task tracker that keeps overdue and soon-due work
//! on top of the list.
//!
//! ## Key Features
//!
//! - **Urgency-aware ordering**: overdue tasks first (most overdue on top),
//!   then anything due within two days, then everything else by priority
//! - **Plain JSON storage**: one local file, safe to back up or source control
//! - **Natural due dates**: "today", "tomorrow", "in 3d", "friday", or ISO
//! - **Silent-decline core**: invalid operations (blank title, unknown id)
//!   are no-ops, never panics
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a task
//! qd add "Renew car insurance" --priority high --due friday
//!
//! # List tasks, overdue first
//! qd list
//!
//! # Toggle completion
//! qd done "Renew car insurance"
//! ```
//!
//! Data is stored locally in `~/.quickdo/tasks.json`; pass `--db` to use a
//! different file.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod dates;
pub mod fields;
pub mod store;
pub mod task;
pub mod urgency;
pub mod view;

use cli::Cli;
use cmd::*;
use store::TaskStore;

fn main() {
    let cli = Cli::parse();

    let db_path = cli.db.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let dir = PathBuf::from(home).join(".quickdo");
        if let Err(e) = std::fs::create_dir_all(&dir) {
            eprintln!("Failed to create data directory {}: {}", dir.display(), e);
            std::process::exit(1);
        }
        dir.join("tasks.json")
    });

    let mut store = TaskStore::load(&db_path);

    match cli.command {
        Commands::Add { title, desc, priority, due, status } =>
            cmd_add(&mut store, title, desc, priority, due, status),

        Commands::List { status, limit } => cmd_list(&store, status, limit),

        Commands::View { id } => cmd_view(&store, id),

        Commands::Update { id, title, desc, priority, due, status, clear_due } =>
            cmd_update(&mut store, id, title, desc, priority, due, status, clear_due),

        Commands::Done { id } => cmd_done(&mut store, id),

        Commands::Delete { id } => cmd_delete(&mut store, id),

        Commands::ClearCompleted => cmd_clear_completed(&mut store),

        Commands::Completions { shell } => cmd_completions(shell),
    }
}
