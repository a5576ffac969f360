//! Command implementations for the CLI interface.
//!
//! All the subcommand handlers, from basic CRUD operations through the
//! urgency-sorted list view. The store itself declines invalid operations
//! silently; this layer is where those outcomes turn into user messages.

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use chrono::{Local, NaiveDate, TimeZone, Utc};

use crate::cli::Cli;
use crate::dates::{format_due_relative, parse_due_input, truncate};
use crate::fields::*;
use crate::store::TaskStore;
use crate::task::{Task, TaskDraft, TaskPatch};
use crate::urgency::classify;
use crate::view::view;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Short title for the task.
        title: String,
        /// Optional longer description.
        #[arg(long)]
        desc: Option<String>,
        /// Priority: high | medium | low.
        #[arg(long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
        /// Due date: YYYY-MM-DD, "today", "tomorrow", or "in Nd".
        #[arg(long)]
        due: Option<String>,
        /// Status: pending | in-progress | completed.
        #[arg(long, value_enum, default_value_t = Status::Pending)]
        status: Status,
    },

    /// List tasks, overdue and soon-due first.
    List {
        /// Status filter.
        #[arg(long, value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,
        /// Limit number of rows printed.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// View a single task by ID or title.
    View {
        /// Task ID, ID prefix, or title.
        id: String,
    },

    /// Update fields on a task.
    Update {
        /// Task ID, ID prefix, or title.
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Due date: YYYY-MM-DD, "today", "tomorrow", or "in Nd".
        #[arg(long)]
        due: Option<String>,
        #[arg(long, value_enum)]
        status: Option<Status>,
        /// Clear due date.
        #[arg(long)]
        clear_due: bool,
    },

    /// Toggle a task's completion.
    Done {
        /// Task ID, ID prefix, or title.
        id: String,
    },

    /// Delete a task by ID or title.
    Delete {
        /// Task ID, ID prefix, or title.
        id: String,
    },

    /// Remove all completed tasks.
    ClearCompleted,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Resolve a task identifier to an id: exact id, unique id prefix, or
/// case-insensitive title match.
pub fn resolve_task_identifier(identifier: &str, store: &TaskStore) -> Result<String, String> {
    if store.get(identifier).is_some() {
        return Ok(identifier.to_string());
    }

    let prefix_matches: Vec<&Task> = store
        .tasks
        .iter()
        .filter(|t| t.id.starts_with(identifier))
        .collect();
    match prefix_matches.len() {
        1 => return Ok(prefix_matches[0].id.clone()),
        n if n > 1 => {
            return Err(format!(
                "Ambiguous ID prefix '{}' matches {} tasks. Use a longer prefix.",
                identifier, n
            ));
        }
        _ => {}
    }

    let title_matches: Vec<&Task> = store
        .tasks
        .iter()
        .filter(|t| t.title.to_lowercase() == identifier.to_lowercase())
        .collect();
    match title_matches.len() {
        0 => Err(format!("No task found matching '{}'", identifier)),
        1 => Ok(title_matches[0].id.clone()),
        _ => {
            let mut msg = format!("Multiple tasks titled '{}':\n", identifier);
            for t in title_matches {
                msg.push_str(&format!("  {}: {}\n", t.id, t.title));
            }
            msg.push_str("Please use the ID instead.");
            Err(msg)
        }
    }
}

/// Add a new task to the store.
pub fn cmd_add(
    store: &mut TaskStore,
    title: String,
    desc: Option<String>,
    priority: Priority,
    due: Option<String>,
    status: Status,
) {
    let due = match due {
        Some(ref s) => match parse_due_input(s) {
            Some(d) => Some(d),
            None => {
                eprintln!("Unrecognised due date. Use YYYY-MM-DD, 'today', 'tomorrow', or 'in Nd'.");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let draft = TaskDraft {
        title,
        description: desc,
        priority,
        status,
        due,
    };
    match store.create(draft) {
        Some(t) => println!("Added task {}", t.id),
        None => {
            eprintln!("Title cannot be empty.");
            std::process::exit(1);
        }
    }
}

/// List tasks with the urgency-aware ordering.
pub fn cmd_list(store: &TaskStore, status: StatusFilter, limit: Option<usize>) {
    // One `today` per invocation: sort order and row markers must agree even
    // across a midnight boundary.
    let today = Local::now().date_naive();
    let mut rows = view(&store.tasks, status, today);
    if let Some(n) = limit {
        rows.truncate(n);
    }
    print!("{}", render_table(&rows, today));
}

/// Render tasks as a formatted table with overdue/urgent markers.
fn render_table(tasks: &[&Task], today: NaiveDate) -> String {
    let mut out = format!(
        "{:<10} {:<11} {:<8} {:<10} {:<4} {}\n",
        "ID", "Status", "Pri", "Due", "", "Title"
    );
    for t in tasks {
        let c = classify(t, today);
        let marker = if c.is_overdue {
            "!!"
        } else if c.is_urgent {
            "!"
        } else {
            ""
        };
        out.push_str(&format!(
            "{:<10} {:<11} {:<8} {:<10} {:<4} {}\n",
            truncate(&t.id, 10),
            format_status(t.status),
            format_priority(t.priority),
            format_due_relative(t.due, today),
            marker,
            t.title
        ));
    }
    out
}

/// View detailed information about a specific task.
pub fn cmd_view(store: &TaskStore, id: String) {
    let task_id = match resolve_task_identifier(&id, store) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let Some(task) = store.get(&task_id) else {
        eprintln!("Task {} not found.", task_id);
        std::process::exit(1);
    };

    let today = Local::now().date_naive();
    let c = classify(task, today);
    println!("ID:           {}", task.id);
    println!("Title:        {}", task.title);
    println!("Status:       {}", format_status(task.status));
    println!("Priority:     {}", format_priority(task.priority));
    println!(
        "Due:          {}",
        match task.due {
            Some(d) => format!("{d} ({})", format_due_relative(Some(d), today)),
            None => "-".into(),
        }
    );
    if c.is_overdue {
        println!("Overdue:      yes");
    }
    if c.is_urgent {
        println!("Urgent:       yes");
    }
    println!(
        "Created UTC:  {}",
        Utc.timestamp_opt(task.created_at_utc, 0)
            .single()
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "-".into())
    );
    println!(
        "Updated UTC:  {}",
        Utc.timestamp_opt(task.updated_at_utc, 0)
            .single()
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "-".into())
    );
    println!(
        "Description:\n{}",
        task.description.as_deref().unwrap_or("-")
    );
}

/// Update an existing task's fields.
pub fn cmd_update(
    store: &mut TaskStore,
    id: String,
    title: Option<String>,
    desc: Option<String>,
    priority: Option<Priority>,
    due: Option<String>,
    status: Option<Status>,
    clear_due: bool,
) {
    let task_id = match resolve_task_identifier(&id, store) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let due = match due {
        Some(ref s) => match parse_due_input(s) {
            Some(d) => Some(d),
            None => {
                eprintln!("Unrecognised due date. Use YYYY-MM-DD, 'today', 'tomorrow', or 'in Nd'.");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let patch = TaskPatch {
        title,
        description: desc,
        priority,
        status,
        due,
        clear_due,
    };
    if store.update(&task_id, patch) {
        println!("Updated task {}", task_id);
    } else {
        eprintln!("Update declined (empty title or unknown task).");
        std::process::exit(1);
    }
}

/// Toggle a task between completed and pending.
pub fn cmd_done(store: &mut TaskStore, id: String) {
    let task_id = match resolve_task_identifier(&id, store) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if store.toggle_completed(&task_id) {
        let status = store
            .get(&task_id)
            .map(|t| format_status(t.status))
            .unwrap_or("-");
        println!("Task {} is now {}", task_id, status);
    } else {
        eprintln!("Task {} not found.", task_id);
        std::process::exit(1);
    }
}

/// Delete a task.
pub fn cmd_delete(store: &mut TaskStore, id: String) {
    let task_id = match resolve_task_identifier(&id, store) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if store.delete(&task_id) {
        println!("Deleted {}", task_id);
    } else {
        eprintln!("Task {} not found.", task_id);
        std::process::exit(1);
    }
}

/// Remove all completed tasks.
pub fn cmd_clear_completed(store: &mut TaskStore) {
    let removed = store.clear_completed();
    println!("Removed {} completed task(s).", removed);
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
