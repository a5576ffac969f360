//! The task store: the single owned, mutable collection of tasks.
//!
//! All mutation funnels through the operations here. Invalid input (blank
//! title, unknown id) makes the operation decline as a no-op rather than
//! panic or return an error; the caller decides whether that is worth a
//! message. Every successful mutation writes the full collection back to
//! disk, best-effort.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use ulid::Ulid;

use crate::task::{Task, TaskDraft, TaskPatch};
use crate::fields::Status;

/// File-backed store for the task collection.
#[derive(Debug)]
pub struct TaskStore {
    pub tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// Load the store from a JSON file. A missing, unreadable, or malformed
    /// file degrades to an empty collection.
    pub fn load(path: &Path) -> Self {
        let tasks = if path.exists() {
            let mut buf = String::new();
            match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
                Ok(_) => match serde_json::from_str(&buf) {
                    Ok(tasks) => tasks,
                    Err(e) => {
                        eprintln!("Error parsing task file, starting fresh: {e}");
                        Vec::new()
                    }
                },
                Err(e) => {
                    eprintln!("Error reading task file, starting fresh: {e}");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };
        TaskStore {
            tasks,
            path: path.to_path_buf(),
        }
    }

    /// Write the full collection back to disk. Atomic-ish via temp + rename;
    /// failures are reported on stderr and otherwise swallowed.
    fn persist(&self) {
        if let Err(e) = self.write_json() {
            eprintln!("Failed to save tasks: {e}");
        }
    }

    fn write_json(&self) -> std::io::Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(&self.tasks)
            .map_err(std::io::Error::other)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }

    /// Get a task by id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Append a new task. Declines (returns `None`) when the title is empty
    /// or whitespace-only.
    pub fn create(&mut self, draft: TaskDraft) -> Option<&Task> {
        let title = draft.title.trim();
        if title.is_empty() {
            return None;
        }
        let now = Utc::now().timestamp();
        let task = Task {
            id: Ulid::new().to_string(),
            title: title.to_string(),
            description: draft.description.filter(|d| !d.trim().is_empty()),
            priority: draft.priority,
            status: draft.status,
            due: draft.due,
            created_at_utc: now,
            updated_at_utc: now,
        };
        self.tasks.push(task);
        self.persist();
        self.tasks.last()
    }

    /// Apply a patch to an existing task and bump `updated_at_utc`. Declines
    /// (returns false, task untouched) when the id is unknown or the patch
    /// carries an empty title. `id` and `created_at_utc` never change.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> bool {
        if let Some(title) = patch.title.as_deref() {
            if title.trim().is_empty() {
                return false;
            }
        }
        let Some(t) = self.get_mut(id) else {
            return false;
        };
        if let Some(title) = patch.title {
            t.title = title.trim().to_string();
        }
        if let Some(d) = patch.description {
            t.description = if d.trim().is_empty() { None } else { Some(d) };
        }
        if let Some(p) = patch.priority {
            t.priority = p;
        }
        if let Some(s) = patch.status {
            t.status = s;
        }
        if patch.clear_due {
            t.due = None;
        }
        if let Some(d) = patch.due {
            t.due = Some(d);
        }
        t.updated_at_utc = Utc::now().timestamp();
        self.persist();
        true
    }

    /// Remove a task. Unknown id is a no-op, not an error.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Flip completion: Completed becomes Pending, anything else becomes
    /// Completed. Toggling off never restores a prior InProgress.
    pub fn toggle_completed(&mut self, id: &str) -> bool {
        let Some(t) = self.get_mut(id) else {
            return false;
        };
        t.status = if t.status == Status::Completed {
            Status::Pending
        } else {
            Status::Completed
        };
        t.updated_at_utc = Utc::now().timestamp();
        self.persist();
        true
    }

    /// Remove every completed task, returning how many were dropped.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.status != Status::Completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }
}
