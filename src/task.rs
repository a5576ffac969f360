//! Task data structure.
//!
//! Defines the core `Task` struct representing a single unit of work with
//! priority, workflow status, and an optional calendar due date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{Priority, Status};

/// A single unit of work.
///
/// `id` and `created_at_utc` are fixed at creation; every other field is
/// mutable through the store. Urgency and overdue flags are never stored
/// here, they are derived from `due` and the current date at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub due: Option<NaiveDate>,
    pub created_at_utc: i64,
    pub updated_at_utc: i64,
}

/// Field values for creating a new task.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub due: Option<NaiveDate>,
}

/// A partial update to an existing task. `None` leaves the field untouched;
/// `clear_due` removes the due date.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub due: Option<NaiveDate>,
    pub clear_due: bool,
}
