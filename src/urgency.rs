//! Urgency and overdue classification.
//!
//! A task's urgency is never stored on the record; it is recomputed from the
//! due date, the status, and the current date every time it is needed, since
//! "today" moves independently of anything persisted.

use chrono::NaiveDate;

use crate::fields::Status;
use crate::task::Task;

/// Derived, display-time classification of a task relative to `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Whole calendar days from today to the due date: yesterday is -1,
    /// today is 0, tomorrow is 1. `None` when the task has no due date.
    pub days_until_due: Option<i64>,
    pub is_overdue: bool,
    pub is_urgent: bool,
}

/// How many days out still counts as urgent (inclusive).
pub const URGENT_WINDOW_DAYS: i64 = 2;

/// Classify a task against `today`.
///
/// Completed tasks are never overdue or urgent regardless of date. The two
/// flags are disjoint: overdue covers negative day counts, urgent covers
/// 0 through [`URGENT_WINDOW_DAYS`].
pub fn classify(task: &Task, today: NaiveDate) -> Classification {
    let days_until_due = task.due.map(|d| (d - today).num_days());
    let open = task.status != Status::Completed;
    let (is_overdue, is_urgent) = match days_until_due {
        Some(days) if open => (days < 0, (0..=URGENT_WINDOW_DAYS).contains(&days)),
        _ => (false, false),
    };
    Classification {
        days_until_due,
        is_overdue,
        is_urgent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn task(due: Option<&str>, status: Status) -> Task {
        Task {
            id: "01HTESTTESTTESTTESTTESTTES".into(),
            title: "t".into(),
            description: None,
            priority: Priority::Medium,
            status,
            due: due.map(date),
            created_at_utc: 0,
            updated_at_utc: 0,
        }
    }

    #[test]
    fn no_due_date_is_never_flagged() {
        for status in [Status::Pending, Status::InProgress, Status::Completed] {
            let c = classify(&task(None, status), date("2024-01-10"));
            assert_eq!(c.days_until_due, None);
            assert!(!c.is_overdue);
            assert!(!c.is_urgent);
        }
    }

    #[test]
    fn completed_is_never_overdue_or_urgent() {
        for due in ["2023-12-01", "2024-01-10", "2024-01-11", "2025-06-01"] {
            let c = classify(&task(Some(due), Status::Completed), date("2024-01-10"));
            assert!(!c.is_overdue);
            assert!(!c.is_urgent);
        }
    }

    #[test]
    fn due_today_is_urgent_not_overdue() {
        let c = classify(&task(Some("2024-01-10"), Status::Pending), date("2024-01-10"));
        assert_eq!(c.days_until_due, Some(0));
        assert!(c.is_urgent);
        assert!(!c.is_overdue);
    }

    #[test]
    fn two_days_past_is_overdue() {
        let c = classify(&task(Some("2024-01-08"), Status::Pending), date("2024-01-10"));
        assert_eq!(c.days_until_due, Some(-2));
        assert!(c.is_overdue);
        assert!(!c.is_urgent);
    }

    #[test]
    fn three_days_out_is_neither() {
        let c = classify(&task(Some("2024-01-13"), Status::Pending), date("2024-01-10"));
        assert_eq!(c.days_until_due, Some(3));
        assert!(!c.is_overdue);
        assert!(!c.is_urgent);
    }

    #[test]
    fn urgent_window_edges() {
        let today = date("2024-01-10");
        let c = classify(&task(Some("2024-01-12"), Status::Pending), today);
        assert_eq!(c.days_until_due, Some(2));
        assert!(c.is_urgent);

        let c = classify(&task(Some("2024-01-09"), Status::Pending), today);
        assert_eq!(c.days_until_due, Some(-1));
        assert!(c.is_overdue);
        assert!(!c.is_urgent);
    }

    #[test]
    fn flags_are_mutually_exclusive() {
        let today = date("2024-01-10");
        for offset in -10..=10 {
            let due = (today + chrono::Duration::days(offset)).format("%Y-%m-%d").to_string();
            let t = task(Some(due.as_str()), Status::InProgress);
            let c = classify(&t, today);
            assert!(!(c.is_overdue && c.is_urgent), "both flags set at offset {offset}");
        }
    }
}
