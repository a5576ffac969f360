//! Display ordering for task lists.
//!
//! Filters by status and sorts so that overdue work comes first (most overdue
//! on top), then anything due within the urgent window, then everything else
//! by priority. Pure over its inputs: the same tasks and the same `today`
//! always produce the same sequence.

use chrono::NaiveDate;

use crate::fields::StatusFilter;
use crate::task::Task;
use crate::urgency::classify;

/// Sort tier: 0 overdue, 1 urgent, 2 normal.
fn sort_key(task: &Task, today: NaiveDate) -> (u8, i64, u8) {
    let c = classify(task, today);
    let rank = task.priority.rank();
    if c.is_overdue {
        // Most negative days first, so the longest-overdue task tops the list.
        (0, c.days_until_due.unwrap_or(0), rank)
    } else if c.is_urgent {
        // Within the urgent window only priority differentiates.
        (1, 0, rank)
    } else {
        (2, 0, rank)
    }
}

/// Produce the display sequence: filter by status, then stable-sort by the
/// composite key. Tasks with identical keys keep their insertion order.
pub fn view(tasks: &[Task], filter: StatusFilter, today: NaiveDate) -> Vec<&Task> {
    let mut out: Vec<&Task> = tasks.iter().filter(|t| filter.matches(t.status)).collect();
    out.sort_by_key(|t| sort_key(t, today));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Priority, Status};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn task(id: &str, priority: Priority, status: Status, due: Option<&str>) -> Task {
        Task {
            id: id.into(),
            title: id.into(),
            description: None,
            priority,
            status,
            due: due.map(date),
            created_at_utc: 0,
            updated_at_utc: 0,
        }
    }

    fn ids(v: &[&Task]) -> Vec<String> {
        v.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn overdue_then_urgent_then_normal() {
        let today = date("2024-01-10");
        // Insertion order deliberately scrambled relative to the expected output.
        let tasks = vec![
            task("b", Priority::High, Status::Pending, Some("2024-01-09")), // overdue -1
            task("a", Priority::Low, Status::Pending, Some("2024-01-05")),  // overdue -5
            task("c", Priority::Medium, Status::Pending, Some("2024-01-11")), // urgent +1
            task("d", Priority::High, Status::Pending, Some("2024-01-20")), // normal +10
        ];
        let got = view(&tasks, StatusFilter::All, today);
        assert_eq!(ids(&got), ["a", "b", "c", "d"]);
    }

    #[test]
    fn overdue_ties_break_by_priority() {
        let today = date("2024-01-10");
        let tasks = vec![
            task("low", Priority::Low, Status::Pending, Some("2024-01-07")),
            task("high", Priority::High, Status::Pending, Some("2024-01-07")),
            task("med", Priority::Medium, Status::Pending, Some("2024-01-07")),
        ];
        let got = view(&tasks, StatusFilter::All, today);
        assert_eq!(ids(&got), ["high", "med", "low"]);
    }

    #[test]
    fn urgent_band_ignores_date_proximity() {
        let today = date("2024-01-10");
        // A low-priority task due today must not outrank a high-priority one
        // due in two days.
        let tasks = vec![
            task("soon-low", Priority::Low, Status::Pending, Some("2024-01-10")),
            task("later-high", Priority::High, Status::Pending, Some("2024-01-12")),
        ];
        let got = view(&tasks, StatusFilter::All, today);
        assert_eq!(ids(&got), ["later-high", "soon-low"]);
    }

    #[test]
    fn completed_sorts_as_normal_even_when_past_due() {
        let today = date("2024-01-10");
        let tasks = vec![
            task("done-late", Priority::Low, Status::Completed, Some("2024-01-01")),
            task("open-high", Priority::High, Status::Pending, None),
        ];
        let got = view(&tasks, StatusFilter::All, today);
        assert_eq!(ids(&got), ["open-high", "done-late"]);
    }

    #[test]
    fn status_filter_keeps_only_matching() {
        let today = date("2024-01-10");
        let tasks = vec![
            task("p1", Priority::Medium, Status::Pending, None),
            task("c1", Priority::Low, Status::Completed, Some("2024-01-01")),
            task("i1", Priority::High, Status::InProgress, None),
            task("c2", Priority::High, Status::Completed, None),
        ];
        let got = view(&tasks, StatusFilter::Completed, today);
        assert_eq!(ids(&got), ["c2", "c1"]);
        for t in &got {
            assert_eq!(t.status, Status::Completed);
        }
    }

    #[test]
    fn view_is_idempotent() {
        let today = date("2024-01-10");
        let tasks = vec![
            task("x", Priority::Low, Status::Pending, Some("2024-01-08")),
            task("y", Priority::High, Status::InProgress, None),
            task("z", Priority::Medium, Status::Pending, Some("2024-01-11")),
        ];
        let first = ids(&view(&tasks, StatusFilter::All, today));
        let second = ids(&view(&tasks, StatusFilter::All, today));
        assert_eq!(first, second);
    }

    #[test]
    fn equal_keys_preserve_insertion_order() {
        let today = date("2024-01-10");
        let tasks = vec![
            task("first", Priority::Medium, Status::Pending, None),
            task("second", Priority::Medium, Status::Pending, None),
            task("third", Priority::Medium, Status::Pending, None),
        ];
        let got = view(&tasks, StatusFilter::All, today);
        assert_eq!(ids(&got), ["first", "second", "third"]);
    }

    #[test]
    fn filter_does_not_mutate_tasks() {
        let today = date("2024-01-10");
        let tasks = vec![task("a", Priority::High, Status::Pending, Some("2024-01-01"))];
        let before = tasks[0].clone();
        let _ = view(&tasks, StatusFilter::Pending, today);
        assert_eq!(tasks[0].status, before.status);
        assert_eq!(tasks[0].updated_at_utc, before.updated_at_utc);
    }
}
