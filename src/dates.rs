//! Due-date input parsing and relative formatting.
//!
//! The CLI accepts a small natural-language vocabulary for due dates in place
//! of a date picker, and the list view prints dates relative to today.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Parse human-readable due date input.
///
/// Supports:
/// - "today", "tomorrow"
/// - "in 3d", "in 2w"
/// - weekday names ("friday", "next friday")
/// - "YYYY-MM-DD" format
pub fn parse_due_input(s: &str) -> Option<NaiveDate> {
    parse_due_input_from(s, Local::now().date_naive())
}

fn parse_due_input_from(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(nd) = rest.strip_suffix('d') {
            if let Ok(days) = nd.trim().parse::<i64>() {
                return Some(today + Duration::days(days));
            }
        }
        if let Some(nw) = rest.strip_suffix('w') {
            if let Ok(weeks) = nw.trim().parse::<i64>() {
                return Some(today + Duration::weeks(weeks));
            }
        }
    }

    let weekdays = [
        ("monday", 0), ("tuesday", 1), ("wednesday", 2), ("thursday", 3),
        ("friday", 4), ("saturday", 5), ("sunday", 6),
        ("mon", 0), ("tue", 1), ("wed", 2), ("thu", 3),
        ("fri", 4), ("sat", 5), ("sun", 6),
    ];
    for (day_name, target_day) in weekdays {
        let current_day = today.weekday().num_days_from_monday() as i32;
        let days_ahead = (target_day + 7 - current_day) % 7;
        if s == day_name {
            // This week's occurrence; a bare weekday naming today means today.
            return Some(today + Duration::days(days_ahead as i64));
        }
        if s == format!("next {day_name}") {
            let days_to_add = if days_ahead == 0 { 7 } else { days_ahead + 7 };
            return Some(today + Duration::days(days_to_add as i64));
        }
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()
}

/// Format a due date relative to today ("today", "tomorrow", "in 3d", "2d late").
pub fn format_due_relative(due: Option<NaiveDate>, today: NaiveDate) -> String {
    match due {
        None => "-".into(),
        Some(d) => {
            let days = (d - today).num_days();
            if days == 0 {
                "today".into()
            } else if days == 1 {
                "tomorrow".into()
            } else if days > 1 {
                format!("in {days}d")
            } else {
                format!("{}d late", -days)
            }
        }
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parses_keywords_and_offsets() {
        let today = date("2024-01-10"); // a Wednesday
        assert_eq!(parse_due_input_from("today", today), Some(today));
        assert_eq!(parse_due_input_from("tomorrow", today), Some(date("2024-01-11")));
        assert_eq!(parse_due_input_from("in 3d", today), Some(date("2024-01-13")));
        assert_eq!(parse_due_input_from("in 2w", today), Some(date("2024-01-24")));
        assert_eq!(parse_due_input_from("2024-02-01", today), Some(date("2024-02-01")));
        assert_eq!(parse_due_input_from("whenever", today), None);
    }

    #[test]
    fn parses_weekdays() {
        let today = date("2024-01-10"); // Wednesday
        assert_eq!(parse_due_input_from("friday", today), Some(date("2024-01-12")));
        assert_eq!(parse_due_input_from("wednesday", today), Some(today));
        assert_eq!(parse_due_input_from("next friday", today), Some(date("2024-01-19")));
        assert_eq!(parse_due_input_from("next wednesday", today), Some(date("2024-01-17")));
    }

    #[test]
    fn formats_relative_to_today() {
        let today = date("2024-01-10");
        assert_eq!(format_due_relative(None, today), "-");
        assert_eq!(format_due_relative(Some(date("2024-01-10")), today), "today");
        assert_eq!(format_due_relative(Some(date("2024-01-11")), today), "tomorrow");
        assert_eq!(format_due_relative(Some(date("2024-01-15")), today), "in 5d");
        assert_eq!(format_due_relative(Some(date("2024-01-08")), today), "2d late");
    }
}
