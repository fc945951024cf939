//! Shared date semantics for every outreach component.
//!
//! All arithmetic happens in UTC. Day differences count calendar days and
//! ignore the time of day; weekdays are numbered 0 (Sunday) through 6
//! (Saturday).

use chrono::{DateTime, Datelike, Timelike, Utc};

pub const WEEKDAY_LABELS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Calendar days elapsed from `earlier` to `later`; negative when `earlier`
/// lies in the future.
pub fn days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later.date_naive() - earlier.date_naive()).num_days()
}

pub fn hour_of(timestamp: DateTime<Utc>) -> u32 {
    timestamp.hour()
}

pub fn day_of_week(timestamp: DateTime<Utc>) -> u32 {
    timestamp.weekday().num_days_from_sunday()
}

pub fn weekday_label(day_of_week: u32) -> &'static str {
    WEEKDAY_LABELS
        .get(day_of_week as usize)
        .copied()
        .unwrap_or("Unknown")
}

/// Fractional days between two instants, used for response-speed bonuses.
pub fn elapsed_days(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn days_between_ignores_time_of_day() {
        let late = Utc.with_ymd_and_hms(2025, 3, 1, 23, 59, 0).unwrap();
        let early_next = Utc.with_ymd_and_hms(2025, 3, 2, 0, 1, 0).unwrap();
        assert_eq!(days_between(late, early_next), 1);
        assert_eq!(days_between(early_next, late), -1);
    }

    #[test]
    fn weekday_numbering_starts_on_sunday() {
        // 2025-03-02 is a Sunday.
        let sunday = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();
        assert_eq!(day_of_week(sunday), 0);
        assert_eq!(weekday_label(day_of_week(sunday)), "Sunday");
        assert_eq!(weekday_label(9), "Unknown");
    }

    #[test]
    fn elapsed_days_is_fractional() {
        let sent = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();
        let replied = Utc.with_ymd_and_hms(2025, 3, 3, 21, 0, 0).unwrap();
        assert!((elapsed_days(sent, replied) - 1.5).abs() < f64::EPSILON);
    }
}
