//! Relative calendar windows used by the date filter.
//!
//! All arithmetic is on calendar dates, so comparisons are implicitly
//! truncated to midnight.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Deserialize;

use crate::models::DateRange;

/// First day of the week for "this week" / "next week"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    fn days_since_start(&self, date: NaiveDate) -> i64 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday() as i64,
            WeekStart::Monday => date.weekday().num_days_from_monday() as i64,
        }
    }
}

/// Inclusive bounds of the week containing `today`
pub fn week_bounds(today: NaiveDate, week_start: WeekStart) -> (NaiveDate, NaiveDate) {
    let start = today - Duration::days(week_start.days_since_start(today));
    (start, start + Duration::days(6))
}

/// Upcoming Saturday (today if it is Saturday) and the Sunday after it
pub fn weekend_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let until_saturday = 6 - today.weekday().num_days_from_sunday() as i64;
    let saturday = today + Duration::days(until_saturday);
    (saturday, saturday + Duration::days(1))
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Check whether `date` falls inside `range` relative to `today`
pub fn is_date_in_range(
    date: NaiveDate,
    range: DateRange,
    today: NaiveDate,
    week_start: WeekStart,
) -> bool {
    match range {
        DateRange::All => true,
        DateRange::Today => date == today,
        DateRange::Tomorrow => date == today + Duration::days(1),
        DateRange::ThisWeek => {
            let (start, end) = week_bounds(today, week_start);
            date >= start && date <= end
        }
        DateRange::NextWeek => {
            let (start, end) = week_bounds(today, week_start);
            let next_start = start + Duration::days(7);
            let next_end = end + Duration::days(7);
            date >= next_start && date <= next_end
        }
        DateRange::ThisWeekend => {
            let (saturday, sunday) = weekend_bounds(today);
            date == saturday || date == sunday
        }
        DateRange::Weekdays => !is_weekend(date),
        DateRange::Weekends => is_weekend(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    // 2025-01-08 is a Wednesday
    const WEDNESDAY: &str = "2025-01-08";

    #[test]
    fn test_today_and_tomorrow() {
        let today = day(WEDNESDAY);
        assert!(is_date_in_range(today, DateRange::Today, today, WeekStart::Sunday));
        assert!(!is_date_in_range(day("2025-01-09"), DateRange::Today, today, WeekStart::Sunday));
        assert!(is_date_in_range(day("2025-01-09"), DateRange::Tomorrow, today, WeekStart::Sunday));
        assert!(!is_date_in_range(today, DateRange::Tomorrow, today, WeekStart::Sunday));
    }

    #[test]
    fn test_this_week_sunday_start() {
        let today = day(WEDNESDAY);
        assert_eq!(week_bounds(today, WeekStart::Sunday), (day("2025-01-05"), day("2025-01-11")));
        assert!(is_date_in_range(day("2025-01-05"), DateRange::ThisWeek, today, WeekStart::Sunday));
        assert!(is_date_in_range(day("2025-01-11"), DateRange::ThisWeek, today, WeekStart::Sunday));
        assert!(!is_date_in_range(day("2025-01-12"), DateRange::ThisWeek, today, WeekStart::Sunday));
    }

    #[test]
    fn test_this_week_monday_start() {
        let today = day(WEDNESDAY);
        assert_eq!(week_bounds(today, WeekStart::Monday), (day("2025-01-06"), day("2025-01-12")));
        assert!(is_date_in_range(day("2025-01-12"), DateRange::ThisWeek, today, WeekStart::Monday));
        assert!(!is_date_in_range(day("2025-01-05"), DateRange::ThisWeek, today, WeekStart::Monday));
    }

    #[test]
    fn test_next_week() {
        let today = day(WEDNESDAY);
        assert!(is_date_in_range(day("2025-01-12"), DateRange::NextWeek, today, WeekStart::Sunday));
        assert!(is_date_in_range(day("2025-01-18"), DateRange::NextWeek, today, WeekStart::Sunday));
        assert!(!is_date_in_range(day("2025-01-11"), DateRange::NextWeek, today, WeekStart::Sunday));
        assert!(!is_date_in_range(day("2025-01-19"), DateRange::NextWeek, today, WeekStart::Sunday));
    }

    #[test]
    fn test_this_weekend() {
        let today = day(WEDNESDAY);
        assert_eq!(weekend_bounds(today), (day("2025-01-11"), day("2025-01-12")));
        assert!(is_date_in_range(day("2025-01-11"), DateRange::ThisWeekend, today, WeekStart::Sunday));
        assert!(is_date_in_range(day("2025-01-12"), DateRange::ThisWeekend, today, WeekStart::Sunday));
        assert!(!is_date_in_range(day("2025-01-10"), DateRange::ThisWeekend, today, WeekStart::Sunday));
    }

    #[test]
    fn test_this_weekend_on_saturday_and_sunday() {
        let saturday = day("2025-01-11");
        assert_eq!(weekend_bounds(saturday), (saturday, day("2025-01-12")));

        // On a Sunday the upcoming weekend is the following one
        let sunday = day("2025-01-12");
        assert_eq!(weekend_bounds(sunday), (day("2025-01-18"), day("2025-01-19")));
    }

    #[test]
    fn test_weekdays_and_weekends() {
        let today = day(WEDNESDAY);
        assert!(is_date_in_range(day("2025-01-06"), DateRange::Weekdays, today, WeekStart::Sunday));
        assert!(!is_date_in_range(day("2025-01-04"), DateRange::Weekdays, today, WeekStart::Sunday));
        assert!(is_date_in_range(day("2025-01-04"), DateRange::Weekends, today, WeekStart::Sunday));
        assert!(is_date_in_range(day("2025-01-05"), DateRange::Weekends, today, WeekStart::Sunday));
        assert!(!is_date_in_range(day("2025-01-10"), DateRange::Weekends, today, WeekStart::Sunday));
    }

    #[test]
    fn test_all_matches_anything() {
        let today = day(WEDNESDAY);
        assert!(is_date_in_range(day("1999-12-31"), DateRange::All, today, WeekStart::Sunday));
    }
}
