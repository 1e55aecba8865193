//! Display helpers for tables, show cards and ticket summaries.

use crate::schedule::ClockTime;
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Asia::Kolkata;

/// Rows per page in every paginated admin table
pub const PAGE_SIZE: usize = 10;

/// 1-based row number of `index` on `page` (1-based)
#[must_use]
pub const fn serial_number(page: u32, index: usize) -> usize {
    (page.saturating_sub(1) as usize) * PAGE_SIZE + index + 1
}

/// `14:05` as `2:05 PM`
#[must_use]
pub fn to_12_hour(time: ClockTime) -> String {
    let suffix = if time.hour() < 12 { "AM" } else { "PM" };
    let hour = match time.hour() % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{:02} {suffix}", time.minute())
}

/// `150` minutes as `2h 30m`
#[must_use]
pub fn format_run_time(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Date in IST, e.g. `28 Mar 2024`
#[must_use]
pub fn ist_date_label(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Kolkata).format("%-d %b %Y").to_string()
}

/// Date and time in IST, e.g. `28 Mar 2024, 6:30 PM`
#[must_use]
pub fn ist_datetime_label(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Kolkata)
        .format("%-d %b %Y, %-I:%M %p")
        .to_string()
}

/// Short weekday name in IST (`Sun`)
#[must_use]
pub fn day_name(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Kolkata).weekday().to_string()
}

/// Short month name in IST (`Jan`)
#[must_use]
pub fn month_name(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Kolkata).format("%b").to_string()
}

/// Ticket heading, e.g. `Sun, 5 Jan`
#[must_use]
pub fn ticket_date_label(instant: DateTime<Utc>) -> String {
    let local = instant.with_timezone(&Kolkata);
    format!("{}, {} {}", day_name(instant), local.day(), month_name(instant))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        rfc3339.parse().unwrap()
    }

    #[test]
    fn test_serial_number() {
        assert_eq!(serial_number(1, 0), 1);
        assert_eq!(serial_number(3, 4), 25);
        assert_eq!(serial_number(0, 0), 1);
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert_eq!(to_12_hour(ClockTime::new(0, 30).unwrap()), "12:30 AM");
        assert_eq!(to_12_hour(ClockTime::new(12, 0).unwrap()), "12:00 PM");
        assert_eq!(to_12_hour(ClockTime::new(14, 5).unwrap()), "2:05 PM");
        assert_eq!(to_12_hour(ClockTime::new(9, 45).unwrap()), "9:45 AM");
    }

    #[test]
    fn test_run_time_label() {
        assert_eq!(format_run_time(150), "2h 30m");
        assert_eq!(format_run_time(45), "45m");
        assert_eq!(format_run_time(120), "2h 0m");
    }

    #[test]
    fn test_ist_labels() {
        let instant = at("2024-03-28T13:00:00Z");
        assert_eq!(ist_date_label(instant), "28 Mar 2024");
        assert_eq!(ist_datetime_label(instant), "28 Mar 2024, 6:30 PM");
    }

    #[test]
    fn test_ticket_label_crosses_midnight_in_ist() {
        // Saturday 4 Jan 20:00 UTC is Sunday 5 Jan in India
        let instant = at("2025-01-04T20:00:00Z");
        assert_eq!(day_name(instant), "Sun");
        assert_eq!(month_name(instant), "Jan");
        assert_eq!(ticket_date_label(instant), "Sun, 5 Jan");
    }
}
