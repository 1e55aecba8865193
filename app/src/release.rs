//! Release-date bounds for the movie form.
//!
//! Dates are calendar days in India Standard Time, the timezone the
//! catalogue is published in.

use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Asia::Kolkata;

/// Whether the form creates or edits a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseMode {
    /// New movie
    New,
    /// Existing movie released (or to be released) at `release_date`
    Update {
        /// Current release date
        release_date: DateTime<Utc>,
    },
}

/// Range the release-date picker accepts, and its initial value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseBounds {
    /// Earliest selectable day
    pub min: NaiveDate,
    /// Latest selectable day, if capped
    pub max: Option<NaiveDate>,
    /// Preselected day
    pub default: NaiveDate,
}

impl ReleaseBounds {
    /// Whether `date` may be picked
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && self.max.is_none_or(|max| date <= max)
    }
}

/// Calendar day of `instant` in IST
#[must_use]
pub fn ist_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Kolkata).date_naive()
}

/// Bounds of the release-date picker at `now`.
///
/// - new movie: from tomorrow, preselecting tomorrow
/// - unreleased movie: from tomorrow, preselecting its release date
/// - released movie: pinned to its release date
#[must_use]
pub fn default_release_date_bounds(now: DateTime<Utc>, mode: ReleaseMode) -> ReleaseBounds {
    let today = ist_date(now);
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);

    match mode {
        ReleaseMode::New => ReleaseBounds {
            min: tomorrow,
            max: None,
            default: tomorrow,
        },
        ReleaseMode::Update { release_date } if release_date <= now => {
            let released = ist_date(release_date);
            ReleaseBounds {
                min: released,
                max: Some(released),
                default: released,
            }
        },
        ReleaseMode::Update { release_date } => ReleaseBounds {
            min: tomorrow,
            max: None,
            default: ist_date(release_date),
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cinepass_core::environment::Clock;
    use cinepass_testing::{FixedClock, test_clock};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_movie_starts_tomorrow() {
        let bounds = default_release_date_bounds(test_clock().now(), ReleaseMode::New);
        assert_eq!(bounds.min, day(2025, 1, 2));
        assert_eq!(bounds.default, day(2025, 1, 2));
        assert_eq!(bounds.max, None);
        assert!(!bounds.contains(day(2025, 1, 1)));
        assert!(bounds.contains(day(2030, 6, 1)));
    }

    #[test]
    fn test_today_follows_ist() {
        // 20:00 UTC is already the next day in India
        let now = "2025-03-10T20:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let bounds = default_release_date_bounds(now, ReleaseMode::New);
        assert_eq!(bounds.min, day(2025, 3, 12));
    }

    #[test]
    fn test_unreleased_movie_keeps_its_date() {
        let clock = FixedClock::on(2025, 1, 10).unwrap();
        let release_date = "2025-02-14T00:00:00Z".parse().unwrap();
        let bounds = default_release_date_bounds(clock.now(), ReleaseMode::Update { release_date });
        assert_eq!(bounds.min, day(2025, 1, 11));
        assert_eq!(bounds.default, day(2025, 2, 14));
        assert_eq!(bounds.max, None);
    }

    #[test]
    fn test_released_movie_is_pinned() {
        let clock = FixedClock::on(2025, 1, 10).unwrap();
        let release_date = "2024-12-25T00:00:00Z".parse().unwrap();
        let bounds = default_release_date_bounds(clock.now(), ReleaseMode::Update { release_date });
        assert_eq!(bounds.max, Some(day(2024, 12, 25)));
        assert_eq!(bounds.default, day(2024, 12, 25));
        assert!(bounds.contains(day(2024, 12, 25)));
        assert!(!bounds.contains(day(2025, 1, 11)));
    }

    #[test]
    fn test_deterministic_given_now() {
        let now = test_clock().now();
        assert_eq!(
            default_release_date_bounds(now, ReleaseMode::New),
            default_release_date_bounds(now, ReleaseMode::New)
        );
    }
}
