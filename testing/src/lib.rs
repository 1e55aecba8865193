//! # CinePass Testing
//!
//! Test support shared by the CinePass crates:
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Effect assertions and a helper that resolves a `Future` effect inline
//! - A deterministic [`FixedClock`]
//! - proptest strategies for clock times and run times
//!
//! ## Example
//!
//! ```ignore
//! use cinepass_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(TheaterReducer::new())
//!     .with_env(test_environment())
//!     .given_state(TheaterState::default())
//!     .when_action(TheaterAction::ClearError)
//!     .then_state(|s| assert!(s.session.error.is_none()))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use cinepass_core::environment::Clock;


pub use reducer_test::{ReducerTest, assertions, resolve_effect};

/// Deterministic environment pieces
pub mod mocks {
    use super::{Clock, DateTime, NaiveDate, Utc};

    /// Clock stuck at one instant
    ///
    /// # Example
    ///
    /// ```
    /// use cinepass_testing::mocks::FixedClock;
    /// use cinepass_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Clock stuck at `time`
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }

        /// Clock pinned to noon UTC on the given calendar day
        ///
        /// Returns `None` for an invalid date.
        #[must_use]
        pub fn on(year: i32, month: u32, day: u32) -> Option<Self> {
            let time = NaiveDate::from_ymd_opt(year, month, day)?
                .and_hms_opt(12, 0, 0)?
                .and_utc();
            Some(Self::new(time))
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// 2025-01-01 00:00:00 UTC
    const TEST_EPOCH_SECONDS: i64 = 1_735_689_600;

    /// Clock stuck at 2025-01-01 00:00 UTC (05:30 in India)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::from_timestamp(TEST_EPOCH_SECONDS, 0).unwrap_or_default())
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Any valid wall-clock time as `(hour, minute)`
    pub fn clock_time() -> impl Strategy<Value = (u32, u32)> {
        (0u32..24, 0u32..60)
    }

    /// Movie run times, including zero and multi-day values
    pub fn run_time_minutes() -> impl Strategy<Value = u32> {
        prop_oneof![Just(0u32), 1u32..400, 400u32..10_000]
    }
}

pub use mocks::{FixedClock, test_clock};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_clock_is_new_year_2025() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_fixed_clock_on_date() {
        let clock = FixedClock::on(2025, 3, 14).unwrap();
        assert_eq!(clock.now().day(), 14);
        assert!(FixedClock::on(2025, 2, 30).is_none());
    }
}
