//! Show-time arithmetic.
//!
//! A show's end time is its start plus the movie's run time, wrapped at
//! midnight. No timezone is involved: both ends are wall-clock `HH:MM` in
//! the theater's local time.

use cinepass_api::ClassifiedError;
use cinepass_api::types::{Movie, Screen, ShowInput};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// End of a show starting at `start_hour:start_minute` and lasting
/// `duration_minutes`, wrapped modulo 24 hours.
///
/// Out-of-range start values are folded in the same way, so the result is
/// always a valid wall-clock time.
#[must_use]
pub const fn compute_end_time(start_hour: u32, start_minute: u32, duration_minutes: u32) -> (u32, u32) {
    let start = (start_hour % 24) * 60 + start_minute % 60;
    let end = (start + duration_minutes % MINUTES_PER_DAY) % MINUTES_PER_DAY;
    (end / 60, end % 60)
}

/// Why a time string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// Not `HH:MM`
    #[error("expected HH:MM, got {0:?}")]
    Format(String),
    /// Hour or minute out of range
    #[error("{0:?} is not a valid time of day")]
    Range(String),
    /// Run time is not a number of minutes or `H:MM`
    #[error("invalid run time {0:?}")]
    RunTime(String),
}

/// Wall-clock time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Midnight
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// `hour:minute`, if both are in range
    #[must_use]
    pub const fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Hour, 0-23
    #[must_use]
    pub const fn hour(self) -> u32 {
        self.hour
    }

    /// Minute, 0-59
    #[must_use]
    pub const fn minute(self) -> u32 {
        self.minute
    }

    /// `duration_minutes` later, wrapping at midnight
    #[must_use]
    pub const fn plus_minutes(self, duration_minutes: u32) -> Self {
        let (hour, minute) = compute_end_time(self.hour, self.minute, duration_minutes);
        Self { hour, minute }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(s.to_string()))?;
        let hour = hour
            .parse()
            .map_err(|_| TimeParseError::Format(s.to_string()))?;
        let minute = minute
            .parse()
            .map_err(|_| TimeParseError::Format(s.to_string()))?;
        Self::new(hour, minute).ok_or_else(|| TimeParseError::Range(s.to_string()))
    }
}

/// Run time in minutes from the API's `run_time` string.
///
/// Accepts plain minutes (`"150"`) and `H:MM` (`"2:30"`).
///
/// # Errors
///
/// Returns [`TimeParseError::RunTime`] for anything else.
pub fn parse_run_time(raw: &str) -> Result<u32, TimeParseError> {
    let trimmed = raw.trim();
    let invalid = || TimeParseError::RunTime(raw.to_string());

    match trimmed.split_once(':') {
        Some((hours, minutes)) => {
            let hours: u32 = hours.parse().map_err(|_| invalid())?;
            let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
            if minutes >= 60 {
                return Err(invalid());
            }
            hours
                .checked_mul(60)
                .and_then(|h| h.checked_add(minutes))
                .ok_or_else(invalid)
        },
        None => trimmed.parse().map_err(|_| invalid()),
    }
}

/// Start and end of a show being edited.
///
/// `end_time` is derived; every setter recomputes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowTimeRecord {
    show_time: ClockTime,
    run_time_minutes: u32,
    end_time: ClockTime,
}

impl ShowTimeRecord {
    /// Record for a show starting at `show_time` and lasting `run_time_minutes`
    #[must_use]
    pub const fn new(show_time: ClockTime, run_time_minutes: u32) -> Self {
        Self {
            show_time,
            run_time_minutes,
            end_time: show_time.plus_minutes(run_time_minutes),
        }
    }

    /// Change the start
    pub const fn set_show_time(&mut self, show_time: ClockTime) {
        self.show_time = show_time;
        self.recompute();
    }

    /// Change the run time (a different movie was picked)
    pub const fn set_run_time(&mut self, run_time_minutes: u32) {
        self.run_time_minutes = run_time_minutes;
        self.recompute();
    }

    /// Bring `end_time` in line with start and run time
    pub const fn recompute(&mut self) {
        self.end_time = self.show_time.plus_minutes(self.run_time_minutes);
    }

    /// Start
    #[must_use]
    pub const fn show_time(&self) -> ClockTime {
        self.show_time
    }

    /// End, wrapped at midnight
    #[must_use]
    pub const fn end_time(&self) -> ClockTime {
        self.end_time
    }

    /// Run time in minutes
    #[must_use]
    pub const fn run_time_minutes(&self) -> u32 {
        self.run_time_minutes
    }
}

/// Screens able to project `movie`: those whose amenity is one of its formats
#[must_use]
pub fn screens_for_movie<'a>(screens: &'a [Screen], movie: &Movie) -> Vec<&'a Screen> {
    screens
        .iter()
        .filter(|screen| movie.format.iter().any(|format| *format == screen.amenity))
        .collect()
}

/// A show being scheduled by a theater owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowDraft {
    /// Movie to screen
    pub movie_id: String,
    /// Screen to use
    pub screen_id: String,
    /// Language of this show
    pub language: String,
    /// Format of this show
    pub format: String,
    /// Start and end
    pub times: ShowTimeRecord,
}

impl ShowDraft {
    /// Draft for `movie`, starting at midnight until a time is picked.
    ///
    /// # Errors
    ///
    /// Returns a validation error on `run_time` if the movie's run time
    /// cannot be read.
    pub fn for_movie(movie: &Movie) -> Result<Self, ClassifiedError> {
        let run_time = parse_run_time(&movie.run_time)
            .map_err(|error| ClassifiedError::validation("run_time", error.to_string()))?;
        Ok(Self {
            movie_id: movie.id.clone(),
            screen_id: String::new(),
            language: movie.languages.first().cloned().unwrap_or_default(),
            format: movie.format.first().cloned().unwrap_or_default(),
            times: ShowTimeRecord::new(ClockTime::MIDNIGHT, run_time),
        })
    }

    /// Request body, once every field is filled.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first empty field.
    pub fn to_input(&self) -> Result<ShowInput, ClassifiedError> {
        for (field, value) in [
            ("movieId", &self.movie_id),
            ("screenId", &self.screen_id),
            ("language", &self.language),
            ("format", &self.format),
        ] {
            if value.trim().is_empty() {
                return Err(ClassifiedError::validation(field, format!("{field} is required")));
            }
        }
        Ok(ShowInput {
            movie_id: self.movie_id.clone(),
            screen_id: self.screen_id.clone(),
            show_time: self.times.show_time().to_string(),
            end_time: self.times.end_time().to_string(),
            language: self.language.clone(),
            format: self.format.clone(),
        })
    }
}
