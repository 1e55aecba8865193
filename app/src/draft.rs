//! Movie form draft and its validation.
//!
//! The draft is what the admin movie form edits. [`MovieDraft::validate`]
//! runs before the confirmation dialog opens; a draft that fails never
//! reaches the network.

use crate::release::{ReleaseBounds, ist_date};
use crate::schedule::parse_run_time;
use cinepass_api::ClassifiedError;
use cinepass_api::types::{Movie, MovieInput};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Release date format on the wire
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

macro_rules! catalogue_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = $label]
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in display order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire value
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Parse a wire value
            #[must_use]
            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|value| value.as_str().eq_ignore_ascii_case(label))
            }
        }
    };
}

catalogue_enum!(
    /// Movie genre
    Genre {
        Action => "action",
        Adventure => "adventure",
        Animation => "animation",
        Comedy => "comedy",
        Crime => "crime",
        Drama => "drama",
        Family => "family",
        Fantasy => "fantasy",
        Horror => "horror",
        Romance => "romance",
        SciFi => "sci-fi",
        Thriller => "thriller",
    }
);

catalogue_enum!(
    /// Audio language
    Language {
        English => "english",
        Hindi => "hindi",
        Kannada => "kannada",
        Malayalam => "malayalam",
        Tamil => "tamil",
        Telugu => "telugu",
    }
);

catalogue_enum!(
    /// Projection format; screens advertise the same values as amenities
    MovieFormat {
        TwoD => "2D",
        ThreeD => "3D",
        Imax => "IMAX",
        FourDx => "4DX",
    }
);

/// Flip membership of `value` in a multi-select
pub fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// Movie form contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieDraft {
    /// Title
    pub movie_name: String,
    /// Picked release day
    pub release_date: Option<NaiveDate>,
    /// Run time as typed (minutes or `H:MM`)
    pub run_time: String,
    /// Genres
    pub genres: BTreeSet<Genre>,
    /// Languages
    pub languages: BTreeSet<Language>,
    /// Formats
    pub format: BTreeSet<MovieFormat>,
    /// Cover image as a data URL (or the stored URL when editing)
    pub cover_photo: String,
    /// Poster image as a data URL (or the stored URL when editing)
    pub movie_poster: String,
}

impl MovieDraft {
    /// Draft prefilled from an existing movie.
    ///
    /// Unknown genre/language/format labels are dropped; the form cannot
    /// show them.
    #[must_use]
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            movie_name: movie.movie_name.clone(),
            release_date: Some(ist_date(movie.release_date)),
            run_time: movie.run_time.clone(),
            genres: movie.genres.iter().filter_map(|g| Genre::from_label(g)).collect(),
            languages: movie
                .languages
                .iter()
                .filter_map(|l| Language::from_label(l))
                .collect(),
            format: movie
                .format
                .iter()
                .filter_map(|f| MovieFormat::from_label(f))
                .collect(),
            cover_photo: movie.cover_photo.clone().unwrap_or_default(),
            movie_poster: movie.movie_poster.clone().unwrap_or_default(),
        }
    }

    /// Every field error, in form order
    #[must_use]
    pub fn errors(&self, bounds: &ReleaseBounds) -> Vec<ClassifiedError> {
        let mut errors = Vec::new();

        if self.movie_name.trim().is_empty() {
            errors.push(ClassifiedError::validation("movie_name", "Movie name is required"));
        }

        match self.release_date {
            None => errors.push(ClassifiedError::validation("release_date", "Release date is required")),
            Some(date) if !bounds.contains(date) => {
                let message = match bounds.max {
                    Some(max) => format!("Release date must be between {} and {max}", bounds.min),
                    None => format!("Release date must be on or after {}", bounds.min),
                };
                errors.push(ClassifiedError::validation("release_date", message));
            },
            Some(_) => {},
        }

        match parse_run_time(&self.run_time) {
            Ok(0) | Err(_) => errors.push(ClassifiedError::validation(
                "run_time",
                "Run time must be a positive number of minutes",
            )),
            Ok(_) => {},
        }

        if self.genres.is_empty() {
            errors.push(ClassifiedError::validation("genres", "Select at least one genre"));
        }
        if self.languages.is_empty() {
            errors.push(ClassifiedError::validation("languages", "Select at least one language"));
        }
        if self.format.is_empty() {
            errors.push(ClassifiedError::validation("format", "Select at least one format"));
        }
        if self.cover_photo.is_empty() {
            errors.push(ClassifiedError::validation("cover_photo", "Upload a cover photo"));
        }
        if self.movie_poster.is_empty() {
            errors.push(ClassifiedError::validation("movie_poster", "Upload a movie poster"));
        }

        errors
    }

    /// Request body, if the draft is valid.
    ///
    /// # Errors
    ///
    /// Returns the first [`ClassifiedError::Validation`] in form order.
    pub fn validate(&self, bounds: &ReleaseBounds) -> Result<MovieInput, ClassifiedError> {
        if let Some(error) = self.errors(bounds).into_iter().next() {
            tracing::debug!(%error, "Movie draft rejected");
            return Err(error);
        }

        Ok(MovieInput {
            movie_name: self.movie_name.trim().to_string(),
            release_date: self
                .release_date
                .map(|date| date.format(RELEASE_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            run_time: self.run_time.trim().to_string(),
            genres: self.genres.iter().map(|g| g.as_str().to_string()).collect(),
            languages: self.languages.iter().map(|l| l.as_str().to_string()).collect(),
            format: self.format.iter().map(|f| f.as_str().to_string()).collect(),
            cover_photo: self.cover_photo.clone(),
            movie_poster: self.movie_poster.clone(),
        })
    }
}
