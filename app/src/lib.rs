//! # CinePass
//!
//! Headless CinePass client. The role stores live in `cinepass-session`; this
//! crate adds what the screens compute on top of them:
//!
//! - [`schedule`]: show end times and the show form
//! - [`release`]: selectable release dates for the movie form
//! - [`draft`]: movie form contents and validation
//! - [`confirm`] and [`flows`]: confirmation-gated mutations
//! - [`table`]: paginated admin tables
//! - [`dashboard`]: theater dashboard join
//! - [`upload`]: image to data URL conversion
//! - [`format`]: display helpers
//! - [`config`] and [`bootstrap`]: configuration and client assembly

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod bootstrap;
pub mod config;
pub mod confirm;
pub mod dashboard;
pub mod draft;
pub mod flows;
pub mod format;
pub mod release;
pub mod schedule;
pub mod table;
pub mod upload;

pub use bootstrap::{BootstrapError, CinePass};
pub use config::Config;
pub use confirm::ConfirmationGate;
pub use dashboard::{Dashboard, load_dashboard};
pub use draft::MovieDraft;
pub use flows::{BlockToggle, MovieForm, Notice, feedback_for};
pub use schedule::{ClockTime, compute_end_time};
pub use table::{EntityTable, Keyed};
pub use upload::{UploadError, convert_file};
