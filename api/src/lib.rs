//! # CinePass API Client
//!
//! Typed client for the CinePass REST API, one wrapper per role.
//!
//! Every operation issues exactly one HTTP call and resolves to the
//! [`Envelope`] on success. Failures are classified once, here, into a
//! [`ClassifiedError`]; no raw transport error leaves this crate.
//!
//! ## Example
//!
//! ```no_run
//! use cinepass_api::{ApiClient, TheaterApi, types::{LoginData, Role}};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(
//!         "http://localhost:3000",
//!         "/theaters",
//!         Role::Theater,
//!         Duration::from_secs(30),
//!     )?;
//!     let theaters = TheaterApi::new(client);
//!
//!     let envelope = theaters
//!         .login(&LoginData {
//!             email: "owner@cinepass.in".into(),
//!             password: "secret".into(),
//!         })
//!         .await?;
//!
//!     println!("{}", envelope.message);
//!     Ok(())
//! }
//! ```

pub mod admin;
pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod theater;
pub mod types;
pub mod user;

// Re-export main types for convenience
pub use admin::AdminApi;
pub use client::ApiClient;
pub use envelope::{Envelope, ResponseStatus};
pub use error::{ClassifiedError, ErrorBody, Failure, Feedback, TempMail, classify};
pub use theater::TheaterApi;
pub use user::{MovieFilter, ProfileUpdate, TicketFilter, UserApi};
