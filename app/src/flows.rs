//! Confirmation-gated mutations.
//!
//! Each flow parks its request in a [`ConfirmationGate`], dispatches it
//! through the role store only on confirm, and patches the local table when
//! the server agrees. A failed dispatch leaves the table as it was and hands
//! back the UI feedback for the classified error.

use crate::confirm::ConfirmationGate;
use crate::draft::MovieDraft;
use crate::release::{ReleaseMode, default_release_date_bounds};
use crate::table::EntityTable;
use chrono::{DateTime, Utc};
use cinepass_api::types::{EntityKind, Movie, MovieInput, MovieType, Owner};
use cinepass_api::{ClassifiedError, Feedback};
use cinepass_session::actions::{AdminRequest, AdminResponse};
use cinepass_session::providers::AdminGateway;
use cinepass_session::{AdminStore, DispatchError, dispatch};
use std::time::Duration;

/// What the UI shows once a confirmed mutation settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Server accepted; transient status message
    Success(String),
    /// Server or store refused; where to show it
    Failure(Feedback),
}

/// UI feedback for a failed dispatch
///
/// Store-level failures (timeout, shutdown) never reached the server and
/// are shown as a page toast.
#[must_use]
pub fn feedback_for(error: &DispatchError) -> Feedback {
    match error {
        DispatchError::Rejected(classified) => classified.feedback(),
        DispatchError::Store(store) => Feedback::Toast(store.to_string()),
    }
}

fn record(flow: &'static str, notice: &Notice) {
    let outcome = match notice {
        Notice::Success(_) => "success",
        Notice::Failure(_) => "failure",
    };
    metrics::counter!("flow.confirmations.total", "flow" => flow, "outcome" => outcome).increment(1);
}

// ═══════════════════════════════════════════════════════════════════════
// Block / unblock
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
struct BlockTarget {
    entity_id: String,
    blocked: bool,
}

/// Block or unblock a user or theater owner from an admin table
#[derive(Debug, Clone)]
pub struct BlockToggle {
    kind: EntityKind,
    gate: ConfirmationGate<BlockTarget>,
}

impl BlockToggle {
    /// Flow for the `kind` table
    #[must_use]
    pub const fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            gate: ConfirmationGate::new(),
        }
    }

    /// The row's block button was pressed. Opens the dialog; sends nothing.
    pub fn request(&mut self, owner: &Owner) {
        let verb = if owner.is_blocked { "unblock" } else { "block" };
        self.gate.request(
            BlockTarget {
                entity_id: owner.id.clone(),
                blocked: !owner.is_blocked,
            },
            format!("Are you sure you want to {verb} {}?", owner.name),
        );
    }

    /// Dialog state
    #[must_use]
    pub const fn gate_is_open(&self) -> bool {
        self.gate.is_open()
    }

    /// Dialog text
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.gate.prompt()
    }

    /// Dialog dismissed
    pub fn cancel(&mut self) {
        self.gate.cancel();
    }

    /// Dialog confirmed: send the change once and patch `table` on success.
    ///
    /// Returns `None` if no dialog was open.
    pub async fn confirm<G>(
        &mut self,
        store: &AdminStore<G>,
        table: &mut EntityTable<Owner>,
        timeout: Duration,
    ) -> Option<Notice>
    where
        G: AdminGateway + Clone + 'static,
    {
        let target = self.gate.confirm()?;
        let request = AdminRequest::SetBlocked {
            kind: self.kind,
            entity_id: target.entity_id.clone(),
            blocked: target.blocked,
        };

        let notice = match dispatch(store, request, timeout).await {
            Ok(AdminResponse::SetBlocked(envelope)) => {
                let entity_id = envelope
                    .data
                    .as_ref()
                    .map_or(target.entity_id.as_str(), |toggled| toggled.id.as_str());
                table.toggle_blocked(entity_id);
                Notice::Success(envelope.message.clone())
            },
            Ok(other) => {
                tracing::warn!(op = ?other.op(), "Unexpected response to block toggle");
                Notice::Failure(Feedback::Toast("Unexpected response".to_string()))
            },
            Err(error) => Notice::Failure(feedback_for(&error)),
        };

        record("block", &notice);
        Some(notice)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Movie form
// ═══════════════════════════════════════════════════════════════════════

/// Whether the form creates or replaces a movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// New movie
    Add,
    /// Existing movie
    Update {
        /// Movie id
        movie_id: String,
    },
}

/// Admin movie form: draft, validation and the confirm step
#[derive(Debug, Clone)]
pub struct MovieForm {
    action: FormAction,
    movie_type: MovieType,
    mode: ReleaseMode,
    /// Form contents
    pub draft: MovieDraft,
    gate: ConfirmationGate<MovieInput>,
}

impl MovieForm {
    /// Empty form for a new movie
    #[must_use]
    pub fn add(movie_type: MovieType) -> Self {
        Self {
            action: FormAction::Add,
            movie_type,
            mode: ReleaseMode::New,
            draft: MovieDraft::default(),
            gate: ConfirmationGate::new(),
        }
    }

    /// Form prefilled with `movie`
    #[must_use]
    pub fn edit(movie_type: MovieType, movie: &Movie) -> Self {
        Self {
            action: FormAction::Update {
                movie_id: movie.id.clone(),
            },
            movie_type,
            mode: ReleaseMode::Update {
                release_date: movie.release_date,
            },
            draft: MovieDraft::from_movie(movie),
            gate: ConfirmationGate::new(),
        }
    }

    /// Add or update
    #[must_use]
    pub const fn action(&self) -> &FormAction {
        &self.action
    }

    /// Dialog state
    #[must_use]
    pub const fn gate_is_open(&self) -> bool {
        self.gate.is_open()
    }

    /// Submit pressed: validate, then open the confirmation dialog.
    ///
    /// # Errors
    ///
    /// Returns the first field error. The dialog stays closed and nothing is
    /// sent.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<(), ClassifiedError> {
        let bounds = default_release_date_bounds(now, self.mode);
        let input = self.draft.validate(&bounds)?;
        let prompt = match self.action {
            FormAction::Add => format!("Add {}?", input.movie_name),
            FormAction::Update { .. } => format!("Save changes to {}?", input.movie_name),
        };
        self.gate.request(input, prompt);
        Ok(())
    }

    /// Dialog dismissed; the draft is kept for further editing
    pub fn cancel(&mut self) {
        self.gate.cancel();
    }

    /// Dialog confirmed: send the movie once and put the saved row in
    /// `table` on success.
    ///
    /// Returns `None` if no dialog was open.
    pub async fn confirm<G>(
        &mut self,
        store: &AdminStore<G>,
        table: &mut EntityTable<Movie>,
        timeout: Duration,
    ) -> Option<Notice>
    where
        G: AdminGateway + Clone + 'static,
    {
        let movie = self.gate.confirm()?;
        let movie_type = self.movie_type;
        let request = match &self.action {
            FormAction::Add => AdminRequest::AddMovie { movie_type, movie },
            FormAction::Update { movie_id } => AdminRequest::UpdateMovie {
                movie_type,
                movie_id: movie_id.clone(),
                movie,
            },
        };

        let notice = match dispatch(store, request, timeout).await {
            Ok(AdminResponse::AddMovie(envelope) | AdminResponse::UpdateMovie(envelope)) => {
                let message = envelope.message.clone();
                if let Some(saved) = envelope.data {
                    table.upsert(saved);
                }
                Notice::Success(message)
            },
            Ok(other) => {
                tracing::warn!(op = ?other.op(), "Unexpected response to movie form");
                Notice::Failure(Feedback::Toast("Unexpected response".to_string()))
            },
            Err(error) => Notice::Failure(feedback_for(&error)),
        };

        record("movie_form", &notice);
        Some(notice)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cinepass_api::ErrorBody;
    use cinepass_core::environment::Clock;
    use cinepass_runtime::StoreError;

    #[test]
    fn test_feedback_for_store_error_is_toast() {
        let feedback = feedback_for(&DispatchError::Store(StoreError::Timeout));
        assert!(matches!(feedback, Feedback::Toast(_)));
    }

    #[test]
    fn test_feedback_for_field_error() {
        let error = DispatchError::Rejected(ClassifiedError::Http {
            status: 409,
            body: ErrorBody {
                error: Some("movie_name".to_string()),
                ..ErrorBody::message("Movie already exists")
            },
        });
        assert_eq!(
            feedback_for(&error),
            Feedback::Field {
                field: "movie_name".to_string(),
                message: "Movie already exists".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_draft_keeps_gate_closed() {
        let mut form = MovieForm::add(MovieType::Theater);
        let error = form.submit(cinepass_testing::test_clock().now()).unwrap_err();
        assert!(matches!(error, ClassifiedError::Validation { field, .. } if field == "movie_name"));
        assert!(!form.gate_is_open());
    }
}
