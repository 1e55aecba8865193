//! Confirmation gate for mutating actions.
//!
//! A gesture that would change server state first parks its payload in a
//! [`ConfirmationGate`]. Only [`ConfirmationGate::confirm`] hands the
//! payload out, and only once.

/// Pending mutation awaiting an explicit confirm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationGate<T> {
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<T> {
    payload: T,
    prompt: String,
}

impl<T> Default for ConfirmationGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConfirmationGate<T> {
    /// Closed gate
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Open the dialog for `payload`, replacing anything pending
    pub fn request(&mut self, payload: T, prompt: impl Into<String>) {
        self.pending = Some(Pending {
            payload,
            prompt: prompt.into(),
        });
    }

    /// Whether the dialog is showing
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Dialog text
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.prompt.as_str())
    }

    /// The parked payload
    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.payload)
    }

    /// Close the dialog and discard the payload
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    /// Close the dialog and release the payload for dispatch.
    ///
    /// Returns `None` if nothing is pending, so a double confirm dispatches
    /// nothing.
    pub fn confirm(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }
}
