//! The uniform response wrapper

use crate::error::ClassifiedError;
use serde::{Deserialize, Serialize};

/// Outcome flag of an envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// Call succeeded
    #[serde(alias = "SUCCESS", alias = "Success")]
    Success,
    /// Call failed
    #[serde(alias = "ERROR", alias = "Error")]
    Error,
}

/// `{ status, message, data? }` wrapper around every response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Outcome flag
    pub status: ResponseStatus,
    /// Message suitable for a toast
    #[serde(default)]
    pub message: String,
    /// Payload, present on success
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Where to navigate next (login responses)
    #[serde(
        default,
        rename = "redirectURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub redirect_url: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope
    #[must_use]
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
            redirect_url: None,
        }
    }

    /// Take the payload
    ///
    /// # Errors
    ///
    /// Returns [`ClassifiedError::Generic`] when the envelope carries no data.
    pub fn into_data(self) -> Result<T, ClassifiedError> {
        self.data
            .ok_or_else(|| ClassifiedError::Generic(format!("Response had no data: {}", self.message)))
    }

    /// Replace the payload, keeping status and message
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            status: self.status,
            message: self.message,
            data: self.data.map(f),
            redirect_url: self.redirect_url,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_envelope() {
        let envelope: Envelope<Vec<String>> = serde_json::from_str(
            r#"{"status":"success","message":"ok","data":["Kochi"],"redirectURL":"/home"}"#,
        )
        .unwrap();
        assert_eq!(envelope.status, ResponseStatus::Success);
        assert_eq!(envelope.redirect_url.as_deref(), Some("/home"));
        assert_eq!(envelope.into_data().unwrap(), vec!["Kochi".to_string()]);
    }

    #[test]
    fn test_upper_case_status_and_missing_data() {
        let envelope: Envelope<u32> =
            serde_json::from_str(r#"{"status":"SUCCESS","message":"Logged out"}"#).unwrap();
        assert_eq!(envelope.status, ResponseStatus::Success);
        assert!(matches!(
            envelope.into_data(),
            Err(ClassifiedError::Generic(message)) if message.contains("Logged out")
        ));
    }

    #[test]
    fn test_map_keeps_message() {
        let envelope = Envelope::success("done", 2).map(|n| n * 10);
        assert_eq!(envelope.message, "done");
        assert_eq!(envelope.data, Some(20));
    }
}
