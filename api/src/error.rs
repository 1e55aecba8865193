//! Error classification for remote calls and uploads
//!
//! Every failure the client sees is turned into exactly one
//! [`ClassifiedError`] at the call boundary. Reducers re-inspect it only for
//! session failures (401/403) and the OTP challenge; forms ask it for
//! [`Feedback`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Structured error body returned by the API
///
/// `error` names a form field (`"email"`, `"movie_name"`) or a kind (`"otp"`).
/// Anything else the server adds lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Field name or error kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human readable message
    #[serde(default)]
    pub message: String,
    /// Remaining members of the body
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Email the server wants an OTP verified for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempMail {
    /// Address the OTP was sent to
    pub email: String,
}

impl ErrorBody {
    /// Body with only a message
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// The `tempMail` member, if the server sent one
    #[must_use]
    pub fn temp_mail(&self) -> Option<TempMail> {
        self.extra
            .get("tempMail")
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }
}

/// A failure after classification
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifiedError {
    /// Client-side form validation failed for one field
    #[error("{field}: {message}")]
    Validation {
        /// Offending field
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// The server answered with a non-success status
    #[error("HTTP {status}: {}", body.message)]
    Http {
        /// Status code
        status: u16,
        /// Decoded error body
        body: ErrorBody,
    },

    /// File conversion failed (size, type, read)
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Anything else, with no field attribution
    #[error("{0}")]
    Generic(String),
}

/// Raw failure, before classification
#[derive(Debug, Clone, Copy)]
pub enum Failure<'a> {
    /// Non-success HTTP response with its raw body
    Response {
        /// Status code
        status: u16,
        /// Raw response text
        body: &'a str,
    },
    /// Raised by the image conversion path
    Upload(&'a str),
    /// Connect, timeout or decode failure
    Transport(&'a str),
}

/// How the UI should surface an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Attach the message to a form field
    Field {
        /// Field name
        field: String,
        /// Message to show under it
        message: String,
    },
    /// Toast scoped to the open modal
    ModalToast(String),
    /// Page-level toast
    Toast(String),
}

const PAYLOAD_TOO_LARGE: u16 = 413;

/// Classify a raw failure
///
/// A JSON body becomes a structured [`ErrorBody`]; anything else keeps the raw
/// text as the message.
#[must_use]
pub fn classify(failure: Failure<'_>) -> ClassifiedError {
    match failure {
        Failure::Response { status, body } => {
            let body = serde_json::from_str::<ErrorBody>(body).unwrap_or_else(|_| {
                tracing::debug!(status, "Unstructured error body");
                ErrorBody::message(body.trim())
            });
            ClassifiedError::Http { status, body }
        },
        Failure::Upload(message) => ClassifiedError::Upload(message.to_string()),
        Failure::Transport(message) => ClassifiedError::Generic(message.to_string()),
    }
}

impl ClassifiedError {
    /// Validation failure for `field`
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// HTTP status code, if this came from a response
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server no longer accepts the session (401 or 403)
    #[must_use]
    pub const fn is_session_failure(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403, .. })
    }

    /// 401 asking the caller to verify an OTP first
    #[must_use]
    pub fn is_otp_challenge(&self) -> bool {
        matches!(self, Self::Http { status: 401, body } if body.error.as_deref() == Some("otp"))
    }

    /// 404 on a lookup
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }

    /// The `tempMail` carried by an error body
    #[must_use]
    pub fn temp_mail(&self) -> Option<TempMail> {
        match self {
            Self::Http { body, .. } => body.temp_mail(),
            _ => None,
        }
    }

    /// Human readable message
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } => message,
            Self::Http { body, .. } => &body.message,
            Self::Upload(message) | Self::Generic(message) => message,
        }
    }

    /// Where the UI should show this error
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        match self {
            Self::Validation { field, message } => Feedback::Field {
                field: field.clone(),
                message: message.clone(),
            },
            Self::Http {
                status: PAYLOAD_TOO_LARGE,
                body,
            } => Feedback::ModalToast(if body.message.is_empty() {
                "Payload too large".to_string()
            } else {
                body.message.clone()
            }),
            Self::Http { status, body }
                if (400..500).contains(status) && !self.is_session_failure() =>
            {
                match &body.error {
                    Some(field) => Feedback::Field {
                        field: field.clone(),
                        message: body.message.clone(),
                    },
                    None => Feedback::Toast(body.message.clone()),
                }
            },
            Self::Http { body, .. } => Feedback::Toast(body.message.clone()),
            Self::Upload(message) => Feedback::ModalToast(message.clone()),
            Self::Generic(message) => Feedback::Toast(message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, body: &str) -> ClassifiedError {
        classify(Failure::Response { status, body })
    }

    #[test]
    fn test_structured_body_is_http_error() {
        let error = http(400, r#"{"error":"movie_name","message":"Movie already exists"}"#);
        assert_eq!(error.status(), Some(400));
        assert_eq!(
            error.feedback(),
            Feedback::Field {
                field: "movie_name".to_string(),
                message: "Movie already exists".to_string(),
            }
        );
    }

    #[test]
    fn test_unstructured_body_keeps_raw_text() {
        let error = http(502, "Bad Gateway\n");
        assert_eq!(error.message(), "Bad Gateway");
        assert_eq!(error.feedback(), Feedback::Toast("Bad Gateway".to_string()));
    }

    #[test]
    fn test_payload_too_large_is_modal_toast() {
        let error = http(413, "");
        assert_eq!(
            error.feedback(),
            Feedback::ModalToast("Payload too large".to_string())
        );
    }

    #[test]
    fn test_upload_and_transport() {
        assert_eq!(
            classify(Failure::Upload("not an image")),
            ClassifiedError::Upload("not an image".to_string())
        );
        let generic = classify(Failure::Transport("connection refused"));
        assert_eq!(generic, ClassifiedError::Generic("connection refused".to_string()));
        assert_eq!(generic.feedback(), Feedback::Toast("connection refused".to_string()));
        assert!(!generic.is_session_failure());
    }

    #[test]
    fn test_session_failures() {
        assert!(http(401, "{}").is_session_failure());
        assert!(http(403, "{}").is_session_failure());
        assert!(!http(404, "{}").is_session_failure());
        assert!(http(404, "{}").is_not_found());
    }

    #[test]
    fn test_otp_challenge_carries_temp_mail() {
        let error = http(
            401,
            r#"{"error":"otp","message":"Verify your email","tempMail":{"email":"a@b.in"}}"#,
        );
        assert!(error.is_otp_challenge());
        assert_eq!(
            error.temp_mail(),
            Some(TempMail {
                email: "a@b.in".to_string()
            })
        );
        assert!(!http(401, r#"{"message":"expired"}"#).is_otp_challenge());
    }

    #[test]
    fn test_session_failure_with_field_is_toast() {
        let error = http(401, r#"{"error":"otp","message":"Verify"}"#);
        assert_eq!(error.feedback(), Feedback::Toast("Verify".to_string()));
    }

    #[test]
    fn test_validation_feedback() {
        let error = ClassifiedError::validation("genres", "Select at least one genre");
        assert_eq!(error.to_string(), "genres: Select at least one genre");
        assert!(matches!(error.feedback(), Feedback::Field { ref field, .. } if field == "genres"));
    }
}
