use leptos::{IntoView, View};
use thiserror::Error;

/// Failure taxonomy for every user-triggered operation, decided once at the
/// transport boundary and propagated unchanged to the views. No variant is
/// retried automatically; all are terminal for the action that raised them.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum ApiError {
    /// Local validation failed before any network call was issued.
    #[error("{0}")]
    Validation(String),

    /// The server answered with an error status. The message, when the body
    /// carried one, is surfaced verbatim; otherwise views substitute a
    /// per-action fallback via [`ApiError::message_or`].
    #[error("{}", .0.as_deref().unwrap_or("Request failed"))]
    Rejected(Option<String>),

    /// No response was received at all.
    #[error("Server not responding. Try again later.")]
    Unreachable,

    /// A success response that could not be interpreted, e.g. a login
    /// success body without a token.
    #[error("Invalid server response")]
    Malformed,
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Display text, with `fallback` replacing a message-less rejection.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Rejected(None) => fallback.to_string(),
            other => other.to_string(),
        }
    }

    /// Classify a transport-level failure: a body that would not decode is a
    /// malformed response, anything else means no usable response arrived.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Malformed
        } else {
            Self::Unreachable
        }
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}
