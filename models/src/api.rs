//! Response envelope and failure type for the REST boundary.
//!
//! ERROR HANDLING
//! ==============
//! The backend's error bodies are not uniform: some endpoints return a bare
//! string, some `{message}`, some `{error: {message}}`, some `{error}` with a
//! string value. [`ApiError::detail`] is the single place that order of
//! extraction is decided, so display code never duck-types response bodies.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback display message when no usable text can be extracted.
const GENERIC_FAILURE: &str = "Failed to process your request";

/// Standard `{message, data}` success envelope used by most endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Human-readable outcome summary from the backend.
    pub message: String,
    /// Endpoint-specific payload.
    pub data: T,
}

/// Failure raised by the console's HTTP layer.
///
/// Transport and decode problems keep their source message; non-2xx responses
/// keep the parsed body so display code can extract the backend's own text.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (network, browser API).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response arrived but its body was not the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The server answered with a non-2xx status.
    #[error("server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error body, parsed as JSON when possible, kept as a JSON string
        /// otherwise. `None` for empty bodies.
        body: Option<Value>,
    },
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a raw response body.
    ///
    /// Non-JSON bodies are preserved as `Value::String` so a plain-text error
    /// still reaches the user verbatim.
    #[must_use]
    pub fn from_status(status: u16, raw_body: &str) -> Self {
        let trimmed = raw_body.trim();
        let body = if trimmed.is_empty() {
            None
        } else if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
            Some(value)
        } else {
            Some(Value::String(trimmed.to_owned()))
        };
        Self::Status { status, body }
    }

    /// User-facing message for this failure.
    ///
    /// Extraction precedence for status bodies: bare string, `error.message`,
    /// `message`, string-valued `error`, then a generic fallback. Transport
    /// and decode failures use their own message when non-empty.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Transport(message) | Self::Decode(message) => {
                if message.is_empty() {
                    GENERIC_FAILURE.to_owned()
                } else {
                    message.clone()
                }
            }
            Self::Status { body: Some(body), .. } => body_detail(body),
            Self::Status { body: None, .. } => GENERIC_FAILURE.to_owned(),
        }
    }
}

fn body_detail(body: &Value) -> String {
    if let Value::String(text) = body {
        return text.clone();
    }
    if let Some(text) = body.pointer("/error/message").and_then(Value::as_str) {
        return text.to_owned();
    }
    if let Some(text) = body.get("message").and_then(Value::as_str) {
        return text.to_owned();
    }
    if let Some(text) = body.get("error").and_then(Value::as_str) {
        return text.to_owned();
    }
    GENERIC_FAILURE.to_owned()
}
