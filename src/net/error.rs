//! Tagged error type for the REST boundary.
//!
//! ERROR HANDLING
//! ==============
//! Every backend response is decoded into `Result<T, ApiError>` here, so
//! pages and the session store never inspect loosely-typed error payloads.
//! Operation boundaries turn an `ApiError` into a display string with
//! `message_or`, falling back to a fixed message when the server said nothing.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::de::DeserializeOwned;

use super::types::ApiEnvelope;

/// Failure taxonomy for backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the submitted fields (400/422).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Missing, invalid or expired credentials (401/403).
    #[error("unauthorized: {0}")]
    Auth(String),

    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(String),

    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success response.
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Classify a failed response by HTTP status and server-provided message.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.unwrap_or_default();
        match status {
            400 | 422 => Self::Validation(message),
            401 | 403 => Self::Auth(message),
            404 => Self::NotFound(message),
            _ => Self::Server { status, message },
        }
    }

    /// Server-provided message, if the backend sent a non-empty one.
    pub fn server_message(&self) -> Option<&str> {
        let message = match self {
            Self::Network(_) => return None,
            Self::Validation(m) | Self::Auth(m) | Self::NotFound(m) | Self::Server { message: m, .. } => m,
        };
        let trimmed = message.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// User-facing text: the server's message, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Decode a raw response body into the envelope payload.
///
/// A 2xx envelope with `success=false` is a `Server` error carrying the
/// envelope's message, and `success=true` with no `data` counts as `NotFound`.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let ok_status = (200..300).contains(&status);
    let envelope = match serde_json::from_str::<ApiEnvelope<T>>(body) {
        Ok(envelope) => envelope,
        Err(e) if ok_status => return Err(ApiError::Network(format!("malformed response: {e}"))),
        Err(_) => return Err(ApiError::from_status(status, error_field(body))),
    };

    if !ok_status {
        return Err(ApiError::from_status(status, envelope.error));
    }
    if !envelope.success {
        return Err(ApiError::Server { status, message: envelope.error.unwrap_or_default() });
    }
    envelope
        .data
        .ok_or_else(|| ApiError::NotFound(envelope.error.unwrap_or_default()))
}

/// Decode an envelope whose payload the caller does not need.
pub fn decode_ack(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) && body.trim().is_empty() {
        return Ok(());
    }
    decode_envelope::<serde_json::Value>(status, body)
        .map(|_| ())
        .or_else(|e| if e.is_not_found() && (200..300).contains(&status) { Ok(()) } else { Err(e) })
}

/// Best-effort `error` field extraction from an error body whose `data`
/// shape did not match.
fn error_field(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_owned)
}
