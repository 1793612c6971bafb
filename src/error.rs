//! Unified SDK error types.

use thiserror::Error;

use crate::envelope::Envelope;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// The message a UI should show for this error.
    ///
    /// For API-shaped failures this is the backend's envelope `message`
    /// verbatim; everything else falls back to the display form.
    pub fn user_message(&self) -> String {
        match self {
            SdkError::Http(HttpError::Api { message, .. }) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// A non-2xx response from the backend.
    ///
    /// `message` comes from the response envelope when one could be parsed,
    /// otherwise the fixed fallback `"request failed"`. `payload` keeps the
    /// parsed envelope for callers that need the application `code`.
    #[error("{message}")]
    Api {
        status: u16,
        status_message: String,
        message: String,
        payload: Option<Envelope>,
    },
}

impl HttpError {
    /// HTTP status of an API-shaped error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
