/// Error types for calls against the case API
use thiserror::Error;

/// Transport, status and decoding failures of one API call.
///
/// Callers collapse all variants into a single "request failed" outcome;
/// the variants exist for logging and for picking the message to show.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, bad URL)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server answered with status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// The body was not the JSON shape the endpoint promises
    #[error("Failed to parse response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Message for the user: the server's own text when it sent one,
    /// otherwise `fallback`.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message,
            _ => fallback,
        }
    }
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
