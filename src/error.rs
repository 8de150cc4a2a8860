//! Error types for Spotify Web API communication.

use reqwest::StatusCode;
use thiserror::Error;

/// A response arrived but did not have the expected shape.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A required field was absent (or `null`) in the response body
    #[error("missing field `{0}` in response")]
    MissingField(&'static str),

    /// The body was not valid JSON for the expected record
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors returned at every Spotify call boundary.
///
/// The caller decides whether an error aborts the run (token exchange) or
/// only skips the current unit of work (a genre or an artist).
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// Client id or secret is not configured
    #[error("missing credentials: {0}")]
    MissingCredentials(String),

    /// Network or transport level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Spotify API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl SpotifyError {
    /// Whether the error was caused by the response content rather than the
    /// transport or the server status.
    pub fn is_decode(&self) -> bool {
        matches!(self, SpotifyError::Decode(_))
    }
}

/// Result type for Spotify operations
pub type SpotifyResult<T> = Result<T, SpotifyError>;
