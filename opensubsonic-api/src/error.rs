//! Error types for the OpenSubsonic API client.

use crate::types::ApiError;
use thiserror::Error;

/// Errors that can occur when talking to an OpenSubsonic server.
#[derive(Debug, Error)]
pub enum SubsonicError {
    /// The HTTP round trip itself failed.
    ///
    /// `code` is the HTTP status code, or `0` when no response was obtained
    /// at all (connection refused, DNS failure, timeout).
    #[error("transport failure (status {code}): {message}")]
    Transport {
        /// HTTP status code, 0 if the request never got a response.
        code: u32,
        /// Transport-level diagnostic.
        message: String,
    },

    /// The server answered with a non-"ok" status and an error object.
    ///
    /// Codes are server-defined and open-ended. Observed:
    /// - `40` — wrong username or password
    /// - `70` — requested resource not found
    /// - `500` — synthesized locally when the response is a well-formed
    ///   envelope that carries neither the expected payload key nor an
    ///   error object (message "unknown key")
    #[error("server error (code {code}): {message}")]
    Api {
        /// Subsonic error code (not an HTTP status).
        code: u32,
        /// Human-readable message from the server.
        message: String,
    },

    /// The response body was not a well-formed envelope (invalid JSON, or a
    /// mandatory envelope field is missing). Indicates a protocol-version
    /// mismatch rather than a retryable condition.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SubsonicError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport {
            code: e.status().map_or(0, |s| u32::from(s.as_u16())),
            message: e.to_string(),
        }
    }
}

impl From<ApiError> for SubsonicError {
    fn from(e: ApiError) -> Self {
        Self::Api {
            code: e.code,
            message: e.message,
        }
    }
}

/// Convenience alias for `Result<T, SubsonicError>`.
pub type Result<T> = std::result::Result<T, SubsonicError>;
