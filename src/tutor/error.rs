//! Tutor transport error types.

use thiserror::Error;

/// Errors from one `generateContent` attempt.
///
/// These stay inside the tutor clients: every variant is mapped to a fixed
/// fallback line before anything reaches the practice loop.
#[derive(Debug, Error)]
pub enum TutorError {
    /// Authentication failed (invalid or revoked API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The API answered successfully but with no usable text.
    #[error("empty completion")]
    EmptyCompletion,
}
