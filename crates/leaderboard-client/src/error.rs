//! Client error types.

/// Errors that can occur when using the leaderboard client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the submitted score.
    #[error("invalid score: {message}")]
    InvalidScore {
        /// Server-provided message.
        message: String,
    },

    /// Server returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// Error message.
        message: String,
        /// HTTP status code.
        status: u16,
    },
}
