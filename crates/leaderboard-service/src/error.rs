//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use leaderboard_store::StoreError;

/// API error type.
///
/// Storage failures keep the operation they came from so the log line says
/// what the service was doing, while the response body stays generic.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request - the submitted score is not a usable number.
    #[error("invalid input: 'score' must be a number")]
    InvalidScore,

    /// Internal error - the store rejected the score write.
    #[error("failed to save the score")]
    SaveScore(#[source] StoreError),

    /// Internal error - the store rejected the ranking query.
    #[error("failed to retrieve scores")]
    RetrieveScores(#[source] StoreError),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidScore => {
                // Client mistakes are expected traffic, not service failures.
                tracing::debug!("rejected score submission: not a number");
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid input: 'score' must be a number.",
                )
            }
            Self::SaveScore(err) => {
                tracing::error!(error = %err, operation = "insert", "score store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save the score.",
                )
            }
            Self::RetrieveScores(err) => {
                tracing::error!(error = %err, operation = "top_n", "score store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to retrieve scores.",
                )
            }
        };

        let body = ErrorResponse {
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
