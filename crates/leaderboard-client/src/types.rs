//! Request and response types for the leaderboard client.

use serde::{Deserialize, Serialize};

/// A score record returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Score {
    /// Record id (ULID).
    pub id: String,
    /// Stored integer value.
    pub value: i64,
    /// Creation timestamp (RFC 3339).
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Score submission request.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitScoreRequest {
    /// The score to submit. The server floors fractional values.
    pub score: f64,
}

/// API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message.
    pub message: String,
}
