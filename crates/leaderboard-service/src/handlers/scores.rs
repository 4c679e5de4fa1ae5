//! Score submission and ranking handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use leaderboard_core::{ScoreRecord, ScoreValue, TOP_SCORES_LIMIT};

use crate::error::ApiError;
use crate::state::AppState;

/// Score submission request.
#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    /// The submitted score. Fractional values are floored before storage.
    pub score: f64,
}

/// Score record response.
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    /// Record id (ULID).
    pub id: String,
    /// Stored integer value.
    pub value: i64,
    /// Creation timestamp (RFC 3339).
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<&ScoreRecord> for ScoreResponse {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            id: record.id.to_string(),
            value: record.value,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// Submit a score.
///
/// The body must be a JSON object with a numeric `score` field. Every parse
/// and type failure maps to the same 400 response, as do non-finite and
/// out-of-range numbers.
pub async fn submit_score(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ScoreResponse>), ApiError> {
    let Json(body) = body.map_err(|_| ApiError::InvalidScore)?;

    let value = ScoreValue::new(body.score).map_err(|_| ApiError::InvalidScore)?;

    let record = state
        .store
        .insert(value.get())
        .map_err(ApiError::SaveScore)?;

    tracing::info!(id = %record.id, value = %record.value, "score recorded");

    Ok((StatusCode::CREATED, Json(ScoreResponse::from(&record))))
}

/// List the top scores, highest value first.
pub async fn list_top_scores(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ScoreResponse>>, ApiError> {
    let records = state
        .store
        .top_n(TOP_SCORES_LIMIT)
        .map_err(ApiError::RetrieveScores)?;

    let scores: Vec<ScoreResponse> = records.iter().map(ScoreResponse::from).collect();

    Ok(Json(scores))
}
