//! Error types for the leaderboard core.

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Errors produced when validating a score submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    /// The submitted number is NaN or infinite.
    #[error("score must be a finite number")]
    NotFinite,

    /// The floored value does not fit a 64-bit integer.
    #[error("score {0} is outside the storable range")]
    OutOfRange(f64),
}
