//! Core types for the leaderboard service.
//!
//! This crate provides the foundational types used throughout the leaderboard
//! platform:
//!
//! - **Identifiers**: [`ScoreId`]
//! - **Records**: [`ScoreRecord`]
//! - **Validation**: [`ScoreValue`]
//!
//! # Score values
//!
//! Submissions arrive as JSON numbers. Before storage they pass through
//! [`ScoreValue`], which rejects non-finite input and floors the rest toward
//! negative infinity (`-1.5` is stored as `-2`). Stored values are always
//! `i64`; records are immutable once created.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod score;

pub use error::{Result, ScoreError};
pub use ids::{IdError, ScoreId};
pub use score::{ScoreRecord, ScoreValue, TOP_SCORES_LIMIT};
