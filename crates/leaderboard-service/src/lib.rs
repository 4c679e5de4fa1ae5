//! Leaderboard HTTP API service.
//!
//! This crate provides the HTTP API for the leaderboard:
//!
//! - Score submission (values are validated and floored to integers)
//! - Top-score ranking queries (at most five records, highest value first)
//!
//! The storage backend is injected through the `ScoreStore` trait, so tests
//! can run the full HTTP surface against an in-memory store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers must be async for Axum routing

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
