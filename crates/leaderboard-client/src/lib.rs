//! Leaderboard Client SDK.
//!
//! This crate provides a client library for services to interact with the
//! leaderboard API.
//!
//! # Example
//!
//! ```no_run
//! use leaderboard_client::LeaderboardClient;
//!
//! # async fn example() -> Result<(), leaderboard_client::ClientError> {
//! let client = LeaderboardClient::new("http://localhost:3000");
//!
//! // Submit a score (the server floors 99.9 to 99)
//! let record = client.submit_score(99.9).await?;
//! println!("Stored {} as {}", record.value, record.id);
//!
//! // Read the ranking
//! for score in client.top_scores().await? {
//!     println!("{}: {}", score.id, score.value);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, LeaderboardClient};
pub use error::ClientError;
pub use types::*;
