//! `RocksDB` storage layer for the leaderboard.
//!
//! This crate provides persistent storage for score records using `RocksDB`
//! with a ranking index, plus an in-memory implementation for tests and local
//! development.
//!
//! # Architecture
//!
//! The `RocksDB` backend uses the following column families:
//!
//! - `scores`: Primary score records, keyed by score id (ULID)
//! - `scores_by_value`: Ranking index, keyed by an order-preserving encoding
//!   of the value followed by the score id
//!
//! # Example
//!
//! ```no_run
//! use leaderboard_store::{RocksStore, ScoreStore};
//!
//! let store = RocksStore::open("/tmp/leaderboard-db").unwrap();
//!
//! // Append a score
//! let record = store.insert(42).unwrap();
//!
//! // Query the ranking
//! let top = store.top_n(5).unwrap();
//! assert_eq!(top[0].id, record.id);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod memory;
pub mod rocks;
pub mod schema;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use rocks::RocksStore;

use leaderboard_core::ScoreRecord;

/// The storage trait defining all score persistence operations.
///
/// This trait abstracts the storage layer, allowing for different
/// implementations (e.g., `RocksDB`, in-memory for testing). The service
/// receives a handle to an implementation at construction time.
pub trait ScoreStore: Send + Sync {
    /// Durably append one score record, assigning it a fresh id and creation
    /// timestamp, and return it.
    ///
    /// Every call creates a new record; identical values are stored
    /// separately and nothing is ever overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn insert(&self, value: i64) -> Result<ScoreRecord>;

    /// Return up to `n` records ordered by value descending.
    ///
    /// Records with equal values are ordered by id ascending, which
    /// corresponds to insertion order. The result reflects every previously
    /// committed insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be executed.
    fn top_n(&self, n: usize) -> Result<Vec<ScoreRecord>>;
}
