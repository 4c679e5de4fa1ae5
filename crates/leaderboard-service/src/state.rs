//! Application state.

use std::sync::Arc;

use leaderboard_store::ScoreStore;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
///
/// The store is held behind the `ScoreStore` trait, so any implementation
/// (`RocksDB` in production, in-memory in tests) can back the same routes.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<dyn ScoreStore>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn ScoreStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }
}
