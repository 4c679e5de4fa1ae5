//! Common test utilities for leaderboard integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use leaderboard_service::{create_router, AppState, ServiceConfig};
use leaderboard_store::{MemoryStore, RocksStore, ScoreStore};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: Option<TempDir>,
}

impl TestHarness {
    /// Create a new test harness backed by a fresh `RocksDB` database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = RocksStore::open(temp_dir.path()).expect("Failed to open store");

        let config = ServiceConfig {
            data_dir: temp_dir.path().to_string_lossy().to_string(),
            ..ServiceConfig::default()
        };

        Self {
            server: build_server(Arc::new(store), config),
            _temp_dir: Some(temp_dir),
        }
    }

    /// Create a test harness backed by an in-memory store.
    ///
    /// The routes never know the difference; this exercises the store
    /// injection seam.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Create a test harness on top of any store implementation.
    pub fn with_store(store: Arc<dyn ScoreStore>) -> Self {
        Self {
            server: build_server(store, ServiceConfig::default()),
            _temp_dir: None,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn build_server(store: Arc<dyn ScoreStore>, config: ServiceConfig) -> TestServer {
    let state = AppState::new(store, config);
    let router: Router = create_router(state);
    TestServer::new(router).expect("Failed to create test server")
}
