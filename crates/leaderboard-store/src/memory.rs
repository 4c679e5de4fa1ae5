//! In-memory storage implementation.
//!
//! `MemoryStore` keeps records in a `Vec` behind an `RwLock`. It exists for
//! tests and local development and implements the same observable contract
//! as the `RocksDB` backend, including the ranking tie-break.

use std::sync::RwLock;

use leaderboard_core::ScoreRecord;

use crate::error::{Result, StoreError};
use crate::ScoreStore;

/// In-memory `ScoreStore` implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ScoreRecord>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn insert(&self, value: i64) -> Result<ScoreRecord> {
        let record = ScoreRecord::new(value);

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Database("score store lock poisoned".into()))?;
        records.push(record.clone());

        Ok(record)
    }

    fn top_n(&self, n: usize) -> Result<Vec<ScoreRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Database("score store lock poisoned".into()))?;

        // Same order the RocksDB index yields: value descending, then id
        // ascending (insertion order) within equal values.
        let mut ranked = records.clone();
        ranked.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.id.cmp(&b.id)));
        ranked.truncate(n);

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_all(store: &MemoryStore, values: &[i64]) -> Vec<ScoreRecord> {
        let mut records = Vec::new();
        for &value in values {
            records.push(store.insert(value).unwrap());
            std::thread::sleep(std::time::Duration::from_millis(2)); // Ensure different ULIDs
        }
        records
    }

    #[test]
    fn ranking_matches_rocks_contract() {
        let store = MemoryStore::new();
        insert_all(&store, &[10, 50, 30, 50, 20, 5]);

        let top = store.top_n(5).unwrap();
        let values: Vec<i64> = top.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![50, 50, 30, 20, 10]);
    }

    #[test]
    fn equal_values_keep_insertion_order() {
        let store = MemoryStore::new();
        let records = insert_all(&store, &[50, 50]);

        let top = store.top_n(5).unwrap();
        assert_eq!(top[0].id, records[0].id);
        assert_eq!(top[1].id, records[1].id);
    }

    #[test]
    fn empty_store_returns_empty() {
        let store = MemoryStore::new();
        assert!(store.top_n(5).unwrap().is_empty());
    }

    #[test]
    fn top_n_truncates_to_n() {
        let store = MemoryStore::new();
        insert_all(&store, &[1, 2, 3, 4]);

        let top = store.top_n(2).unwrap();
        let values: Vec<i64> = top.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![4, 3]);
    }

    #[test]
    fn insert_does_not_reorder_storage() {
        let store = MemoryStore::new();
        insert_all(&store, &[3, 1, 2]);

        // Natural order stays insertion order; ranking is computed per query.
        let stored = store.records.read().unwrap();
        let values: Vec<i64> = stored.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![3, 1, 2]);
    }
}
