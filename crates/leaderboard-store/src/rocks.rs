//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `ScoreStore`
//! trait.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options, WriteBatch,
};

use leaderboard_core::{ScoreId, ScoreRecord};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::ScoreStore;

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(path = %path.display(), "opened score database");

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Look up a record by its id.
    fn get_record(&self, id: &ScoreId) -> Result<Option<ScoreRecord>> {
        let cf = self.cf(cf::SCORES)?;
        let key = keys::score_key(id);

        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }
}

impl ScoreStore for RocksStore {
    fn insert(&self, value: i64) -> Result<ScoreRecord> {
        let record = ScoreRecord::new(value);

        let cf_scores = self.cf(cf::SCORES)?;
        let cf_by_value = self.cf(cf::SCORES_BY_VALUE)?;

        let record_key = keys::score_key(&record.id);
        let index_key = keys::value_index_key(record.value, &record.id);
        let record_value = Self::serialize(&record)?;

        // Record and index entry land atomically; a failed insert leaves
        // nothing visible to later reads.
        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_scores, &record_key, &record_value);
        batch.put_cf(&cf_by_value, &index_key, []); // Index entry (empty value)

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(record)
    }

    fn top_n(&self, n: usize) -> Result<Vec<ScoreRecord>> {
        let cf_by_value = self.cf(cf::SCORES_BY_VALUE)?;

        // Index keys already sort by (value desc, id asc), so a forward scan
        // from the start yields the ranking directly.
        let iter = self.db.iterator_cf(&cf_by_value, IteratorMode::Start);

        let mut records = Vec::new();
        for item in iter {
            if records.len() >= n {
                break;
            }

            let (key, _) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            let id = keys::extract_score_id_from_index_key(&key);

            let record = self
                .get_record(&id)?
                .ok_or_else(|| StoreError::Database(format!("index entry without record: {id}")))?;
            records.push(record);
        }

        Ok(records)
    }
}
