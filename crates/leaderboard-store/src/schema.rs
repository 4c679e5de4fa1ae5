//! Database schema definitions and column families.
//!
//! This module defines the column families used in `RocksDB` storage.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Primary score records, keyed by score id (ULID bytes).
    pub const SCORES: &str = "scores";

    /// Ranking index, keyed by `encode_value_desc(value) || score_id`.
    /// Values are empty; the key order is the ranking.
    pub const SCORES_BY_VALUE: &str = "scores_by_value";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::SCORES, cf::SCORES_BY_VALUE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_column_families_returns_all() {
        let cfs = all_column_families();
        assert_eq!(cfs.len(), 2);
        assert!(cfs.contains(&cf::SCORES));
        assert!(cfs.contains(&cf::SCORES_BY_VALUE));
    }
}
