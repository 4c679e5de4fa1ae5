//! Key encoding utilities for `RocksDB`.
//!
//! The ranking query relies entirely on key order: the `scores_by_value`
//! index encodes each value so that a forward iteration yields records by
//! value descending, then by id ascending (insertion order) within equal
//! values.

use leaderboard_core::ScoreId;

/// Create a primary record key from a score id.
#[must_use]
pub fn score_key(id: &ScoreId) -> Vec<u8> {
    id.to_bytes().to_vec()
}

/// Encode a value so that ascending byte order equals descending numeric
/// order.
///
/// The sign bit is flipped to make the big-endian encoding order-preserving
/// across negative values, then all bits are complemented to reverse it.
#[must_use]
pub fn encode_value_desc(value: i64) -> [u8; 8] {
    #[allow(clippy::cast_sign_loss)]
    let ascending = (value as u64) ^ (1 << 63);
    (!ascending).to_be_bytes()
}

/// Create a ranking index key.
///
/// Format: `encode_value_desc(value)` (8 bytes) || `score_id` (16 bytes)
///
/// ULIDs are time-ordered, so records with equal values sort earliest-first.
#[must_use]
pub fn value_index_key(value: i64, id: &ScoreId) -> Vec<u8> {
    let mut key = Vec::with_capacity(24);
    key.extend_from_slice(&encode_value_desc(value));
    key.extend_from_slice(&id.to_bytes());
    key
}

/// Extract the score id from a ranking index key.
///
/// # Panics
///
/// Panics if the key is shorter than 24 bytes.
#[must_use]
pub fn extract_score_id_from_index_key(key: &[u8]) -> ScoreId {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&key[8..24]);
    ScoreId::from_bytes(bytes).expect("valid ULID bytes")
}
