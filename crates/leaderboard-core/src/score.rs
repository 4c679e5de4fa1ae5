//! Score records and submission validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::ids::ScoreId;

/// Number of records returned by the top-scores query.
pub const TOP_SCORES_LIMIT: usize = 5;

// The i64 domain expressed in f64. -2^63 is exactly representable; i64::MAX
// is not, and the nearest f64 above it is 2^63, so the upper bound is
// exclusive.
const I64_LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER_BOUND_EXCLUSIVE: f64 = 9_223_372_036_854_775_808.0;

/// A durably stored score submission.
///
/// Records are immutable once created: there is no update or delete. Every
/// successful submission appends exactly one record, even when the value is
/// identical to a previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Unique record id (ULID, time-ordered).
    pub id: ScoreId,

    /// The floored integer score. May be negative or zero.
    pub value: i64,

    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl ScoreRecord {
    /// Create a record for an already-floored value, assigning a fresh id
    /// and creation timestamp.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self {
            id: ScoreId::generate(),
            value,
            created_at: Utc::now(),
        }
    }
}

/// A validated score submission.
///
/// This is the explicit parse step between a raw JSON number and a storable
/// value: the input must be finite, and its floor must fit `i64`. Flooring
/// is toward negative infinity, so `-1.5` validates to `-2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreValue(i64);

impl ScoreValue {
    /// Validate a raw submission and floor it to the storable integer.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFinite`] for NaN or infinite input, and
    /// [`ScoreError::OutOfRange`] when the floored value does not fit `i64`.
    pub fn new(raw: f64) -> Result<Self, ScoreError> {
        if !raw.is_finite() {
            return Err(ScoreError::NotFinite);
        }

        let floored = raw.floor();
        if !(I64_LOWER_BOUND..I64_UPPER_BOUND_EXCLUSIVE).contains(&floored) {
            return Err(ScoreError::OutOfRange(raw));
        }

        // Safe: bounds-checked against the i64 domain above.
        #[allow(clippy::cast_possible_truncation)]
        Ok(Self(floored as i64))
    }

    /// Return the floored integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_toward_negative_infinity() {
        assert_eq!(ScoreValue::new(3.9).unwrap().get(), 3);
        assert_eq!(ScoreValue::new(-2.1).unwrap().get(), -3);
        assert_eq!(ScoreValue::new(-1.5).unwrap().get(), -2);
        assert_eq!(ScoreValue::new(99.9).unwrap().get(), 99);
    }

    #[test]
    fn integers_pass_through() {
        assert_eq!(ScoreValue::new(5.0).unwrap().get(), 5);
        assert_eq!(ScoreValue::new(0.0).unwrap().get(), 0);
        assert_eq!(ScoreValue::new(-0.0).unwrap().get(), 0);
        assert_eq!(ScoreValue::new(-42.0).unwrap().get(), -42);
    }

    #[test]
    fn rejects_non_finite_input() {
        assert_eq!(ScoreValue::new(f64::NAN).unwrap_err(), ScoreError::NotFinite);
        assert_eq!(
            ScoreValue::new(f64::INFINITY).unwrap_err(),
            ScoreError::NotFinite
        );
        assert_eq!(
            ScoreValue::new(f64::NEG_INFINITY).unwrap_err(),
            ScoreError::NotFinite
        );
    }

    #[test]
    fn rejects_values_outside_i64() {
        assert!(matches!(
            ScoreValue::new(1e19),
            Err(ScoreError::OutOfRange(_))
        ));
        assert!(matches!(
            ScoreValue::new(-1e19),
            Err(ScoreError::OutOfRange(_))
        ));
        assert!(matches!(
            ScoreValue::new(f64::MAX),
            Err(ScoreError::OutOfRange(_))
        ));
    }

    #[test]
    fn i64_domain_boundaries() {
        // -2^63 is exactly representable and storable.
        let lower = -(2f64.powi(63));
        assert_eq!(ScoreValue::new(lower).unwrap().get(), i64::MIN);

        // 2^63 is the first value past the storable range.
        let upper = 2f64.powi(63);
        assert!(matches!(
            ScoreValue::new(upper),
            Err(ScoreError::OutOfRange(_))
        ));
    }

    #[test]
    fn new_record_assigns_unique_ids() {
        let a = ScoreRecord::new(7);
        let b = ScoreRecord::new(7);

        assert_eq!(a.value, 7);
        assert_eq!(b.value, 7);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = ScoreRecord::new(-12);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
