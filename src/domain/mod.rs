//! Domain primitives for episodes, guests and their rated appearances.
//!
//! Raw integers and strings coming off the wire are turned into these types
//! before they reach the store, so an out-of-range rating or a malformed air
//! date can never be persisted.

pub mod air_date;

use thiserror::Error;

pub use air_date::{format_air_date, parse_air_date};

/// Errors raised when constructing a domain primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Rating must be between {min} and {max}, got {value}")]
    RatingOutOfRange { value: i64, min: i32, max: i32 },

    #[error("Incorrect date format. Expected 'YYYY-MM-DD', got '{0}'")]
    InvalidAirDate(String),
}

/// A guest's rating for one appearance.
///
/// The only way to build one is through [`Rating::new`] (or `TryFrom`), which
/// rejects values outside `1..=5`. Out-of-range input is never clamped.
///
/// # Examples
///
/// ```rust
/// use greenroom::domain::Rating;
///
/// let rating = Rating::new(4).unwrap();
/// assert_eq!(rating.value(), 4);
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(i32);

impl Rating {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(DomainError::RatingOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }

        // Bounds checked above, so the narrowing is lossless.
        Ok(Self(value as i32))
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Rating {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_inclusive_bounds() {
        for value in 1..=5 {
            assert_eq!(Rating::new(value).unwrap().value(), value as i32);
        }
    }

    #[test]
    fn rating_rejects_out_of_range() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(10).is_err());
        assert!(Rating::new(-3).is_err());
        assert!(Rating::new(i64::from(i32::MAX) + 1).is_err());
    }

    #[test]
    fn rating_error_display() {
        let err = Rating::try_from(6_i32).unwrap_err();
        assert_eq!(err.to_string(), "Rating must be between 1 and 5, got 6");
    }
}
