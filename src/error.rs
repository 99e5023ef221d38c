//! Error types for period construction and algebra
//!
//! All failures are caller errors surfaced synchronously at the violating
//! call. Nothing is retried or degraded, and a failed binary operation
//! leaves both operands valid and unchanged. We use `thiserror` for
//! automatic `Display` and `Error` trait implementations.

use crate::precision::Precision;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Result type alias for period operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for period construction and algebra
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// End precedes start after rounding to the active precision
    #[error("invalid period: end {end} precedes start {start} at {precision} precision")]
    InvalidPeriod {
        /// Rounded start timestamp
        start: NaiveDateTime,
        /// Rounded end timestamp
        end: NaiveDateTime,
        /// Precision the endpoints were rounded to
        precision: Precision,
    },

    /// Empty or unparsable date input to construction
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Binary operation across periods of differing precision
    #[error("cannot compare periods: precision mismatch ({left} vs {right})")]
    PrecisionMismatch {
        /// Precision of the receiver
        left: Precision,
        /// Precision of the argument
        right: Precision,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_error_display_invalid_period() {
        let err = Error::InvalidPeriod {
            start: midnight(2021, 2, 1),
            end: midnight(2021, 1, 1),
            precision: Precision::Day,
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid period"));
        assert!(msg.contains("2021-02-01"));
        assert!(msg.contains("day"));
    }

    #[test]
    fn test_error_display_invalid_date() {
        let err = Error::InvalidDate("empty date input".to_string());
        let msg = err.to_string();
        assert!(msg.contains("invalid date"));
        assert!(msg.contains("empty date input"));
    }

    #[test]
    fn test_error_display_precision_mismatch() {
        let err = Error::PrecisionMismatch {
            left: Precision::Day,
            right: Precision::Hour,
        };
        let msg = err.to_string();
        assert!(msg.contains("cannot compare periods"));
        assert!(msg.contains("day"));
        assert!(msg.contains("hour"));
    }
}
