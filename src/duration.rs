//! Opaque duration derived from a period's included span
//!
//! Captured once at construction from the included endpoints and never
//! recomputed. The period algebra itself only reads endpoints; this value
//! exists for callers that want the span as an absolute quantity.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Absolute span of a period's included range, in whole seconds
///
/// An empty (inverted) included range clamps to zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct PeriodDuration(i64);

impl PeriodDuration {
    /// Capture the span between two included endpoints
    pub(crate) fn from_span(included_start: NaiveDateTime, included_end: NaiveDateTime) -> Self {
        PeriodDuration((included_end - included_start).num_seconds().max(0))
    }

    /// The span in whole seconds
    pub const fn as_seconds(self) -> i64 {
        self.0
    }

    /// The span as a `chrono::Duration`
    pub fn to_duration(self) -> Duration {
        Duration::seconds(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    #[test]
    fn test_span_in_seconds() {
        let d = PeriodDuration::from_span(ts(2021, 1, 1, 0, 0, 0), ts(2021, 1, 2, 0, 0, 0));
        assert_eq!(d.as_seconds(), 86_400);
        assert_eq!(d.to_duration(), Duration::days(1));
    }

    #[test]
    fn test_inverted_span_clamps_to_zero() {
        let d = PeriodDuration::from_span(ts(2021, 1, 2, 0, 0, 0), ts(2021, 1, 1, 0, 0, 0));
        assert_eq!(d.as_seconds(), 0);
    }
}
