//! Calendar precision: the granularity a period is expressed at
//!
//! A precision selects which calendar fields of a timestamp are significant.
//! Only the six canonical "everything down to level X" granularities exist;
//! the type is a closed enum, so arbitrary field combinations are
//! unrepresentable rather than merely invalid.
//!
//! ## Invariants
//!
//! - Rounding resets every non-significant field to its minimum value
//!   (month/day to 1, hour/minute/second to 0) and never moves a timestamp
//!   forward.
//! - The unit step is calendar-aware: stepping a month-precision timestamp
//!   lands on the first of the next month regardless of month length.
//!
//! ## Mask interop
//!
//! The historical encoding represents each precision as a cumulative bitmask
//! where finer levels imply all coarser bits (`SECOND` carries the year,
//! month, day, hour and minute bits as well). [`Precision::mask`] and
//! [`Precision::from_mask`] expose that encoding; `from_mask` rejects every
//! non-canonical combination.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of a period, from whole years down to single seconds
///
/// Ordering follows field significance: coarser precisions order before
/// finer ones (`Year < Month < ... < Second`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Precision {
    /// Significant down to the calendar year
    Year,
    /// Significant down to the calendar month
    Month,
    /// Significant down to the calendar day (the default)
    #[default]
    Day,
    /// Significant down to the hour
    Hour,
    /// Significant down to the minute
    Minute,
    /// Significant down to the second
    Second,
}

// Canonical field bits of the historical mask encoding.
const YEAR_BIT: u8 = 0b10_0000;
const MONTH_BIT: u8 = 0b01_0000;
const DAY_BIT: u8 = 0b00_1000;
const HOUR_BIT: u8 = 0b00_0100;
const MINUTE_BIT: u8 = 0b00_0010;
const SECOND_BIT: u8 = 0b00_0001;

impl Precision {
    /// All six precisions, coarsest first
    pub const ALL: [Precision; 6] = [
        Precision::Year,
        Precision::Month,
        Precision::Day,
        Precision::Hour,
        Precision::Minute,
        Precision::Second,
    ];

    // =========================================================================
    // Mask interop
    // =========================================================================

    /// Cumulative bitmask of the significant calendar fields
    pub const fn mask(self) -> u8 {
        match self {
            Precision::Year => YEAR_BIT,
            Precision::Month => YEAR_BIT | MONTH_BIT,
            Precision::Day => YEAR_BIT | MONTH_BIT | DAY_BIT,
            Precision::Hour => YEAR_BIT | MONTH_BIT | DAY_BIT | HOUR_BIT,
            Precision::Minute => YEAR_BIT | MONTH_BIT | DAY_BIT | HOUR_BIT | MINUTE_BIT,
            Precision::Second => {
                YEAR_BIT | MONTH_BIT | DAY_BIT | HOUR_BIT | MINUTE_BIT | SECOND_BIT
            }
        }
    }

    /// Decode a canonical mask back into a precision
    ///
    /// Returns `None` for every mask outside the six canonical cumulative
    /// combinations. Non-canonical masks are a programmer error, not a
    /// recoverable input condition.
    pub const fn from_mask(mask: u8) -> Option<Precision> {
        let mut i = 0;
        while i < Precision::ALL.len() {
            if Precision::ALL[i].mask() == mask {
                return Some(Precision::ALL[i]);
            }
            i += 1;
        }
        None
    }

    // =========================================================================
    // Rounding
    // =========================================================================

    /// Round a timestamp down to this precision
    ///
    /// Every calendar field that is not significant under the mask resets to
    /// its minimum value. The result never exceeds the input.
    pub fn round(self, ts: NaiveDateTime) -> NaiveDateTime {
        let mask = self.mask();
        let month = if mask & MONTH_BIT != 0 { ts.month() } else { 1 };
        let day = if mask & DAY_BIT != 0 { ts.day() } else { 1 };
        let hour = if mask & HOUR_BIT != 0 { ts.hour() } else { 0 };
        let minute = if mask & MINUTE_BIT != 0 { ts.minute() } else { 0 };
        let second = if mask & SECOND_BIT != 0 { ts.second() } else { 0 };

        // Kept fields come from a valid timestamp and reset fields are the
        // field minimums, so reassembly cannot fail.
        NaiveDate::from_ymd_opt(ts.year(), month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .expect("rounded calendar fields form a valid timestamp")
    }

    // =========================================================================
    // Unit stepping
    // =========================================================================

    /// Step a timestamp forward by one unit at this precision
    pub fn increment(self, ts: NaiveDateTime) -> NaiveDateTime {
        self.advance(ts, 1)
    }

    /// Step a timestamp backward by one unit at this precision
    pub fn decrement(self, ts: NaiveDateTime) -> NaiveDateTime {
        match self {
            Precision::Year => ts.checked_sub_months(Months::new(12)),
            Precision::Month => ts.checked_sub_months(Months::new(1)),
            Precision::Day => ts.checked_sub_signed(Duration::days(1)),
            Precision::Hour => ts.checked_sub_signed(Duration::hours(1)),
            Precision::Minute => ts.checked_sub_signed(Duration::minutes(1)),
            Precision::Second => ts.checked_sub_signed(Duration::seconds(1)),
        }
        .expect("calendar step stays within the supported date range")
    }

    /// Step a timestamp forward by `steps` units at this precision
    ///
    /// Month and year steps are calendar-aware; fixed units use absolute
    /// offsets. Panics only when the result leaves chrono's representable
    /// date range, which no parsed four-digit-year input can reach.
    pub fn advance(self, ts: NaiveDateTime, steps: u64) -> NaiveDateTime {
        match self {
            Precision::Year => ts.checked_add_months(Months::new(steps as u32 * 12)),
            Precision::Month => ts.checked_add_months(Months::new(steps as u32)),
            Precision::Day => ts.checked_add_signed(Duration::days(steps as i64)),
            Precision::Hour => ts.checked_add_signed(Duration::hours(steps as i64)),
            Precision::Minute => ts.checked_add_signed(Duration::minutes(steps as i64)),
            Precision::Second => ts.checked_add_signed(Duration::seconds(steps as i64)),
        }
        .expect("calendar step stays within the supported date range")
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Precision::Year => "year",
            Precision::Month => "month",
            Precision::Day => "day",
            Precision::Hour => "hour",
            Precision::Minute => "minute",
            Precision::Second => "second",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    #[test]
    fn test_mask_round_trip() {
        for precision in Precision::ALL {
            assert_eq!(Precision::from_mask(precision.mask()), Some(precision));
        }
    }

    #[test]
    fn test_mask_is_cumulative() {
        // Finer masks carry every coarser bit.
        assert_eq!(Precision::Year.mask(), 0b10_0000);
        assert_eq!(Precision::Second.mask(), 0b11_1111);
        for pair in Precision::ALL.windows(2) {
            assert_eq!(pair[1].mask() & pair[0].mask(), pair[0].mask());
        }
    }

    #[test]
    fn test_from_mask_rejects_non_canonical() {
        assert_eq!(Precision::from_mask(0), None);
        // Day bit without the month bit is not a valid granularity.
        assert_eq!(Precision::from_mask(0b10_1000), None);
        assert_eq!(Precision::from_mask(0b00_0001), None);
        assert_eq!(Precision::from_mask(0xFF), None);
    }

    #[test]
    fn test_round_resets_insignificant_fields() {
        let input = ts(2021, 7, 19, 14, 35, 42);
        assert_eq!(Precision::Year.round(input), ts(2021, 1, 1, 0, 0, 0));
        assert_eq!(Precision::Month.round(input), ts(2021, 7, 1, 0, 0, 0));
        assert_eq!(Precision::Day.round(input), ts(2021, 7, 19, 0, 0, 0));
        assert_eq!(Precision::Hour.round(input), ts(2021, 7, 19, 14, 0, 0));
        assert_eq!(Precision::Minute.round(input), ts(2021, 7, 19, 14, 35, 0));
        assert_eq!(Precision::Second.round(input), input);
    }

    #[test]
    fn test_round_is_idempotent() {
        let input = ts(2021, 7, 19, 14, 35, 42);
        for precision in Precision::ALL {
            let once = precision.round(input);
            assert_eq!(precision.round(once), once);
        }
    }

    #[test]
    fn test_increment_crosses_calendar_boundaries() {
        assert_eq!(
            Precision::Day.increment(ts(2021, 1, 31, 0, 0, 0)),
            ts(2021, 2, 1, 0, 0, 0)
        );
        assert_eq!(
            Precision::Month.increment(ts(2021, 12, 1, 0, 0, 0)),
            ts(2022, 1, 1, 0, 0, 0)
        );
        assert_eq!(
            Precision::Year.increment(ts(2020, 1, 1, 0, 0, 0)),
            ts(2021, 1, 1, 0, 0, 0)
        );
        assert_eq!(
            Precision::Second.increment(ts(2021, 1, 1, 23, 59, 59)),
            ts(2021, 1, 2, 0, 0, 0)
        );
    }

    #[test]
    fn test_decrement_inverts_increment_on_rounded_values() {
        for precision in Precision::ALL {
            let rounded = precision.round(ts(2021, 7, 19, 14, 35, 42));
            assert_eq!(precision.decrement(precision.increment(rounded)), rounded);
        }
    }

    #[test]
    fn test_advance_month_handles_variable_lengths() {
        // Stepping over February keeps landing on the first of each month.
        assert_eq!(
            Precision::Month.advance(ts(2021, 1, 1, 0, 0, 0), 3),
            ts(2021, 4, 1, 0, 0, 0)
        );
        assert_eq!(
            Precision::Day.advance(ts(2020, 2, 28, 0, 0, 0), 2),
            ts(2020, 3, 1, 0, 0, 0)
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Precision::Year.to_string(), "year");
        assert_eq!(Precision::Second.to_string(), "second");
    }

    #[test]
    fn test_default_is_day() {
        assert_eq!(Precision::default(), Precision::Day);
    }
}
