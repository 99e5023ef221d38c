//! Iteration over a period's included timestamps
//!
//! [`Period::iterate`](crate::Period::iterate) yields every timestamp from
//! the included start through the included end, stepping one precision unit
//! at a time. Each call builds a fresh iterator, so iteration is
//! restartable. Month and year steps are calendar-aware, which is what lets
//! [`Period::length`](crate::Period::length) count variable-length units by
//! walking the sequence.

use crate::precision::Precision;
use chrono::NaiveDateTime;
use std::iter::FusedIterator;

/// Lazy, finite iterator over a period's included timestamps
#[derive(Debug, Clone)]
pub struct PeriodIter {
    next: Option<NaiveDateTime>,
    end: NaiveDateTime,
    precision: Precision,
}

impl PeriodIter {
    pub(crate) fn new(start: NaiveDateTime, end: NaiveDateTime, precision: Precision) -> Self {
        // An inverted included range yields nothing.
        let next = (start <= end).then_some(start);
        PeriodIter { next, end, precision }
    }
}

impl Iterator for PeriodIter {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        let current = self.next?;
        let stepped = self.precision.increment(current);
        self.next = (stepped <= self.end).then_some(stepped);
        Some(current)
    }
}

impl FusedIterator for PeriodIter {}
