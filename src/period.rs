//! The period value type and its relational/set algebra
//!
//! A [`Period`] is an immutable span of calendar time at a fixed
//! [`Precision`] with a fixed [`Boundaries`] setting. Construction rounds
//! both raw endpoints and derives the pair of *included* endpoints exactly
//! once; every relational predicate and every set operation afterwards reads
//! only the included endpoints and the precision's unit step. That single
//! normalization point is what keeps the algebra consistent across the two
//! configuration axes.
//!
//! ## Degenerate ranges
//!
//! A raw span at most one unit wide with boundaries excluded on both sides
//! produces `included_start > included_end` — an empty included range. All
//! operations treat such a period as empty (it overlaps nothing, touches
//! nothing, contains nothing, has length 0); none of them treat it as an
//! error.
//!
//! ## Precision precondition
//!
//! Every binary period-to-period operation requires both operands to share a
//! precision and fails with [`Error::PrecisionMismatch`] otherwise, leaving
//! both operands untouched.

use crate::boundary::Boundaries;
use crate::collection::PeriodCollection;
use crate::duration::PeriodDuration;
use crate::error::{Error, Result};
use crate::input::DateInput;
use crate::iter::PeriodIter;
use crate::precision::Precision;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::{max, min};
use std::fmt;

/// An immutable, bounded span of calendar time
///
/// All operations return fresh values; a `Period` is never mutated after
/// construction and is freely shareable across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    start: NaiveDateTime,
    end: NaiveDateTime,
    precision: Precision,
    boundaries: Boundaries,
    included_start: NaiveDateTime,
    included_end: NaiveDateTime,
    duration: PeriodDuration,
}

impl Period {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Create a day-precision period with both endpoints included
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Period> {
        Period::from_parts(start, end, Precision::default(), Boundaries::default())
    }

    /// Create a period from any pair of date inputs
    ///
    /// Text inputs are parsed with the inferred format (see [`DateInput`]).
    /// Fails with [`Error::InvalidDate`] on empty or unparsable text and
    /// with [`Error::InvalidPeriod`] when the rounded start exceeds the
    /// rounded end.
    pub fn make<S, E>(
        start: S,
        end: E,
        precision: Precision,
        boundaries: Boundaries,
    ) -> Result<Period>
    where
        S: Into<DateInput>,
        E: Into<DateInput>,
    {
        let start = start.into().resolve(None)?;
        let end = end.into().resolve(None)?;
        Period::from_parts(start, end, precision, boundaries)
    }

    /// Create a period, parsing text inputs with an explicit format string
    pub fn make_with_format<S, E>(
        start: S,
        end: E,
        precision: Precision,
        boundaries: Boundaries,
        format: &str,
    ) -> Result<Period>
    where
        S: Into<DateInput>,
        E: Into<DateInput>,
    {
        let start = start.into().resolve(Some(format))?;
        let end = end.into().resolve(Some(format))?;
        Period::from_parts(start, end, precision, boundaries)
    }

    /// Round, validate, and derive the cached included endpoints
    fn from_parts(
        start: NaiveDateTime,
        end: NaiveDateTime,
        precision: Precision,
        boundaries: Boundaries,
    ) -> Result<Period> {
        let start = precision.round(start);
        let end = precision.round(end);
        if start > end {
            return Err(Error::InvalidPeriod { start, end, precision });
        }
        let included_start = if boundaries.start_included() {
            start
        } else {
            precision.increment(start)
        };
        let included_end = if boundaries.end_included() {
            end
        } else {
            precision.decrement(end)
        };
        Ok(Period {
            start,
            end,
            precision,
            boundaries,
            included_start,
            included_end,
            duration: PeriodDuration::from_span(included_start, included_end),
        })
    }

    /// Build an algebra result directly from already-rounded included
    /// endpoints, with default boundary inclusion
    fn from_included(
        start: NaiveDateTime,
        end: NaiveDateTime,
        precision: Precision,
    ) -> Period {
        debug_assert!(start <= end);
        Period {
            start,
            end,
            precision,
            boundaries: Boundaries::ExcludeNone,
            included_start: start,
            included_end: end,
            duration: PeriodDuration::from_span(start, end),
        }
    }

    /// Derive the adjacent follow-up period of identical length
    ///
    /// The new period starts one unit after this period's included end,
    /// spans the same number of units, and keeps the precision and boundary
    /// setting. Fails with [`Error::InvalidPeriod`] on an empty period.
    pub fn renew(&self) -> Result<Period> {
        let len = self.length();
        if len == 0 {
            return Err(Error::InvalidPeriod {
                start: self.start,
                end: self.end,
                precision: self.precision,
            });
        }
        let next_start = self.precision.increment(self.included_end);
        let next_end = self.precision.advance(next_start, (len - 1) as u64);
        // Back-compute raw endpoints so the included range lands exactly on
        // [next_start, next_end] under the preserved boundary setting.
        let raw_start = if self.boundaries.start_included() {
            next_start
        } else {
            self.precision.decrement(next_start)
        };
        let raw_end = if self.boundaries.end_included() {
            next_end
        } else {
            self.precision.increment(next_end)
        };
        Period::from_parts(raw_start, raw_end, self.precision, self.boundaries)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Raw start, rounded to the precision
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Raw end, rounded to the precision
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// The precision this period is expressed at
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// The boundary exclusion setting
    pub const fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    /// First timestamp belonging to the range
    pub const fn included_start(&self) -> NaiveDateTime {
        self.included_start
    }

    /// Last timestamp belonging to the range
    pub const fn included_end(&self) -> NaiveDateTime {
        self.included_end
    }

    /// The span captured at construction
    pub const fn duration(&self) -> PeriodDuration {
        self.duration
    }

    /// Whether the included range is empty (inverted)
    pub fn is_empty(&self) -> bool {
        self.included_start > self.included_end
    }

    /// Inclusive count of precision units in the included range
    ///
    /// Month and year precision count by walking the iteration sequence,
    /// since calendar months and years vary in length; the fixed units
    /// divide the absolute difference of the included endpoints. An empty
    /// range has length 0.
    pub fn length(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        match self.precision {
            Precision::Year | Precision::Month => self.iterate().count() as i64,
            Precision::Day => {
                (self.included_end.date() - self.included_start.date()).num_days() + 1
            }
            Precision::Hour => (self.included_end - self.included_start).num_hours() + 1,
            Precision::Minute => (self.included_end - self.included_start).num_minutes() + 1,
            Precision::Second => (self.included_end - self.included_start).num_seconds() + 1,
        }
    }

    /// Iterate the included timestamps, one unit at a time
    ///
    /// Each call returns a fresh iterator.
    pub fn iterate(&self) -> PeriodIter {
        PeriodIter::new(self.included_start, self.included_end, self.precision)
    }

    // =========================================================================
    // Relational predicates
    // =========================================================================

    fn check_precision(&self, other: &Period) -> Result<()> {
        if self.precision == other.precision {
            Ok(())
        } else {
            Err(Error::PrecisionMismatch {
                left: self.precision,
                right: other.precision,
            })
        }
    }

    /// Whether the included ranges share at least one unit
    ///
    /// Touching without overlap is not an overlap.
    pub fn overlaps_with(&self, other: &Period) -> Result<bool> {
        self.check_precision(other)?;
        if self.is_empty() || other.is_empty() {
            return Ok(false);
        }
        Ok(self.included_start <= other.included_end
            && other.included_start <= self.included_end)
    }

    /// Whether the periods are adjacent with neither gap nor overlap
    ///
    /// Adjacency is calendar-aware at the active precision: the earlier
    /// period's included end stepped by one unit must equal the later
    /// period's included start.
    pub fn touches_with(&self, other: &Period) -> Result<bool> {
        self.check_precision(other)?;
        if self.is_empty() || other.is_empty() {
            return Ok(false);
        }
        let (earlier, later) = if self.included_start <= other.included_start {
            (self, other)
        } else {
            (other, self)
        };
        if earlier.included_end >= later.included_start {
            return Ok(false);
        }
        Ok(self.precision.increment(earlier.included_end) == later.included_start)
    }

    /// Whether a timestamp, rounded to this period's precision, falls in
    /// the included range
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        let ts = self.precision.round(ts);
        self.included_start <= ts && ts <= self.included_end
    }

    /// Whether this period's included range is a superset of another's
    pub fn contains_period(&self, other: &Period) -> Result<bool> {
        self.check_precision(other)?;
        if other.is_empty() {
            return Ok(true);
        }
        if self.is_empty() {
            return Ok(false);
        }
        Ok(self.included_start <= other.included_start
            && other.included_end <= self.included_end)
    }

    /// Whether both included endpoints match exactly
    pub fn equals(&self, other: &Period) -> Result<bool> {
        self.check_precision(other)?;
        Ok(self.included_start == other.included_start
            && self.included_end == other.included_end)
    }

    // -------------------------------------------------------------------------
    // Endpoint comparison families
    //
    // The start family compares against the raw argument; the end family and
    // the equality variants round the argument to the period's precision
    // first. The asymmetry is deliberate and preserved from the source
    // behavior (see the tests).
    // -------------------------------------------------------------------------

    /// Whether the included start lies strictly before the raw timestamp
    pub fn starts_before(&self, ts: NaiveDateTime) -> bool {
        self.included_start < ts
    }

    /// Whether the included start lies at or before the raw timestamp
    pub fn starts_before_or_at(&self, ts: NaiveDateTime) -> bool {
        self.included_start <= ts
    }

    /// Whether the included start lies strictly after the raw timestamp
    pub fn starts_after(&self, ts: NaiveDateTime) -> bool {
        self.included_start > ts
    }

    /// Whether the included start lies at or after the raw timestamp
    pub fn starts_after_or_at(&self, ts: NaiveDateTime) -> bool {
        self.included_start >= ts
    }

    /// Whether the included start equals the timestamp rounded to this
    /// period's precision
    pub fn starts_at(&self, ts: NaiveDateTime) -> bool {
        self.included_start == self.precision.round(ts)
    }

    /// Whether the included end lies strictly before the rounded timestamp
    pub fn ends_before(&self, ts: NaiveDateTime) -> bool {
        self.included_end < self.precision.round(ts)
    }

    /// Whether the included end lies at or before the rounded timestamp
    pub fn ends_before_or_at(&self, ts: NaiveDateTime) -> bool {
        self.included_end <= self.precision.round(ts)
    }

    /// Whether the included end lies strictly after the rounded timestamp
    pub fn ends_after(&self, ts: NaiveDateTime) -> bool {
        self.included_end > self.precision.round(ts)
    }

    /// Whether the included end lies at or after the rounded timestamp
    pub fn ends_after_or_at(&self, ts: NaiveDateTime) -> bool {
        self.included_end >= self.precision.round(ts)
    }

    /// Whether the included end equals the timestamp rounded to this
    /// period's precision
    pub fn ends_at(&self, ts: NaiveDateTime) -> bool {
        self.included_end == self.precision.round(ts)
    }

    // =========================================================================
    // Set algebra
    // =========================================================================

    /// The period strictly between two non-overlapping, non-touching periods
    ///
    /// `None` when the periods overlap or touch, and for empty operands.
    /// Direction follows the included starts, not the argument order, so
    /// `a.gap(&b)` and `b.gap(&a)` agree.
    pub fn gap(&self, other: &Period) -> Result<Option<Period>> {
        self.check_precision(other)?;
        if self.overlaps_with(other)? || self.touches_with(other)? {
            return Ok(None);
        }
        let (earlier, later) = if self.included_start <= other.included_start {
            (self, other)
        } else {
            (other, self)
        };
        let start = self.precision.increment(earlier.included_end);
        let end = self.precision.decrement(later.included_start);
        if start > end {
            // Empty operands leave no meaningful span between the periods.
            return Ok(None);
        }
        Ok(Some(Period::from_included(start, end, self.precision)))
    }

    /// The intersection of two periods
    ///
    /// `None` when the included ranges are disjoint. The result carries
    /// default boundary inclusion; the operands' exclusion settings do not
    /// propagate.
    pub fn overlap(&self, other: &Period) -> Result<Option<Period>> {
        self.check_precision(other)?;
        let start = max(self.included_start, other.included_start);
        let end = min(self.included_end, other.included_end);
        if start > end {
            return Ok(None);
        }
        Ok(Some(Period::from_included(start, end, self.precision)))
    }

    /// Pairwise overlaps between this period and each argument
    ///
    /// Non-overlapping pairs are omitted; order follows the argument list.
    pub fn overlap_any(&self, others: &[Period]) -> Result<PeriodCollection> {
        let mut overlaps = PeriodCollection::new();
        for other in others {
            if let Some(overlap) = self.overlap(other)? {
                overlaps.push(overlap);
            }
        }
        Ok(overlaps)
    }

    /// The running intersection of this period with every argument
    ///
    /// Left fold of [`Period::overlap`]; short-circuits to `None` as soon
    /// as an intermediate intersection is empty. No arguments returns this
    /// period unchanged.
    pub fn overlap_all(&self, others: &[Period]) -> Result<Option<Period>> {
        let mut current = self.clone();
        for other in others {
            match current.overlap(other)? {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// The symmetric difference of two periods
    ///
    /// Disjoint periods come back unchanged as a two-element collection.
    /// Overlapping periods yield up to two fragments: the part of the union
    /// before the overlap and the part after it, each trimmed one unit off
    /// the overlap boundary.
    pub fn diff(&self, other: &Period) -> Result<PeriodCollection> {
        let overlap = match self.overlap(other)? {
            Some(overlap) => overlap,
            None => {
                let mut both = PeriodCollection::new();
                both.push(self.clone());
                both.push(other.clone());
                return Ok(both);
            }
        };
        let union_start = min(self.included_start, other.included_start);
        let union_end = max(self.included_end, other.included_end);

        let mut fragments = PeriodCollection::new();
        if union_start < overlap.included_start {
            fragments.push(Period::from_included(
                union_start,
                self.precision.decrement(overlap.included_start),
                self.precision,
            ));
        }
        if overlap.included_end < union_end {
            fragments.push(Period::from_included(
                self.precision.increment(overlap.included_end),
                union_end,
                self.precision,
            ));
        }
        Ok(fragments)
    }

    /// This period minus the union of all arguments
    ///
    /// Takes the symmetric difference against each argument, then reduces
    /// `{self}` through the collection-level running intersection across
    /// the per-argument results. Fragments that fail to intersect an
    /// intermediate are dropped; they never abort the subtraction. No
    /// arguments returns `{self}` unchanged.
    pub fn subtract(&self, others: &[Period]) -> Result<PeriodCollection> {
        if others.is_empty() {
            return Ok(PeriodCollection::from_iter([self.clone()]));
        }
        let diffs = others
            .iter()
            .map(|other| self.diff(other))
            .collect::<Result<Vec<_>>>()?;
        PeriodCollection::from_iter([self.clone()]).overlap_all(&diffs)
    }
}

impl fmt::Display for Period {
    /// Interval notation with brackets reflecting the boundary setting,
    /// e.g. `[2021-01-01 00:00:00, 2021-02-01 00:00:00)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.boundaries.start_included() { '[' } else { '(' };
        let close = if self.boundaries.end_included() { ']' } else { ')' };
        write!(f, "{open}{}, {}{close}", self.start, self.end)
    }
}

impl<'a> IntoIterator for &'a Period {
    type Item = NaiveDateTime;
    type IntoIter = PeriodIter;

    fn into_iter(self) -> PeriodIter {
        self.iterate()
    }
}
