//! Ordered collections of periods
//!
//! [`PeriodCollection`] keeps periods in insertion order and provides the
//! collection-level running-intersection reduction that
//! [`Period::subtract`](crate::Period::subtract) builds on: intersecting one
//! collection with another takes every pairwise overlap, silently dropping
//! the pairs that do not intersect. An empty intermediate collection stays
//! empty through the rest of the fold rather than aborting it.

use crate::error::Result;
use crate::period::Period;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered, appendable sequence of periods
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCollection {
    periods: Vec<Period>,
}

impl PeriodCollection {
    /// Create an empty collection
    pub fn new() -> PeriodCollection {
        PeriodCollection { periods: Vec::new() }
    }

    /// Append a period, preserving insertion order
    pub fn push(&mut self, period: Period) {
        self.periods.push(period);
    }

    /// Number of periods in the collection
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the collection holds no periods
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Member at `index`, or `None` out of bounds
    pub fn get(&self, index: usize) -> Option<&Period> {
        self.periods.get(index)
    }

    /// Iterate the members in order
    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    /// The members as a slice
    pub fn as_slice(&self) -> &[Period] {
        &self.periods
    }

    /// All pairwise overlaps between this collection and another
    ///
    /// Order follows this collection first, the other second; pairs that do
    /// not intersect are dropped. Fails on the first precision mismatch.
    pub fn overlap(&self, other: &PeriodCollection) -> Result<PeriodCollection> {
        let mut overlaps = PeriodCollection::new();
        for a in &self.periods {
            for b in &other.periods {
                if let Some(overlap) = a.overlap(b)? {
                    overlaps.push(overlap);
                }
            }
        }
        Ok(overlaps)
    }

    /// Left fold of [`PeriodCollection::overlap`] across collections
    ///
    /// An empty intermediate result folds on as empty; individual fragments
    /// disappear when nothing in the next collection intersects them.
    pub fn overlap_all(&self, others: &[PeriodCollection]) -> Result<PeriodCollection> {
        let mut current = self.clone();
        for other in others {
            current = current.overlap(other)?;
        }
        Ok(current)
    }
}

impl Index<usize> for PeriodCollection {
    type Output = Period;

    fn index(&self, index: usize) -> &Period {
        &self.periods[index]
    }
}

impl FromIterator<Period> for PeriodCollection {
    fn from_iter<I: IntoIterator<Item = Period>>(iter: I) -> PeriodCollection {
        PeriodCollection { periods: iter.into_iter().collect() }
    }
}

impl IntoIterator for PeriodCollection {
    type Item = Period;
    type IntoIter = std::vec::IntoIter<Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.into_iter()
    }
}

impl<'a> IntoIterator for &'a PeriodCollection {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

impl From<Vec<Period>> for PeriodCollection {
    fn from(periods: Vec<Period>) -> PeriodCollection {
        PeriodCollection { periods }
    }
}
