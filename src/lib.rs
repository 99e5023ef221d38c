//! Calendar period algebra with configurable precision and boundaries
//!
//! This crate models a bounded span of calendar time — a [`Period`] — at a
//! configurable granularity (year down to second) with configurable
//! inclusion/exclusion of its endpoints, and provides a closed algebra over
//! such spans: containment, overlap, adjacency, gap, intersection, symmetric
//! difference, and subtraction.
//!
//! - [`Precision`]: which calendar fields of a timestamp are significant
//! - [`Boundaries`]: which endpoints are excluded from the range
//! - [`Period`]: the immutable span and its relational/set operations
//! - [`PeriodCollection`]: ordered sequences of periods and the
//!   running-intersection reduction used by subtraction
//! - [`PeriodDuration`]: the absolute span captured at construction
//! - [`Error`]: invalid periods, invalid dates, precision mismatches
//!
//! Construction rounds both endpoints to the precision and resolves boundary
//! exclusion exactly once; every operation afterwards reads only the cached
//! included endpoints. All values are immutable, every operation allocates a
//! fresh result, and nothing blocks or performs I/O.
//!
//! ```
//! use calspan::{Boundaries, Period, Precision};
//!
//! let january = Period::make(
//!     "2021-01-01",
//!     "2021-01-31",
//!     Precision::Day,
//!     Boundaries::ExcludeNone,
//! )?;
//! let february = Period::make(
//!     "2021-02-01",
//!     "2021-02-10",
//!     Precision::Day,
//!     Boundaries::ExcludeNone,
//! )?;
//!
//! assert_eq!(january.length(), 31);
//! assert!(january.touches_with(&february)?);
//! assert!(!january.overlaps_with(&february)?);
//! # Ok::<(), calspan::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boundary;
pub mod collection;
pub mod duration;
pub mod error;
pub mod input;
pub mod iter;
pub mod period;
pub mod precision;

pub use boundary::Boundaries;
pub use collection::PeriodCollection;
pub use duration::PeriodDuration;
pub use error::{Error, Result};
pub use input::DateInput;
pub use iter::PeriodIter;
pub use period::Period;
pub use precision::Precision;
