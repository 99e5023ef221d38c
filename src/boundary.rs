//! Boundary exclusion: which endpoints of a period are excluded
//!
//! A period's raw endpoints may each be included in or excluded from the
//! range it covers. The four combinations form a closed enum; the two
//! exclusion bits of the historical encoding are exposed through
//! [`Boundaries::mask`] / [`Boundaries::from_mask`].

use serde::{Deserialize, Serialize};
use std::fmt;

const EXCLUDE_START_BIT: u8 = 0b10;
const EXCLUDE_END_BIT: u8 = 0b01;

/// Which endpoints of a period are excluded from its range
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
pub enum Boundaries {
    /// Both endpoints included (the default)
    #[default]
    ExcludeNone,
    /// Start excluded, end included
    ExcludeStart,
    /// Start included, end excluded
    ExcludeEnd,
    /// Both endpoints excluded
    ExcludeAll,
}

impl Boundaries {
    /// All four combinations
    pub const ALL: [Boundaries; 4] = [
        Boundaries::ExcludeNone,
        Boundaries::ExcludeStart,
        Boundaries::ExcludeEnd,
        Boundaries::ExcludeAll,
    ];

    /// Two-bit mask of the historical encoding
    pub const fn mask(self) -> u8 {
        match self {
            Boundaries::ExcludeNone => 0,
            Boundaries::ExcludeStart => EXCLUDE_START_BIT,
            Boundaries::ExcludeEnd => EXCLUDE_END_BIT,
            Boundaries::ExcludeAll => EXCLUDE_START_BIT | EXCLUDE_END_BIT,
        }
    }

    /// Decode a two-bit exclusion mask
    ///
    /// Returns `None` when any bit outside the two exclusion bits is set.
    pub const fn from_mask(mask: u8) -> Option<Boundaries> {
        match mask {
            0 => Some(Boundaries::ExcludeNone),
            EXCLUDE_START_BIT => Some(Boundaries::ExcludeStart),
            EXCLUDE_END_BIT => Some(Boundaries::ExcludeEnd),
            0b11 => Some(Boundaries::ExcludeAll),
            _ => None,
        }
    }

    /// Whether the start endpoint belongs to the range
    pub const fn start_included(self) -> bool {
        self.mask() & EXCLUDE_START_BIT == 0
    }

    /// Whether the end endpoint belongs to the range
    pub const fn end_included(self) -> bool {
        self.mask() & EXCLUDE_END_BIT == 0
    }
}

impl fmt::Display for Boundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Boundaries::ExcludeNone => "exclude none",
            Boundaries::ExcludeStart => "exclude start",
            Boundaries::ExcludeEnd => "exclude end",
            Boundaries::ExcludeAll => "exclude all",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_round_trip() {
        for boundaries in Boundaries::ALL {
            assert_eq!(Boundaries::from_mask(boundaries.mask()), Some(boundaries));
        }
    }

    #[test]
    fn test_from_mask_rejects_extra_bits() {
        assert_eq!(Boundaries::from_mask(0b100), None);
        assert_eq!(Boundaries::from_mask(0xFF), None);
    }

    #[test]
    fn test_inclusion_flags() {
        assert!(Boundaries::ExcludeNone.start_included());
        assert!(Boundaries::ExcludeNone.end_included());
        assert!(!Boundaries::ExcludeStart.start_included());
        assert!(Boundaries::ExcludeStart.end_included());
        assert!(Boundaries::ExcludeEnd.start_included());
        assert!(!Boundaries::ExcludeEnd.end_included());
        assert!(!Boundaries::ExcludeAll.start_included());
        assert!(!Boundaries::ExcludeAll.end_included());
    }

    #[test]
    fn test_default_excludes_nothing() {
        assert_eq!(Boundaries::default(), Boundaries::ExcludeNone);
    }
}
