//! Cell: the state of a single square of land.
//!
//! Every cell is in exactly one of three states. The legacy integer
//! encoding is kept for matrix dumps:
//!
//! ```text
//! ┌───────────────┬─────────┐
//! │ CellState     │ raw     │
//! ├───────────────┼─────────┤
//! │ Barren        │ -1      │
//! │ Unvisited     │  0      │
//! │ Region(id)    │ id >= 1 │
//! └───────────────┴─────────┘
//! ```

use std::num::NonZeroU32;

/// Identifier of a fertile region, assigned by the scanner in scan order.
///
/// Ids start at 1 and increase by one for each region discovered.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RegionId(NonZeroU32);

impl RegionId {
    /// The id given to the first region discovered by a scan.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Create a region id. Returns `None` for zero.
    pub const fn new(id: u32) -> Option<Self> {
        match NonZeroU32::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// The numeric value of the id.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The id following this one.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        match self.0.checked_add(1) {
            Some(id) => Self(id),
            None => self,
        }
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of a single cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellState {
    /// Marked unusable by a rectangle-marking call.
    Barren,
    /// Fertile and not yet claimed by a scan.
    #[default]
    Unvisited,
    /// Fertile and labelled with the region it belongs to.
    Region(RegionId),
}

impl CellState {
    /// Check if the cell is barren.
    #[inline]
    pub const fn is_barren(self) -> bool {
        matches!(self, Self::Barren)
    }

    /// Check if the cell is fertile (unvisited or labelled).
    #[inline]
    pub const fn is_fertile(self) -> bool {
        !self.is_barren()
    }

    /// Region id, if the cell has been labelled.
    #[inline]
    pub const fn region(self) -> Option<RegionId> {
        match self {
            Self::Region(id) => Some(id),
            _ => None,
        }
    }

    /// Integer encoding: `-1` barren, `0` unvisited, region id otherwise.
    #[inline]
    pub fn as_raw(self) -> i64 {
        match self {
            Self::Barren => -1,
            Self::Unvisited => 0,
            Self::Region(id) => i64::from(id.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_id_sequence() {
        assert_eq!(RegionId::FIRST.get(), 1);
        assert_eq!(RegionId::FIRST.next().get(), 2);
        assert_eq!(RegionId::new(0), None);
        assert_eq!(RegionId::new(3).map(RegionId::get), Some(3));
    }

    #[test]
    fn test_cell_state_default_is_unvisited() {
        assert_eq!(CellState::default(), CellState::Unvisited);
    }

    #[test]
    fn test_cell_state_raw_encoding() {
        assert_eq!(CellState::Barren.as_raw(), -1);
        assert_eq!(CellState::Unvisited.as_raw(), 0);
        assert_eq!(CellState::Region(RegionId::FIRST).as_raw(), 1);
    }

    #[test]
    fn test_cell_state_predicates() {
        assert!(CellState::Barren.is_barren());
        assert!(!CellState::Barren.is_fertile());
        assert!(CellState::Unvisited.is_fertile());
        assert_eq!(CellState::Unvisited.region(), None);
        assert_eq!(
            CellState::Region(RegionId::FIRST).region(),
            Some(RegionId::FIRST)
        );
    }
}
