//! Scan module: connected-component analysis of a field.
//!
//! A scan walks the field in a fixed order (x outer, y inner) and starts a
//! flood fill at every unvisited fertile cell. Each fill labels its region
//! with the next [`RegionId`](crate::RegionId) and counts the cells it
//! touched. Fills use an explicit stack, so region size is bounded only by
//! memory, never by call depth.

mod directions;
mod scanner;

pub use directions::Directions;
pub use scanner::{FertileRegion, Scanner};

use crate::field::Field;

/// Scan `field` and return its fertile areas, sorted ascending.
pub fn scan(field: &mut Field) -> Vec<usize> {
    Scanner::new().scan(field)
}

/// Scan `field` and return its fertile regions in discovery order.
pub fn scan_regions(field: &mut Field) -> Vec<FertileRegion> {
    Scanner::new().scan_regions(field)
}

impl Field {
    /// Label the fertile regions of this field and return their areas,
    /// sorted ascending.
    ///
    /// Call [`Field::reset`] before re-analysing with new barren land.
    pub fn fertile_areas(&mut self) -> Vec<usize> {
        scan(self)
    }
}
