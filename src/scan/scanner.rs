//! Scanner: labels connected fertile regions and measures their areas.

use super::directions::Directions;
use crate::field::{CellState, Field, Point, RegionId};
use tracing::{debug, trace};

/// A fertile region found by a scan.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FertileRegion {
    /// Label written into every cell of the region.
    pub id: RegionId,
    /// Number of cells in the region.
    pub area: usize,
    /// First cell of the region in scan order.
    pub seed: Point,
}

/// Connected-component scanner.
///
/// Walks the field with x as the outer loop and y as the inner loop and
/// flood fills from every cell that is still [`CellState::Unvisited`].
/// The worklist is an explicit stack, kept between fills so repeated
/// scans do not reallocate.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    /// Pending cell indices.
    stack: Vec<usize>,
    /// Neighbours examined from each cell.
    directions: Directions,
}

impl Scanner {
    /// Create a scanner using 4-connectivity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label every fertile region of `field` and return them in discovery
    /// order, ids starting at 1.
    ///
    /// Cells already barren or labelled are skipped, so scanning a field
    /// twice without a reset finds nothing new.
    pub fn scan_regions(&mut self, field: &mut Field) -> Vec<FertileRegion> {
        let mut regions = Vec::new();
        let mut next_id = RegionId::FIRST;

        for index in 0..field.len() {
            if field.cells()[index] != CellState::Unvisited {
                continue;
            }
            let area = self.flood_fill(field, index, next_id);
            let Some(seed) = field.coords_of(index) else {
                continue;
            };
            trace!(id = next_id.get(), ?seed, area, "filled region");
            regions.push(FertileRegion {
                id: next_id,
                area,
                seed,
            });
            next_id = next_id.next();
        }

        debug!(regions = regions.len(), "scan complete");
        regions
    }

    /// Scan `field` and return the region areas, sorted ascending.
    pub fn scan(&mut self, field: &mut Field) -> Vec<usize> {
        let mut areas: Vec<usize> = self
            .scan_regions(field)
            .into_iter()
            .map(|r| r.area)
            .collect();
        areas.sort_unstable();
        areas
    }

    /// Label every unvisited cell reachable from `start` with `id` and
    /// return how many were labelled.
    ///
    /// A cell is labelled when it is pushed, so no cell enters the stack
    /// twice.
    fn flood_fill(&mut self, field: &mut Field, start: usize, id: RegionId) -> usize {
        let (width, height) = (field.width(), field.height());
        let fill = CellState::Region(id);
        let cells = field.cells_mut();

        if cells[start] != CellState::Unvisited {
            return 0;
        }

        self.stack.clear();
        cells[start] = fill;
        self.stack.push(start);

        let mut area = 0;
        while let Some(current) = self.stack.pop() {
            for next in self.directions.neighbours(current, width, height) {
                if cells[next] == CellState::Unvisited {
                    cells[next] = fill;
                    self.stack.push(next);
                }
            }
            area += 1;
        }
        area
    }
}
