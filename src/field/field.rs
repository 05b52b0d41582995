//! Field: the land matrix of a farm.
//!
//! Cells are stored contiguously with x as the major axis:
//! `index = x * height + y`. Walking the slice front to back therefore
//! visits cells in scan order (x outer, y inner).

use super::cell::CellState;
use super::rect::{Point, Rect};
use crate::error::{BoundaryViolation, Result};
use std::io::Write;
use tracing::debug;

/// A farm field of fixed dimensions.
///
/// Created with every cell [`CellState::Unvisited`]. Rectangles of barren
/// land are carved in with [`Field::mark_barren`] and fertile regions are
/// labelled in place by the scanner.
#[derive(Clone, PartialEq, Eq)]
pub struct Field {
    /// Contiguous cell storage (x-major order).
    cells: Vec<CellState>,
    /// Extent along x.
    width: usize,
    /// Extent along y.
    height: usize,
}

impl Field {
    /// Create a new field with the given dimensions.
    ///
    /// Fails with [`FieldError::InvalidBoundary`](crate::FieldError) if
    /// either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(BoundaryViolation::Dimensions { width, height }.into());
        }
        #[allow(clippy::cast_sign_loss)]
        let (width, height) = (width as usize, height as usize);
        debug!(width, height, "created field");
        Ok(Self {
            cells: vec![CellState::Unvisited; width * height],
            width,
            height,
        })
    }

    /// Get the field width.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the field height.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a field has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to the underlying cell slice, in scan order.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// Check if a point lies on the field.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index_of(p).is_some()
    }

    /// Convert a point to a linear index.
    ///
    /// Returns `None` if the point is out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    /// Convert a linear index to a point.
    #[inline]
    pub fn coords_of(&self, index: usize) -> Option<Point> {
        if index < self.cells.len() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let p = Point::new((index / self.height) as i32, (index % self.height) as i32);
            Some(p)
        } else {
            None
        }
    }

    /// Get the state of the cell at `p`.
    ///
    /// Returns `None` if the point is out of bounds.
    #[inline]
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.index_of(p).map(|i| self.cells[i])
    }

    /// Check if the cell at `p` is barren. Out-of-bounds points are not.
    #[inline]
    pub fn is_barren(&self, p: Point) -> bool {
        self.state(p).is_some_and(CellState::is_barren)
    }

    /// Number of barren cells.
    pub fn barren_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_barren()).count()
    }

    /// Number of fertile cells.
    pub fn fertile_count(&self) -> usize {
        self.len() - self.barren_count()
    }

    fn check_in_field(&self, p: Point) -> Result<()> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(BoundaryViolation::OutOfField {
                point: p,
                width: self.width,
                height: self.height,
            }
            .into())
        }
    }

    /// Mark the rectangle spanned by two corners as barren.
    ///
    /// The corners may be given in any order. Both must lie on the field,
    /// otherwise the field is left untouched and
    /// [`FieldError::InvalidBoundary`](crate::FieldError) is returned.
    /// Marking is idempotent and overlapping rectangles are fine.
    pub fn mark_barren(&mut self, a: Point, b: Point) -> Result<()> {
        self.check_in_field(a)?;
        self.check_in_field(b)?;
        self.fill_rect(Rect::from_corners(a, b), CellState::Barren);
        debug!(?a, ?b, "marked barren land");
        Ok(())
    }

    /// Mark a rectangle as barren. See [`Field::mark_barren`].
    pub fn mark_barren_rect(&mut self, rect: Rect) -> Result<()> {
        self.mark_barren(rect.min(), rect.max())
    }

    /// Fill an in-bounds rectangle with a state, one contiguous column
    /// slice per x.
    fn fill_rect(&mut self, rect: Rect, state: CellState) {
        let (min, max) = (rect.min(), rect.max());
        let (Some(start), Some(end)) = (self.index_of(min), self.index_of(Point::new(min.x, max.y)))
        else {
            return;
        };
        let span = end - start + 1;
        for column in rect.xs() {
            #[allow(clippy::cast_sign_loss)]
            let offset = start + (column - min.x) as usize * self.height;
            self.cells[offset..offset + span].fill(state);
        }
    }

    /// Return every cell to [`CellState::Unvisited`], discarding barren
    /// land and region labels.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Unvisited);
    }

    /// Iterate over columns (one slice of `height` cells per x).
    pub fn columns(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.height)
    }

    /// Write the raw land matrix: one line per x, one four-wide entry
    /// per y, with index headers.
    ///
    /// Only useful for small fields.
    pub fn render_matrix<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{:4}", "")?;
        for y in 0..self.height {
            write!(out, "{y:4}")?;
        }
        writeln!(out)?;
        for (x, column) in self.columns().enumerate() {
            write!(out, "{x:4}")?;
            for cell in column {
                write!(out, "{:4}", cell.as_raw())?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Get memory usage in bytes (approximate).
    pub fn memory_usage(&self) -> usize {
        self.cells.len() * std::mem::size_of::<CellState>() + std::mem::size_of::<Self>()
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("barren", &self.barren_count())
            .field("memory_bytes", &self.memory_usage())
            .finish()
    }
}
