//! Field module: the land matrix and its coordinate primitives.
//!
//! This module contains:
//! - [`Field`]: A fixed-size grid of cells that rectangles are carved into
//! - [`CellState`]: Barren, unvisited, or labelled with a [`RegionId`]
//! - [`Point`] and [`Rect`]: Coordinates and inclusive rectangles

mod cell;
#[allow(clippy::module_inception)]
mod field;
mod rect;

pub use cell::{CellState, RegionId};
pub use field::Field;
pub use rect::{Point, Rect};
