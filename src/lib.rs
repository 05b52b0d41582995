//! # Barren
//!
//! Fertile land analysis for a rectangular farm field.
//!
//! Rectangles of barren land are carved into a [`Field`]; a scan then finds
//! every connected patch of fertile land and reports their areas in
//! ascending order.
//!
//! ## Core Concepts
//!
//! - **Field**: A fixed-size land matrix where every cell is barren,
//!   unvisited, or labelled with a region id
//! - **Barren land**: Inclusive rectangles, corners accepted in any order
//! - **Scan**: Explicit-stack flood fill with 4-connectivity, x outer and
//!   y inner, so region ids are reproducible
//!
//! ## Example
//!
//! ```rust
//! use barren::{Field, Point};
//!
//! let mut field = Field::new(400, 600)?;
//! field.mark_barren(Point::new(0, 292), Point::new(399, 307))?;
//! assert_eq!(field.fertile_areas(), vec![116_800, 116_800]);
//! # Ok::<(), barren::FieldError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod config;
pub mod error;
pub mod field;
pub mod scan;

// Re-exports for convenience
pub use config::{FieldConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use error::{BoundaryViolation, CliError, FieldError, InputError, Result};
pub use field::{CellState, Field, Point, Rect, RegionId};
pub use scan::{scan, scan_regions, Directions, FertileRegion, Scanner};
