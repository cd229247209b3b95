//! Core types module - shared data structures and constants
//!
//! This crate defines the value types used by the grid container and the tetromino
//! geometry. All types are plain `Copy` data with no behavior beyond arithmetic and
//! lookups, so they can be used in any context (grid logic, view bindings, tests).
//!
//! # Coordinate Conventions
//!
//! [`Coordinate`] is a signed 2D point. [`Direction`] offsets are authored with
//! **+y up, +x right**; callers addressing a grid where +y points down mirror the offset
//! with [`Coordinate::reversing_y`].
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_WIDTH` | 8 | Width used when a non-positive width is assigned |
//! | `DEFAULT_GRID_HEIGHT` | 8 | Height used when a non-positive height is assigned |
//! | `INVALID_INDEX` | -1 | Linear index reported for out-of-bounds coordinates |
//! | `DEBUG_CELL_WIDTH` | 2 | Column width of the debug grid dump |
//!
//! # Examples
//!
//! ```
//! use gridstate_types::{Coordinate, Direction, Rotation, Shape};
//!
//! let c = Coordinate::new(2, 3) + Direction::North.offset();
//! assert_eq!(c, Coordinate::new(2, 4));
//! assert_eq!(Direction::North.offset().reversing_y(), Coordinate::new(0, -1));
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Shape::from_str("t"), Some(Shape::T));
//! ```

mod coordinate;
mod direction;
mod shape;

pub use coordinate::Coordinate;
pub use direction::{Direction, DirectionProfile};
pub use shape::{InvalidRotation, Rotation, Shape};

/// Grid width used when a width below 1 is assigned
pub const DEFAULT_GRID_WIDTH: i32 = 8;

/// Grid height used when a height below 1 is assigned
pub const DEFAULT_GRID_HEIGHT: i32 = 8;

/// Linear index reported for coordinates outside the grid
pub const INVALID_INDEX: i32 = -1;

/// Minimum rendered width of one cell in the debug grid dump
pub const DEBUG_CELL_WIDTH: usize = 2;
