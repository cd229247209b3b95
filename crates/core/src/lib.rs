//! Grid state and tetromino geometry - pure, deterministic, and testable
//!
//! This crate contains the two reusable building blocks of the workspace. It has **zero
//! dependencies** on rendering, input, or I/O:
//!
//! - **Deterministic**: every random operation accepts an injected generator, so a seeded
//!   `StdRng` reproduces the same grid
//! - **Total**: out-of-bounds reads return the invalid sentinel and out-of-bounds writes are
//!   ignored; the only runtime failure is drawing from an empty random universe
//! - **Serializable**: grids and tetrominoes round-trip through `serde`
//!
//! # Module Structure
//!
//! - [`grid`]: [`GridModel`], the resizable generic state store
//! - [`config`]: [`GridConfig`], construction parameters with serde defaults
//! - [`session`]: over/paused lifecycle and elapsed-time bookkeeping
//! - [`pieces`]: canonical tetromino layouts and bounding boxes
//! - [`geometry`]: [`TetrominoGeometry`] with table-driven rotation
//! - [`render`]: `Display` debug dump for grids
//! - [`error`]: [`GridError`] and [`GeometryError`]
//!
//! # Example
//!
//! ```
//! use gridstate_core::{GridModel, TetrominoGeometry};
//! use gridstate_core::types::{Coordinate, Shape};
//!
//! let mut grid = GridModel::new(10, 20, 0u8, u8::MAX);
//!
//! let mut piece = TetrominoGeometry::new(Shape::T).translated(Coordinate::new(3, 0));
//! piece.rotate_clockwise();
//!
//! assert!(grid.can_place(piece.cells().iter().copied()));
//! grid.set_states_at(piece.cells().iter().copied(), 1);
//! assert_eq!(grid.count_of(&1), 4);
//! assert!(!grid.can_place(piece.cells().iter().copied()));
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod pieces;
pub mod render;
pub mod session;

pub use gridstate_types as types;

// Re-export commonly used types for convenience
pub use config::GridConfig;
pub use error::{GeometryError, GridError};
pub use geometry::TetrominoGeometry;
pub use grid::GridModel;
pub use pieces::{
    canonical_cells, canonical_cells_at, columns_and_rows_for, justified_cells, random_shape,
    random_shape_with, PieceCells,
};
pub use session::Session;
