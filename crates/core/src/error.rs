//! Error types for the few operations that can actually fail.
//!
//! Out-of-bounds reads and writes are never errors; they resolve to the grid's invalid
//! sentinel or to a no-op. What remains is misconfiguration and malformed serialized input.

use thiserror::Error;

use crate::types::{Coordinate, Shape};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A random draw was requested but the random-state universe is empty
    #[error("no states available for random generation")]
    EmptyRandomStates,

    #[error("cell buffer holds {actual} states but a {width}x{height} grid needs {expected}")]
    CellCountMismatch {
        width: i32,
        height: i32,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("cells {cells:?} are not a translated {shape:?} layout at orientation {orientation}")]
    NonCanonicalCells {
        shape: Shape,
        orientation: u8,
        cells: [Coordinate; 4],
    },
}
