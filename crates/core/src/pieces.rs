//! Pieces module - canonical tetromino layouts
//!
//! Every (shape, orientation) pair has a pre-authored 4-cell layout. The primary tables are
//! **box-centered**: each shape rotates inside a fixed bounding box (4x4 for I, a 4-wide box
//! for O, 3x3 for the rest), the way the Standard Rotation System lays pieces out. The
//! **justified** variant, shifted so the minimum x and y are both 0, is derived on demand.
//!
//! Coordinates follow grid rows: +x right, +y down.
//! Reference: https://tetris.wiki/SRS

use rand::Rng;

use crate::types::{Coordinate, Rotation, Shape};

/// Four cell offsets for one (shape, orientation) pair
pub type PieceCells = [Coordinate; 4];

/// Layout of the `None` sentinel and of any out-of-range lookup
pub const DEGENERATE_CELLS: PieceCells = [Coordinate::ZERO; 4];

const fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

/// Box-centered layouts indexed by `[shape.table_index()][rotation.index()]`
const CENTERED: [[PieceCells; 4]; 7] = [
    // I: horizontal on row 1, vertical on column 2, horizontal on row 2, vertical on column 1
    [
        [c(0, 1), c(1, 1), c(2, 1), c(3, 1)],
        [c(2, 0), c(2, 1), c(2, 2), c(2, 3)],
        [c(0, 2), c(1, 2), c(2, 2), c(3, 2)],
        [c(1, 0), c(1, 1), c(1, 2), c(1, 3)],
    ],
    // J
    [
        [c(0, 0), c(0, 1), c(1, 1), c(2, 1)],
        [c(1, 0), c(2, 0), c(1, 1), c(1, 2)],
        [c(0, 1), c(1, 1), c(2, 1), c(2, 2)],
        [c(1, 0), c(1, 1), c(0, 2), c(1, 2)],
    ],
    // L
    [
        [c(2, 0), c(0, 1), c(1, 1), c(2, 1)],
        [c(1, 0), c(1, 1), c(1, 2), c(2, 2)],
        [c(0, 1), c(1, 1), c(2, 1), c(0, 2)],
        [c(0, 0), c(1, 0), c(1, 1), c(1, 2)],
    ],
    // O: identical in every orientation
    [
        [c(1, 0), c(2, 0), c(1, 1), c(2, 1)],
        [c(1, 0), c(2, 0), c(1, 1), c(2, 1)],
        [c(1, 0), c(2, 0), c(1, 1), c(2, 1)],
        [c(1, 0), c(2, 0), c(1, 1), c(2, 1)],
    ],
    // S
    [
        [c(1, 0), c(2, 0), c(0, 1), c(1, 1)],
        [c(1, 0), c(1, 1), c(2, 1), c(2, 2)],
        [c(1, 1), c(2, 1), c(0, 2), c(1, 2)],
        [c(0, 0), c(0, 1), c(1, 1), c(1, 2)],
    ],
    // Z
    [
        [c(0, 0), c(1, 0), c(1, 1), c(2, 1)],
        [c(2, 0), c(1, 1), c(2, 1), c(1, 2)],
        [c(0, 1), c(1, 1), c(1, 2), c(2, 2)],
        [c(1, 0), c(0, 1), c(1, 1), c(0, 2)],
    ],
    // T
    [
        [c(1, 0), c(0, 1), c(1, 1), c(2, 1)],
        [c(1, 0), c(1, 1), c(2, 1), c(1, 2)],
        [c(0, 1), c(1, 1), c(2, 1), c(1, 2)],
        [c(1, 0), c(0, 1), c(1, 1), c(1, 2)],
    ],
];

/// Bounding box `(columns, rows)` indexed like [`CENTERED`]
const BOUNDS: [[(i32, i32); 4]; 7] = [
    [(4, 1), (1, 4), (4, 1), (1, 4)],
    [(3, 2), (2, 3), (3, 2), (2, 3)],
    [(3, 2), (2, 3), (3, 2), (2, 3)],
    [(2, 2), (2, 2), (2, 2), (2, 2)],
    [(3, 2), (2, 3), (3, 2), (2, 3)],
    [(3, 2), (2, 3), (3, 2), (2, 3)],
    [(3, 2), (2, 3), (3, 2), (2, 3)],
];

/// Box-centered layout for a shape and orientation
pub fn canonical_cells(shape: Shape, rotation: Rotation) -> PieceCells {
    canonical_cells_at(shape, rotation.index())
}

/// Box-centered layout for a raw orientation index
///
/// Orientations outside `0..=3` and the `None` shape give [`DEGENERATE_CELLS`].
pub fn canonical_cells_at(shape: Shape, orientation: u8) -> PieceCells {
    match shape.table_index() {
        Some(row) if orientation < 4 => CENTERED[row][orientation as usize],
        _ => DEGENERATE_CELLS,
    }
}

/// Layout shifted so the leftmost column and top row are both 0
pub fn justified_cells(shape: Shape, rotation: Rotation) -> PieceCells {
    justify(canonical_cells(shape, rotation))
}

fn justify(cells: PieceCells) -> PieceCells {
    let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
    let shift = Coordinate::new(min_x, min_y);
    cells.map(|c| c - shift)
}

/// Bounding box `(columns, rows)` for a shape and orientation; `(0, 0)` for `None`
pub fn columns_and_rows_for(shape: Shape, rotation: Rotation) -> (i32, i32) {
    columns_and_rows_at(shape, rotation.index())
}

/// Bounding box for a raw orientation index; `(0, 0)` outside the tables
pub fn columns_and_rows_at(shape: Shape, orientation: u8) -> (i32, i32) {
    match shape.table_index() {
        Some(row) if orientation < 4 => BOUNDS[row][orientation as usize],
        _ => (0, 0),
    }
}

/// Uniform draw over the seven real shapes (thread-local generator)
pub fn random_shape() -> Shape {
    random_shape_with(&mut rand::thread_rng())
}

/// Uniform draw over the seven real shapes; never `None`
pub fn random_shape_with<R: Rng + ?Sized>(rng: &mut R) -> Shape {
    Shape::ALL[rng.gen_range(0..Shape::ALL.len())]
}
