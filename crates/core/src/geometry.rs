//! Tetromino geometry - a shape, its orientation, and its four placed cells
//!
//! Rotation is table driven. Rotating clockwise looks up the canonical layouts for the old
//! and new orientation, takes the per-cell difference, and adds it to the current cells.
//! The piece keeps its translation and always lands exactly on a canonical layout, so
//! repeated rotations cannot drift.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::pieces::{canonical_cells, columns_and_rows_for, random_shape_with, PieceCells};
use crate::types::{Coordinate, Rotation, Shape};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GeometryRepr")]
pub struct TetrominoGeometry {
    shape: Shape,
    #[serde(rename = "orientation")]
    rotation: Rotation,
    cells: PieceCells,
}

#[derive(Deserialize)]
struct GeometryRepr {
    shape: Shape,
    orientation: Rotation,
    cells: PieceCells,
}

impl TryFrom<GeometryRepr> for TetrominoGeometry {
    type Error = GeometryError;

    fn try_from(repr: GeometryRepr) -> Result<Self, Self::Error> {
        let base = canonical_cells(repr.shape, repr.orientation);
        let offset = repr.cells[0] - base[0];
        let translated = base.iter().zip(&repr.cells).all(|(&b, &c)| b + offset == c);
        let sentinel_ok = !repr.shape.is_none()
            || (repr.orientation == Rotation::North && offset == Coordinate::ZERO);
        if !translated || !sentinel_ok {
            return Err(GeometryError::NonCanonicalCells {
                shape: repr.shape,
                orientation: repr.orientation.index(),
                cells: repr.cells,
            });
        }
        Ok(Self {
            shape: repr.shape,
            rotation: repr.orientation,
            cells: repr.cells,
        })
    }
}

impl TetrominoGeometry {
    /// The uninitialized sentinel: shape `None`, orientation 0, all cells at the origin
    pub fn none() -> Self {
        Self::default()
    }

    /// A shape in its table orientation at the table origin
    pub fn new(shape: Shape) -> Self {
        Self::with_rotation(shape, Rotation::North)
    }

    /// A shape at a given orientation at the table origin
    ///
    /// `Shape::None` always yields [`TetrominoGeometry::none`].
    pub fn with_rotation(shape: Shape, rotation: Rotation) -> Self {
        if shape.is_none() {
            return Self::none();
        }
        Self {
            shape,
            rotation,
            cells: canonical_cells(shape, rotation),
        }
    }

    /// A shape at a given orientation, translated by `origin`
    pub fn placed_at(shape: Shape, rotation: Rotation, origin: Coordinate) -> Self {
        Self::with_rotation(shape, rotation).translated(origin)
    }

    /// A uniformly random real shape in its table orientation
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(random_shape_with(rng))
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Orientation index in `0..=3`
    pub fn orientation(&self) -> u8 {
        self.rotation.index()
    }

    /// The four placed cells, in table order
    pub fn cells(&self) -> &PieceCells {
        &self.cells
    }

    /// Translation of the placed cells relative to the canonical layout
    pub fn origin(&self) -> Coordinate {
        self.cells[0] - canonical_cells(self.shape, self.rotation)[0]
    }

    /// The cells with the translation removed; always a canonical layout
    pub fn relative_cells(&self) -> PieceCells {
        let origin = self.origin();
        self.cells.map(|c| c - origin)
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.cells.contains(&c)
    }

    /// Bounding box `(columns, rows)` of the current orientation
    pub fn columns_and_rows(&self) -> (i32, i32) {
        columns_and_rows_for(self.shape, self.rotation)
    }

    /// Move every cell by `offset`; the `None` sentinel stays at the origin
    pub fn translate(&mut self, offset: Coordinate) {
        if self.shape.is_none() {
            return;
        }
        for cell in &mut self.cells {
            *cell += offset;
        }
    }

    pub fn translated(mut self, offset: Coordinate) -> Self {
        self.translate(offset);
        self
    }

    /// Advance one orientation clockwise, keeping the current translation
    ///
    /// Each cell moves by the difference between its entry in the new orientation's layout
    /// and its entry in the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridstate_core::TetrominoGeometry;
    /// use gridstate_core::types::{Coordinate, Rotation, Shape};
    ///
    /// let mut piece = TetrominoGeometry::new(Shape::I).translated(Coordinate::new(3, 5));
    /// piece.rotate_clockwise();
    /// assert_eq!(piece.rotation(), Rotation::East);
    /// assert_eq!(piece.origin(), Coordinate::new(3, 5));
    /// assert!(piece.contains(Coordinate::new(5, 8)));
    /// ```
    pub fn rotate_clockwise(&mut self) {
        if self.shape.is_none() {
            *self = Self::none();
            return;
        }
        let next = self.rotation.rotate_cw();
        let from = canonical_cells(self.shape, self.rotation);
        let to = canonical_cells(self.shape, next);
        for ((cell, old), new) in self.cells.iter_mut().zip(from).zip(to) {
            *cell += new - old;
        }
        self.rotation = next;
    }

    /// Three clockwise steps
    pub fn rotate_counter_clockwise(&mut self) {
        for _ in 0..3 {
            self.rotate_clockwise();
        }
    }

    pub fn rotated_clockwise(mut self) -> Self {
        self.rotate_clockwise();
        self
    }
}
