use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven tetromino shapes plus the uninitialized sentinel
///
/// - **I**: 4-long bar
/// - **J**, **L**: 3-long bar with a hook on the left/right end
/// - **O**: 2x2 square
/// - **S**, **Z**: skewed pairs (mirrors of each other)
/// - **T**: 3-long bar with a center nub
/// - **None**: no shape; all geometry collapses to `(0, 0)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
    #[default]
    None,
}

impl Shape {
    /// The seven real shapes, in table order
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::J,
        Shape::L,
        Shape::O,
        Shape::S,
        Shape::Z,
        Shape::T,
    ];

    /// Row of this shape in the canonical tables, `None` for the sentinel
    pub fn table_index(&self) -> Option<usize> {
        match self {
            Shape::I => Some(0),
            Shape::J => Some(1),
            Shape::L => Some(2),
            Shape::O => Some(3),
            Shape::S => Some(4),
            Shape::Z => Some(5),
            Shape::T => Some(6),
            Shape::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Shape::None)
    }

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use gridstate_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("Z"), Some(Shape::Z));
    /// assert_eq!(Shape::from_str("none"), Some(Shape::None));
    /// assert_eq!(Shape::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "j" => Some(Shape::J),
            "l" => Some(Shape::L),
            "o" => Some(Shape::O),
            "s" => Some(Shape::S),
            "z" => Some(Shape::Z),
            "t" => Some(Shape::T),
            "none" => Some(Shape::None),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "i",
            Shape::J => "j",
            Shape::L => "l",
            Shape::O => "o",
            Shape::S => "s",
            Shape::Z => "z",
            Shape::T => "t",
            Shape::None => "none",
        }
    }
}

/// The four orientations of a tetromino
///
/// - **North** (0): table orientation
/// - **East** (1): rotated 90° clockwise
/// - **South** (2): rotated 180°
/// - **West** (3): rotated 270° clockwise
///
/// The cycle goes: North → East → South → West → North.
/// Serialized as the orientation index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Orientation index in `0..=3`
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Orientation for an index, `None` outside `0..=3`
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rotation::North),
            1 => Some(Rotation::East),
            2 => Some(Rotation::South),
            3 => Some(Rotation::West),
            _ => None,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use gridstate_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Orientation index outside `0..=3`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRotation(pub u8);

impl fmt::Display for InvalidRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid orientation {} (expected 0..=3)", self.0)
    }
}

impl std::error::Error for InvalidRotation {}

impl From<Rotation> for u8 {
    fn from(r: Rotation) -> u8 {
        r.index()
    }
}

impl TryFrom<u8> for Rotation {
    type Error = InvalidRotation;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rotation::from_index(value).ok_or(InvalidRotation(value))
    }
}
