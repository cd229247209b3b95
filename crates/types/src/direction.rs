use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// The eight compass directions
///
/// Offsets follow the **+y up, +x right** convention:
/// - **North**: `(0, 1)`
/// - **East**: `(1, 0)`
/// - **South**: `(0, -1)`
/// - **West**: `(-1, 0)`
///
/// Diagonals combine their two orthogonal neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from North
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four edge-sharing directions
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The four corner-sharing directions
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Unit offset for this direction (+y up)
    ///
    /// # Examples
    ///
    /// ```
    /// use gridstate_types::{Coordinate, Direction};
    ///
    /// assert_eq!(Direction::NorthEast.offset(), Coordinate::new(1, 1));
    /// assert_eq!(Direction::West.offset(), Coordinate::new(-1, 0));
    /// ```
    pub const fn offset(&self) -> Coordinate {
        match self {
            Direction::North => Coordinate::new(0, 1),
            Direction::NorthEast => Coordinate::new(1, 1),
            Direction::East => Coordinate::new(1, 0),
            Direction::SouthEast => Coordinate::new(1, -1),
            Direction::South => Coordinate::new(0, -1),
            Direction::SouthWest => Coordinate::new(-1, -1),
            Direction::West => Coordinate::new(-1, 0),
            Direction::NorthWest => Coordinate::new(-1, 1),
        }
    }

    /// Offsets of [`Direction::ORTHOGONAL`], in the same order
    pub fn orthogonal_offsets() -> [Coordinate; 4] {
        Self::ORTHOGONAL.map(|d| d.offset())
    }

    /// Offsets of [`Direction::DIAGONAL`], in the same order
    pub fn diagonal_offsets() -> [Coordinate; 4] {
        Self::DIAGONAL.map(|d| d.offset())
    }

    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            Direction::NorthEast
                | Direction::SouthEast
                | Direction::SouthWest
                | Direction::NorthWest
        )
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or abbreviations (case-insensitive):
    /// "north" | "n", "northeast" | "ne", ..., "northwest" | "nw"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "north" | "n" => Some(Direction::North),
            "northeast" | "ne" => Some(Direction::NorthEast),
            "east" | "e" => Some(Direction::East),
            "southeast" | "se" => Some(Direction::SouthEast),
            "south" | "s" => Some(Direction::South),
            "southwest" | "sw" => Some(Direction::SouthWest),
            "west" | "w" => Some(Direction::West),
            "northwest" | "nw" => Some(Direction::NorthWest),
            _ => None,
        }
    }

    /// Convert to snake_case string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::NorthEast => "north_east",
            Direction::East => "east",
            Direction::SouthEast => "south_east",
            Direction::South => "south",
            Direction::SouthWest => "south_west",
            Direction::West => "west",
            Direction::NorthWest => "north_west",
        }
    }
}

/// Which neighbor set a query considers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionProfile {
    /// Edge neighbors only
    FourWay,
    /// Edge and corner neighbors
    #[default]
    EightWay,
}

impl DirectionProfile {
    pub fn directions(&self) -> &'static [Direction] {
        match self {
            DirectionProfile::FourWay => &Direction::ORTHOGONAL,
            DirectionProfile::EightWay => &Direction::ALL,
        }
    }
}
