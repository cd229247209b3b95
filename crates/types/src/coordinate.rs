use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// An immutable 2D integer point used to address grid cells and to express offsets.
///
/// # Examples
///
/// ```
/// use gridstate_types::Coordinate;
///
/// let a = Coordinate::new(1, 2);
/// let b = Coordinate::new(3, -1);
/// assert_eq!(a + b, Coordinate::new(4, 1));
/// assert_eq!(b - a, Coordinate::new(2, -3));
/// assert_eq!(a.reversing_y(), Coordinate::new(1, -2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// The origin `(0, 0)`
    pub const ZERO: Coordinate = Coordinate { x: 0, y: 0 };

    /// Reported by index lookups that fall outside the grid
    pub const INVALID: Coordinate = Coordinate { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Mirror on the x axis, switching between "+y is up" and "+y is down" conventions.
    pub const fn reversing_y(self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
        }
    }

    /// Component-wise addition, `None` if either component overflows
    pub fn checked_add(self, rhs: Coordinate) -> Option<Coordinate> {
        Some(Self {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
        })
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Coordinate) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn structural_equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(Coordinate::new(1, 1));
        set.insert(Coordinate::from((1, 1)));
        set.insert(Coordinate::new(1, 2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn reversing_y_is_an_involution() {
        let c = Coordinate::new(-4, 7);
        assert_eq!(c.reversing_y().reversing_y(), c);
        assert_eq!(Coordinate::ZERO.reversing_y(), Coordinate::ZERO);
    }

    #[test]
    fn add_assign_matches_add() {
        let mut c = Coordinate::new(2, 2);
        c += Coordinate::new(-1, 3);
        assert_eq!(c, Coordinate::new(2, 2) + Coordinate::new(-1, 3));
    }

    #[test]
    fn checked_add_stops_at_i32_edge() {
        let edge = Coordinate::new(i32::MAX, 0);
        assert_eq!(edge.checked_add(Coordinate::new(1, 0)), None);
        assert_eq!(Coordinate::new(0, i32::MIN).checked_add(Coordinate::new(0, -1)), None);
        assert_eq!(
            edge.checked_add(Coordinate::new(-1, 2)),
            Some(Coordinate::new(i32::MAX - 1, 2))
        );
    }

    #[test]
    fn serializes_as_field_set() {
        let json = serde_json::to_string(&Coordinate::new(3, -2)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":-2}"#);
    }
}
