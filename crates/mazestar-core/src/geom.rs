//! Geometry primitives: [`Location`], [`Direction`] and [`Bounds`].
//!
//! Mazes are laid out on the ground plane, so the second axis is named `z`
//! rather than `y`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// An integer cell coordinate on the maze floor.
///
/// Ordered row by row: `z` first, then `x`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: i32,
    pub z: i32,
}

impl Location {
    pub const ZERO: Self = Self { x: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The location `dx` columns and `dz` rows away.
    #[inline]
    pub const fn shift(self, dx: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.z + dz)
    }

    /// The four cardinal neighbours, in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Location; 4] {
        Direction::ALL.map(|d| self + d)
    }

    /// Whether `other` is exactly one cardinal step away.
    pub fn is_adjacent(self, other: Location) -> bool {
        Direction::between(self, other).is_some()
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.z, self.x).cmp(&(other.z, other.x))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<(i32, i32)> for Location {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

impl Add for Location {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.shift(rhs.x, rhs.z)
    }
}

impl Sub for Location {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.shift(-rhs.x, -rhs.z)
    }
}

/// One step in `rhs`. Wraps at the `i32` limits: a step off the edge of the
/// coordinate space lands on the opposite extreme, which no grid contains.
impl Add<Direction> for Location {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Direction) -> Self {
        let d = rhs.offset();
        Self::new(self.x.wrapping_add(d.x), self.z.wrapping_add(d.z))
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal unit steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// +x
    East,
    /// +z
    North,
    /// -x
    West,
    /// -z
    South,
}

impl Direction {
    /// All directions in expansion order. Searches iterate in this order, so
    /// it decides which of several equally cheap nodes is found first.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    #[inline]
    pub const fn offset(self) -> Location {
        match self {
            Direction::East => Location::new(1, 0),
            Direction::North => Location::new(0, 1),
            Direction::West => Location::new(-1, 0),
            Direction::South => Location::new(0, -1),
        }
    }

    /// The direction leading from `from` to the adjacent `to`, if they are
    /// one cardinal step apart.
    pub fn between(from: Location, to: Location) -> Option<Self> {
        Self::ALL.into_iter().find(|&d| from + d == to)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max) of locations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Location,
    pub max: Location,
}

impl Bounds {
    /// Bounds spanning the two corners, whichever way round they are given.
    pub fn new(x0: i32, z0: i32, x1: i32, z1: i32) -> Self {
        Self {
            min: Location::new(x0.min(x1), z0.min(z1)),
            max: Location::new(x0.max(x1), z0.max(z1)),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn depth(self) -> i32 {
        self.max.z - self.min.z
    }

    /// Number of locations inside.
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.depth() as usize
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.depth() <= 0
    }

    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        (self.min.x..self.max.x).contains(&loc.x) && (self.min.z..self.max.z).contains(&loc.z)
    }

    /// The bounds with `n` cells taken off every side, or empty bounds when
    /// nothing is left.
    pub fn shrink(self, n: i32) -> Self {
        let inner = Self {
            min: self.min.shift(n, n),
            max: self.max.shift(-n, -n),
        };
        if inner.is_empty() { Self::default() } else { inner }
    }

    /// Every location, row by row (z outer, x inner).
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
            len: self.len(),
        }
    }
}

/// Row-major iterator over the locations in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
    len: usize,
}

impl Iterator for BoundsIter {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.next >= self.len {
            return None;
        }
        let w = self.bounds.width() as usize;
        let (row, col) = (self.next / w, self.next % w);
        self.next += 1;
        Some(self.bounds.min.shift(col as i32, row as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn location_arithmetic() {
        let a = Location::new(1, 2);
        let b = Location::new(3, 4);
        assert_eq!(a + b, Location::new(4, 6));
        assert_eq!(b - a, Location::new(2, 2));
        assert_eq!(a + Direction::East, Location::new(2, 2));
        assert_eq!(a + Direction::South, Location::new(1, 1));
    }

    #[test]
    fn locations_hash_by_coordinates() {
        let mut set = HashSet::new();
        set.insert(Location::new(1, 2));
        set.insert(Location::new(2, 1));
        set.insert(Location::new(1, 2));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Location::new(2, 1)));
    }

    #[test]
    fn direction_order_is_fixed() {
        let offsets: Vec<_> = Direction::ALL.iter().map(|d| d.offset()).collect();
        assert_eq!(
            offsets,
            vec![
                Location::new(1, 0),
                Location::new(0, 1),
                Location::new(-1, 0),
                Location::new(0, -1),
            ]
        );
    }

    #[test]
    fn direction_between_adjacent() {
        let a = Location::new(2, 2);
        assert_eq!(Direction::between(a, Location::new(2, 3)), Some(Direction::North));
        assert_eq!(Direction::between(a, Location::new(3, 3)), None);
        for d in Direction::ALL {
            assert_eq!(Direction::between(a, a + d), Some(d));
        }
    }

    #[test]
    fn bounds_basics() {
        let b = Bounds::new(0, 0, 3, 2);
        assert_eq!(b.width(), 3);
        assert_eq!(b.depth(), 2);
        assert_eq!(b.len(), 6);
        assert!(b.contains(Location::new(2, 1)));
        assert!(!b.contains(Location::new(3, 0)));
        assert!(!b.contains(Location::new(0, -1)));
    }

    #[test]
    fn bounds_iter_row_major() {
        let pts: Vec<_> = Bounds::new(0, 0, 3, 2).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Location::new(0, 0));
        assert_eq!(pts[1], Location::new(1, 0));
        assert_eq!(pts[5], Location::new(2, 1));
    }

    #[test]
    fn bounds_shrink() {
        let b = Bounds::new(0, 0, 5, 5).shrink(1);
        assert_eq!(b, Bounds::new(1, 1, 4, 4));
        assert!(Bounds::new(0, 0, 2, 2).shrink(1).is_empty());
        assert_eq!(Bounds::new(0, 0, 2, 2).shrink(1).iter().count(), 0);
    }

    #[test]
    fn steps_off_the_coordinate_space_wrap() {
        let far = Location::new(i32::MAX, i32::MIN);
        assert_eq!(far + Direction::East, Location::new(i32::MIN, i32::MIN));
        assert_eq!(far + Direction::South, Location::new(i32::MAX, i32::MAX));
        assert_eq!(far.neighbors_4().len(), 4);
    }
}
