//! The passability grid a maze search runs over.
//!
//! [`Cell`] is either open floor or wall. [`Grid`] stores a `width × depth`
//! table of cells in row-major order (z outer, x inner) and answers bounds,
//! passability and neighbour queries.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Bounds, BoundsIter, Location};

/// A single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Passable floor, stored as `0`.
    #[default]
    Open,
    /// Wall, stored as `1`.
    Blocked,
}

impl Cell {
    /// Raw wall marker used by byte tables.
    pub const WALL_MARKER: u8 = 1;

    /// Whether the cell is a wall.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Cell::Blocked)
    }

    /// Glyph used by the text format.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Blocked => '#',
        }
    }
}

impl From<u8> for Cell {
    fn from(v: u8) -> Self {
        if v == 0 { Cell::Open } else { Cell::Blocked }
    }
}

impl From<Cell> for u8 {
    fn from(c: Cell) -> Self {
        match c {
            Cell::Open => 0,
            Cell::Blocked => Cell::WALL_MARKER,
        }
    }
}

/// Errors from building or parsing a [`Grid`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or depth is negative or zero.
    #[error("invalid grid size {width}x{depth}")]
    InvalidSize { width: i32, depth: i32 },

    /// The cell table does not hold `width * depth` entries.
    #[error("grid {width}x{depth} needs {expected} cells, got {found}")]
    SizeMismatch {
        width: i32,
        depth: i32,
        expected: usize,
        found: usize,
    },

    /// Text input contained no rows.
    #[error("grid text is empty")]
    Empty,

    /// A text row has a different length than the first one.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character that is neither a wall nor a floor glyph.
    #[error("invalid cell character {ch:?} at row {row}, column {col}")]
    InvalidChar { ch: char, row: usize, col: usize },
}

/// Cells in a `width × depth` table, computed in `usize` so that sizes whose
/// product exceeds `i32::MAX` do not overflow. Both sizes must be non-negative.
fn cell_count(width: i32, depth: i32) -> usize {
    width as usize * depth as usize
}

/// A `width × depth` table of [`Cell`]s.
///
/// Valid locations are `x ∈ [0, width)` and `z ∈ [0, depth)`. The outer ring
/// is reserved for walls by convention; [`Grid::interior`] yields the cells
/// inside it. The grid itself does not enforce the convention.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    width: i32,
    depth: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell open.
    ///
    /// Negative sizes are clamped to zero.
    pub fn new(width: i32, depth: i32) -> Self {
        let width = width.max(0);
        let depth = depth.max(0);
        Self {
            width,
            depth,
            cells: vec![Cell::Open; cell_count(width, depth)],
        }
    }

    /// Create a grid from a row-major cell table.
    pub fn from_cells(width: i32, depth: i32, cells: Vec<Cell>) -> Result<Self, GridError> {
        if width <= 0 || depth <= 0 {
            return Err(GridError::InvalidSize { width, depth });
        }
        let expected = cell_count(width, depth);
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                width,
                depth,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            depth,
            cells,
        })
    }

    /// Create a grid from raw bytes where `0` is open and anything else is a wall.
    pub fn from_bytes(width: i32, depth: i32, bytes: &[u8]) -> Result<Self, GridError> {
        Self::from_cells(width, depth, bytes.iter().copied().map(Cell::from).collect())
    }

    /// Width along x.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Depth along z.
    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// The full extent of the grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0, 0, self.width, self.depth)
    }

    /// Whether `loc` is a valid query location.
    #[inline]
    pub fn in_bounds(&self, loc: Location) -> bool {
        loc.x >= 0 && loc.x < self.width && loc.z >= 0 && loc.z < self.depth
    }

    /// Whether `loc` lies strictly inside the border ring.
    #[inline]
    pub fn is_interior(&self, loc: Location) -> bool {
        loc.x >= 1 && loc.x <= self.width - 2 && loc.z >= 1 && loc.z <= self.depth - 2
    }

    #[inline]
    fn index(&self, loc: Location) -> usize {
        loc.z as usize * self.width as usize + loc.x as usize
    }

    /// Get the cell at a location, or `None` if out of bounds.
    pub fn at(&self, loc: Location) -> Option<Cell> {
        if !self.in_bounds(loc) {
            return None;
        }
        Some(self.cells[self.index(loc)])
    }

    /// Whether the cell at `loc` is a wall.
    ///
    /// Callers bounds-check with [`Grid::in_bounds`] first; an out-of-range
    /// location is not a wall, it is simply not part of the grid, and this
    /// returns `false` for it.
    #[inline]
    pub fn is_blocked(&self, loc: Location) -> bool {
        self.at(loc).is_some_and(Cell::is_blocked)
    }

    /// The four cardinal neighbours of `loc`, unfiltered.
    #[inline]
    pub fn neighbors(&self, loc: Location) -> [Location; 4] {
        loc.neighbors_4()
    }

    /// Set the cell at a location. Does nothing if out of bounds.
    pub fn set(&mut self, loc: Location, cell: Cell) {
        if !self.in_bounds(loc) {
            return;
        }
        let idx = self.index(loc);
        self.cells[idx] = cell;
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Set the outer ring to walls.
    pub fn wall_border(&mut self) {
        for loc in self.bounds().iter() {
            if !self.is_interior(loc) {
                self.set(loc, Cell::Blocked);
            }
        }
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterator over interior locations, row-major.
    pub fn interior(&self) -> BoundsIter {
        self.bounds().shrink(1).iter()
    }

    /// Iterate over `(Location, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1) as usize) {
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse one line per z row starting at z = 0. `#` or `1` is a wall,
    /// `.` or `0` is floor. Blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut depth = 0usize;

        for line in s.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' | '0' => Cell::Open,
                    '#' | '1' => Cell::Blocked,
                    _ => {
                        return Err(GridError::InvalidChar {
                            ch,
                            row: depth,
                            col,
                        });
                    }
                };
                cells.push(cell);
                found += 1;
            }
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::RaggedRow {
                    row: depth,
                    expected,
                    found,
                });
            }
            depth += 1;
        }

        let Some(width) = width else {
            return Err(GridError::Empty);
        };
        Grid::from_cells(width as i32, depth as i32, cells)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    width: i32,
    depth: i32,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        Grid::from_cells(raw.width, raw.depth, raw.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = Grid::new(10, 5);
        assert_eq!(g.width(), 10);
        assert_eq!(g.depth(), 5);
        assert_eq!(g.count(Cell::Open), 50);
    }

    #[test]
    fn test_cell_count_beyond_i32() {
        assert_eq!(cell_count(10, 5), 50);
        assert_eq!(cell_count(50_000, 50_000), 2_500_000_000);
        assert_eq!(cell_count(i32::MAX, 2), 2 * i32::MAX as usize);
        assert_eq!(Grid::new(-3, 7).count(Cell::Open), 0);
    }

    #[test]
    fn test_set_and_at() {
        let mut g = Grid::new(4, 4);
        let loc = Location::new(2, 3);
        g.set(loc, Cell::Blocked);
        assert_eq!(g.at(loc), Some(Cell::Blocked));
        assert!(g.is_blocked(loc));
        assert_eq!(g.at(Location::new(0, 0)), Some(Cell::Open));
        assert_eq!(g.at(Location::new(10, 10)), None);
        // Out of range writes are ignored.
        g.set(Location::new(-1, 0), Cell::Blocked);
        assert_eq!(g.count(Cell::Blocked), 1);
    }

    #[test]
    fn test_out_of_range_is_not_blocked() {
        let g: Grid = "###\n###\n###".parse().unwrap();
        assert!(g.is_blocked(Location::new(1, 1)));
        assert!(!g.is_blocked(Location::new(-1, 1)));
        assert!(!g.is_blocked(Location::new(3, 0)));
        assert!(!g.in_bounds(Location::new(3, 0)));
    }

    #[test]
    fn test_neighbors_unfiltered() {
        let g = Grid::new(3, 3);
        let n = g.neighbors(Location::new(0, 0));
        assert_eq!(
            n,
            [
                Location::new(1, 0),
                Location::new(0, 1),
                Location::new(-1, 0),
                Location::new(0, -1),
            ]
        );
    }

    #[test]
    fn test_interior() {
        let g = Grid::new(5, 4);
        let inner: Vec<_> = g.interior().collect();
        assert_eq!(inner.len(), 3 * 2);
        assert!(inner.iter().all(|&l| g.is_interior(l)));
        assert!(!g.is_interior(Location::new(0, 1)));
        assert!(!g.is_interior(Location::new(4, 1)));
        assert!(!g.is_interior(Location::new(1, 3)));
    }

    #[test]
    fn test_wall_border() {
        let mut g = Grid::new(5, 5);
        g.wall_border();
        assert_eq!(g.count(Cell::Blocked), 16);
        assert!(g.interior().all(|l| !g.is_blocked(l)));
    }

    #[test]
    fn test_parse_and_display() {
        let text = "#####\n#...#\n#.#.#\n#...#\n#####\n";
        let g: Grid = text.parse().unwrap();
        assert_eq!(g.width(), 5);
        assert_eq!(g.depth(), 5);
        assert!(g.is_blocked(Location::new(2, 2)));
        assert!(!g.is_blocked(Location::new(1, 2)));
        assert_eq!(g.to_string(), text);
    }

    #[test]
    fn test_parse_digits() {
        let g: Grid = "010\n000".parse().unwrap();
        assert!(g.is_blocked(Location::new(1, 0)));
        assert_eq!(g.count(Cell::Blocked), 1);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(GridError::Empty));
        assert_eq!(
            "...\n..".parse::<Grid>(),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "..x".parse::<Grid>(),
            Err(GridError::InvalidChar {
                ch: 'x',
                row: 0,
                col: 2
            })
        );
    }

    #[test]
    fn test_from_cells_validates() {
        assert!(matches!(
            Grid::from_cells(2, 2, vec![Cell::Open; 3]),
            Err(GridError::SizeMismatch { expected: 4, found: 3, .. })
        ));
        assert!(matches!(
            Grid::from_cells(0, 2, Vec::new()),
            Err(GridError::InvalidSize { .. })
        ));
        let g = Grid::from_bytes(2, 1, &[0, 7]).unwrap();
        assert!(g.is_blocked(Location::new(1, 0)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g: Grid = "###\n#.#\n###".parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn inconsistent_grid_rejected() {
        let json = r#"{"width":2,"depth":2,"cells":["Open"]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
