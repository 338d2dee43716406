use mazestar_core::{Direction, Grid, Location};

/// Read-only grid interface the search engine runs over.
///
/// Implementors supply the extent and passability; the engine does all the
/// filtering itself, so [`SearchGrid::neighbors`] returns raw offsets.
pub trait SearchGrid {
    /// Number of columns along x.
    fn width(&self) -> i32;

    /// Number of rows along z.
    fn depth(&self) -> i32;

    /// Whether `loc` is a wall. Only called for in-bounds locations.
    fn is_blocked(&self, loc: Location) -> bool;

    /// Whether `loc` lies in `[0, width) × [0, depth)`.
    fn in_bounds(&self, loc: Location) -> bool {
        loc.x >= 0 && loc.x < self.width() && loc.z >= 0 && loc.z < self.depth()
    }

    /// Cardinal neighbours of `loc` in [`Direction::ALL`] order, unfiltered.
    fn neighbors(&self, loc: Location) -> [Location; 4] {
        Direction::ALL.map(|d| loc + d)
    }
}

impl SearchGrid for Grid {
    fn width(&self) -> i32 {
        Grid::width(self)
    }

    fn depth(&self) -> i32 {
        Grid::depth(self)
    }

    fn is_blocked(&self, loc: Location) -> bool {
        Grid::is_blocked(self, loc)
    }

    fn in_bounds(&self, loc: Location) -> bool {
        Grid::in_bounds(self, loc)
    }

    fn neighbors(&self, loc: Location) -> [Location; 4] {
        Grid::neighbors(self, loc)
    }
}
