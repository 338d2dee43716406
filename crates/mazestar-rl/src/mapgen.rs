//! Maze layouts.
//!
//! Provides the fixed wall-row layout plus two random ones:
//! - **Scatter**: independent walls sprinkled over the interior.
//! - **Random Walk**: a drunk walk carving floor out of solid rock.
//!
//! Every layout except [`Layout::WallRow`] keeps the border ring blocked.

use mazestar_core::{Cell, Direction, Grid, Location};
use rand::{Rng, RngExt};

/// Which layout [`MazeGen::generate`] builds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    /// Open floor with a single wall on row z = 3, x in 3..=7.
    WallRow,
    /// Open interior inside a wall border.
    Bordered,
    /// Bordered, each interior cell a wall with probability `wall_pct`.
    Scatter { wall_pct: f64 },
    /// Solid rock carved by a random walk until `fill_pct` of the interior
    /// is open.
    RandomWalk { fill_pct: f64 },
}

/// Maze generator drawing randomness from `rng`.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using the given rng.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Build a `width × depth` grid with the given layout.
    pub fn generate(&mut self, width: i32, depth: i32, layout: Layout) -> Grid {
        let grid = match layout {
            Layout::WallRow => Self::wall_row(width, depth),
            Layout::Bordered => Self::bordered(width, depth),
            Layout::Scatter { wall_pct } => self.scatter(width, depth, wall_pct),
            Layout::RandomWalk { fill_pct } => self.random_walk(width, depth, fill_pct),
        };
        log::debug!(
            "generated {}x{} {:?} maze with {} walls",
            width,
            depth,
            layout,
            grid.count(Cell::Blocked)
        );
        grid
    }

    /// All floor except a wall on row z = 3 spanning x = 3..=7, clipped to
    /// the grid.
    pub fn wall_row(width: i32, depth: i32) -> Grid {
        let mut grid = Grid::new(width, depth);
        for x in 3..=7 {
            grid.set(Location::new(x, 3), Cell::Blocked);
        }
        grid
    }

    /// Open interior, blocked border ring.
    pub fn bordered(width: i32, depth: i32) -> Grid {
        let mut grid = Grid::new(width, depth);
        grid.wall_border();
        grid
    }

    /// Bordered grid whose interior cells are walls with probability
    /// `wall_pct` (clamped to `0.0..=1.0`).
    pub fn scatter(&mut self, width: i32, depth: i32, wall_pct: f64) -> Grid {
        let wall_pct = wall_pct.clamp(0.0, 1.0);
        let mut grid = Self::bordered(width, depth);
        let interior: Vec<_> = grid.interior().collect();
        for loc in interior {
            let r: f64 = self.rng.random();
            if r < wall_pct {
                grid.set(loc, Cell::Blocked);
            }
        }
        grid
    }

    /// Start from solid rock and carve interior floor with a 4-direction
    /// random walk from the centre, until `fill_pct` (0.0–1.0) of the
    /// interior is open.
    ///
    /// The walk never leaves the interior, so the floor is one connected
    /// region.
    pub fn random_walk(&mut self, width: i32, depth: i32, fill_pct: f64) -> Grid {
        let mut grid = Grid::new(width, depth);
        grid.fill(Cell::Blocked);

        let inner = grid.bounds().shrink(1);
        let total = inner.len();
        if total == 0 {
            return grid;
        }
        let target = ((total as f64 * fill_pct.clamp(0.0, 1.0)) as usize).max(1);
        let step_limit = total * 64; // safety limit

        let mut pos = Location::new(width / 2, depth / 2);
        let mut carved = 0usize;
        for _ in 0..step_limit {
            if grid.is_blocked(pos) {
                grid.set(pos, Cell::Open);
                carved += 1;
                if carved >= target {
                    break;
                }
            }

            let dir = Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
            let next = pos + dir;
            // Stay put at the interior edge.
            if inner.contains(next) {
                pos = next;
            }
        }

        grid
    }
}
