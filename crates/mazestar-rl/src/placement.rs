//! Random start/goal placement on a maze.

use mazestar_core::{Grid, Location};
use rand::Rng;
use rand::seq::SliceRandom;

/// Failure to place the search endpoints.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Fewer than two open interior cells exist.
    #[error("not enough free cells to place start and goal (found {found})")]
    InsufficientFreeCells { found: usize },
}

/// A pair of distinct open interior cells to search between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub start: Location,
    pub goal: Location,
}

impl Placement {
    /// Shuffle the open interior cells and take the first as start and the
    /// last as goal.
    ///
    /// The border ring is never chosen.
    pub fn choose<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Result<Self, PlacementError> {
        let mut free = Self::free_cells(grid);
        if free.len() < 2 {
            log::warn!("only {} free cells, cannot place start and goal", free.len());
            return Err(PlacementError::InsufficientFreeCells { found: free.len() });
        }
        free.shuffle(rng);

        let start = free[0];
        let goal = free[free.len() - 1];
        log::debug!("placed start {} and goal {}", start, goal);
        Ok(Self { start, goal })
    }

    /// Open interior cells in row-major order (z outer, x inner).
    pub fn free_cells(grid: &Grid) -> Vec<Location> {
        grid.interior().filter(|&loc| !grid.is_blocked(loc)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazestar_core::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_endpoints_are_distinct_open_interior() {
        let grid: Grid = "######\n#..#.#\n#.#..#\n######".parse().unwrap();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Placement::choose(&grid, &mut rng).unwrap();
            assert_ne!(p.start, p.goal);
            for loc in [p.start, p.goal] {
                assert!(grid.is_interior(loc));
                assert!(!grid.is_blocked(loc));
            }
        }
    }

    #[test]
    fn test_two_cells_use_both() {
        let grid: Grid = "####\n#..#\n####".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let p = Placement::choose(&grid, &mut rng).unwrap();
        let mut got = [p.start, p.goal];
        got.sort();
        assert_eq!(got, [Location::new(1, 1), Location::new(2, 1)]);
    }

    #[test]
    fn test_border_cells_ignored() {
        // Only the border is open.
        let mut grid = Grid::new(4, 4);
        for loc in grid.interior().collect::<Vec<_>>() {
            grid.set(loc, Cell::Blocked);
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Placement::choose(&grid, &mut rng),
            Err(PlacementError::InsufficientFreeCells { found: 0 })
        );
    }

    #[test]
    fn test_single_free_cell() {
        let grid: Grid = "###\n#.#\n###".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let err = Placement::choose(&grid, &mut rng).unwrap_err();
        assert_eq!(err, PlacementError::InsufficientFreeCells { found: 1 });
        assert!(err.to_string().contains("found 1"));
    }
}
