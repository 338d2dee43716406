//! Maze collaborators for mazestar: layout generation and start/goal
//! placement.

pub mod mapgen;
pub mod placement;

pub use mapgen::{Layout, MazeGen};
pub use placement::{Placement, PlacementError};
