//! **mazestar-core** — core types for grid maze search.
//!
//! This crate provides the foundational types used across the *mazestar*
//! workspace: cell locations, the four cardinal directions, half-open
//! bounds, and the passability [`Grid`] searches run over.

pub mod geom;
pub mod grid;

pub use geom::{Bounds, BoundsIter, Direction, Location};
pub use grid::{Cell, Grid, GridError};
