//! Incremental A* search over grid mazes.
//!
//! [`SearchEngine`] runs one expansion per [`SearchEngine::step`] so that a
//! driver can pause between expansions, show the frontier, and pick the
//! pacing. When the goal is selected the engine reports
//! [`SearchState::Found`] and the path is available from
//! [`SearchEngine::reconstruct_path`]; when the frontier runs dry it reports
//! [`SearchState::Exhausted`].
//!
//! ```
//! use mazestar_core::{Grid, Location};
//! use mazestar_paths::{SearchEngine, SearchState};
//!
//! let grid: Grid = "#####\n#...#\n#...#\n#...#\n#####".parse().unwrap();
//! let mut engine = SearchEngine::new();
//! engine.begin(&grid, Location::new(1, 1), Location::new(3, 3));
//! while !engine.step().is_terminal() {}
//! assert_eq!(engine.state(), SearchState::Found);
//! assert_eq!(engine.reconstruct_path().unwrap().len(), 4);
//! ```
//!
//! Progress is reported to a [`SearchObserver`] as [`SearchEvent`]s.

mod config;
mod distance;
mod engine;
mod error;
mod events;
mod node;
mod sets;
mod traits;

pub use config::{SearchConfig, UpdatePolicy};
pub use distance::{euclidean, manhattan};
pub use engine::{SearchEngine, SearchState};
pub use error::SearchError;
pub use events::{EventLog, SearchEvent, SearchObserver};
pub use node::{NodeId, SearchNode};
pub use traits::SearchGrid;
