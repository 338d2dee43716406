//! Shared driver logic for the `astar-trace` binary.
//!
//! Builds a maze, places start and goal, then steps a [`SearchEngine`] one
//! expansion at a time while logging every event it reports.

use std::collections::HashSet;

use clap::ValueEnum;
use mazestar_core::{Grid, Location};
use mazestar_paths::{SearchConfig, SearchEngine, SearchEvent, SearchState, UpdatePolicy};
use mazestar_rl::{Layout, MazeGen, Placement, PlacementError};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Maze layout selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Open floor with one wall segment.
    WallRow,
    /// Open interior inside a wall border.
    Bordered,
    /// Randomly scattered walls.
    Scatter,
    /// Random-walk carved cave.
    Walk,
}

/// Open-node update rule selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    ImproveOnly,
    LastWriteWins,
}

impl From<PolicyArg> for UpdatePolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::ImproveOnly => UpdatePolicy::ImproveOnly,
            PolicyArg::LastWriteWins => UpdatePolicy::LastWriteWins,
        }
    }
}

/// Everything one trace run needs.
#[derive(Debug, Clone)]
pub struct TraceConfig {
    pub width: i32,
    pub depth: i32,
    pub layout: LayoutArg,
    /// Wall density for `scatter`; `walk` carves `1 - wall_pct` of the interior.
    pub wall_pct: f64,
    pub seed: u64,
    pub policy: UpdatePolicy,
    pub max_expansions: Option<usize>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            width: 10,
            depth: 10,
            layout: LayoutArg::WallRow,
            wall_pct: 0.3,
            seed: 0,
            policy: UpdatePolicy::default(),
            max_expansions: None,
        }
    }
}

/// Errors a trace run can end with.
#[derive(thiserror::Error, Debug)]
pub enum TraceError {
    #[error("maze must be at least 3x3, got {width}x{depth}")]
    TooSmall { width: i32, depth: i32 },

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Outcome of a trace run.
#[derive(Debug)]
pub struct Trace {
    pub grid: Grid,
    pub placement: Placement,
    pub state: SearchState,
    /// Start excluded, goal included. Empty unless `state` is `Found`.
    pub path: Vec<Location>,
    /// `step()` calls made, including the final one.
    pub steps: usize,
    pub expansions: usize,
    /// Events the engine reported.
    pub events: usize,
}

/// The [`Layout`] a command-line choice maps to.
pub fn layout_for(arg: LayoutArg, wall_pct: f64) -> Layout {
    match arg {
        LayoutArg::WallRow => Layout::WallRow,
        LayoutArg::Bordered => Layout::Bordered,
        LayoutArg::Scatter => Layout::Scatter { wall_pct },
        LayoutArg::Walk => Layout::RandomWalk {
            fill_pct: 1.0 - wall_pct,
        },
    }
}

fn log_event(event: &SearchEvent) {
    match event {
        SearchEvent::NodeExpanded { location, g, h, f } => {
            log::debug!("reveal {location}  g={g:.2} h={h:.2} f={f:.2}");
        }
        SearchEvent::NodeClosed(location) => log::debug!("fade   {location}"),
        SearchEvent::SearchFound(path) => log::info!("goal reached, {} steps", path.len()),
        SearchEvent::SearchExhausted => log::info!("no path exists"),
    }
}

/// Generate the maze, place the endpoints and drive the search to its end.
pub fn run(config: &TraceConfig) -> Result<Trace, TraceError> {
    if config.width < 3 || config.depth < 3 {
        return Err(TraceError::TooSmall {
            width: config.width,
            depth: config.depth,
        });
    }

    let mut mg = MazeGen::with_rng(StdRng::seed_from_u64(config.seed));
    let layout = layout_for(config.layout, config.wall_pct);
    let grid = mg.generate(config.width, config.depth, layout);
    let placement = Placement::choose(&grid, &mut mg.rng)?;
    log::info!(
        "searching {} -> {} on a {}x{} {:?} maze",
        placement.start,
        placement.goal,
        config.width,
        config.depth,
        config.layout
    );

    let mut events = 0usize;
    let (state, path, steps, expansions) = {
        let search_config = SearchConfig {
            update_policy: config.policy,
            max_expansions: config.max_expansions,
        };
        let mut engine = SearchEngine::new()
            .with_config(search_config)
            .with_observer(|e: &SearchEvent| {
                events += 1;
                log_event(e);
            });
        engine.begin(&grid, placement.start, placement.goal);

        let mut steps = 0usize;
        let state = loop {
            let state = engine.step();
            steps += 1;
            if state.is_terminal() {
                break state;
            }
            if let Some(current) = engine.current() {
                log::trace!("tick {steps}: next {}", current.location);
            }
        };
        let path = engine.path_locations().unwrap_or_default();
        (state, path, steps, engine.expansions())
    };

    Ok(Trace {
        grid,
        placement,
        state,
        path,
        steps,
        expansions,
        events,
    })
}

/// Text dump of the maze with `S` start, `G` goal and `*` path cells.
pub fn render(trace: &Trace) -> String {
    let on_path: HashSet<Location> = trace.path.iter().copied().collect();
    let mut out = String::new();
    for z in 0..trace.grid.depth() {
        for x in 0..trace.grid.width() {
            let loc = Location::new(x, z);
            let ch = if loc == trace.placement.start {
                'S'
            } else if loc == trace.placement.goal {
                'G'
            } else if on_path.contains(&loc) {
                '*'
            } else {
                trace.grid.at(loc).map_or(' ', |c| c.glyph())
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
