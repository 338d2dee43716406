//! Step an A* search over a generated maze and print the outcome.
//!
//! Run: cargo run --bin astar-trace -- --layout scatter --seed 7
//!
//! `RUST_LOG=debug` (or `--verbose`) logs every reveal and fade event.

use clap::Parser;
use mazestar_core::Cell;
use mazestar_demos::{LayoutArg, PolicyArg, TraceConfig, render, run};
use mazestar_paths::SearchState;

/// Command line arguments for the trace driver.
#[derive(Parser, Debug)]
#[command(name = "astar-trace")]
#[command(about = "Step an A* search over a generated maze")]
#[command(version)]
struct Args {
    /// Maze width along x
    #[arg(long, default_value_t = 10)]
    width: i32,

    /// Maze depth along z
    #[arg(long, default_value_t = 10)]
    depth: i32,

    /// Maze layout
    #[arg(long, value_enum, default_value_t = LayoutArg::WallRow)]
    layout: LayoutArg,

    /// Wall density for random layouts (0.0 - 1.0)
    #[arg(long, default_value_t = 0.3)]
    wall_pct: f64,

    /// Random seed for maze generation and placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// How revisited frontier nodes are updated
    #[arg(long, value_enum, default_value_t = PolicyArg::ImproveOnly)]
    policy: PolicyArg,

    /// Give up after this many expansions
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Log every search event
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = TraceConfig {
        width: args.width,
        depth: args.depth,
        layout: args.layout,
        wall_pct: args.wall_pct,
        seed,
        policy: args.policy.into(),
        max_expansions: args.max_expansions,
    };

    let trace = run(&config)?;
    print!("{}", render(&trace));
    println!(
        "seed {}  walls {}  steps {}  expansions {}  events {}",
        seed,
        trace.grid.count(Cell::Blocked),
        trace.steps,
        trace.expansions,
        trace.events
    );
    match trace.state {
        SearchState::Found => println!("path of {} steps: {:?}", trace.path.len(), trace.path),
        state => println!("search ended {:?}", state),
    }
    Ok(())
}
