//! The step-wise A* search engine.
//!
//! A [`SearchEngine`] performs one expansion per [`SearchEngine::step`] call
//! so a driver can pause between expansions (to animate the frontier, to
//! single-step in a debugger, ...). Driving it in a tight loop with
//! [`SearchEngine::run_to_end`] gives the same final result.

use mazestar_core::Location;

use crate::config::{SearchConfig, UpdatePolicy};
use crate::distance::euclidean;
use crate::error::SearchError;
use crate::events::{SearchEvent, SearchObserver};
use crate::node::{NodeId, SearchNode};
use crate::sets::{ClosedSet, OpenSet};
use crate::traits::SearchGrid;

/// Lifecycle of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// No search has begun.
    Idle,
    /// Expansions remain.
    Running,
    /// The goal was selected for expansion; a path is available.
    Found,
    /// The frontier is empty (or the expansion budget ran out); no path.
    Exhausted,
}

impl SearchState {
    /// Whether further steps are no-ops.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchState::Found | SearchState::Exhausted)
    }
}

/// Incremental A* over a [`SearchGrid`].
///
/// Nodes live in an arena owned by the engine; the open and closed sets and
/// every parent link refer to them by [`NodeId`]. Everything is discarded by
/// the next [`begin`](Self::begin).
///
/// Costs are straight-line distances, so every cardinal move costs `1.0` and
/// the heuristic is the Euclidean distance to the goal.
pub struct SearchEngine<'g, G: ?Sized, O = ()> {
    grid: Option<&'g G>,
    config: SearchConfig,
    observer: O,
    state: SearchState,
    nodes: Vec<SearchNode>,
    open: OpenSet,
    closed: ClosedSet,
    start: Option<NodeId>,
    goal: Option<SearchNode>,
    current: Option<NodeId>,
    path: Vec<SearchNode>,
    expansions: usize,
}

impl<'g, G: SearchGrid + ?Sized> SearchEngine<'g, G> {
    /// Create an idle engine with the default config and no observer.
    pub fn new() -> Self {
        Self::with_parts(SearchConfig::default(), ())
    }
}

impl<'g, G: SearchGrid + ?Sized> Default for SearchEngine<'g, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g, G: SearchGrid + ?Sized, O: SearchObserver> SearchEngine<'g, G, O> {
    fn with_parts(config: SearchConfig, observer: O) -> Self {
        Self {
            grid: None,
            config,
            observer,
            state: SearchState::Idle,
            nodes: Vec::new(),
            open: OpenSet::default(),
            closed: ClosedSet::default(),
            start: None,
            goal: None,
            current: None,
            path: Vec::new(),
            expansions: 0,
        }
    }

    /// Replace the config. Takes effect from the next step.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Swap in a different observer, keeping the config.
    ///
    /// Any search in progress is dropped.
    pub fn with_observer<P: SearchObserver>(self, observer: P) -> SearchEngine<'g, G, P> {
        SearchEngine::with_parts(self.config, observer)
    }

    /// The active config.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The attached observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer, e.g. to drain a recorder between
    /// steps.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the engine, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Start a new search from `start` to `goal` over `grid`.
    ///
    /// Any search in progress is discarded. The start node is pushed into
    /// the open set and becomes the first node to expand.
    pub fn begin(&mut self, grid: &'g G, start: Location, goal: Location) {
        self.nodes.clear();
        self.open.clear();
        self.closed.clear();
        self.path.clear();
        self.expansions = 0;

        let start_id = NodeId(0);
        self.nodes.push(SearchNode::root(start));
        self.open.push(start, start_id);

        self.grid = Some(grid);
        self.start = Some(start_id);
        self.goal = Some(SearchNode::root(goal));
        self.current = Some(start_id);
        self.state = SearchState::Running;

        log::debug!("search begins: {} -> {}", start, goal);
    }

    /// Perform one expansion and return the resulting state.
    ///
    /// Does nothing when idle or when the search has already ended.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }
        let (Some(grid), Some(current_id), Some(goal)) = (self.grid, self.current, self.goal)
        else {
            return self.state;
        };

        // The current node has been taken out of open but not yet expanded,
        // so an empty frontier here does not mean the search is over.
        let current = self.nodes[current_id.0];
        if current.location == goal.location {
            return self.found();
        }

        if self
            .config
            .max_expansions
            .is_some_and(|limit| self.expansions >= limit)
        {
            log::debug!("expansion budget of {} used up", self.expansions);
            return self.exhaust();
        }

        for neighbor in grid.neighbors(current.location) {
            if !grid.in_bounds(neighbor) || grid.is_blocked(neighbor) {
                continue;
            }
            if self.closed.contains(neighbor) {
                continue;
            }

            let g = current.g + euclidean(current.location, neighbor);
            let h = euclidean(neighbor, goal.location);
            let f = g + h;

            match self.open.get(neighbor) {
                Some(id) => {
                    let node = &mut self.nodes[id.0];
                    if self.config.update_policy == UpdatePolicy::ImproveOnly && g >= node.g {
                        continue;
                    }
                    node.g = g;
                    node.h = h;
                    node.f = f;
                    node.parent = Some(current_id);
                }
                None => {
                    let id = NodeId(self.nodes.len());
                    self.nodes.push(SearchNode::new(neighbor, g, h, current_id));
                    self.open.push(neighbor, id);
                }
            }

            log::trace!("frontier {} g={:.2} h={:.2} f={:.2}", neighbor, g, h, f);
            self.observer.on_event(&SearchEvent::NodeExpanded {
                location: neighbor,
                g,
                h,
                f,
            });
        }
        self.expansions += 1;

        let Some(next) = self.open.pop_min(&self.nodes) else {
            return self.exhaust();
        };
        let loc = self.nodes[next.0].location;
        self.closed.insert(loc, next);
        if Some(loc) != self.start() && loc != goal.location {
            self.observer.on_event(&SearchEvent::NodeClosed(loc));
        }
        self.current = Some(next);

        self.state
    }

    /// Perform at most `n` steps, stopping early at a terminal state.
    pub fn step_n(&mut self, n: usize) -> SearchState {
        for _ in 0..n {
            if self.step().is_terminal() {
                break;
            }
        }
        self.state
    }

    /// Step until the search ends. Returns immediately when idle.
    pub fn run_to_end(&mut self) -> SearchState {
        while self.state == SearchState::Running {
            self.step();
        }
        self.state
    }

    fn found(&mut self) -> SearchState {
        self.path = self.trace_back();
        self.state = SearchState::Found;
        log::debug!(
            "goal reached after {} expansions, path of {} steps",
            self.expansions,
            self.path.len()
        );
        let locations = self.path.iter().map(|n| n.location).collect();
        self.observer.on_event(&SearchEvent::SearchFound(locations));
        self.state
    }

    fn exhaust(&mut self) -> SearchState {
        self.path.clear();
        self.state = SearchState::Exhausted;
        log::debug!("no path after {} expansions", self.expansions);
        self.observer.on_event(&SearchEvent::SearchExhausted);
        self.state
    }

    /// Walk parent links from the current node back to the start, start
    /// excluded, and return them in start-to-goal order.
    ///
    /// A node's parent was always closed before it, so the walk ends.
    fn trace_back(&self) -> Vec<SearchNode> {
        let mut buf = Vec::new();
        let Some(start) = self.start() else {
            return buf;
        };
        let mut cursor = self.current;
        while let Some(id) = cursor {
            let node = self.nodes[id.0];
            if node.location == start {
                break;
            }
            buf.push(node);
            cursor = node.parent;
        }
        buf.reverse();
        buf
    }

    // -----------------------------------------------------------------------
    // Results
    // -----------------------------------------------------------------------

    /// The path from start to goal, start excluded and goal included.
    ///
    /// Only available once the search is [`SearchState::Found`]; repeated
    /// calls return the same nodes.
    pub fn reconstruct_path(&self) -> Result<&[SearchNode], SearchError> {
        match self.state {
            SearchState::Found => Ok(&self.path),
            state => Err(SearchError::ReconstructBeforeFound { state }),
        }
    }

    /// Locations of [`reconstruct_path`](Self::reconstruct_path).
    pub fn path_locations(&self) -> Result<Vec<Location>, SearchError> {
        Ok(self.reconstruct_path()?.iter().map(|n| n.location).collect())
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The grid being searched, once a search has begun.
    pub fn grid(&self) -> Option<&'g G> {
        self.grid
    }

    /// Start location of the current search.
    pub fn start(&self) -> Option<Location> {
        self.start.map(|id| self.nodes[id.0].location)
    }

    /// Goal location of the current search.
    pub fn goal(&self) -> Option<Location> {
        self.goal.map(|n| n.location)
    }

    /// The node selected for the next expansion.
    pub fn current(&self) -> Option<&SearchNode> {
        self.current.map(|id| &self.nodes[id.0])
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// Frontier nodes in their current selection order.
    pub fn open_nodes(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.open.iter().map(|id| &self.nodes[id.0])
    }

    /// Expanded nodes in the order they were closed.
    pub fn closed_nodes(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.closed.iter().map(|id| &self.nodes[id.0])
    }

    /// Number of frontier nodes.
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Number of expanded nodes.
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Whether `loc` is on the frontier.
    pub fn is_open(&self, loc: Location) -> bool {
        self.open.contains(loc)
    }

    /// Whether `loc` has been expanded.
    pub fn is_closed(&self, loc: Location) -> bool {
        self.closed.contains(loc)
    }

    /// How many expansions have run since [`begin`](Self::begin).
    pub fn expansions(&self) -> usize {
        self.expansions
    }
}
