use std::hash::{Hash, Hasher};

use mazestar_core::Location;

/// Index of a [`SearchNode`] in the engine's node arena.
///
/// Ids stay valid until the next [`SearchEngine::begin`](crate::SearchEngine::begin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A location reached by the search, with its costs and predecessor.
///
/// Two nodes are equal when their locations are equal; costs and parent are
/// ignored, and hashing follows the same rule.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub location: Location,
    /// Accumulated path cost from the start.
    pub g: f64,
    /// Straight-line estimate to the goal.
    pub h: f64,
    /// `g + h`, the expansion priority.
    pub f: f64,
    /// Predecessor on the best known path, `None` for the start node.
    pub parent: Option<NodeId>,
}

impl SearchNode {
    /// A node with zeroed costs and no parent.
    pub const fn root(location: Location) -> Self {
        Self {
            location,
            g: 0.0,
            h: 0.0,
            f: 0.0,
            parent: None,
        }
    }

    /// A node reached from `parent` with the given costs. `f` is `g + h`.
    pub fn new(location: Location, g: f64, h: f64, parent: NodeId) -> Self {
        Self {
            location,
            g,
            h,
            f: g + h,
            parent: Some(parent),
        }
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.location.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_costs() {
        let a = SearchNode::new(Location::new(1, 1), 2.0, 3.0, NodeId(0));
        let b = SearchNode::root(Location::new(1, 1));
        let c = SearchNode::root(Location::new(1, 2));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.f, 5.0);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
