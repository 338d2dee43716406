//! Open and closed node collections.
//!
//! Both map a [`Location`] to the [`NodeId`] of the node stored there, so
//! membership checks are hash lookups. The open set also keeps a frontier
//! order used for stable minimum extraction.

use std::collections::{HashMap, VecDeque};

use mazestar_core::Location;

use crate::node::{NodeId, SearchNode};

/// Frontier nodes discovered but not yet expanded.
#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    order: VecDeque<NodeId>,
    index: HashMap<Location, NodeId>,
}

impl OpenSet {
    pub(crate) fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub(crate) fn get(&self, loc: Location) -> Option<NodeId> {
        self.index.get(&loc).copied()
    }

    #[inline]
    pub(crate) fn contains(&self, loc: Location) -> bool {
        self.index.contains_key(&loc)
    }

    /// Append a node at the back of the frontier order.
    pub(crate) fn push(&mut self, loc: Location, id: NodeId) {
        self.order.push_back(id);
        self.index.insert(loc, id);
    }

    /// Remove the first node with the smallest `f`.
    ///
    /// The frontier is stable-sorted by `f` in place before the front is
    /// taken, so the resulting order carries over to the next extraction and
    /// equal-`f` nodes keep their relative position.
    pub(crate) fn pop_min(&mut self, nodes: &[SearchNode]) -> Option<NodeId> {
        self.order
            .make_contiguous()
            .sort_by(|a, b| nodes[a.0].f.total_cmp(&nodes[b.0].f));
        let id = self.order.pop_front()?;
        self.index.remove(&nodes[id.0].location);
        Some(id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }
}

/// Nodes already expanded, in the order they were closed.
#[derive(Debug, Default)]
pub(crate) struct ClosedSet {
    order: Vec<NodeId>,
    index: HashMap<Location, NodeId>,
}

impl ClosedSet {
    pub(crate) fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub(crate) fn contains(&self, loc: Location) -> bool {
        self.index.contains_key(&loc)
    }

    pub(crate) fn insert(&mut self, loc: Location, id: NodeId) {
        if self.index.insert(loc, id).is_none() {
            self.order.push(id);
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: i32, f: f64) -> SearchNode {
        SearchNode {
            location: Location::new(x, 0),
            g: f,
            h: 0.0,
            f,
            parent: None,
        }
    }

    #[test]
    fn pop_min_is_stable_on_ties() {
        let nodes = vec![node(0, 3.0), node(1, 2.0), node(2, 2.0), node(3, 1.0)];
        let mut open = OpenSet::default();
        for (i, n) in nodes.iter().enumerate() {
            open.push(n.location, NodeId(i));
        }
        assert_eq!(open.pop_min(&nodes), Some(NodeId(3)));
        assert_eq!(open.pop_min(&nodes), Some(NodeId(1)));
        assert!(!open.contains(Location::new(1, 0)));
        assert_eq!(open.pop_min(&nodes), Some(NodeId(2)));
        assert_eq!(open.pop_min(&nodes), Some(NodeId(0)));
        assert_eq!(open.pop_min(&nodes), None);
        assert_eq!(open.len(), 0);
    }

    #[test]
    fn sorted_order_carries_over() {
        // After one extraction the frontier is [b(2), a(5)]. Lowering `a` to
        // tie with `b` must still yield `b` first.
        let mut nodes = vec![node(0, 5.0), node(1, 2.0), node(2, 1.0)];
        let mut open = OpenSet::default();
        for (i, n) in nodes.iter().enumerate() {
            open.push(n.location, NodeId(i));
        }
        assert_eq!(open.pop_min(&nodes), Some(NodeId(2)));
        nodes[0].f = 2.0;
        assert_eq!(open.pop_min(&nodes), Some(NodeId(1)));
        assert_eq!(open.pop_min(&nodes), Some(NodeId(0)));
    }

    #[test]
    fn closed_ignores_duplicates() {
        let mut closed = ClosedSet::default();
        closed.insert(Location::new(1, 1), NodeId(0));
        closed.insert(Location::new(1, 1), NodeId(0));
        assert_eq!(closed.len(), 1);
        assert!(closed.contains(Location::new(1, 1)));
        closed.clear();
        assert_eq!(closed.iter().count(), 0);
    }
}
