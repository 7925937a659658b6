//! Node handles for control flow graphs.
//!
//! Every basic unit of control flow is addressed by a [`NodeId`], a dense integer
//! handle assigned at registration time. All per-node analysis state (DFS index,
//! DFS parent, semidominator, immediate dominator) lives in plain vectors indexed
//! by this handle, never inside the node itself.

use std::fmt;

/// A dense handle for a node of a [`DirectedGraph`](crate::DirectedGraph).
///
/// Handles are assigned sequentially starting from 0 by
/// [`DirectedGraph::add_node`](crate::DirectedGraph::add_node), so they can be
/// used directly as indices into per-node attribute vectors.
///
/// # Examples
///
/// ```rust
/// use cfgdom::{DirectedGraph, NodeId};
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// let header = graph.add_node("header");
/// let body = graph.add_node("body");
///
/// assert_eq!(header, NodeId::new(0));
/// assert_eq!(body.index(), 1);
///
/// let mut visits = vec![0u32; graph.node_count()];
/// visits[body.index()] += 1;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a `NodeId` from a raw index.
    ///
    /// Mostly useful for tests and for host IRs that already number their
    /// blocks densely. A handle built this way is only meaningful for a graph
    /// with more than `index` nodes.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index of this handle.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_roundtrip_index() {
        let node = NodeId::new(42);
        assert_eq!(node.index(), 42);

        let raw: usize = node.into();
        assert_eq!(raw, 42);
        assert_eq!(NodeId::from(raw), node);
    }

    #[test]
    fn test_node_id_ordering_follows_registration() {
        let mut nodes = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        nodes.sort();
        assert_eq!(nodes, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_node_id_formatting() {
        let node = NodeId::new(7);
        assert_eq!(format!("{node:?}"), "NodeId(7)");
        assert_eq!(format!("{node}"), "n7");
    }
}
