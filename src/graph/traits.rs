//! Trait definitions for graph abstractions.
//!
//! The dominance algorithms are written against these traits instead of
//! [`DirectedGraph`](crate::DirectedGraph) directly, so a host IR can expose its
//! own control flow graph without first copying it.
//!
//! - [`GraphBase`] - Node count and node iteration
//! - [`Successors`] - Forward adjacency, in edge insertion order
//! - [`Predecessors`] - Reverse adjacency, in edge insertion order
//! - [`RootedGraph`] - A designated entry node
//!
//! Adjacency order is significant: DFS numbering follows successors in exactly
//! the order an implementation yields them.

use crate::graph::NodeId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    ///
    /// Valid node handles are exactly `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers, in ascending order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId::new)
    }
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns the successors of `node` in edge insertion order.
    ///
    /// Every yielded handle must lie in `0..node_count()`; traversals report a
    /// dangling successor as [`Error::InvalidNode`](crate::Error::InvalidNode).
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns the predecessors of `node` in edge insertion order.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs with a designated entry node.
///
/// This is the input contract of the dominance computation: a node set, a
/// forward adjacency with deterministic order, the matching reverse adjacency,
/// and a single entry.
///
/// # Examples
///
/// ```rust
/// use cfgdom::{compute_dominators, GraphBase, NodeId, Predecessors, RootedGraph, Successors};
///
/// // A host IR exposing its blocks without building a `DirectedGraph`.
/// struct Blocks {
///     succs: Vec<Vec<usize>>,
///     preds: Vec<Vec<usize>>,
/// }
///
/// impl GraphBase for Blocks {
///     fn node_count(&self) -> usize {
///         self.succs.len()
///     }
/// }
///
/// impl Successors for Blocks {
///     fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
///         self.succs[node.index()].iter().copied().map(NodeId::new)
///     }
/// }
///
/// impl Predecessors for Blocks {
///     fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
///         self.preds[node.index()].iter().copied().map(NodeId::new)
///     }
/// }
///
/// impl RootedGraph for Blocks {
///     fn entry(&self) -> Option<NodeId> {
///         Some(NodeId::new(0))
///     }
/// }
///
/// let blocks = Blocks {
///     succs: vec![vec![1], vec![]],
///     preds: vec![vec![], vec![0]],
/// };
/// let dominance = compute_dominators(&blocks)?;
/// assert_eq!(dominance.immediate_dominator(NodeId::new(1)), Some(NodeId::new(0)));
/// # Ok::<(), cfgdom::Error>(())
/// ```
pub trait RootedGraph: Successors + Predecessors {
    /// Returns the entry node, or `None` if none has been designated.
    fn entry(&self) -> Option<NodeId>;
}
