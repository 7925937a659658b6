//! Control flow graph container.
//!
//! This module provides [`DirectedGraph`], the graph model consumed by the
//! dominance computation. It owns the node set, the forward adjacency, the
//! reverse adjacency and the entry node.
//!
//! The reverse adjacency is never set directly: [`DirectedGraph::add_edge`]
//! records every edge in both views at once, so the two can not diverge.

use crate::{
    graph::{
        node::NodeId,
        traits::{GraphBase, Predecessors, RootedGraph, Successors},
    },
    Error, Result,
};

/// A directed graph with per-node data and a designated entry node.
///
/// `DirectedGraph` is the ownership container for one analysed function:
///
/// - Node data (`N`) - any payload per node, `()` when none is needed
/// - Forward adjacency - successors of each node, in insertion order
/// - Reverse adjacency - predecessors of each node, derived from the forward edges
/// - Entry node - the root of every traversal
///
/// Self-loops and parallel edges are legal; control flow produces both.
///
/// # Lifecycle
///
/// The graph is built once (nodes, then edges, then the entry) and treated as
/// immutable by the analyses. Every analysis borrows it shared, so independent
/// graphs can be analysed from different threads.
///
/// # Examples
///
/// ```rust
/// use cfgdom::{DirectedGraph, NodeId};
///
/// // Diamond: A -> B, A -> C, B -> D, C -> D
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// let d = graph.add_node("D");
///
/// graph.add_edge(a, b)?;
/// graph.add_edge(a, c)?;
/// graph.add_edge(b, d)?;
/// graph.add_edge(c, d)?;
/// graph.set_entry(a)?;
///
/// assert_eq!(graph.successors(a).collect::<Vec<_>>(), vec![b, c]);
/// assert_eq!(graph.predecessors(d).collect::<Vec<_>>(), vec![b, c]);
/// assert_eq!(graph.entry(), Some(a));
/// # Ok::<(), cfgdom::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<N> {
    /// Node data storage
    nodes: Vec<N>,
    /// Successors per node (forward adjacency)
    outgoing: Vec<Vec<NodeId>>,
    /// Predecessors per node (reverse adjacency)
    incoming: Vec<Vec<NodeId>>,
    /// Total number of edges
    edge_count: usize,
    /// Designated entry node
    entry: Option<NodeId>,
}

impl<N> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> DirectedGraph<N> {
    /// Creates a new empty graph with no entry node.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            edge_count: 0,
            entry: None,
        }
    }

    /// Creates a new empty graph with pre-allocated node storage.
    #[must_use]
    pub fn with_capacity(node_capacity: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(node_capacity),
            outgoing: Vec::with_capacity(node_capacity),
            incoming: Vec::with_capacity(node_capacity),
            edge_count: 0,
            entry: None,
        }
    }

    /// Registers a new node and returns its handle.
    ///
    /// Handles are assigned sequentially from 0. The new node starts with an
    /// empty entry in both adjacency views.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(data);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Adds the edge `from -> to`.
    ///
    /// `to` is appended to the successors of `from`, and `from` to the
    /// predecessors of `to`. Insertion order is preserved in both views.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] if either endpoint was never registered.
    /// The graph is left unchanged in that case.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;

        self.outgoing[from.index()].push(to);
        self.incoming[to.index()].push(from);
        self.edge_count += 1;

        Ok(())
    }

    /// Designates `node` as the entry of the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] if `node` was never registered.
    pub fn set_entry(&mut self, node: NodeId) -> Result<()> {
        self.check_node(node)?;
        self.entry = Some(node);
        Ok(())
    }

    /// Returns the entry node, if one has been designated.
    #[must_use]
    pub fn entry(&self) -> Option<NodeId> {
        self.entry
    }

    /// Returns the data of `node`, or `None` if it does not exist.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Returns a mutable reference to the data of `node`.
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(node.index())
    }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges, counting parallel edges separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns an iterator over all node handles in registration order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Returns an iterator over all nodes with their handles.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, data)| (NodeId::new(i), data))
    }

    /// Returns an iterator over all edges as `(from, to)` pairs.
    ///
    /// Edges are grouped by source node; within a source they appear in
    /// insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.outgoing.iter().enumerate().flat_map(|(i, targets)| {
            targets.iter().map(move |&target| (NodeId::new(i), target))
        })
    }

    /// Returns the successors of `node` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing[node.index()].iter().copied()
    }

    /// Returns the predecessors of `node` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incoming[node.index()].iter().copied()
    }

    /// Returns the number of outgoing edges of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.outgoing[node.index()].len()
    }

    /// Returns the number of incoming edges of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.incoming[node.index()].len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `node` is registered in this graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(Error::InvalidNode {
                node,
                node_count: self.nodes.len(),
            })
        }
    }
}

impl DirectedGraph<()> {
    /// Builds a payload-free graph from an edge list.
    ///
    /// Registers `node_count` nodes, adds `edges` in order and makes node 0 the
    /// entry when the graph is not empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] if an edge references an index
    /// `>= node_count`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cfgdom::{DirectedGraph, NodeId};
    ///
    /// let graph = DirectedGraph::from_edges(3, &[(0, 1), (1, 2), (2, 1)])?;
    /// assert_eq!(graph.entry(), Some(NodeId::new(0)));
    /// assert_eq!(graph.edge_count(), 3);
    /// # Ok::<(), cfgdom::Error>(())
    /// ```
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = DirectedGraph::with_capacity(node_count);
        for _ in 0..node_count {
            graph.add_node(());
        }
        for &(from, to) in edges {
            graph.add_edge(NodeId::new(from), NodeId::new(to))?;
        }
        if node_count > 0 {
            graph.set_entry(NodeId::new(0))?;
        }
        Ok(graph)
    }
}

impl<N> GraphBase for DirectedGraph<N> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<N> Successors for DirectedGraph<N> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.outgoing[node.index()].iter().copied()
    }
}

impl<N> Predecessors for DirectedGraph<N> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.incoming[node.index()].iter().copied()
    }
}

impl<N> RootedGraph for DirectedGraph<N> {
    fn entry(&self) -> Option<NodeId> {
        self.entry
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{DirectedGraph, NodeId},
        Error,
    };

    #[test]
    fn test_add_node_assigns_sequential_ids() {
        let mut graph: DirectedGraph<&str> = DirectedGraph::new();
        assert!(graph.is_empty());

        let a = graph.add_node("A");
        let b = graph.add_node("B");

        assert_eq!(a, NodeId::new(0));
        assert_eq!(b, NodeId::new(1));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node(b), Some(&"B"));
        assert_eq!(graph.node(NodeId::new(2)), None);
    }

    #[test]
    fn test_add_edge_updates_both_views() {
        let mut graph: DirectedGraph<()> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());

        graph.add_edge(a, c).unwrap();
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();

        assert_eq!(graph.successors(a).collect::<Vec<_>>(), vec![c, b]);
        assert_eq!(graph.predecessors(c).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(graph.out_degree(a), 2);
        assert_eq!(graph.in_degree(c), 2);
        assert_eq!(graph.in_degree(a), 0);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_add_edge_rejects_unknown_endpoints() {
        let mut graph: DirectedGraph<()> = DirectedGraph::new();
        let a = graph.add_node(());

        let err = graph.add_edge(a, NodeId::new(5)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidNode {
                node: NodeId::new(5),
                node_count: 1
            }
        );

        let err = graph.add_edge(NodeId::new(9), a).unwrap_err();
        assert!(matches!(err, Error::InvalidNode { node, .. } if node == NodeId::new(9)));

        // Failed insertions leave no dangling half-edges behind
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.out_degree(a), 0);
        assert_eq!(graph.in_degree(a), 0);
    }

    #[test]
    fn test_self_loop_and_parallel_edges() {
        let mut graph: DirectedGraph<()> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());

        graph.add_edge(a, a).unwrap();
        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, b).unwrap();

        assert_eq!(graph.successors(a).collect::<Vec<_>>(), vec![a, b, b]);
        assert_eq!(graph.predecessors(a).collect::<Vec<_>>(), vec![a]);
        assert_eq!(graph.predecessors(b).collect::<Vec<_>>(), vec![a, a]);
    }

    #[test]
    fn test_set_entry() {
        let mut graph: DirectedGraph<()> = DirectedGraph::new();
        assert_eq!(graph.entry(), None);

        let a = graph.add_node(());
        graph.set_entry(a).unwrap();
        assert_eq!(graph.entry(), Some(a));

        let err = graph.set_entry(NodeId::new(3)).unwrap_err();
        assert!(matches!(err, Error::InvalidNode { .. }));
        assert_eq!(graph.entry(), Some(a));
    }

    #[test]
    fn test_from_edges() {
        let graph = DirectedGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.entry(), Some(NodeId::new(0)));

        let edges: Vec<(usize, usize)> = graph
            .edges()
            .map(|(from, to)| (from.index(), to.index()))
            .collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);

        assert!(DirectedGraph::from_edges(2, &[(0, 2)]).is_err());

        let empty = DirectedGraph::from_edges(0, &[]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.entry(), None);
    }

    #[test]
    fn test_node_mut_and_iteration() {
        let mut graph: DirectedGraph<String> = DirectedGraph::new();
        let a = graph.add_node(String::from("entry"));
        graph.add_node(String::from("exit"));

        if let Some(data) = graph.node_mut(a) {
            data.push_str("_block");
        }

        let names: Vec<&str> = graph.nodes().map(|(_, name)| name.as_str()).collect();
        assert_eq!(names, vec!["entry_block", "exit"]);
        assert!(graph.contains_node(a));
        assert!(!graph.contains_node(NodeId::new(2)));
    }
}
