//! Depth-first numbering of a control flow graph.
//!
//! [`dfs_numbering`] performs one depth-first traversal from the entry node and
//! records, for every node it discovers:
//!
//! - its position in discovery order (the DFS index, starting at 1),
//! - the node it was first discovered from (its DFS parent).
//!
//! Nodes the traversal never reaches keep no index. They are unreachable from
//! the entry and take no part in any later stage of the dominance computation.
//!
//! The traversal uses an explicit stack of `(node, successor iterator)` frames.
//! Resuming the top frame's iterator reproduces the discovery order of the
//! recursive formulation exactly, while stack usage no longer depends on the
//! depth of the graph.

use crate::{
    error::Stage,
    graph::{NodeId, Successors},
    Error, Result,
};

/// Result of a depth-first numbering.
///
/// Per-node attributes are stored in vectors indexed by [`NodeId::index`].
///
/// # Examples
///
/// ```rust
/// use cfgdom::graph::{algorithms::dfs_numbering, DirectedGraph, NodeId};
///
/// // 0 -> 1, 0 -> 2, 1 -> 2: node 2 is discovered through node 1
/// let graph = DirectedGraph::from_edges(4, &[(0, 1), (0, 2), (1, 2)])?;
/// let numbering = dfs_numbering(&graph, NodeId::new(0))?;
///
/// assert_eq!(numbering.order(), &[NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
/// assert_eq!(numbering.index(NodeId::new(2)), Some(3));
/// assert_eq!(numbering.parent(NodeId::new(2)), Some(NodeId::new(1)));
/// assert!(!numbering.is_reachable(NodeId::new(3)));
/// # Ok::<(), cfgdom::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsNumbering {
    /// Nodes in order of first discovery
    order: Vec<NodeId>,
    /// DFS index per node (0 = not visited)
    index: Vec<usize>,
    /// Parent in the DFS tree per node
    parent: Vec<Option<NodeId>>,
}

impl DfsNumbering {
    fn with_node_count(node_count: usize) -> Self {
        DfsNumbering {
            order: Vec::with_capacity(node_count),
            index: vec![0; node_count],
            parent: vec![None; node_count],
        }
    }

    fn visit(&mut self, node: NodeId, parent: Option<NodeId>) {
        self.order.push(node);
        self.index[node.index()] = self.order.len();
        self.parent[node.index()] = parent;
    }

    /// Returns the discovered nodes in discovery order.
    ///
    /// The first element is the start node. Unreachable nodes never appear.
    #[must_use]
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Returns the 1-based DFS index of `node`, or `None` if it was not visited.
    #[must_use]
    pub fn index(&self, node: NodeId) -> Option<usize> {
        match self.index.get(node.index()) {
            Some(&0) | None => None,
            Some(&index) => Some(index),
        }
    }

    /// Returns the node from which `node` was first discovered.
    ///
    /// `None` for the start node and for unvisited nodes.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent.get(node.index()).copied().flatten()
    }

    /// Returns `true` if the traversal visited `node`.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.index(node).is_some()
    }

    /// Returns the node with the given 1-based DFS index.
    #[must_use]
    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        index.checked_sub(1).and_then(|i| self.order.get(i)).copied()
    }

    /// Returns the number of visited nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing was visited (the start node was invalid).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the size of the graph this numbering was computed for.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Re-checks the numbering invariants.
    ///
    /// - the start node is first and carries index 1,
    /// - indices are `1..=len` in discovery order,
    /// - every non-start node's parent was discovered before it.
    pub(crate) fn check_invariants(&self, start: NodeId) -> Result<()> {
        if self.order.first() != Some(&start) || self.index(start) != Some(1) {
            return Err(invariant_error!(
                Stage::Numbering,
                "start node {} does not carry DFS index 1",
                start
            ));
        }
        if self.parent(start).is_some() {
            return Err(invariant_error!(
                Stage::Numbering,
                "start node {} has a DFS parent",
                start
            ));
        }

        for (position, &node) in self.order.iter().enumerate() {
            let index = position + 1;
            if self.index(node) != Some(index) {
                return Err(invariant_error!(
                    Stage::Numbering,
                    "node {} at position {} has index {:?}",
                    node,
                    index,
                    self.index(node)
                ));
            }
            if node == start {
                continue;
            }
            let parent_index = self.parent(node).and_then(|parent| self.index(parent));
            match parent_index {
                Some(parent_index) if parent_index < index => {}
                _ => {
                    return Err(invariant_error!(
                        Stage::Numbering,
                        "node {} has no DFS parent discovered before it",
                        node
                    ))
                }
            }
        }

        Ok(())
    }
}

/// Numbers all nodes reachable from `start` in depth-first discovery order.
///
/// Successors are followed in the order the graph yields them. A node that is
/// already numbered is never entered again, so back edges, cross edges and
/// self-loops are simply skipped.
///
/// An out-of-range `start` yields an empty numbering.
///
/// # Errors
///
/// Returns [`Error::InvalidNode`] if the graph yields a successor outside
/// `0..node_count()`.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn dfs_numbering<G: Successors>(graph: &G, start: NodeId) -> Result<DfsNumbering> {
    let node_count = graph.node_count();
    let mut numbering = DfsNumbering::with_node_count(node_count);

    if start.index() >= node_count {
        return Ok(numbering);
    }

    numbering.visit(start, None);
    let mut stack = vec![(start, graph.successors(start))];

    while let Some((node, successors)) = stack.last_mut() {
        let node = *node;
        let Some(succ) = successors.next() else {
            stack.pop();
            continue;
        };

        if succ.index() >= node_count {
            return Err(Error::InvalidNode {
                node: succ,
                node_count,
            });
        }
        if numbering.is_reachable(succ) {
            continue;
        }

        numbering.visit(succ, Some(node));
        stack.push((succ, graph.successors(succ)));
    }

    Ok(numbering)
}

/// Returns a reachability mask over all nodes, seen from `start`.
///
/// `result[i]` is `true` iff node `i` is visited by [`dfs_numbering`] from
/// `start`. Dead-node elimination uses this mask directly.
///
/// # Errors
///
/// Same as [`dfs_numbering`].
pub fn reachable_nodes<G: Successors>(graph: &G, start: NodeId) -> Result<Vec<bool>> {
    let numbering = dfs_numbering(graph, start)?;
    Ok((0..numbering.node_count())
        .map(|i| numbering.is_reachable(NodeId::new(i)))
        .collect())
}
