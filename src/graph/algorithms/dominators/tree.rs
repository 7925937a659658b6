//! The dominator tree handed to downstream consumers.
//!
//! A [`DominatorTree`] is a pure read of the immediate dominator map: every
//! reachable non-entry node `n` gets the parent edge `idom(n) -> n`. It does no
//! analysis of its own, and it must be rebuilt whenever the graph changes.
//!
//! Dominance queries ("does `a` dominate `b`?") reduce to walking up this tree.

use crate::{
    error::Stage,
    graph::{algorithms::DfsNumbering, NodeId},
    Result,
};

/// Dominator tree rooted at the entry node.
///
/// # Examples
///
/// ```rust
/// use cfgdom::{compute_dominators, DirectedGraph, NodeId};
///
/// // Diamond: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
/// let graph = DirectedGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])?;
/// let tree = compute_dominators(&graph)?.tree();
///
/// let (a, b, d) = (NodeId::new(0), NodeId::new(1), NodeId::new(3));
/// assert_eq!(tree.immediate_dominator(d), Some(a));
/// assert!(tree.dominates(a, d));
/// assert!(!tree.dominates(b, d));
/// assert_eq!(tree.dominators(d).collect::<Vec<_>>(), vec![d, a]);
/// # Ok::<(), cfgdom::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominatorTree {
    /// Root of the tree
    entry: NodeId,
    /// Parent of each node (None for the entry and unreachable nodes)
    idom: Vec<Option<NodeId>>,
    /// Children of each node, in DFS order
    children: Vec<Vec<NodeId>>,
    /// Tree nodes in DFS order, entry first
    order: Vec<NodeId>,
}

impl DominatorTree {
    /// Builds the tree from an immediate dominator map.
    ///
    /// Edges and children are reported in the numbering's discovery order.
    pub(crate) fn build(numbering: &DfsNumbering, idom: &[Option<NodeId>]) -> Self {
        let node_count = idom.len();
        let order = numbering.order().to_vec();
        let entry = order.first().copied().unwrap_or(NodeId::new(0));

        let mut children = vec![Vec::new(); node_count];
        for &node in order.iter().skip(1) {
            if let Some(parent) = idom[node.index()] {
                children[parent.index()].push(node);
            }
        }

        DominatorTree {
            entry,
            idom: idom.to_vec(),
            children,
            order,
        }
    }

    /// Returns the root of the tree.
    #[inline]
    #[must_use]
    pub fn entry(&self) -> NodeId {
        self.entry
    }

    /// Returns the immediate dominator of `node`.
    ///
    /// `None` for the entry, for unreachable nodes and for handles outside the
    /// graph.
    #[inline]
    #[must_use]
    pub fn immediate_dominator(&self, node: NodeId) -> Option<NodeId> {
        self.idom.get(node.index()).copied().flatten()
    }

    /// Returns `true` if `node` is part of the tree (reachable from the entry).
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        (node == self.entry && !self.order.is_empty()) || self.immediate_dominator(node).is_some()
    }

    /// Returns the parent edges `(idom(n), n)` of every reachable non-entry
    /// node, in DFS order.
    ///
    /// This is the edge set a visualisation of the tree must reproduce.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.order
            .iter()
            .skip(1)
            .filter_map(|&node| self.immediate_dominator(node).map(|parent| (parent, node)))
    }

    /// Returns the nodes immediately dominated by `node`, in DFS order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.children
            .get(node.index())
            .map_or(&[], |children| children.as_slice())
    }

    /// Checks if `a` dominates `b`.
    ///
    /// Every reachable node dominates itself. Unreachable nodes are neither
    /// dominated nor dominating.
    ///
    /// # Complexity
    ///
    /// O(depth of `b`).
    #[must_use]
    pub fn dominates(&self, a: NodeId, b: NodeId) -> bool {
        if !self.is_reachable(a) || !self.is_reachable(b) {
            return false;
        }
        self.dominators(b).any(|dominator| dominator == a)
    }

    /// Checks if `a` dominates `b` and `a != b`.
    #[inline]
    #[must_use]
    pub fn strictly_dominates(&self, a: NodeId, b: NodeId) -> bool {
        a != b && self.dominates(a, b)
    }

    /// Returns an iterator over the dominators of `node`, from `node` itself up
    /// to and including the entry.
    ///
    /// Yields nothing for unreachable nodes.
    pub fn dominators(&self, node: NodeId) -> DominatorIterator<'_> {
        DominatorIterator {
            tree: self,
            current: self.is_reachable(node).then_some(node),
        }
    }

    /// Returns the depth of `node` in the tree (0 for the entry).
    ///
    /// `None` for unreachable nodes.
    #[must_use]
    pub fn depth(&self, node: NodeId) -> Option<usize> {
        self.is_reachable(node)
            .then(|| self.dominators(node).count() - 1)
    }

    /// Returns the reachable nodes in DFS order, entry first.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.order
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Verifies that following parents from any node reaches the entry within
    /// `len()` steps.
    pub(crate) fn check_acyclic(&self) -> Result<()> {
        let limit = self.order.len();
        for &node in &self.order {
            let mut current = node;
            let mut steps = 0;
            while current != self.entry {
                let Some(parent) = self.immediate_dominator(current) else {
                    return Err(invariant_error!(
                        Stage::Tree,
                        "walk from {} stops at {} before the entry",
                        node,
                        current
                    ));
                };
                steps += 1;
                if steps > limit {
                    return Err(invariant_error!(
                        Stage::Tree,
                        "walk from {} does not reach the entry within {} steps",
                        node,
                        limit
                    ));
                }
                current = parent;
            }
        }
        Ok(())
    }
}

/// Iterator over the dominators of a node, from the node up to the entry.
pub struct DominatorIterator<'a> {
    tree: &'a DominatorTree,
    current: Option<NodeId>,
}

impl Iterator for DominatorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = if current == self.tree.entry {
            None
        } else {
            self.tree.immediate_dominator(current)
        };
        Some(current)
    }
}
