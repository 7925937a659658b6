//! Dominance computation for control flow graphs.
//!
//! A node `d` dominates a node `n` if every path from the entry to `n` passes
//! through `d`. The immediate dominator of `n` is its closest strict dominator;
//! linking every reachable node to its immediate dominator forms the dominator
//! tree.
//!
//! # Pipeline
//!
//! Each stage consumes only the outputs of the stages before it:
//!
//! 1. Depth-first numbering from the entry ([`dfs_numbering`])
//! 2. Semidominators by explicit reverse-path search (`semi`)
//! 3. Ancestor walk and immediate dominator propagation (`idom`)
//! 4. Dominator tree export ([`DominatorTree`])
//!
//! The semidominator search is O(V + E) per node, so the whole computation is
//! O(V·(V+E)). [`DominanceConfig::max_node_count`] bounds the input size.
//!
//! # Examples
//!
//! ```rust
//! use cfgdom::{compute_dominators, DirectedGraph, NodeId};
//!
//! // Chain with a back edge: 0 -> 1 -> 2 -> 3 -> 1
//! let graph = DirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 1)])?;
//! let dominance = compute_dominators(&graph)?;
//!
//! assert_eq!(dominance.immediate_dominator(NodeId::new(1)), Some(NodeId::new(0)));
//! assert_eq!(dominance.immediate_dominator(NodeId::new(2)), Some(NodeId::new(1)));
//! assert_eq!(dominance.immediate_dominator(NodeId::new(3)), Some(NodeId::new(2)));
//! assert_eq!(dominance.immediate_dominator(NodeId::new(0)), None);
//! # Ok::<(), cfgdom::Error>(())
//! ```

mod idom;
mod semi;
mod tree;

use log::{debug, warn};
use rayon::prelude::*;

pub use tree::{DominatorIterator, DominatorTree};

use crate::{
    config::DominanceConfig,
    error::Stage,
    graph::{
        algorithms::{dfs_numbering, DfsNumbering},
        NodeId, RootedGraph,
    },
    Error, Result,
};

/// Result of a dominance computation over one graph.
///
/// Holds the DFS numbering, the semidominator map and the immediate dominator
/// map, all indexed by node. Unreachable nodes have no DFS index, no
/// semidominator and no immediate dominator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dominance {
    numbering: DfsNumbering,
    semi: Vec<NodeId>,
    idom: Vec<Option<NodeId>>,
}

impl Dominance {
    /// Returns the entry node the computation started from.
    #[must_use]
    pub fn entry(&self) -> NodeId {
        self.numbering.order()[0]
    }

    /// Returns the reachable nodes in DFS discovery order, entry first.
    #[must_use]
    pub fn visited_order(&self) -> &[NodeId] {
        self.numbering.order()
    }

    /// Returns the underlying DFS numbering.
    #[must_use]
    pub fn numbering(&self) -> &DfsNumbering {
        &self.numbering
    }

    /// Returns the 1-based DFS index of `node`.
    #[must_use]
    pub fn dfs_index(&self, node: NodeId) -> Option<usize> {
        self.numbering.index(node)
    }

    /// Returns the DFS tree parent of `node`.
    #[must_use]
    pub fn dfs_parent(&self, node: NodeId) -> Option<NodeId> {
        self.numbering.parent(node)
    }

    /// Returns the semidominator of `node`.
    ///
    /// `None` for the entry and for unreachable nodes.
    #[must_use]
    pub fn semi_dominator(&self, node: NodeId) -> Option<NodeId> {
        if node == self.entry() || !self.is_reachable(node) {
            return None;
        }
        self.semi.get(node.index()).copied()
    }

    /// Returns the immediate dominator of `node`.
    ///
    /// `None` for the entry and for unreachable nodes.
    #[must_use]
    pub fn immediate_dominator(&self, node: NodeId) -> Option<NodeId> {
        self.idom.get(node.index()).copied().flatten()
    }

    /// Returns `true` if `node` is reachable from the entry.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.numbering.is_reachable(node)
    }

    /// Returns the nodes never reached from the entry, in ascending order.
    pub fn unreachable_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.numbering.node_count())
            .map(NodeId::new)
            .filter(|&node| !self.is_reachable(node))
    }

    /// Returns the edges `sdom(n) -> n` of every reachable non-entry node, in
    /// DFS order.
    ///
    /// The semidominator edges do not form the dominator tree in general; they
    /// are exposed for diagnostics.
    pub fn semidominator_edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.visited_order()
            .iter()
            .skip(1)
            .map(|&node| (self.semi[node.index()], node))
    }

    /// Builds the dominator tree.
    ///
    /// The tree is rebuilt from the immediate dominator map on every call.
    #[must_use]
    pub fn tree(&self) -> DominatorTree {
        DominatorTree::build(&self.numbering, &self.idom)
    }

    /// Checks index ordering of semidominators and immediate dominators and
    /// that the tree reaches the entry from every node.
    fn check_invariants(&self) -> Result<()> {
        for (position, &node) in self.visited_order().iter().enumerate().skip(1) {
            let index = position + 1;

            let sdom = self.semi[node.index()];
            if !matches!(self.dfs_index(sdom), Some(sdom_index) if sdom_index < index) {
                return Err(invariant_error!(
                    Stage::SemiDominators,
                    "sdom({}) = {} does not precede it in DFS order",
                    node,
                    sdom
                ));
            }

            let Some(idom) = self.immediate_dominator(node) else {
                return Err(invariant_error!(
                    Stage::ImmediateDominators,
                    "reachable node {} has no immediate dominator",
                    node
                ));
            };
            if !matches!(self.dfs_index(idom), Some(idom_index) if idom_index < index) {
                return Err(invariant_error!(
                    Stage::ImmediateDominators,
                    "idom({}) = {} does not precede it in DFS order",
                    node,
                    idom
                ));
            }
        }

        self.tree().check_acyclic()
    }
}

/// Computes dominators with the default configuration.
///
/// # Errors
///
/// - [`Error::EmptyGraph`] if the graph has no nodes or no valid entry
/// - [`Error::InvalidNode`] if the graph yields a successor outside its node set
/// - [`Error::GraphTooLarge`] if the graph exceeds the default node limit
/// - [`Error::SemiDominatorNotFound`] if a reachable node has no semidominator
/// - [`Error::InvariantViolation`] if an intermediate result is inconsistent
pub fn compute_dominators<G: RootedGraph>(graph: &G) -> Result<Dominance> {
    compute_dominators_with_config(graph, &DominanceConfig::default())
}

/// Computes dominators with an explicit configuration.
///
/// # Errors
///
/// See [`compute_dominators`]. Verification passes enabled in `config` report
/// failures as [`Error::InvariantViolation`].
pub fn compute_dominators_with_config<G: RootedGraph>(
    graph: &G,
    config: &DominanceConfig,
) -> Result<Dominance> {
    let node_count = graph.node_count();
    let entry = validate_entry(graph)?;

    if config.exceeds_limit(node_count) {
        warn!(
            "rejecting graph with {node_count} nodes, limit is {}",
            config.max_node_count
        );
        return Err(Error::GraphTooLarge {
            node_count,
            limit: config.max_node_count,
        });
    }

    let numbering = dfs_numbering(graph, entry)?;
    if config.verify_numbering {
        numbering.check_invariants(entry)?;
    }
    debug!(
        "numbered {} of {node_count} nodes from entry {entry} ({} unreachable)",
        numbering.len(),
        node_count - numbering.len()
    );

    let semi = semi::semidominators(graph, &numbering)?;
    let ancestors = idom::ancestors_with_min_semi(&numbering, &semi)?;
    let idom = idom::immediate_dominators(&numbering, &semi, &ancestors)?;

    let dominance = Dominance {
        numbering,
        semi,
        idom,
    };
    if config.verify_tree {
        dominance.check_invariants()?;
    }
    debug!(
        "computed immediate dominators for {} reachable nodes",
        dominance.visited_order().len()
    );

    Ok(dominance)
}

/// Computes dominators for many independent graphs in parallel.
///
/// Every graph gets its own state; results are returned in input order, and a
/// failing graph does not affect the others.
pub fn compute_dominators_batch<G>(graphs: &[G], config: &DominanceConfig) -> Vec<Result<Dominance>>
where
    G: RootedGraph + Sync,
{
    debug!("analysing {} graphs", graphs.len());
    graphs
        .par_iter()
        .map(|graph| compute_dominators_with_config(graph, config))
        .collect()
}

fn validate_entry<G: RootedGraph>(graph: &G) -> Result<NodeId> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Err(Error::EmptyGraph("graph has no nodes".to_string()));
    }

    let Some(entry) = graph.entry() else {
        return Err(Error::EmptyGraph("no entry node designated".to_string()));
    };
    if entry.index() >= node_count {
        return Err(Error::EmptyGraph(format!(
            "entry {entry} is not a member of a graph with {node_count} nodes"
        )));
    }

    Ok(entry)
}
