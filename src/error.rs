use strum::Display;
use thiserror::Error;

use crate::graph::NodeId;

/// Pipeline stage of the dominance computation.
///
/// Used to tag [`Error::InvariantViolation`] and log output with the stage that
/// detected the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Stage {
    /// Depth-first numbering from the entry node
    #[strum(to_string = "dfs-numbering")]
    Numbering,
    /// Semidominator search over the reverse graph
    #[strum(to_string = "semidominators")]
    SemiDominators,
    /// Ancestor walk and immediate dominator propagation
    #[strum(to_string = "immediate-dominators")]
    ImmediateDominators,
    /// Dominator tree construction
    #[strum(to_string = "dominator-tree")]
    Tree,
}

/// The generic Error type, which covers every failure this library can return.
///
/// All variants abort the dominance computation of the graph that produced
/// them. Unreachable nodes are *not* an error; they are simply excluded from
/// the results.
///
/// # Error Categories
///
/// ## Graph Construction Errors
/// - [`Error::InvalidNode`] - An edge or entry references an unregistered node
///
/// ## Input Errors
/// - [`Error::EmptyGraph`] - No usable entry node
/// - [`Error::GraphTooLarge`] - The graph exceeds the configured node limit
///
/// ## Algorithm Errors
/// - [`Error::SemiDominatorNotFound`] - A reachable node has no semidominator
/// - [`Error::InvariantViolation`] - A computed result broke a structural invariant
///
/// # Examples
///
/// ```rust
/// use cfgdom::{DirectedGraph, Error, NodeId};
///
/// let mut graph: DirectedGraph<()> = DirectedGraph::new();
/// let a = graph.add_node(());
///
/// match graph.add_edge(a, NodeId::new(7)) {
///     Err(Error::InvalidNode { node, node_count }) => {
///         assert_eq!(node, NodeId::new(7));
///         assert_eq!(node_count, 1);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A node handle does not belong to the graph.
    ///
    /// Raised at graph construction time by [`crate::DirectedGraph::add_edge`]
    /// and [`crate::DirectedGraph::set_entry`], never deferred to traversal.
    #[error("node {node} is not registered in graph with {node_count} nodes")]
    InvalidNode {
        /// The offending node handle
        node: NodeId,
        /// Number of nodes registered in the graph
        node_count: usize,
    },

    /// The graph has no usable entry node.
    ///
    /// Either no entry was designated, the entry is not a member of the node
    /// set, or the graph has no nodes at all. Raised before DFS begins.
    #[error("graph has no usable entry node - {0}")]
    EmptyGraph(String),

    /// A reachable, non-entry node has no semidominator candidate.
    ///
    /// This can only happen for a malformed graph or an algorithm bug. It is
    /// always fatal for the current computation.
    #[error("no semidominator candidate found for reachable node {0}")]
    SemiDominatorNotFound(NodeId),

    /// The graph has more nodes than the configured limit allows.
    ///
    /// See [`crate::DominanceConfig::max_node_count`].
    #[error("graph with {node_count} nodes exceeds the configured limit of {limit}")]
    GraphTooLarge {
        /// Number of nodes in the rejected graph
        node_count: usize,
        /// The configured limit
        limit: usize,
    },

    /// A computed result violated a structural invariant.
    #[error("invariant violated during {stage}: {message}")]
    InvariantViolation {
        /// The stage that detected the violation
        stage: Stage,
        /// Description of the violation
        message: String,
    },
}

macro_rules! invariant_error {
    ($stage:expr, $msg:expr) => {
        crate::Error::InvariantViolation {
            stage: $stage,
            message: $msg.to_string(),
        }
    };

    ($stage:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::InvariantViolation {
            stage: $stage,
            message: format!($fmt, $($arg)*),
        }
    };
}
