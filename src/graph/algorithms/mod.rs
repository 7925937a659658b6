//! Graph algorithms for control flow analysis.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs_numbering`] - Depth-first discovery order, DFS indices and DFS tree parents
//! - [`reachable_nodes`] - Reachability mask from the entry (dead-node elimination)
//!
//! ## Dominator Analysis
//!
//! - [`compute_dominators`] - Semidominators, immediate dominators and the dominator tree
//! - [`compute_dominators_with_config`] - Same, with size limit and verification settings
//! - [`compute_dominators_batch`] - Independent graphs analysed in parallel
//! - [`Dominance`] - Result of a dominance computation
//! - [`DominatorTree`] - Tree export and dominance queries
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS numbering | O(V + E) | Ordering, reachability |
//! | Dominators | O(V·(V + E)) | Loop analysis, SSA construction |
//!
//! # Examples
//!
//! ```rust
//! use cfgdom::graph::{algorithms, DirectedGraph, NodeId};
//!
//! let graph = DirectedGraph::from_edges(4, &[(0, 1), (1, 2), (3, 2)])?;
//!
//! let mask = algorithms::reachable_nodes(&graph, NodeId::new(0))?;
//! assert_eq!(mask, vec![true, true, true, false]);
//!
//! let dominance = algorithms::compute_dominators(&graph)?;
//! assert_eq!(dominance.immediate_dominator(NodeId::new(2)), Some(NodeId::new(1)));
//! # Ok::<(), cfgdom::Error>(())
//! ```

mod dominators;
mod traversal;

pub use dominators::{
    compute_dominators, compute_dominators_batch, compute_dominators_with_config, Dominance,
    DominatorIterator, DominatorTree,
};
pub use traversal::{dfs_numbering, reachable_nodes, DfsNumbering};
