//! Graph model and graph algorithms for control flow analysis.
//!
//! The graph model is deliberately independent of any host IR: a function's
//! control flow is described by a fixed set of nodes, a forward adjacency, the
//! derived reverse adjacency and one entry node.
//!
//! # Key Components
//!
//! - [`NodeId`] - Dense node handle, usable as an index into per-node vectors
//! - [`DirectedGraph`] - Owning graph container with forward and reverse adjacency
//! - [`GraphBase`], [`Successors`], [`Predecessors`], [`RootedGraph`] - The
//!   traits the algorithms are written against
//! - [`algorithms`] - Depth-first numbering and dominance computation
//!
//! # Examples
//!
//! ```rust
//! use cfgdom::graph::{algorithms, DirectedGraph, NodeId};
//!
//! // Loop: entry -> header -> body -> header, header -> exit
//! let graph = DirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 1), (1, 3)])?;
//!
//! let dominance = algorithms::compute_dominators(&graph)?;
//! let tree = dominance.tree();
//!
//! assert!(tree.dominates(NodeId::new(1), NodeId::new(2)));
//! assert!(!tree.dominates(NodeId::new(2), NodeId::new(1)));
//! # Ok::<(), cfgdom::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! Graphs are built single-threaded and then only read. Every analysis owns its
//! own per-node state, so independent graphs can be analysed concurrently.

mod directed;
mod node;
mod traits;

pub mod algorithms;

pub use directed::DirectedGraph;
pub use node::NodeId;
pub use traits::{GraphBase, Predecessors, RootedGraph, Successors};
