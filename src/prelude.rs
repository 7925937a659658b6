//! # cfgdom Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the cfgdom library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all cfgdom operations
pub use crate::Error;

/// The result type used throughout cfgdom
pub use crate::Result;

/// Configuration for the dominance computation
pub use crate::DominanceConfig;

// ================================================================================================
// Graph Model
// ================================================================================================

/// Node handle and owning graph container
pub use crate::graph::{DirectedGraph, NodeId};

/// Traits the algorithms are written against
pub use crate::graph::{GraphBase, Predecessors, RootedGraph, Successors};

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Dominance computation
pub use crate::graph::algorithms::{
    compute_dominators, compute_dominators_batch, compute_dominators_with_config,
};

/// Dominance results
pub use crate::graph::algorithms::{Dominance, DominatorTree};

/// Depth-first numbering
pub use crate::graph::algorithms::{dfs_numbering, DfsNumbering};
