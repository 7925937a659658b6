// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # cfgdom
//!
//! Dominance analysis for control flow graphs, independent of any host IR.
//!
//! Given a directed graph with a single entry node, `cfgdom` computes for every
//! reachable node its DFS index, its semidominator and its immediate
//! dominator, and exposes the resulting dominator tree for dominance queries
//! and visualisation.
//!
//! ## Features
//!
//! - **Plain graph model** - Dense [`NodeId`] handles, forward and derived reverse adjacency
//! - **Bring your own CFG** - Algorithms are generic over [`RootedGraph`]
//! - **Deep graphs** - Every traversal uses an explicit stack, never recursion
//! - **Unreachable code** - Nodes not reachable from the entry are reported, not rejected
//! - **Batch analysis** - Independent graphs analysed in parallel via `rayon`
//!
//! ## Quick Start
//!
//! ```rust
//! use cfgdom::prelude::*;
//!
//! // Diamond: A -> B, A -> C, B -> D, C -> D
//! let mut graph = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! let d = graph.add_node("D");
//! graph.add_edge(a, b)?;
//! graph.add_edge(a, c)?;
//! graph.add_edge(b, d)?;
//! graph.add_edge(c, d)?;
//! graph.set_entry(a)?;
//!
//! let dominance = compute_dominators(&graph)?;
//! assert_eq!(dominance.immediate_dominator(d), Some(a));
//!
//! let tree = dominance.tree();
//! assert!(tree.dominates(a, d));
//! assert!(!tree.dominates(b, d));
//! # Ok::<(), cfgdom::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Graph model, traits and algorithms
//! - [`graph::algorithms`] - DFS numbering and the dominance pipeline
//! - [`config`] - [`DominanceConfig`] presets
//! - [`prelude`] - Convenient re-exports
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: `debug` for
//! per-graph summaries, `trace` for per-node results, `warn` when a graph is
//! rejected by the configured size limit. No logger is installed by the
//! library.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use cfgdom::prelude::*;
///
/// let graph = DirectedGraph::from_edges(2, &[(0, 1)])?;
/// let dominance = compute_dominators(&graph)?;
/// assert_eq!(dominance.immediate_dominator(NodeId::new(1)), Some(NodeId::new(0)));
/// # Ok::<(), cfgdom::Error>(())
/// ```
pub mod prelude;

/// Configuration of the dominance computation.
pub mod config;

/// Graph model and graph algorithms.
pub mod graph;

/// `cfgdom` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `cfgdom` Error type
///
/// # Examples
///
/// ```rust
/// use cfgdom::{compute_dominators, DirectedGraph, Error};
///
/// let graph: DirectedGraph<()> = DirectedGraph::new();
/// match compute_dominators(&graph) {
///     Err(Error::EmptyGraph(reason)) => println!("nothing to analyse: {reason}"),
///     Err(e) => println!("Error: {e}"),
///     Ok(_) => unreachable!(),
/// }
/// ```
pub use error::{Error, Stage};

pub use config::DominanceConfig;
pub use graph::{
    algorithms::{
        compute_dominators, compute_dominators_batch, compute_dominators_with_config,
        dfs_numbering, reachable_nodes, DfsNumbering, Dominance, DominatorIterator,
        DominatorTree,
    },
    DirectedGraph, GraphBase, NodeId, Predecessors, RootedGraph, Successors,
};
