//! Configuration for dominance computation
//!
//! The semidominator search costs O(V·(V+E)), so the default configuration caps
//! the graph size. Optional verification passes re-check the numbering and the
//! resulting tree after each stage and turn any inconsistency into an
//! [`crate::Error::InvariantViolation`].

/// Default upper bound on the number of nodes a graph may have
pub const DEFAULT_MAX_NODE_COUNT: usize = 65_536;

/// Configuration for a dominance computation
///
/// # Examples
///
/// ```rust
/// use cfgdom::{compute_dominators_with_config, DirectedGraph, DominanceConfig};
///
/// let graph = DirectedGraph::from_edges(3, &[(0, 1), (1, 2)])?;
/// let dominance = compute_dominators_with_config(&graph, &DominanceConfig::strict())?;
/// assert_eq!(dominance.visited_order().len(), 3);
/// # Ok::<(), cfgdom::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominanceConfig {
    /// Largest accepted graph (0 = unlimited)
    /// Larger graphs are rejected with `GraphTooLarge` before the DFS starts
    pub max_node_count: usize,

    /// Re-check the DFS numbering after traversal
    /// Entry carries index 1, indices follow discovery order, parents precede children
    pub verify_numbering: bool,

    /// Re-check the dominator tree after the immediate dominators are known
    /// Semidominator and idom indices are smaller than the node's, every parent walk ends at the entry
    pub verify_tree: bool,
}

impl Default for DominanceConfig {
    fn default() -> Self {
        Self {
            max_node_count: DEFAULT_MAX_NODE_COUNT,
            verify_numbering: false,
            verify_tree: false,
        }
    }
}

impl DominanceConfig {
    /// Creates a configuration without a size limit or verification
    ///
    /// **Warning**: very large graphs may take a long time.
    #[must_use]
    pub fn unchecked() -> Self {
        Self {
            max_node_count: 0,
            verify_numbering: false,
            verify_tree: false,
        }
    }

    /// Creates a configuration with every verification pass enabled
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_node_count: DEFAULT_MAX_NODE_COUNT,
            verify_numbering: true,
            verify_tree: true,
        }
    }

    /// Returns `true` if a graph with `node_count` nodes is over the limit.
    #[must_use]
    pub fn exceeds_limit(&self, node_count: usize) -> bool {
        self.max_node_count != 0 && node_count > self.max_node_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominance_config_presets() {
        let default = DominanceConfig::default();
        assert_eq!(default.max_node_count, DEFAULT_MAX_NODE_COUNT);
        assert!(!default.verify_numbering);
        assert!(!default.verify_tree);

        let unchecked = DominanceConfig::unchecked();
        assert_eq!(unchecked.max_node_count, 0);
        assert!(!unchecked.verify_numbering);
        assert!(!unchecked.verify_tree);

        let strict = DominanceConfig::strict();
        assert_eq!(strict.max_node_count, DEFAULT_MAX_NODE_COUNT);
        assert!(strict.verify_numbering);
        assert!(strict.verify_tree);
    }

    #[test]
    fn test_exceeds_limit() {
        let config = DominanceConfig {
            max_node_count: 4,
            ..DominanceConfig::default()
        };
        assert!(!config.exceeds_limit(4));
        assert!(config.exceeds_limit(5));

        assert!(!DominanceConfig::unchecked().exceeds_limit(usize::MAX));
    }
}
