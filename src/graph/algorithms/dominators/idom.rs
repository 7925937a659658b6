//! Immediate dominators from semidominators.
//!
//! For a reachable non-entry node `n`, let `u` be the node with the smallest
//! semidominator index on the DFS tree path strictly between `sdom(n)` and `n`.
//! Then:
//!
//! - if no node on that path has a semidominator smaller than `sdom(n)`,
//!   `idom(n) = sdom(n)`;
//! - otherwise `idom(n) = idom(u)`.
//!
//! Pass 1 finds `u` for every node by walking DFS parent links. Pass 2 resolves
//! the immediate dominators in ascending DFS index order, which guarantees that
//! `idom(u)` is known before `n` is reached, because `u` is a proper DFS
//! ancestor of `n`.

use log::trace;

use crate::{
    error::Stage,
    graph::{algorithms::DfsNumbering, NodeId},
    Result,
};

/// Pass 1: the ancestor with minimal semidominator for every node.
///
/// Computed fresh per node, starting from "none"; nothing carries over between
/// nodes.
pub(crate) fn ancestors_with_min_semi(
    numbering: &DfsNumbering,
    semi: &[NodeId],
) -> Result<Vec<Option<NodeId>>> {
    let mut ancestors = vec![None; numbering.node_count()];
    let semi_index = |node: NodeId| -> Result<usize> {
        numbering.index(node).ok_or_else(|| {
            invariant_error!(
                Stage::ImmediateDominators,
                "semidominator {} was never numbered",
                node
            )
        })
    };

    for &node in numbering.order().iter().skip(1) {
        let sdom = semi[node.index()];
        let mut min_index = semi_index(sdom)?;
        let mut best = None;

        let mut walk = numbering.parent(node);
        loop {
            let Some(current) = walk else {
                return Err(invariant_error!(
                    Stage::ImmediateDominators,
                    "semidominator {} of {} is not a DFS ancestor",
                    sdom,
                    node
                ));
            };
            if current == sdom {
                break;
            }

            let candidate = semi_index(semi[current.index()])?;
            if candidate < min_index {
                min_index = candidate;
                best = Some(current);
            }
            walk = numbering.parent(current);
        }

        ancestors[node.index()] = best;
    }

    Ok(ancestors)
}

/// Pass 2: immediate dominators, resolved in ascending DFS index order.
///
/// The entry and all unreachable nodes are left as `None`.
pub(crate) fn immediate_dominators(
    numbering: &DfsNumbering,
    semi: &[NodeId],
    ancestors: &[Option<NodeId>],
) -> Result<Vec<Option<NodeId>>> {
    let mut idom: Vec<Option<NodeId>> = vec![None; numbering.node_count()];

    for &node in numbering.order().iter().skip(1) {
        let dominator = match ancestors[node.index()] {
            None => semi[node.index()],
            Some(ancestor) => idom[ancestor.index()].ok_or_else(|| {
                invariant_error!(
                    Stage::ImmediateDominators,
                    "idom({}) is needed by {} before it is resolved",
                    ancestor,
                    node
                )
            })?,
        };

        trace!("idom({node}) = {dominator}");
        idom[node.index()] = Some(dominator);
    }

    Ok(idom)
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{
            algorithms::{
                dfs_numbering,
                dominators::{
                    idom::{ancestors_with_min_semi, immediate_dominators},
                    semi::semidominators,
                },
            },
            NodeId,
        },
        test::regression_graph,
        Error,
    };

    #[test]
    fn test_ancestors_regression_graph() {
        let graph = regression_graph();
        let numbering = dfs_numbering(&graph, NodeId::new(0)).unwrap();
        let semi = semidominators(&graph, &numbering).unwrap();
        let ancestors = ancestors_with_min_semi(&numbering, &semi).unwrap();

        // Nodes 5, 6 and 7 sit below node 3, whose semidominator (1) beats theirs (2)
        let three = Some(NodeId::new(3));
        assert_eq!(
            ancestors,
            vec![None, None, None, None, None, three, three, three]
        );

        let idom = immediate_dominators(&numbering, &semi, &ancestors).unwrap();
        assert_eq!(idom[5], Some(NodeId::new(1)));
        assert_eq!(idom[4], Some(NodeId::new(3)));
    }

    #[test]
    fn test_ancestor_not_on_tree_path() {
        let graph = regression_graph();
        let numbering = dfs_numbering(&graph, NodeId::new(0)).unwrap();
        let mut semi = semidominators(&graph, &numbering).unwrap();

        // Node 6 is not a DFS ancestor of node 4
        semi[4] = NodeId::new(6);
        let err = ancestors_with_min_semi(&numbering, &semi).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation { .. }));
    }

    #[test]
    fn test_unresolved_inherited_dominator() {
        let graph = regression_graph();
        let numbering = dfs_numbering(&graph, NodeId::new(0)).unwrap();
        let semi = semidominators(&graph, &numbering).unwrap();
        let mut ancestors = ancestors_with_min_semi(&numbering, &semi).unwrap();

        // Point node 1 at the unresolved entry
        ancestors[1] = Some(NodeId::new(0));
        let err = immediate_dominators(&numbering, &semi, &ancestors).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation { .. }));
    }
}
