//! Graph factories and a brute-force dominance oracle for unit tests.

use crate::graph::{DirectedGraph, NodeId, Successors};

/// Linear chain `0 -> 1 -> ... -> n-1`, entry 0.
pub fn chain_graph(node_count: usize) -> DirectedGraph<()> {
    let edges: Vec<(usize, usize)> = (1..node_count).map(|i| (i - 1, i)).collect();
    DirectedGraph::from_edges(node_count, &edges).unwrap()
}

/// Diamond `0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3`, entry 0.
pub fn diamond_graph() -> DirectedGraph<()> {
    DirectedGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap()
}

/// The 8-node regression graph, entry 0.
///
/// DFS order is `0 1 2 3 4 5 7 6`; the expected immediate dominators for
/// nodes 0..7 are `[-, 0, 1, 1, 3, 1, 1, 1]`.
pub fn regression_graph() -> DirectedGraph<()> {
    DirectedGraph::from_edges(
        8,
        &[
            (0, 1),
            (1, 2),
            (1, 3),
            (2, 3),
            (2, 6),
            (3, 4),
            (4, 5),
            (5, 7),
            (7, 5),
            (7, 6),
            (6, 7),
            (6, 2),
        ],
    )
    .unwrap()
}

/// Nodes reachable from `entry` when `removed` is deleted from the graph.
fn reachable_without<G: Successors>(graph: &G, entry: NodeId, removed: Option<NodeId>) -> Vec<bool> {
    let mut seen = vec![false; graph.node_count()];
    if Some(entry) == removed {
        return seen;
    }

    seen[entry.index()] = true;
    let mut stack = vec![entry];
    while let Some(node) = stack.pop() {
        for succ in graph.successors(node) {
            if Some(succ) != removed && !seen[succ.index()] {
                seen[succ.index()] = true;
                stack.push(succ);
            }
        }
    }
    seen
}

/// Immediate dominators by definition: `d` dominates `n` iff removing `d`
/// makes `n` unreachable. The immediate dominator is the strict dominator
/// dominated by all others, which is the one with the most dominators.
pub fn brute_force_idom<G: Successors>(graph: &G, entry: NodeId) -> Vec<Option<usize>> {
    let node_count = graph.node_count();
    let reachable = reachable_without(graph, entry, None);

    // dominated_by[d][n]: d dominates n
    let dominated_by: Vec<Vec<bool>> = (0..node_count)
        .map(|d| {
            let without = reachable_without(graph, entry, Some(NodeId::new(d)));
            (0..node_count)
                .map(|n| reachable[n] && reachable[d] && (n == d || !without[n]))
                .collect()
        })
        .collect();
    let dominator_count =
        |n: usize| -> usize { (0..node_count).filter(|&d| dominated_by[d][n]).count() };

    (0..node_count)
        .map(|n| {
            if !reachable[n] || n == entry.index() {
                return None;
            }
            (0..node_count)
                .filter(|&d| d != n && dominated_by[d][n])
                .max_by_key(|&d| dominator_count(d))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_oracle() {
        assert_eq!(
            brute_force_idom(&diamond_graph(), NodeId::new(0)),
            vec![None, Some(0), Some(0), Some(0)]
        );
        assert_eq!(
            brute_force_idom(&regression_graph(), NodeId::new(0)),
            vec![
                None,
                Some(0),
                Some(1),
                Some(1),
                Some(3),
                Some(1),
                Some(1),
                Some(1)
            ]
        );
    }
}
