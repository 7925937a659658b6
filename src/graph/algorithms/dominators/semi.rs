//! Semidominator computation by explicit reverse-path search.
//!
//! The semidominator of a node `w` is the node `v` with the smallest DFS index
//! such that some path `v = v0, v1, ..., vk = w` exists where every
//! intermediate `vi` has a DFS index greater than `w`'s.
//!
//! For each node this is found directly: walk the reverse graph from `w`,
//! passing freely through nodes whose index is not smaller than `w`'s (they lie
//! in `w`'s DFS subtree or to its right) and stopping at the first node with a
//! smaller index on every branch. Those stopping nodes are the candidates; the
//! one with the smallest index is the semidominator.
//!
//! This costs O(V + E) per node, O(V·(V+E)) overall. It trades the forest
//! linking of the full Lengauer-Tarjan algorithm for a search that is easy to
//! check by hand.

use log::trace;

use crate::{
    graph::{algorithms::DfsNumbering, NodeId, Predecessors},
    Error, Result,
};

/// Scoped state for one semidominator search.
///
/// Visited marks are epoch stamps: a node is visited in the current search iff
/// its stamp equals the current epoch, so starting a new search is a single
/// increment and nothing carries over from the previous one.
struct CandidateSearch {
    marks: Vec<u32>,
    epoch: u32,
    stack: Vec<NodeId>,
}

impl CandidateSearch {
    fn new(node_count: usize) -> Self {
        CandidateSearch {
            marks: vec![0; node_count],
            epoch: 0,
            stack: Vec::new(),
        }
    }

    fn begin(&mut self) {
        if self.epoch == u32::MAX {
            self.marks.fill(0);
            self.epoch = 0;
        }
        self.epoch += 1;
        self.stack.clear();
    }

    fn mark(&mut self, node: NodeId) -> bool {
        let mark = &mut self.marks[node.index()];
        if *mark == self.epoch {
            false
        } else {
            *mark = self.epoch;
            true
        }
    }

    /// Returns the candidate with the smallest DFS index for `target`.
    fn find<G: Predecessors>(
        &mut self,
        graph: &G,
        numbering: &DfsNumbering,
        target: NodeId,
        target_index: usize,
    ) -> Option<NodeId> {
        self.begin();
        self.mark(target);
        self.stack.push(target);

        let mut best: Option<(usize, NodeId)> = None;

        while let Some(current) = self.stack.pop() {
            for pred in graph.predecessors(current) {
                // Unreachable predecessors never lie on a path from the entry
                let Some(pred_index) = numbering.index(pred) else {
                    continue;
                };
                if !self.mark(pred) {
                    continue;
                }

                if pred_index < target_index {
                    if best.map_or(true, |(index, _)| pred_index < index) {
                        best = Some((pred_index, pred));
                    }
                } else {
                    self.stack.push(pred);
                }
            }
        }

        best.map(|(_, node)| node)
    }
}

/// Computes the semidominator of every reachable node.
///
/// Nodes are processed in reverse discovery order, entry excluded. The
/// returned vector is indexed by node; every entry starts out as the node
/// itself, and exactly the reachable non-entry nodes are overwritten once.
///
/// # Errors
///
/// Returns [`Error::SemiDominatorNotFound`] if a reachable non-entry node has no
/// candidate. A correct numbering of a well-formed graph never produces this,
/// since the DFS parent is always a candidate.
pub(crate) fn semidominators<G: Predecessors>(
    graph: &G,
    numbering: &DfsNumbering,
) -> Result<Vec<NodeId>> {
    let node_count = numbering.node_count();
    let mut semi: Vec<NodeId> = (0..node_count).map(NodeId::new).collect();
    let mut search = CandidateSearch::new(node_count);

    for (position, &node) in numbering.order().iter().enumerate().skip(1).rev() {
        let index = position + 1;
        let sdom = search
            .find(graph, numbering, node, index)
            .ok_or(Error::SemiDominatorNotFound(node))?;

        trace!("sdom({node}) = {sdom}");
        semi[node.index()] = sdom;
    }

    Ok(semi)
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{
            algorithms::{dfs_numbering, dominators::semi::semidominators},
            DirectedGraph, NodeId,
        },
        test::regression_graph,
    };

    fn semi_of(edges: &[(usize, usize)], node_count: usize) -> Vec<NodeId> {
        let graph = DirectedGraph::from_edges(node_count, edges).unwrap();
        let numbering = dfs_numbering(&graph, NodeId::new(0)).unwrap();
        semidominators(&graph, &numbering).unwrap()
    }

    #[test]
    fn test_semi_chain_is_parent() {
        let semi = semi_of(&[(0, 1), (1, 2), (2, 3)], 4);
        assert_eq!(semi[1], NodeId::new(0));
        assert_eq!(semi[2], NodeId::new(1));
        assert_eq!(semi[3], NodeId::new(2));
    }

    #[test]
    fn test_semi_entry_keeps_itself() {
        let semi = semi_of(&[(0, 1), (1, 0)], 2);
        assert_eq!(semi[0], NodeId::new(0));
        assert_eq!(semi[1], NodeId::new(0));
    }

    #[test]
    fn test_semi_regression_graph() {
        let graph = regression_graph();
        let numbering = dfs_numbering(&graph, NodeId::new(0)).unwrap();
        let semi = semidominators(&graph, &numbering).unwrap();

        let expected = [0, 0, 1, 1, 3, 2, 2, 2];
        for (node, &sdom) in expected.iter().enumerate().skip(1) {
            assert_eq!(semi[node], NodeId::new(sdom), "sdom of node {node}");
        }
    }

    #[test]
    fn test_semi_through_subtree() {
        // 0 -> 1 -> 2 -> 3, 0 -> 3: the path 0 -> 3 bypasses 1 and 2
        let semi = semi_of(&[(0, 1), (1, 2), (2, 3), (0, 3)], 4);
        assert_eq!(semi[3], NodeId::new(0));

        // 0 -> 1 -> 2 -> 3 -> 4 -> 2: the back edge path only passes through
        // nodes with larger indices, so node 2 keeps its parent
        let semi = semi_of(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 2)], 5);
        assert_eq!(semi[2], NodeId::new(1));
    }

    #[test]
    fn test_semi_ignores_unreachable_predecessors() {
        // 2 is unreachable and points at 1
        let semi = semi_of(&[(0, 1), (2, 1)], 3);
        assert_eq!(semi[1], NodeId::new(0));
        assert_eq!(semi[2], NodeId::new(2));
    }

    #[test]
    fn test_semi_self_loop() {
        let semi = semi_of(&[(0, 1), (1, 1), (1, 2), (2, 2)], 3);
        assert_eq!(semi[1], NodeId::new(0));
        assert_eq!(semi[2], NodeId::new(1));
    }
}
