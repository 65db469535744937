//! Reference implementations and assertions shared by the unit tests.

use fxhash::FxHashSet;

use crate::prelude::*;

/// Size of a maximum matching computed by Kuhn's augmenting path algorithm: every left vertex
/// tries to find a free right vertex, possibly re-routing previously matched left vertices.
pub(crate) fn kuhn_matching_size<L>(graph: &BipartiteGraph<L>) -> usize {
    fn try_kuhn<L>(
        graph: &BipartiteGraph<L>,
        u: Node,
        seen: &mut NodeBitSet,
        mate: &mut [Node],
    ) -> bool {
        for &v in graph.neighbors_of(u) {
            if seen.set_bit(v) {
                continue;
            }

            let other = mate[v as usize];
            if other == INVALID_NODE || try_kuhn(graph, other, seen, mate) {
                mate[v as usize] = u;
                return true;
            }
        }
        false
    }

    let mut mate = vec![INVALID_NODE; graph.number_of_nodes() as usize];
    graph
        .left()
        .filter(|&u| {
            let mut seen = NodeBitSet::new(graph.number_of_nodes());
            try_kuhn(graph, u, &mut seen, &mut mate)
        })
        .count()
}

/// Asserts that `matching` is a valid matching of `graph`: every pair is an edge between a left
/// and a right vertex, no vertex is matched twice, and pairs are stored left first.
pub(crate) fn assert_matching<L>(graph: &BipartiteGraph<L>, matching: &Matching) {
    assert_eq!(matching.validate(graph), Ok(()));

    let mut used = FxHashSet::default();
    for (u, v) in matching.pairs() {
        assert!(graph.is_left(u), "{u} is not a left vertex");
        assert!(graph.is_right(v), "{v} is not a right vertex");
        assert!(graph.has_edge(u, v), "({u},{v}) is not an edge");
        assert!(used.insert(u) && used.insert(v), "({u},{v}) is not vertex-disjoint");

        assert_eq!(matching.mate_of(u), Some(v));
        assert_eq!(matching.mate_of(v), Some(u));
    }

    assert_eq!(used.len(), 2 * matching.len());
    assert!(matching.len() <= graph.number_of_left().min(graph.number_of_right()) as usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kuhn_reroutes() {
        // greedy would match 0 - 0 and leave 1 unmatched
        let graph = BipartiteGraph::from_edges(2, 2, [(0, 0), (0, 1), (1, 0)]).unwrap();
        assert_eq!(kuhn_matching_size(&graph), 2);

        let graph = BipartiteGraph::from_edges(3, 1, [(0, 0), (1, 0), (2, 0)]).unwrap();
        assert_eq!(kuhn_matching_size(&graph), 1);
    }
}
