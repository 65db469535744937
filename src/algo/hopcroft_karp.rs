/*!
# Hopcroft–Karp

Computes a **maximum matching** of a bipartite graph.

Each *phase* builds alternating BFS [`Layers`] and then repeatedly extracts vertex-disjoint
shortest augmenting paths from them:

1. If all left or all right vertices are matched, the matching is maximum.
2. Otherwise build the layers. An odd number of layers means that no free right vertex was
   reached and the matching is maximum.
3. While the top layer is non-empty, search an augmenting path from its first vertex. Stop the
   phase if there is none; otherwise remove the path from the layers and apply it.

The algorithm can either be used through the [`MaximumMatching`] trait on a graph or be
configured via [`HopcroftKarp`] before running it.
*/

use tracing::{debug, trace};

use super::*;

/// Why the driver stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
    /// Every vertex of one side is matched
    SideSaturated,
    /// The last phase found no augmenting path
    NoAugmentingPath,
}

/// Configurable Hopcroft–Karp driver.
///
/// # Examples
/// ```
/// use bimatch::{prelude::*, algo::*};
///
/// let graph = BipartiteGraph::from_adjacency([(0, vec![3, 4]), (1, vec![3, 4, 5]), (2, vec![4])]);
///
/// let matching = HopcroftKarp::new(&graph).run();
/// assert_eq!(matching.pairs().collect::<Vec<_>>(), vec![(0, 3), (2, 4), (1, 5)]);
///
/// let warm = HopcroftKarp::new(&graph).greedy_initialization(true).run();
/// assert_eq!(warm.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct HopcroftKarp<'a, L> {
    graph: &'a BipartiteGraph<L>,
    matching: Matching,
    greedy: bool,
}

impl<'a, L> HopcroftKarp<'a, L> {
    /// Creates a new driver starting from the empty matching
    pub fn new(graph: &'a BipartiteGraph<L>) -> Self {
        Self {
            graph,
            matching: Matching::new(),
            greedy: false,
        }
    }

    /// Starts from the given matching instead of the empty one.
    /// The matching must be valid for the graph (see [`Matching::validate`]).
    pub fn with_matching(mut self, matching: Matching) -> Self {
        debug_assert!(matching.validate(self.graph).is_ok());
        self.matching = matching;
        self
    }

    /// If set, the initial matching is first extended greedily: every unmatched left vertex
    /// (in order) is matched to its first unmatched right neighbor.
    pub fn greedy_initialization(mut self, greedy: bool) -> Self {
        self.greedy = greedy;
        self
    }

    /// Runs the algorithm to completion and returns a maximum matching
    pub fn run(mut self) -> Matching {
        if self.greedy {
            extend_greedily(self.graph, &mut self.matching);
            debug!(size = self.matching.len(), "greedy initialization");
        }

        let mut phase = 0usize;
        let halt = loop {
            if self.is_side_saturated() {
                break Halt::SideSaturated;
            }

            phase += 1;
            let mut layers = layer(self.graph, &self.matching);
            if layers.len() % 2 == 1 {
                break Halt::NoAugmentingPath;
            }

            let augmented = self.augment_along(&mut layers);
            debug!(
                phase,
                layers = layers.len(),
                augmented,
                size = self.matching.len(),
                "hopcroft-karp phase finished"
            );
        };

        debug!(?halt, phases = phase, size = self.matching.len(), "maximum matching found");
        self.matching
    }

    /// Returns *true* if every vertex of one side is matched
    fn is_side_saturated(&self) -> bool {
        let size = self.matching.len() as NumNodes;
        size == self.graph.number_of_left() || size == self.graph.number_of_right()
    }

    /// Extracts vertex-disjoint augmenting paths from the top layer until a search fails.
    /// Returns the number of applied paths.
    fn augment_along(&mut self, layers: &mut Layers) -> usize {
        let Some(top) = layers.top_index() else {
            return 0;
        };

        let mut search = AugmentingSearch::new(self.graph.number_of_nodes());
        let mut augmented = 0;

        while let Some(start) = layers.first_in_layer(top) {
            let Some(path) = search.find(self.graph, layers, start, top, &self.matching) else {
                break;
            };

            trace!(len = path.len(), "augmenting path");
            for &u in &path {
                layers.remove(u);
            }
            self.matching.merge_augmenting_path(&path);
            augmented += 1;
        }

        augmented
    }
}

/// Greedily matches every unmatched left vertex to its first unmatched right neighbor
fn extend_greedily<L>(graph: &BipartiteGraph<L>, matching: &mut Matching) {
    for u in graph.left() {
        if matching.contains(u) {
            continue;
        }

        if let Some(&v) = graph.neighbors_of(u).iter().find(|&&v| !matching.contains(v)) {
            matching.add_pair(u, v);
        }
    }
}

/// Computes a maximum matching of `graph` starting from the empty matching.
///
/// Shorthand for `HopcroftKarp::new(graph).run()`.
pub fn run<L>(graph: &BipartiteGraph<L>) -> Matching {
    HopcroftKarp::new(graph).run()
}

/// A trait providing maximum matchings on bipartite graphs.
pub trait MaximumMatching {
    /// Computes a **maximum matching** using Hopcroft–Karp.
    ///
    /// Pairs are returned as `(left, right)` in the order they were created; ties are broken
    /// by vertex order of the layers and adjacency order of the neighborhoods.
    ///
    /// # Examples
    /// ```
    /// use bimatch::{prelude::*, algo::*};
    ///
    /// let graph = BipartiteGraph::from_adjacency([(0, vec![2]), (1, vec![3])]);
    /// let matching = graph.maximum_matching();
    ///
    /// assert_eq!(matching.pairs().collect::<Vec<_>>(), vec![(0, 2), (1, 3)]);
    /// assert!(graph.is_maximum_matching(&matching));
    /// ```
    fn maximum_matching(&self) -> Matching;

    /// Returns *true* if no augmenting path with respect to `matching` exists, i.e. if
    /// `matching` has maximum cardinality. `matching` must be valid for the graph.
    fn is_maximum_matching(&self, matching: &Matching) -> bool;
}

impl<L> MaximumMatching for BipartiteGraph<L> {
    fn maximum_matching(&self) -> Matching {
        run(self)
    }

    fn is_maximum_matching(&self, matching: &Matching) -> bool {
        layer(self, matching).len() % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::RandomBipartite, testing::*};

    #[test]
    fn two_node_graph() {
        let graph = BipartiteGraph::from_adjacency([(0, vec![1])]);
        let matching = graph.maximum_matching();

        assert_eq!(
            matching.pairs().collect_vec(),
            vec![(graph.left_vertex(0), graph.right_vertex(0))]
        );
    }

    #[test]
    fn four_node_graph() {
        let graph = BipartiteGraph::from_adjacency([(0, vec![2]), (1, vec![3])]);
        let matching = graph.maximum_matching();

        assert_eq!(
            matching.pairs().collect_vec(),
            vec![
                (graph.left_vertex(0), graph.right_vertex(0)),
                (graph.left_vertex(1), graph.right_vertex(1))
            ]
        );
    }

    #[test]
    fn six_node_graph() {
        let graph =
            BipartiteGraph::from_adjacency([(0, vec![3, 4]), (1, vec![3, 4, 5]), (2, vec![4])]);
        let matching = graph.maximum_matching();

        let (l, r) = (|i| graph.left_vertex(i), |j| graph.right_vertex(j));
        assert_eq!(
            matching.pairs().collect_vec(),
            vec![(l(0), r(0)), (l(2), r(1)), (l(1), r(2))]
        );
        assert_eq!(
            matching.labelled_pairs(&graph).collect_vec(),
            vec![(&0, &3), (&2, &4), (&1, &5)]
        );
    }

    #[test]
    fn empty_and_edgeless_graphs() {
        let graph = BipartiteGraph::from_edges(0, 0, std::iter::empty::<Edge>()).unwrap();
        assert!(graph.maximum_matching().is_empty());

        let graph = BipartiteGraph::from_edges(3, 2, std::iter::empty::<Edge>()).unwrap();
        let matching = graph.maximum_matching();
        assert!(matching.is_empty());
        assert!(graph.is_maximum_matching(&matching));
    }

    #[test]
    fn long_augmenting_path() {
        // path l0 - r0 - l1 - r1 - l2 - r2 with the middle edges matched
        let graph = BipartiteGraph::from_edges(3, 3, [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]).unwrap();
        let initial = Matching::try_from_pairs(&graph, [(1, 3), (2, 4)]).unwrap();
        assert!(!graph.is_maximum_matching(&initial));

        let matching = HopcroftKarp::new(&graph).with_matching(initial).run();
        assert_eq!(matching.sorted_pairs(&graph), vec![(0, 3), (1, 4), (2, 5)]);
    }

    #[test]
    fn rerun_on_maximum_matching_changes_nothing() {
        let graph =
            BipartiteGraph::from_adjacency([(0, vec![3, 4]), (1, vec![3, 4, 5]), (2, vec![4])]);
        let first = graph.maximum_matching();
        let second = HopcroftKarp::new(&graph).with_matching(first.clone()).run();

        assert_eq!(first.pairs().collect_vec(), second.pairs().collect_vec());
    }

    #[test]
    fn rerun_on_unsaturated_maximum_matching_changes_nothing() {
        // both left vertices compete for the same right vertex
        let graph = BipartiteGraph::from_edges(2, 2, [(0, 0), (1, 0)]).unwrap();
        let first = graph.maximum_matching();
        assert_eq!(first.len(), 1);

        let second = HopcroftKarp::new(&graph).with_matching(first.clone()).run();
        assert_eq!(first.pairs().collect_vec(), second.pairs().collect_vec());
    }

    #[test]
    fn greedy_initialization() {
        // greedy picks l0 - r0 which blocks l1; one augmentation fixes it
        let graph = BipartiteGraph::from_edges(2, 2, [(0, 0), (0, 1), (1, 0)]).unwrap();

        let matching = HopcroftKarp::new(&graph).greedy_initialization(true).run();
        assert_eq!(matching.sorted_pairs(&graph), vec![(0, 3), (1, 2)]);
    }

    #[test]
    fn random_graphs_match_oracle() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for (nl, nr) in [(5, 5), (10, 20), (30, 15), (50, 50)] {
            for avg_deg in [0.5, 1.0, 2.0, 4.0] {
                for _ in 0..10 {
                    let graph = RandomBipartite::new()
                        .left(nl)
                        .right(nr)
                        .avg_deg(avg_deg)
                        .graph(rng);

                    let matching = graph.maximum_matching();
                    assert_matching(&graph, &matching);
                    assert_eq!(matching.len(), kuhn_matching_size(&graph));
                    assert!(matching.len() <= nl.min(nr) as usize);
                    assert!(graph.is_maximum_matching(&matching));

                    let warm = HopcroftKarp::new(&graph).greedy_initialization(true).run();
                    assert_matching(&graph, &warm);
                    assert_eq!(warm.len(), matching.len());
                }
            }
        }
    }

    #[test]
    fn planted_perfect_matchings_are_found() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for n in [10, 100, 500] {
            let graph = RandomBipartite::new()
                .left(n)
                .right(n)
                .avg_deg(3.0)
                .planted_matching(true)
                .graph(rng);

            let matching = graph.maximum_matching();
            assert_matching(&graph, &matching);
            assert_eq!(matching.len(), n as usize);
        }
    }

    #[test]
    fn pairs_are_left_right_ordered() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let graph = RandomBipartite::new().left(40).right(40).prob(0.1).graph(rng);

        let matching = graph.maximum_matching();
        assert!(
            matching
                .pairs()
                .all(|(u, v)| graph.is_left(u) && graph.is_right(v))
        );
    }
}
