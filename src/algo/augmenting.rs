/*!
# Augmenting Path Search

The second half of a Hopcroft–Karp phase: walk down the BFS [`Layers`] from a free vertex of
the top layer to a free vertex of layer `0`.

From a vertex in layer `i`, candidates are its neighbors in layer `i - 1`:
- a right vertex may use any (non-matching) edge into the layer below,
- a left vertex above layer `0` only follows its matching edge, so every returned path
  strictly alternates between non-matching and matching edges.

Candidates are tried in adjacency order and the first complete path is returned. The search
uses an explicit stack holding a single path buffer, so the native stack does not grow with
the layer count. Vertices whose subtree was fully explored without success are remembered as
dead ends by an [`AugmentingSearch`] and are not expanded again while it is reused.
*/

use super::*;

/// Reusable state for augmenting path searches within one phase.
///
/// Dead-end marks stay valid as long as vertices are only ever removed from the layers and
/// the matching only changes on vertices that were removed, which is exactly what the
/// Hopcroft–Karp driver does. Create a fresh search per phase.
#[derive(Debug, Clone)]
pub struct AugmentingSearch {
    /// Current path from the start vertex downwards
    path: Vec<Node>,
    /// Next neighbor position to try per path entry
    cursors: Vec<usize>,
    /// Vertices from which layer `0` is unreachable
    dead: NodeBitSet,
}

impl AugmentingSearch {
    /// Creates a search for graphs with `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            path: Vec::new(),
            cursors: Vec::new(),
            dead: NodeBitSet::new(n),
        }
    }

    /// Searches an augmenting path starting at `start` in layer `layer_index`.
    ///
    /// Returns the path ordered from layer `0` up to `start`; it has exactly
    /// `layer_index + 1` vertices. Returns `None` if no such path exists.
    pub fn find<L>(
        &mut self,
        graph: &BipartiteGraph<L>,
        layers: &Layers,
        start: Node,
        layer_index: usize,
        matching: &Matching,
    ) -> Option<Vec<Node>> {
        debug_assert!(layers.is_in_layer(start, layer_index));

        self.path.clear();
        self.cursors.clear();

        if self.dead.get_bit(start) {
            return None;
        }

        self.path.push(start);
        self.cursors.push(0);

        while let Some(&u) = self.path.last() {
            let depth = self.path.len() - 1;
            let level = layer_index - depth;

            if level == 0 {
                if !matching.contains(u) {
                    let mut path = self.path.clone();
                    path.reverse();
                    return Some(path);
                }
            } else if let Some(v) = self.next_candidate(graph, layers, depth, level - 1, matching)
            {
                self.path.push(v);
                self.cursors.push(0);
                continue;
            }

            // nothing below `u` reaches a free vertex in layer 0
            self.dead.set_bit(u);
            self.path.pop();
            self.cursors.pop();
        }

        None
    }

    /// Advances the cursor of the path entry at `depth` to its next neighbor in layer `target`
    fn next_candidate<L>(
        &mut self,
        graph: &BipartiteGraph<L>,
        layers: &Layers,
        depth: usize,
        target: usize,
        matching: &Matching,
    ) -> Option<Node> {
        let u = self.path[depth];
        let cursor = &mut self.cursors[depth];
        let usable = |v: Node| layers.is_in_layer(v, target) && !self.dead.get_bit(v);

        if graph.is_left(u) {
            if *cursor > 0 {
                return None;
            }
            *cursor = 1;
            return matching.mate_of(u).filter(|&v| usable(v));
        }

        let neighbors = graph.neighbors_of(u);
        while let Some(&v) = neighbors.get(*cursor) {
            *cursor += 1;
            if usable(v) {
                return Some(v);
            }
        }

        None
    }
}

/// Searches an augmenting path from `start` in layer `layer_index` down to a free vertex in
/// layer `0`. See [`AugmentingSearch::find`] for the contract.
///
/// # Examples
/// ```
/// use bimatch::{prelude::*, algo::*};
///
/// let graph = BipartiteGraph::from_adjacency([(0, vec![3, 4]), (1, vec![4]), (2, vec![3, 4, 5])]);
/// let (l, r) = (|i| graph.left_vertex(i), |j| graph.right_vertex(j));
///
/// let layers = Layers::from_layers(
///     graph.number_of_nodes(),
///     [vec![l(0)], vec![r(0)], vec![l(2)], vec![r(1)]],
/// );
/// let matching = Matching::from_pairs([(r(0), l(2))]);
///
/// let path = find_augmenting_path(&graph, &layers, r(1), 3, &matching);
/// assert_eq!(path, Some(vec![l(0), r(0), l(2), r(1)]));
/// ```
pub fn find_augmenting_path<L>(
    graph: &BipartiteGraph<L>,
    layers: &Layers,
    start: Node,
    layer_index: usize,
    matching: &Matching,
) -> Option<Vec<Node>> {
    AugmentingSearch::new(graph.number_of_nodes()).find(graph, layers, start, layer_index, matching)
}
