/*!
# Alternating BFS Layering

The first half of a Hopcroft–Karp phase: starting from all unmatched left vertices, build
layers of increasing alternating distance until the first unmatched right vertex is reached.

- Layer `0` holds all unmatched left vertices.
- From a left vertex we step to right neighbors over **non-matching** edges.
- From a right vertex we step to its mate over the **matching** edge.
- Every vertex is assigned to at most one layer (global visited semantics).
- The BFS stops at the first layer containing an unmatched vertex. That layer is filtered
  down to its unmatched vertices, which are the endpoints of all shortest augmenting paths.

If no unmatched vertex is ever reached, the BFS stops at the first empty layer and the
resulting [`Layers`] have an odd count: there is no augmenting path.
*/

use tracing::trace;

use super::*;

/// Marker for nodes not assigned to any layer
const NO_LAYER: u32 = u32::MAX;

/// Ordered sequence of disjoint vertex layers together with a global vertex -> layer map.
///
/// Vertices can be removed from the structure (as done after each extracted augmenting path)
/// but never re-added.
#[derive(Debug, Clone)]
pub struct Layers {
    /// Vertices of each layer in discovery order; may contain removed vertices
    members: Vec<Vec<Node>>,
    /// Number of vertices still present per layer
    sizes: Vec<usize>,
    /// Index of the first possibly present vertex per layer
    heads: Vec<usize>,
    /// Layer index per node or `NO_LAYER`
    layer_of: Vec<u32>,
}

impl Layers {
    /// Creates an empty layer structure for nodes `0..n`
    pub fn new(n: NumNodes) -> Self {
        Self {
            members: Vec::new(),
            sizes: Vec::new(),
            heads: Vec::new(),
            layer_of: vec![NO_LAYER; n as usize],
        }
    }

    /// Creates the layer structure from explicit layers, mainly useful for testing.
    /// ** Panics if a node occurs twice or `u >= n` **
    pub fn from_layers<I, L>(n: NumNodes, layers: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = Node>,
    {
        let mut result = Self::new(n);
        for layer in layers {
            result.push_layer(layer.into_iter().collect());
        }
        result
    }

    /// Appends a new top layer
    /// ** Panics if a node is already assigned to a layer **
    pub fn push_layer(&mut self, layer: Vec<Node>) {
        let index = self.members.len() as u32;
        for &u in &layer {
            assert_eq!(self.layer_of[u as usize], NO_LAYER, "node {u} is layered twice");
            self.layer_of[u as usize] = index;
        }

        self.sizes.push(layer.len());
        self.heads.push(0);
        self.members.push(layer);
    }

    /// Returns the number of layers (including empty ones)
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns *true* if there are no layers at all
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the index of the top layer
    pub fn top_index(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// Returns the layer `u` is currently assigned to
    #[inline]
    pub fn layer_of(&self, u: Node) -> Option<usize> {
        let layer = self.layer_of[u as usize];
        (layer != NO_LAYER).then_some(layer as usize)
    }

    /// Returns *true* if `u` is currently in layer `index`
    #[inline]
    pub fn is_in_layer(&self, u: Node, index: usize) -> bool {
        self.layer_of[u as usize] == index as u32
    }

    /// Returns the number of vertices currently in layer `index`
    pub fn layer_size(&self, index: usize) -> usize {
        self.sizes[index]
    }

    /// Returns an iterator over the vertices currently in layer `index` in discovery order
    pub fn layer(&self, index: usize) -> impl Iterator<Item = Node> + '_ {
        self.members[index][self.heads[index]..]
            .iter()
            .copied()
            .filter(move |&u| self.is_in_layer(u, index))
    }

    /// Returns the first vertex still present in layer `index`
    pub fn first_in_layer(&mut self, index: usize) -> Option<Node> {
        let members = &self.members[index];
        let mut head = self.heads[index];
        while head < members.len() && self.layer_of[members[head] as usize] != index as u32 {
            head += 1;
        }
        self.heads[index] = head;
        members.get(head).copied()
    }

    /// Removes `u` from its layer. Returns *true* if `u` was assigned to a layer.
    pub fn remove(&mut self, u: Node) -> bool {
        let layer = std::mem::replace(&mut self.layer_of[u as usize], NO_LAYER);
        if layer == NO_LAYER {
            return false;
        }
        self.sizes[layer as usize] -= 1;
        true
    }

    /// Returns all layers with their current members
    pub fn to_vecs(&self) -> Vec<Vec<Node>> {
        (0..self.len()).map(|i| self.layer(i).collect()).collect()
    }
}

/// Builds the alternating BFS layers for `graph` with respect to `matching`.
///
/// Within a layer, vertices are ordered by discovery: sources in layer order, neighbors in
/// adjacency order.
///
/// # Examples
/// ```
/// use bimatch::{prelude::*, algo::*};
///
/// let graph = BipartiteGraph::from_adjacency([(0, vec![3, 4]), (1, vec![4]), (2, vec![5])]);
/// let layers = layer(&graph, &Matching::new());
///
/// assert_eq!(layers.to_vecs(), vec![vec![0, 1, 2], vec![3, 4, 5]]);
/// ```
pub fn layer<L>(graph: &BipartiteGraph<L>, matching: &Matching) -> Layers {
    let mut layers = Layers::new(graph.number_of_nodes());

    layers.push_layer(graph.left().filter(|&u| !matching.contains(u)).collect());

    // nodes discovered so far
    let mut discovered = NodeBitSet::new(graph.number_of_nodes());

    loop {
        let current = layers.len() - 1;
        let mut next = Vec::new();

        for u in layers.layer(current) {
            let mate = matching.mate_of(u);
            for &v in graph.neighbors_of(u) {
                if layers.layer_of(v).is_some() || discovered.get_bit(v) {
                    continue;
                }

                let include = if graph.is_left(u) {
                    mate != Some(v)
                } else {
                    mate == Some(v)
                };

                if include {
                    discovered.set_bit(v);
                    next.push(v);
                }
            }
        }

        trace!(layer = current + 1, size = next.len(), "bfs layer");

        if next.is_empty() {
            break;
        }

        if next.iter().any(|&v| !matching.contains(v)) {
            next.retain(|&v| !matching.contains(v));
            layers.push_layer(next);
            break;
        }

        layers.push_layer(next);
    }

    layers
}
