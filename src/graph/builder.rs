use std::hash::Hash;

use fxhash::{FxHashMap, FxHashSet};

use super::*;

/// Incremental construction of a [`BipartiteGraph`] from arbitrary hashable keys.
///
/// Left and right keys are resolved independently: each distinct key becomes exactly one
/// vertex of its side, numbered in order of first appearance. Adding an edge creates missing
/// endpoints on the fly.
///
/// # Examples
/// ```
/// use bimatch::prelude::*;
///
/// let mut builder = BipartiteGraphBuilder::new();
/// builder.add_edge("alice", "mon");
/// builder.add_edge("alice", "tue");
/// builder.add_edge("bob", "mon");
/// builder.add_left("carol");
///
/// let graph = builder.build();
/// assert_eq!(graph.number_of_left(), 3);
/// assert_eq!(graph.number_of_right(), 2);
/// assert_eq!(graph.degree_of(graph.left_vertex(2)), 0);
/// ```
#[derive(Debug, Clone)]
pub struct BipartiteGraphBuilder<K> {
    left_ids: FxHashMap<K, Node>,
    right_ids: FxHashMap<K, Node>,
    left_labels: Vec<K>,
    right_labels: Vec<K>,
    /// Side-local edges in insertion order
    edges: Vec<(Node, Node)>,
    seen: FxHashSet<(Node, Node)>,
}

impl<K> Default for BipartiteGraphBuilder<K> {
    fn default() -> Self {
        Self {
            left_ids: FxHashMap::default(),
            right_ids: FxHashMap::default(),
            left_labels: Vec::new(),
            right_labels: Vec::new(),
            edges: Vec::new(),
            seen: FxHashSet::default(),
        }
    }
}

impl<K> BipartiteGraphBuilder<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the side-local index of the left vertex with key `key`, creating it if necessary
    pub fn add_left(&mut self, key: K) -> Node {
        Self::resolve(&mut self.left_ids, &mut self.left_labels, key)
    }

    /// Adds the edge `{left, right}` and returns the side-local indices of both endpoints.
    /// Returns the same indices if the edge was already present.
    pub fn add_edge(&mut self, left: K, right: K) -> (Node, Node) {
        let l = self.add_left(left);
        let r = Self::resolve(&mut self.right_ids, &mut self.right_labels, right);

        if self.seen.insert((l, r)) {
            self.edges.push((l, r));
        }

        (l, r)
    }

    /// Returns the number of left vertices added so far
    pub fn number_of_left(&self) -> NumNodes {
        self.left_labels.len() as NumNodes
    }

    /// Returns the number of right vertices added so far
    pub fn number_of_right(&self) -> NumNodes {
        self.right_labels.len() as NumNodes
    }

    /// Finalizes the graph
    pub fn build(self) -> BipartiteGraph<K> {
        let nl = self.number_of_left();
        let edges = self
            .edges
            .iter()
            .map(|&(l, r)| (l, nl + r))
            .collect_vec();

        let mut labels = self.left_labels;
        labels.extend(self.right_labels);

        BipartiteGraph::from_parts(labels, nl, &edges)
    }

    fn resolve(ids: &mut FxHashMap<K, Node>, labels: &mut Vec<K>, key: K) -> Node {
        *ids.entry(key).or_insert_with_key(|key| {
            labels.push(key.clone());
            (labels.len() - 1) as Node
        })
    }
}
