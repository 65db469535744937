/*!
# Bipartite Graph Representation

A [`BipartiteGraph`] is an immutable arena of labelled vertices split into a **left** and a
**right** class. Vertices are identified by their [`Node`] index, never by their label: two
vertices may carry equal labels and still be distinct.

The layout is fixed:
- left vertices are `0..number_of_left`,
- right vertices are `number_of_left..number_of_nodes`,
- neighborhoods are stored in a compressed form (one offset per vertex into a shared
  neighbor array). The order of each neighborhood is the order in which edges were added.

Graphs are created through
- [`BipartiteGraph::from_adjacency`] from a map *left key -> right keys*,
- [`BipartiteGraph::from_edges`] from side-local [`Edge`]s,
- the [`BipartiteGraphBuilder`] for incremental construction.

Every edge is stored on both endpoints, so `v` is a neighbor of `u` iff `u` is a neighbor of `v`.
*/

mod builder;

use std::ops::Range;

use fxhash::FxHashSet;
use itertools::Itertools;

use crate::{error::GraphError, prelude::*};

pub use builder::*;

/// A bipartite graph with vertex labels of type `L`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BipartiteGraph<L = Node> {
    /// Label per vertex, left vertices first
    labels: Vec<L>,
    /// Number of left vertices; all nodes `>= number_of_left` are right vertices
    number_of_left: NumNodes,
    /// `neighbors[offsets[u]..offsets[u + 1]]` is the neighborhood of `u`
    offsets: Vec<usize>,
    /// Concatenated neighborhoods
    neighbors: Vec<Node>,
}

impl<L> BipartiteGraph<L> {
    /// Builds the compressed adjacency from labels and a list of *global* edges `(left, right)`.
    /// Edges must already be deduplicated.
    fn from_parts(labels: Vec<L>, number_of_left: NumNodes, edges: &[(Node, Node)]) -> Self {
        let n = labels.len();
        debug_assert!(number_of_left as usize <= n);

        let mut offsets = vec![0usize; n + 1];
        for &(u, v) in edges {
            offsets[u as usize + 1] += 1;
            offsets[v as usize + 1] += 1;
        }
        for i in 0..n {
            offsets[i + 1] += offsets[i];
        }

        let mut fill = offsets[..n].to_vec();
        let mut neighbors = vec![INVALID_NODE; 2 * edges.len()];
        for &(u, v) in edges {
            debug_assert!(u < number_of_left && v >= number_of_left);

            neighbors[fill[u as usize]] = v;
            fill[u as usize] += 1;
            neighbors[fill[v as usize]] = u;
            fill[v as usize] += 1;
        }

        Self {
            labels,
            number_of_left,
            offsets,
            neighbors,
        }
    }

    /// Returns the total number of vertices
    pub fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Returns the number of left vertices
    pub fn number_of_left(&self) -> NumNodes {
        self.number_of_left
    }

    /// Returns the number of right vertices
    pub fn number_of_right(&self) -> NumNodes {
        self.number_of_nodes() - self.number_of_left
    }

    /// Returns the number of edges
    pub fn number_of_edges(&self) -> NumEdges {
        (self.neighbors.len() / 2) as NumEdges
    }

    /// Returns *true* if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the range of all left vertices
    pub fn left(&self) -> Range<Node> {
        0..self.number_of_left
    }

    /// Returns the range of all right vertices
    pub fn right(&self) -> Range<Node> {
        self.number_of_left..self.number_of_nodes()
    }

    /// Returns the range of all vertices (left first)
    pub fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns the `i`-th left vertex.
    /// ** Panics if `i >= number_of_left` **
    pub fn left_vertex(&self, i: Node) -> Node {
        assert!(i < self.number_of_left);
        i
    }

    /// Returns the `j`-th right vertex.
    /// ** Panics if `j >= number_of_right` **
    pub fn right_vertex(&self, j: Node) -> Node {
        assert!(j < self.number_of_right());
        self.number_of_left + j
    }

    /// Returns the index of `u` within its own side
    pub fn side_local_index(&self, u: Node) -> Node {
        if self.is_left(u) {
            u
        } else {
            u - self.number_of_left
        }
    }

    /// Returns the side `u` belongs to.
    /// ** Panics if `u >= n` **
    pub fn side_of(&self, u: Node) -> Side {
        assert!(u < self.number_of_nodes());
        if u < self.number_of_left {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Returns *true* if `u` is a left vertex
    #[inline]
    pub fn is_left(&self, u: Node) -> bool {
        u < self.number_of_left
    }

    /// Returns *true* if `u` is a right vertex
    #[inline]
    pub fn is_right(&self, u: Node) -> bool {
        u >= self.number_of_left && u < self.number_of_nodes()
    }

    /// Returns the neighborhood of `u` in insertion order.
    /// ** Panics if `u >= n` **
    #[inline]
    pub fn neighbors_of(&self, u: Node) -> &[Node] {
        let u = u as usize;
        &self.neighbors[self.offsets[u]..self.offsets[u + 1]]
    }

    /// Returns the number of neighbors of `u`.
    /// ** Panics if `u >= n` **
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).len() as NumNodes
    }

    /// Returns *true* if `{u, v}` is an edge. Scans the smaller neighborhood.
    /// ** Panics if `u >= n || v >= n` **
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        let (a, b) = if self.degree_of(u) <= self.degree_of(v) {
            (u, v)
        } else {
            (v, u)
        };
        self.neighbors_of(a).contains(&b)
    }

    /// Returns the label of `u`.
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &L {
        &self.labels[u as usize]
    }

    /// Returns all labels (left vertices first)
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Returns an iterator over all edges as `Edge(left, right)` with global nodes.
    /// Edges are grouped by left vertex in increasing order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.left()
            .flat_map(move |u| self.neighbors_of(u).iter().map(move |&v| Edge(u, v)))
    }
}

impl<L> BipartiteGraph<L>
where
    L: Clone + Eq + std::hash::Hash,
{
    /// Creates a graph from an adjacency map *left key -> right keys*.
    ///
    /// - One left vertex is created per distinct left key, in order of first appearance.
    /// - One right vertex is created per distinct right key, in order of first appearance;
    ///   a right key listed by several left keys resolves to the same vertex.
    /// - Edges are added to both endpoints; duplicate edges are ignored.
    ///
    /// Left and right keys live in separate namespaces.
    ///
    /// # Examples
    /// ```
    /// use bimatch::prelude::*;
    ///
    /// let graph = BipartiteGraph::from_adjacency([(0, vec![3, 4]), (1, vec![4]), (2, vec![5])]);
    ///
    /// assert_eq!(graph.number_of_left(), 3);
    /// assert_eq!(graph.number_of_right(), 3);
    /// assert!(graph.has_edge(graph.left_vertex(1), graph.right_vertex(1)));
    /// assert_eq!(*graph.label_of(graph.right_vertex(2)), 5);
    /// ```
    pub fn from_adjacency<A, R>(adjacency: A) -> Self
    where
        A: IntoIterator<Item = (L, R)>,
        R: IntoIterator<Item = L>,
    {
        let mut builder = BipartiteGraphBuilder::new();
        for (left, rights) in adjacency {
            builder.add_left(left.clone());
            for right in rights {
                builder.add_edge(left.clone(), right);
            }
        }
        builder.build()
    }
}

impl BipartiteGraph<Node> {
    /// Creates a graph with `number_of_left` left and `number_of_right` right vertices from
    /// side-local edges `Edge(l, r)`. Labels are the side-local indices.
    /// Duplicate edges are ignored.
    ///
    /// # Errors
    /// Returns a [`GraphError`] if an endpoint is out of range for its side.
    ///
    /// # Examples
    /// ```
    /// use bimatch::prelude::*;
    ///
    /// let graph = BipartiteGraph::from_edges(2, 3, [(0, 0), (0, 2), (1, 1)]).unwrap();
    /// assert_eq!(graph.number_of_edges(), 3);
    /// assert_eq!(graph.neighbors_of(0), &[2, 4]);
    ///
    /// assert!(BipartiteGraph::from_edges(2, 3, [(2, 0)]).is_err());
    /// ```
    pub fn from_edges<I, E>(
        number_of_left: NumNodes,
        number_of_right: NumNodes,
        edges: I,
    ) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut seen = FxHashSet::default();
        let edges = edges
            .into_iter()
            .map(|e| {
                let edge: Edge = e.into();
                if edge.left() >= number_of_left {
                    return Err(GraphError::LeftOutOfRange {
                        index: edge.left(),
                        count: number_of_left,
                    });
                }
                if edge.right() >= number_of_right {
                    return Err(GraphError::RightOutOfRange {
                        index: edge.right(),
                        count: number_of_right,
                    });
                }
                Ok(edge)
            })
            .filter_ok(|&e| seen.insert(e))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_local_edges(number_of_left, number_of_right, &edges))
    }

    /// Same as [`BipartiteGraph::from_edges`] for edges that are known to be in range and
    /// free of duplicates
    pub(crate) fn from_local_edges(
        number_of_left: NumNodes,
        number_of_right: NumNodes,
        edges: &[Edge],
    ) -> Self {
        let edges = edges
            .iter()
            .map(|&Edge(l, r)| {
                debug_assert!(l < number_of_left && r < number_of_right);
                (l, number_of_left + r)
            })
            .collect_vec();
        let labels = (0..number_of_left).chain(0..number_of_right).collect_vec();

        Self::from_parts(labels, number_of_left, &edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BipartiteGraph<u32> {
        BipartiteGraph::from_adjacency([(0, vec![3, 4]), (1, vec![4]), (2, vec![5])])
    }

    #[test]
    fn from_adjacency() {
        let graph = sample();

        assert_eq!(graph.number_of_left(), 3);
        assert_eq!(graph.number_of_right(), 3);
        assert_eq!(graph.number_of_edges(), 4);

        let (l, r) = (|i| graph.left_vertex(i), |j| graph.right_vertex(j));

        assert!(graph.neighbors_of(l(0)).contains(&r(0)));
        assert!(graph.neighbors_of(l(0)).contains(&r(1)));
        assert!(graph.neighbors_of(l(1)).contains(&r(1)));
        assert!(graph.neighbors_of(l(2)).contains(&r(2)));

        assert_eq!(graph.labels(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn shared_right_keys_resolve_to_one_vertex() {
        let graph = BipartiteGraph::from_adjacency([(0, vec![7]), (1, vec![7]), (2, vec![7])]);

        assert_eq!(graph.number_of_right(), 1);
        let r = graph.right_vertex(0);
        assert_eq!(graph.neighbors_of(r), &[0, 1, 2]);
        assert_eq!(graph.degree_of(r), 3);
    }

    #[test]
    fn edges_are_symmetric() {
        let graph = BipartiteGraph::from_adjacency([
            ("a", vec!["x", "y"]),
            ("b", vec!["y", "z"]),
            ("c", vec!["x"]),
        ]);

        for u in graph.vertices() {
            for &v in graph.neighbors_of(u) {
                assert_ne!(graph.side_of(u), graph.side_of(v));
                assert!(graph.neighbors_of(v).contains(&u));
            }
        }

        assert_eq!(graph.edges().count(), graph.number_of_edges() as usize);
    }

    #[test]
    fn equal_labels_on_both_sides_are_distinct() {
        let graph = BipartiteGraph::from_adjacency([(1, vec![1]), (2, vec![1, 2])]);

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.label_of(0), graph.label_of(2));
        assert_eq!(graph.side_of(0), Side::Left);
        assert_eq!(graph.side_of(2), Side::Right);
    }

    #[test]
    fn duplicate_edges_are_ignored() {
        let graph = BipartiteGraph::from_adjacency([(0, vec![1, 1]), (0, vec![1, 2])]);

        assert_eq!(graph.number_of_left(), 1);
        assert_eq!(graph.number_of_right(), 2);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.neighbors_of(0), &[1, 2]);
    }

    #[test]
    fn isolated_left_vertices() {
        let graph = BipartiteGraph::from_adjacency([(0, vec![]), (1, vec![5])]);

        assert_eq!(graph.number_of_left(), 2);
        assert_eq!(graph.degree_of(0), 0);
        assert_eq!(graph.number_of_right(), 1);
    }

    #[test]
    fn from_edges() {
        let graph = BipartiteGraph::from_edges(3, 2, [(0, 0), (1, 1), (2, 1), (2, 1)]).unwrap();

        assert_eq!(graph.number_of_nodes(), 5);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.right().collect_vec(), vec![3, 4]);
        assert_eq!(graph.neighbors_of(4), &[1, 2]);
        assert_eq!(
            graph.edges().collect_vec(),
            vec![Edge(0, 3), Edge(1, 4), Edge(2, 4)]
        );
        assert_eq!(graph.side_local_index(4), 1);
        assert_eq!(graph.side_local_index(2), 2);

        assert!(graph.has_edge(3, 0));
        assert!(!graph.has_edge(0, 4));
    }

    #[test]
    fn from_edges_out_of_range() {
        assert_eq!(
            BipartiteGraph::from_edges(2, 2, [(0, 0), (2, 1)]),
            Err(GraphError::LeftOutOfRange { index: 2, count: 2 })
        );
        assert_eq!(
            BipartiteGraph::from_edges(2, 2, [(0, 5)]),
            Err(GraphError::RightOutOfRange { index: 5, count: 2 })
        );
    }

    #[test]
    fn empty_graph() {
        let graph = BipartiteGraph::from_edges(0, 0, std::iter::empty::<Edge>()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edges().count(), 0);
    }
}
