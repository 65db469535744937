use std::fmt::{Debug, Display};

use crate::node::Node;

/// An edge between a left and a right vertex.
///
/// Depending on the context, the endpoints are either *side-local* indices (`0..number_of_left`
/// and `0..number_of_right`), as accepted by [`BipartiteGraph::from_edges`] and produced by the
/// generators, or *global* nodes of a graph, as returned by [`BipartiteGraph::edges`].
/// The left endpoint always comes first.
///
/// [`BipartiteGraph::from_edges`]: crate::graph::BipartiteGraph::from_edges
/// [`BipartiteGraph::edges`]: crate::graph::BipartiteGraph::edges
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the left endpoint
    pub fn left(&self) -> Node {
        self.0
    }

    /// Returns the right endpoint
    pub fn right(&self) -> Node {
        self.1
    }

    /// Simple bijection from `0..(nl * nr)` to all candidate edges between `nl` left and `nr`
    /// right vertices (side-local)
    pub fn from_u64(x: u64, nr: u64) -> Self {
        let u = x / nr;
        let v = x % nr;
        Edge(u as Node, v as Node)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<Edge> for (Node, Node) {
    fn from(value: Edge) -> Self {
        (value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u64() {
        assert_eq!(Edge::from_u64(0, 3), Edge(0, 0));
        assert_eq!(Edge::from_u64(4, 3), Edge(1, 1));
        assert_eq!(Edge::from_u64(8, 3), Edge(2, 2));
        assert_eq!(Edge::from_u64(5, 1), Edge(5, 0));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Edge(2, 7)), "(2,7)");
        assert_eq!(format!("{:?}", Edge(2, 7)), "(2,7)");
    }
}
