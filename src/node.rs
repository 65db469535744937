/*!
# Node Representation

We choose `Node = u32` as bipartite instances with more than `2^32` vertices are out of reach
for an in-memory matching anyway. This saves space compared to `usize` and allows indexing
arenas directly.

A [`BipartiteGraph`](crate::graph::BipartiteGraph) stores its left vertices first: left
vertices are `0..number_of_left`, right vertices follow up to `number_of_nodes`. Which
[`Side`] a node is on is therefore a single comparison.
*/

use std::fmt::Display;

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// The two classes of a bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// Vertices `0..number_of_left`
    Left,
    /// Vertices `number_of_left..number_of_nodes`
    Right,
}

impl Side {
    /// Returns the other side
    pub const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}
