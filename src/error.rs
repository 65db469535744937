//! Error types for graph construction and matching validation.
//!
//! The matching algorithm itself cannot fail; these errors are raised where input enters the
//! crate, i.e. when building graphs and when accepting matchings supplied by a caller.

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Errors raised while constructing a [`BipartiteGraph`](crate::graph::BipartiteGraph)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A left endpoint is not within `0..count`
    #[error("left vertex {index} out of range for {count} left vertices")]
    LeftOutOfRange {
        /// The invalid side-local index
        index: Node,
        /// Number of left vertices
        count: NumNodes,
    },

    /// A right endpoint is not within `0..count`
    #[error("right vertex {index} out of range for {count} right vertices")]
    RightOutOfRange {
        /// The invalid side-local index
        index: Node,
        /// Number of right vertices
        count: NumNodes,
    },
}

/// Errors raised when a set of pairs is not a matching of a given graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// The node does not exist in the graph
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(Node),

    /// Both endpoints of the pair are on the same side
    #[error("pair ({0}, {1}) does not connect a left vertex to a right vertex")]
    SameSide(Node, Node),

    /// The pair is not an edge of the graph
    #[error("pair ({0}, {1}) is not an edge of the graph")]
    NotAnEdge(Node, Node),

    /// The node occurs in more than one pair
    #[error("vertex {0} is matched more than once")]
    AlreadyMatched(Node),
}

impl From<GraphError> for std::io::Error {
    fn from(err: GraphError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}

impl From<MatchingError> for std::io::Error {
    fn from(err: MatchingError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}
