/*!
`bimatch` computes **maximum matchings** of bipartite graphs using the algorithm of
Hopcroft and Karp.

# Representation

A [`BipartiteGraph`](crate::graph::BipartiteGraph) is an immutable arena: vertices are
numbered as `u32` [`Node`](crate::node::Node)s, left vertices first (`0..number_of_left`),
right vertices after them. Every vertex carries a label of an arbitrary type, so graphs can be
built directly from an adjacency map of domain objects while the algorithms only ever touch
integer indices.

A [`Matching`](crate::matching::Matching) is a set of vertex-disjoint `(left, right)` pairs
that remembers the order in which pairs were created.

# Design

The algorithm is available as a trait on the graph itself (`graph.maximum_matching()`) and as
the configurable [`HopcroftKarp`](crate::algo::HopcroftKarp) struct, which allows a warm start
from an existing matching or a greedy initialization. The two halves of a phase, BFS layering
and augmenting path search, are exposed separately in [`algo`].

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, graphs, matchings and errors,
- [`algo`] includes the Hopcroft–Karp driver and its building blocks,
- [`gens`] includes a random bipartite graph generator, optionally with a planted matching,
- [`io`] includes readers and writers for a bipartite edge list format and for matchings.

In most use-cases, `use bimatch::{prelude::*, algo::*};` suffices for your needs.

```
use bimatch::{prelude::*, algo::*};

let graph = BipartiteGraph::from_adjacency([
    ("alice", vec!["red", "green"]),
    ("bob", vec!["red", "green", "blue"]),
    ("carol", vec!["green"]),
]);

let matching = graph.maximum_matching();
assert_eq!(matching.len(), 3);
assert_eq!(
    matching.labelled_pairs(&graph).collect::<Vec<_>>(),
    vec![(&"alice", &"red"), (&"carol", &"green"), (&"bob", &"blue")]
);
```

Progress is reported through [`tracing`](https://docs.rs/tracing) at `debug` and `trace`
level; the crate never installs a subscriber itself.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod graph;
pub mod io;
pub mod matching;
pub mod node;
#[cfg(test)]
pub(crate) mod testing;

/// `bimatch::prelude` includes definitions for nodes, edges, graphs, matchings and errors.
pub mod prelude {
    pub use super::{edge::*, error::*, graph::*, matching::*, node::*};
}
