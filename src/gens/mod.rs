/*!
# Random Bipartite Generators

[`RandomBipartite`] is a builder for random bipartite instances in the spirit of `G(n,p)`:
every one of the `left * right` possible edges is present with probability `p`, independently
from each other. The probability is either set directly or derived from the expected degree of
a left vertex (`p = d / right`).

Optionally a perfect (or, for unbalanced sides, side-saturating) matching `(i, i)` is planted
into the instance, which gives a known lower bound on the maximum matching size.

The typical usage workflow is:
1. Create a generator instance with [`RandomBipartite::new`].
2. Set parameters (e.g. `.left(n).right(m).avg_deg(d)`).
3. Produce edges via [`RandomBipartite::generate`] / [`RandomBipartite::stream`] or a graph via
   [`RandomBipartite::graph`].

All edges are *side-local*, i.e. `Edge(l, r)` with `l < left` and `r < right`.
*/

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

mod geometric;

pub use geometric::*;

/// The density of an instance can be defined by either a probability or the average degree
/// which is more common in practice
#[derive(Debug, Copy, Clone, Default)]
enum Density {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a left vertex
    AvgDeg(f64),
}

/// Builder for random bipartite graphs with independent edges.
///
/// # Examples
/// ```
/// use bimatch::{gens::RandomBipartite, prelude::*};
///
/// let rng = &mut rand::rng();
/// let graph = RandomBipartite::new().left(10).right(20).prob(1.0).graph(rng);
///
/// assert_eq!(graph.number_of_left(), 10);
/// assert_eq!(graph.number_of_right(), 20);
/// assert_eq!(graph.number_of_edges(), 200);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomBipartite {
    left: NumNodes,
    right: NumNodes,
    density: Density,
    planted: bool,
}

impl RandomBipartite {
    /// Creates a new empty generator without any vertices
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the number of left vertices
    pub fn left(mut self, n: NumNodes) -> Self {
        self.left = n;
        self
    }

    /// Updates the number of right vertices
    pub fn right(mut self, n: NumNodes) -> Self {
        self.right = n;
        self
    }

    /// Updates `p` directly.
    /// ** Panics if `p` is not within `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "invalid probability {prob}");
        self.density = Density::Prob(prob);
        self
    }

    /// Updates `p` such that `p = d / right`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    pub fn avg_deg(mut self, deg: f64) -> Self {
        self.density = Density::AvgDeg(deg);
        self
    }

    /// If set, the edges `(i, i)` for all `i < min(left, right)` are always included
    pub fn planted_matching(mut self, planted: bool) -> Self {
        self.planted = planted;
        self
    }

    /// Resolves the edge probability.
    /// ** Panics if no density was set or the average degree is too large **
    fn probability(&self) -> f64 {
        match self.density {
            Density::NotSet => panic!("Density of RandomBipartite was not set!"),
            Density::Prob(p) => p,
            Density::AvgDeg(_) if self.right == 0 => 0.0,
            Density::AvgDeg(d) => {
                let p = d / self.right as f64;
                assert!(
                    (0.0..=1.0).contains(&p),
                    "The average degree is invalid for the given number of right vertices!"
                );
                p
            }
        }
    }

    /// Creates a lazy iterator over the random edges in lexicographic order.
    /// The planted matching is **not** part of the stream.
    pub fn stream<'a, R>(&self, rng: &'a mut R) -> impl Iterator<Item = Edge> + 'a
    where
        R: Rng,
    {
        let right = self.right as u64;
        let candidates = self.left as u64 * right;

        GeometricJumper::new(rng, self.probability(), candidates)
            .map(move |x| Edge::from_u64(x, right))
    }

    /// Generates all edges including the planted matching, sorted and free of duplicates
    pub fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        let mut edges = self.stream(rng).collect_vec();
        if self.planted {
            edges.extend((0..self.left.min(self.right)).map(|i| Edge(i, i)));
        }

        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// Generates a graph whose vertices are labelled by their side-local index
    pub fn graph<R>(&self, rng: &mut R) -> BipartiteGraph<Node>
    where
        R: Rng,
    {
        let edges = self.generate(rng);
        BipartiteGraph::from_local_edges(self.left, self.right, &edges)
    }
}
