/*!
# Matchings

A [`Matching`] is a collection of vertex pairs in which every vertex occurs at most once.
Pairs are kept in insertion order so results are reproducible; the mate of every matched
vertex is indexed for `O(1)` membership queries.

The matching itself does not know the graph it belongs to. [`Matching::validate`] and
[`Matching::try_from_pairs`] check a matching against a [`BipartiteGraph`] where it enters the
crate from the outside.
*/

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{error::MatchingError, prelude::*};

/// Partner of a matched vertex and the slot of its pair in `Matching::pairs`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mate {
    partner: Node,
    slot: usize,
}

/// A set of vertex pairs, no two of which share a vertex.
#[derive(Debug, Clone, Default)]
pub struct Matching {
    /// Pairs in insertion order; removed pairs are tombstoned as `(INVALID_NODE, INVALID_NODE)`
    pairs: Vec<(Node, Node)>,
    mates: FxHashMap<Node, Mate>,
    /// Number of tombstones in `pairs`
    removed: usize,
}

impl Matching {
    /// Creates an empty matching
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matching from pairs *without* checking them against a graph.
    /// Every vertex must occur at most once.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        let mut matching = Self::new();
        for (u, v) in pairs {
            matching.add_pair(u, v);
        }
        matching
    }

    /// Creates a matching from pairs of global nodes of `graph`.
    ///
    /// # Errors
    /// Fails if a pair is not an edge between a left and a right vertex of `graph` or if a
    /// vertex occurs in more than one pair.
    pub fn try_from_pairs<L, I>(graph: &BipartiteGraph<L>, pairs: I) -> Result<Self, MatchingError>
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        let mut matching = Self::new();
        for (u, v) in pairs {
            check_pair(graph, u, v)?;
            if let Some(w) = [u, v].into_iter().find(|&w| matching.contains(w)) {
                return Err(MatchingError::AlreadyMatched(w));
            }
            matching.add_pair(u, v);
        }
        Ok(matching)
    }

    /// Checks that every pair is an edge between a left and a right vertex of `graph`.
    /// Vertex-disjointness is guaranteed by construction.
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn validate<L>(&self, graph: &BipartiteGraph<L>) -> Result<(), MatchingError> {
        self.pairs().try_for_each(|(u, v)| check_pair(graph, u, v))
    }

    /// Returns the number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len() - self.removed
    }

    /// Returns *true* if the matching has no pairs
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if `u` is an endpoint of any pair
    #[inline]
    pub fn contains(&self, u: Node) -> bool {
        self.mates.contains_key(&u)
    }

    /// Returns the vertex `u` is matched to
    #[inline]
    pub fn mate_of(&self, u: Node) -> Option<Node> {
        self.mates.get(&u).map(|m| m.partner)
    }

    /// Returns *true* if `{x, y}` is a pair (in any order)
    #[inline]
    pub fn has_pair(&self, x: Node, y: Node) -> bool {
        self.mate_of(x) == Some(y)
    }

    /// Adds the pair `(u, v)`.
    ///
    /// Neither `u` nor `v` may be matched already; this is only checked in debug builds.
    pub fn add_pair(&mut self, u: Node, v: Node) {
        debug_assert!(u != v);
        debug_assert!(!self.contains(u) && !self.contains(v));

        let slot = self.pairs.len();
        self.pairs.push((u, v));
        self.mates.insert(u, Mate { partner: v, slot });
        self.mates.insert(v, Mate { partner: u, slot });
    }

    /// Removes the pair `{x, y}`. Does nothing if `{x, y}` is not a pair.
    pub fn remove_pair(&mut self, x: Node, y: Node) {
        let Some(&Mate { partner, slot }) = self.mates.get(&x) else {
            return;
        };
        if partner != y {
            return;
        }

        self.mates.remove(&x);
        self.mates.remove(&y);
        self.pairs[slot] = (INVALID_NODE, INVALID_NODE);
        self.removed += 1;

        if self.removed > 32 && 2 * self.removed > self.pairs.len() {
            self.compact();
        }
    }

    /// Applies an augmenting path to the matching.
    ///
    /// The path alternates between unmatched and matched edges, starting and ending at
    /// unmatched vertices, so it has even length. All pairs `(p[0], p[1]), (p[2], p[3]), ...`
    /// are added and the previously matched interior pairs `(p[1], p[2]), (p[3], p[4]), ...`
    /// are removed. The matching grows by exactly one pair.
    ///
    /// # Examples
    /// ```
    /// use bimatch::prelude::*;
    ///
    /// let mut matching = Matching::from_pairs([(1, 2)]);
    /// matching.merge_augmenting_path(&[0, 1, 2, 3]);
    ///
    /// assert_eq!(matching.pairs().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
    /// ```
    pub fn merge_augmenting_path(&mut self, path: &[Node]) {
        debug_assert!(path.len() % 2 == 0);
        debug_assert!(path.first().is_none_or(|&u| !self.contains(u)));
        debug_assert!(path.last().is_none_or(|&u| !self.contains(u)));

        if path.len() > 2 {
            for (u, v) in path[1..path.len() - 1].iter().copied().tuples() {
                debug_assert!(self.has_pair(u, v));
                self.remove_pair(u, v);
            }
        }

        for (u, v) in path.iter().copied().tuples() {
            self.add_pair(u, v);
        }
    }

    /// Returns an iterator over all pairs in insertion order
    pub fn pairs(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.pairs
            .iter()
            .copied()
            .filter(|&(u, _)| u != INVALID_NODE)
    }

    /// Returns all pairs as `(left, right)` sorted by left vertex
    pub fn sorted_pairs<L>(&self, graph: &BipartiteGraph<L>) -> Vec<(Node, Node)> {
        self.pairs()
            .map(|(u, v)| if graph.is_left(u) { (u, v) } else { (v, u) })
            .sorted_unstable()
            .collect_vec()
    }

    /// Returns an iterator over the labels of all pairs in insertion order
    pub fn labelled_pairs<'a, L>(
        &'a self,
        graph: &'a BipartiteGraph<L>,
    ) -> impl Iterator<Item = (&'a L, &'a L)> + 'a {
        self.pairs()
            .map(|(u, v)| (graph.label_of(u), graph.label_of(v)))
    }

    /// Drops all tombstones and renumbers the slots
    fn compact(&mut self) {
        self.pairs.retain(|&(u, _)| u != INVALID_NODE);
        self.removed = 0;

        for (slot, &(u, v)) in self.pairs.iter().enumerate() {
            if let Some(mate) = self.mates.get_mut(&u) {
                mate.slot = slot;
            }
            if let Some(mate) = self.mates.get_mut(&v) {
                mate.slot = slot;
            }
        }
    }
}

fn check_pair<L>(graph: &BipartiteGraph<L>, u: Node, v: Node) -> Result<(), MatchingError> {
    if let Some(w) = [u, v].into_iter().find(|&w| w >= graph.number_of_nodes()) {
        return Err(MatchingError::UnknownVertex(w));
    }
    if graph.side_of(u) == graph.side_of(v) {
        return Err(MatchingError::SameSide(u, v));
    }
    if !graph.has_edge(u, v) {
        return Err(MatchingError::NotAnEdge(u, v));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains() {
        let matching = Matching::from_pairs([(0, 1)]);

        assert!(matching.contains(0));
        assert!(matching.contains(1));
        assert!(!matching.contains(2));
        assert_eq!(matching.len(), 1);
    }

    #[test]
    fn has_pair_is_order_independent() {
        let matching = Matching::from_pairs([(0, 1), (2, 3)]);

        assert!(matching.has_pair(0, 1));
        assert!(matching.has_pair(1, 0));
        assert!(matching.has_pair(3, 2));
        assert!(!matching.has_pair(0, 3));
        assert!(!matching.has_pair(4, 5));
        assert_eq!(matching.mate_of(3), Some(2));
        assert_eq!(matching.mate_of(4), None);
    }

    #[test]
    fn remove_pair() {
        let mut matching = Matching::from_pairs([(0, 1), (2, 3), (4, 5)]);

        matching.remove_pair(0, 3);
        assert_eq!(matching.len(), 3);

        matching.remove_pair(3, 2);
        assert_eq!(matching.len(), 2);
        assert!(!matching.contains(2));
        assert!(!matching.contains(3));
        assert_eq!(matching.pairs().collect_vec(), vec![(0, 1), (4, 5)]);

        matching.remove_pair(3, 2);
        assert_eq!(matching.len(), 2);
    }

    #[test]
    fn remove_pair_compacts() {
        let mut matching = Matching::from_pairs((0..200).map(|i| (2 * i, 2 * i + 1)));
        for i in (0..200).filter(|i| i % 4 != 0) {
            matching.remove_pair(2 * i + 1, 2 * i);
        }

        assert_eq!(matching.len(), 50);
        assert_eq!(
            matching.pairs().collect_vec(),
            (0..200)
                .filter(|i| i % 4 == 0)
                .map(|i| (2 * i, 2 * i + 1))
                .collect_vec()
        );

        // slots must survive compaction
        matching.remove_pair(0, 1);
        matching.remove_pair(392, 393);
        assert_eq!(matching.len(), 48);
        assert!(!matching.contains(392));
        assert_eq!(matching.pairs().count(), 48);
    }

    #[test]
    fn merge_single_edge_path() {
        let mut matching = Matching::new();
        matching.merge_augmenting_path(&[0, 1]);

        assert_eq!(matching.pairs().collect_vec(), vec![(0, 1)]);
    }

    #[test]
    fn merge_long_path() {
        let (a, b, c, d) = (0, 1, 2, 3);
        let mut matching = Matching::from_pairs([(b, c)]);
        matching.merge_augmenting_path(&[a, b, c, d]);

        assert_eq!(matching.pairs().collect_vec(), vec![(a, b), (c, d)]);
        assert!(!matching.has_pair(b, c));
    }

    #[test]
    fn merge_keeps_unrelated_pairs() {
        let mut matching = Matching::from_pairs([(10, 11), (1, 2), (3, 4), (12, 13)]);
        matching.merge_augmenting_path(&[0, 1, 2, 3, 4, 5]);

        assert_eq!(
            matching.pairs().collect_vec(),
            vec![(10, 11), (12, 13), (0, 1), (2, 3), (4, 5)]
        );
        assert_eq!(matching.len(), 5);
    }

    #[test]
    fn validate_against_graph() {
        let graph = BipartiteGraph::from_edges(2, 2, [(0, 0), (1, 0), (1, 1)]).unwrap();

        let matching = Matching::try_from_pairs(&graph, [(0, 2), (3, 1)]).unwrap();
        assert_eq!(matching.len(), 2);
        assert!(matching.validate(&graph).is_ok());
        assert_eq!(matching.sorted_pairs(&graph), vec![(0, 2), (1, 3)]);

        assert_eq!(
            Matching::try_from_pairs(&graph, [(0, 3)]).unwrap_err(),
            MatchingError::NotAnEdge(0, 3)
        );
        assert_eq!(
            Matching::try_from_pairs(&graph, [(0, 1)]).unwrap_err(),
            MatchingError::SameSide(0, 1)
        );
        assert_eq!(
            Matching::try_from_pairs(&graph, [(0, 7)]).unwrap_err(),
            MatchingError::UnknownVertex(7)
        );
        assert_eq!(
            Matching::try_from_pairs(&graph, [(0, 2), (1, 2)]).unwrap_err(),
            MatchingError::AlreadyMatched(2)
        );

        assert_eq!(
            Matching::from_pairs([(2, 3)]).validate(&graph),
            Err(MatchingError::SameSide(2, 3))
        );
    }

    #[test]
    fn labelled_pairs() {
        let graph = BipartiteGraph::from_adjacency([("a", vec!["x"]), ("b", vec!["y"])]);
        let matching = Matching::from_pairs([(1, 3), (0, 2)]);

        assert_eq!(
            matching.labelled_pairs(&graph).collect_vec(),
            vec![(&"b", &"y"), (&"a", &"x")]
        );
    }
}
