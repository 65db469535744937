//! # Matchings
//!
//! A matching of a bipartite graph is stored as a header `s <size>` followed by `<size>`
//! non-comment-lines `u v`: the `u`-th left vertex is matched to the `v`-th right vertex
//! (both 1-based). Pairs are written in the order of the matching.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use super::*;

/// Reads a matching with respect to a given graph
#[derive(Debug, Clone)]
pub struct MatchingReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for MatchingReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl MatchingReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Reads a matching of `graph` and checks that every pair is an edge of `graph` and no
    /// vertex is matched twice.
    ///
    /// # Errors
    /// Returns an error of kind [`ErrorKind::InvalidData`] if the input is malformed or does
    /// not describe a matching of `graph`.
    ///
    /// # Examples
    /// ```
    /// use bimatch::{prelude::*, io::*};
    ///
    /// let graph = BipartiteGraph::from_edges(2, 2, [(0, 1), (1, 0)]).unwrap();
    /// let matching = MatchingReader::new()
    ///     .try_read_matching(&graph, "s 2\n1 2\n2 1\n".as_bytes())
    ///     .unwrap();
    ///
    /// assert_eq!(matching.pairs().collect::<Vec<_>>(), vec![(0, 3), (1, 2)]);
    /// ```
    pub fn try_read_matching<L, R>(&self, graph: &BipartiteGraph<L>, reader: R) -> Result<Matching>
    where
        R: BufRead,
    {
        let mut lines = reader.lines();

        let header = next_content_line(&mut lines, &self.comment_identifier)?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;

        let mut parts = header.split_whitespace();
        raise_error_unless!(
            parts.next() == Some("s"),
            ErrorKind::InvalidData,
            format!("Invalid header found: {header}")
        );
        let size: usize = parse_next_value!(parts, "Header>Size of matching");
        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Header is longer than expected"
        );

        raise_error_unless!(
            size <= graph.number_of_left().min(graph.number_of_right()) as usize,
            ErrorKind::InvalidData,
            format!("Header announces {size} pairs, which exceeds the smaller side")
        );

        let mut pairs = Vec::with_capacity(size);
        while let Some(line) = next_content_line(&mut lines, &self.comment_identifier)? {
            let (u, v) = parse_index_pair(&line, "Pair")?;
            raise_error_unless!(
                u < graph.number_of_left() && v < graph.number_of_right(),
                ErrorKind::InvalidData,
                format!("Pair out of range: {line}")
            );
            pairs.push((graph.left_vertex(u), graph.right_vertex(v)));
        }

        raise_error_unless!(
            pairs.len() == size,
            ErrorKind::InvalidData,
            format!("Header announces {size} pairs, but {} were found", pairs.len())
        );

        Ok(Matching::try_from_pairs(graph, pairs)?)
    }

    /// Reads a matching of `graph` from a file.
    /// See [`MatchingReader::try_read_matching`].
    pub fn try_read_matching_file<L, P>(&self, graph: &BipartiteGraph<L>, path: P) -> Result<Matching>
    where
        P: AsRef<Path>,
    {
        self.try_read_matching(graph, BufReader::new(File::open(path)?))
    }
}

/// Writes a matching with respect to a given graph
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingWriter;

impl MatchingWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }

    /// Writes `matching` of `graph` to `writer`
    pub fn try_write_matching<L, W>(
        &self,
        graph: &BipartiteGraph<L>,
        matching: &Matching,
        mut writer: W,
    ) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "s {}", matching.len())?;

        for (u, v) in matching.pairs() {
            let (l, r) = if graph.is_left(u) { (u, v) } else { (v, u) };
            writeln!(
                writer,
                "{} {}",
                graph.side_local_index(l) + 1,
                graph.side_local_index(r) + 1
            )?;
        }

        Ok(())
    }

    /// Writes `matching` of `graph` to a file
    pub fn try_write_matching_file<L, P>(
        &self,
        graph: &BipartiteGraph<L>,
        matching: &Matching,
        path: P,
    ) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_matching(graph, matching, BufWriter::new(File::create(path)?))
    }
}
