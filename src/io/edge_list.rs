//! # Bipartite EdgeList
//!
//! The bipartite EdgeList-Format consists of a header `p bip <left> <right> <edges>`, followed
//! by `<edges>` non-comment-lines `u v` representing an edge between the `u`-th left and the
//! `v`-th right vertex (both 1-based).

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use super::*;

/// Problem identifier used in the header by default
const DEFAULT_PROBLEM: &str = "bip";

/// A GraphReader for the bipartite EdgeList-Format
#[derive(Debug, Clone)]
pub struct BipartiteEdgeListReader {
    /// Second token of the header
    problem: String,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for BipartiteEdgeListReader {
    fn default() -> Self {
        Self {
            problem: DEFAULT_PROBLEM.to_string(),
            comment_identifier: "c".to_string(),
        }
    }
}

impl BipartiteEdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the expected problem identifier of the header
    pub fn problem<S: Into<String>>(mut self, problem: S) -> Self {
        self.problem = problem.into();
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Parses `p <problem> <left> <right> <edges>`
    fn parse_header(&self, line: &str) -> Result<(NumNodes, NumNodes, NumEdges)> {
        let mut parts = line.split_whitespace();

        raise_error_unless!(
            parts.next() == Some("p") && parts.next() == Some(self.problem.as_str()),
            ErrorKind::InvalidData,
            format!("Invalid header found: {line}")
        );

        let left = parse_next_value!(parts, "Header>Number of left vertices");
        let right = parse_next_value!(parts, "Header>Number of right vertices");
        let edges = parse_next_value!(parts, "Header>Number of edges");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Header is longer than expected"
        );

        Ok((left, right, edges))
    }
}

impl GraphReader<BipartiteGraph<Node>> for BipartiteEdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<BipartiteGraph<Node>> {
        let mut lines = reader.lines();

        let header = next_content_line(&mut lines, &self.comment_identifier)?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let (left, right, number_of_edges) = self.parse_header(&header)?;

        // the header may announce more edges than there are vertex pairs
        let candidates = left as u64 * right as u64;
        let mut edges = Vec::with_capacity((number_of_edges as u64).min(candidates) as usize);
        while let Some(line) = next_content_line(&mut lines, &self.comment_identifier)? {
            let (u, v) = parse_index_pair(&line, "Edge")?;
            edges.push(Edge(u, v));
        }

        raise_error_unless!(
            edges.len() == number_of_edges as usize,
            ErrorKind::InvalidData,
            format!(
                "Header announces {number_of_edges} edges, but {} were found",
                edges.len()
            )
        );

        Ok(BipartiteGraph::from_edges(left, right, edges)?)
    }
}

/// Trait for creating graphs from a BipartiteEdgeListReader.
/// Used as shorthand for default BipartiteEdgeListReader settings
pub trait BipartiteEdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl BipartiteEdgeListRead for BipartiteGraph<Node> {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        BipartiteEdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the bipartite EdgeList-Format
#[derive(Debug, Clone)]
pub struct BipartiteEdgeListWriter {
    /// Second token of the header
    problem: String,
}

impl Default for BipartiteEdgeListWriter {
    fn default() -> Self {
        Self {
            problem: DEFAULT_PROBLEM.to_string(),
        }
    }
}

impl BipartiteEdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the problem identifier written into the header
    pub fn problem<S: Into<String>>(mut self, problem: S) -> Self {
        self.problem = problem.into();
        self
    }
}

impl<L> GraphWriter<BipartiteGraph<L>> for BipartiteEdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &BipartiteGraph<L>, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "p {} {} {} {}",
            self.problem,
            graph.number_of_left(),
            graph.number_of_right(),
            graph.number_of_edges()
        )?;

        for Edge(u, v) in graph.edges() {
            writeln!(
                writer,
                "{} {}",
                graph.side_local_index(u) + 1,
                graph.side_local_index(v) + 1
            )?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the bipartite EdgeList-Format.
/// Shorthand for default settings.
pub trait BipartiteEdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<L> BipartiteEdgeListWrite for BipartiteGraph<L> {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        BipartiteEdgeListWriter::default().try_write_graph(self, writer)
    }
}
