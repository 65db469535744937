/*!
# IO

Utilities for reading and writing bipartite graphs and matchings in a line-based text format.

## Graphs

The **bipartite edge list** format starts with a header
```text
p bip <left> <right> <edges>
```
followed by `<edges>` lines `u v` where `1 <= u <= left` and `1 <= v <= right` are the
*side-local*, 1-based indices of the endpoints. Lines starting with the comment identifier
(`c` by default) are skipped everywhere.

## Matchings

A matching is written with respect to a graph as a header `s <size>` followed by `<size>`
lines `u v` (again side-local and 1-based, left vertex first).

## Traits

- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
- [`BipartiteEdgeListRead`] and [`BipartiteEdgeListWrite`] are shorthands on the graph itself
  using default settings.

All functions return a [`std::io::Result`]; malformed content is reported as
[`ErrorKind::InvalidData`].
*/

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value found. Cannot parse {}.", $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;

pub mod edge_list;
pub mod matching;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;
pub use matching::*;

/// Configurable parser producing a `G` from text, e.g. [`BipartiteEdgeListReader`].
pub trait GraphReader<G> {
    /// Parses a graph from `reader`.
    ///
    /// # Errors
    /// Fails with [`ErrorKind::InvalidData`] on malformed content and with
    /// [`ErrorKind::NotFound`] if no header line exists.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Opens `path` and parses its content with [`GraphReader::try_read_graph`]
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Configurable serializer for a `G`, e.g. [`BipartiteEdgeListWriter`].
pub trait GraphWriter<G> {
    /// Emits the header line and one line per edge of `graph` to `writer`.
    ///
    /// # Errors
    /// Only fails if `writer` does.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Creates (or truncates) `path` and writes `graph` into it
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Returns the next line that is neither blank nor starts with `comment_identifier`
fn next_content_line<R: BufRead>(
    lines: &mut Lines<R>,
    comment_identifier: &str,
) -> Result<Option<String>> {
    for line in lines {
        let line = line?;
        if line.trim().is_empty() || line.starts_with(comment_identifier) {
            continue;
        }
        return Ok(Some(line));
    }
    Ok(None)
}

/// Parses a line `u v` of two 1-based indices and returns them 0-based
fn parse_index_pair(line: &str, what: &str) -> Result<(Node, Node)> {
    let mut parts = line.split_whitespace();

    let u: Node = parse_next_value!(parts, format!("{what}>Left vertex"));
    let v: Node = parse_next_value!(parts, format!("{what}>Right vertex"));

    raise_error_unless!(
        parts.next().is_none(),
        ErrorKind::InvalidData,
        format!("Unexpected trailing tokens in {what} line: {line}")
    );
    raise_error_unless!(
        u > 0 && v > 0,
        ErrorKind::InvalidData,
        format!("Indices are 1-based, found {what} line: {line}")
    );

    Ok((u - 1, v - 1))
}
