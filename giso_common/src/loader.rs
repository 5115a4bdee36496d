//! Loader for the `.gf` graph-file text format.
//!
//! A graph file holds whitespace-separated integers. The first row is
//! `vertexCount edgeCount`; every following row holds the two 0-based
//! endpoints of one edge. The number of edge rows must match the
//! declared edge count exactly.
//!
//! The loader never prints and never terminates the process; every
//! failure is a typed [`LoadError`] the caller can act on.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::graph::{Edge, Graph, GraphError};

/// Errors raised while reading or parsing a graph file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read at all.
    #[error("failed to read graph file '{path}'")]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file has no `vertexCount edgeCount` header row.
    #[error("graph file has no header row")]
    MissingHeader,

    /// A row does not hold exactly two unsigned integers.
    #[error("malformed row at line {line}: '{text}'")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending row, trimmed.
        text: String,
    },

    /// More edge rows than the header declared.
    #[error("too many edges specified: header declared {expected}")]
    TooManyEdges {
        /// Edge count from the header.
        expected: usize,
    },

    /// Fewer edge rows than the header declared.
    #[error("too few edges specified: header declared {expected}, found {found}")]
    TooFewEdges {
        /// Edge count from the header.
        expected: usize,
        /// Number of edge rows actually present.
        found: usize,
    },

    /// The rows parsed but do not describe a valid simple graph.
    #[error(transparent)]
    InvalidGraph(#[from] GraphError),
}

/// Reads and validates a graph file from disk.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(&text)
}

/// Parses graph-file text into a validated [`Graph`].
///
/// Blank rows are ignored, matching the whitespace tolerance of the
/// format.
pub fn parse_graph(text: &str) -> Result<Graph, LoadError> {
    let mut rows = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_line, header) = rows.next().ok_or(LoadError::MissingHeader)?;
    let (vertex_count, edge_count) = parse_row(header_line, header)?;

    let mut edges: Vec<Edge> = Vec::with_capacity(edge_count);
    for (line, row) in rows {
        if edges.len() == edge_count {
            return Err(LoadError::TooManyEdges {
                expected: edge_count,
            });
        }
        let (a, b) = parse_row(line, row)?;
        edges.push(Edge::new(a, b));
    }

    if edges.len() < edge_count {
        return Err(LoadError::TooFewEdges {
            expected: edge_count,
            found: edges.len(),
        });
    }

    Ok(Graph::new(vertex_count, edges)?)
}

fn parse_row(line: usize, text: &str) -> Result<(usize, usize), LoadError> {
    let malformed = || LoadError::MalformedLine {
        line,
        text: text.to_string(),
    };

    let mut tokens = text.split_whitespace();
    let first = tokens
        .next()
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(malformed)?;
    let second = tokens
        .next()
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }
    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triangle() {
        let g = parse_graph("3 3\n0 1\n1 2\n2 0\n").unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert!(g.is_adjacent(2, 0));
    }

    #[test]
    fn tolerates_blank_rows_and_extra_whitespace() {
        let g = parse_graph("\n2 1\n\n  0   1  \n").unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn empty_text_is_missing_header() {
        assert!(matches!(parse_graph(""), Err(LoadError::MissingHeader)));
    }

    #[test]
    fn non_integer_row_is_malformed() {
        let err = parse_graph("2 1\n0 x\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn three_tokens_on_a_row_is_malformed() {
        let err = parse_graph("3 1\n0 1 2\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn too_few_edges_is_detected() {
        let err = parse_graph("3 2\n0 1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::TooFewEdges {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn too_many_edges_is_detected() {
        let err = parse_graph("3 1\n0 1\n1 2\n").unwrap_err();
        assert!(matches!(err, LoadError::TooManyEdges { expected: 1 }));
    }

    #[test]
    fn self_loop_propagates_as_graph_error() {
        let err = parse_graph("2 1\n0 0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidGraph(GraphError::SelfLoop { index: 0, vertex: 0 })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_graph("/definitely/not/here.gf").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
