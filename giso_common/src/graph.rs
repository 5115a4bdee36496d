//! Validated, immutable graph data model.
//!
//! `Graph::new` is the only place structural invariants are established;
//! everything downstream (invariant filters, component analysis, the
//! exact search) reads through accessors and never mutates.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

/// Dense vertex index in `[0, vertex_count)`.
pub type VertexId = usize;

/// An undirected edge between two distinct vertices.
///
/// Endpoint order is preserved exactly as constructed so diagnostic
/// output can reproduce the input file. Validation and adjacency treat
/// the endpoints as an unordered pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// First endpoint as written.
    pub a: VertexId,
    /// Second endpoint as written.
    pub b: VertexId,
}

impl Edge {
    /// Creates an edge without validating it; validation happens in
    /// [`Graph::new`].
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Edge { a, b }
    }

    /// The endpoints as an unordered pair, smaller index first.
    pub fn canonical(&self) -> (VertexId, VertexId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

/// Errors raised while establishing graph invariants at construction.
///
/// Each variant names the offending edge by its position in the input
/// edge list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge connects a vertex to itself.
    #[error("edge {index} is a self-loop on vertex {vertex}")]
    SelfLoop {
        /// Position of the edge in the input list.
        index: usize,
        /// The repeated endpoint.
        vertex: VertexId,
    },

    /// An edge endpoint is not a valid vertex index.
    #[error("edge {index} endpoint {vertex} is out of range for {vertex_count} vertices")]
    VertexOutOfRange {
        /// Position of the edge in the input list.
        index: usize,
        /// The offending endpoint.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// The same unordered vertex pair appears more than once.
    ///
    /// Duplicate rows are rejected rather than deduplicated: the input
    /// format carries an explicit edge count, so a repeated pair means
    /// the file does not describe the simple graph it claims to.
    #[error("edge {index} duplicates an earlier edge {a}-{b}")]
    DuplicateEdge {
        /// Position of the duplicate in the input list.
        index: usize,
        /// First endpoint of the repeated pair.
        a: VertexId,
        /// Second endpoint of the repeated pair.
        b: VertexId,
    },
}

/// A finite, simple, undirected graph.
///
/// Immutable after construction. The edge list keeps construction
/// order for diagnostic dumps; adjacency and degrees are derived once
/// in [`Graph::new`].
#[derive(Clone, Debug)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    neighbors: Vec<HashSet<VertexId>>,
    degrees: Vec<usize>,
}

impl Graph {
    /// Builds a graph from a vertex count and an edge list, validating
    /// every edge.
    ///
    /// Self-loops and out-of-range endpoints are rejected. Parallel
    /// edges are rejected as well ([`GraphError::DuplicateEdge`]); this
    /// crate treats multigraph input as invalid rather than silently
    /// deduplicating it.
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut seen: HashMap<(VertexId, VertexId), usize> = HashMap::new();
        let mut neighbors: Vec<HashSet<VertexId>> = vec![HashSet::new(); vertex_count];
        let mut degrees: Vec<usize> = vec![0; vertex_count];

        for (index, edge) in edges.iter().enumerate() {
            if edge.a == edge.b {
                return Err(GraphError::SelfLoop {
                    index,
                    vertex: edge.a,
                });
            }
            for vertex in [edge.a, edge.b] {
                if vertex >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        index,
                        vertex,
                        vertex_count,
                    });
                }
            }
            let (a, b) = edge.canonical();
            if seen.insert((a, b), index).is_some() {
                return Err(GraphError::DuplicateEdge { index, a, b });
            }

            neighbors[edge.a].insert(edge.b);
            neighbors[edge.b].insert(edge.a);
            degrees[edge.a] += 1;
            degrees[edge.b] += 1;
        }

        // Handshake lemma; a violation here is a construction bug, not
        // an input error.
        debug_assert_eq!(degrees.iter().sum::<usize>(), 2 * edges.len());

        Ok(Graph {
            vertex_count,
            edges,
            neighbors,
            degrees,
        })
    }

    /// Convenience constructor from `(a, b)` pairs.
    pub fn from_pairs(
        vertex_count: usize,
        pairs: &[(VertexId, VertexId)],
    ) -> Result<Self, GraphError> {
        Self::new(
            vertex_count,
            pairs.iter().map(|&(a, b)| Edge::new(a, b)).collect(),
        )
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in construction order.
    ///
    /// This is the read accessor behind the diagnostic dump: callers
    /// enumerate `(index, edge.a, edge.b)` triples from it.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Degree of a single vertex.
    pub fn degree(&self, v: VertexId) -> usize {
        self.degrees[v]
    }

    /// All vertex degrees, indexed by vertex.
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// The degree multiset as a sorted vector of length
    /// `vertex_count`.
    pub fn degree_multiset(&self) -> Vec<usize> {
        let mut multiset = self.degrees.clone();
        multiset.sort_unstable();
        multiset
    }

    /// Neighbors of a vertex.
    pub fn neighbors(&self, v: VertexId) -> &HashSet<VertexId> {
        &self.neighbors[v]
    }

    /// Whether an edge connects `u` and `v`.
    pub fn is_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbors[u].contains(&v)
    }
}
