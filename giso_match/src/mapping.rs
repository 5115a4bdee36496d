//! Completed vertex bijections, the witness artifact of a successful
//! search.

use giso_common::{Graph, VertexId};

/// A total one-to-one mapping from the vertices of graph A to the
/// vertices of graph B.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bijection {
    forward: Vec<VertexId>,
}

impl Bijection {
    pub(crate) fn from_forward(forward: Vec<VertexId>) -> Self {
        Bijection { forward }
    }

    /// Image of an A-vertex.
    pub fn map(&self, a: VertexId) -> VertexId {
        self.forward[a]
    }

    /// Number of mapped vertices.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the mapping covers zero vertices.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The full forward mapping, indexed by A-vertex.
    pub fn as_slice(&self) -> &[VertexId] {
        &self.forward
    }

    /// Round-trip check: the mapping is a permutation and carries the
    /// edge set of `a` exactly onto the edge set of `b`.
    pub fn preserves_adjacency(&self, a: &Graph, b: &Graph) -> bool {
        if self.forward.len() != a.vertex_count()
            || a.vertex_count() != b.vertex_count()
            || a.edge_count() != b.edge_count()
        {
            return false;
        }

        let mut hit = vec![false; b.vertex_count()];
        for &image in &self.forward {
            if image >= b.vertex_count() || hit[image] {
                return false;
            }
            hit[image] = true;
        }

        // Equal edge counts plus injectivity make "every A-edge lands
        // on a B-edge" equivalent to full edge-set equality.
        a.edges()
            .iter()
            .all(|e| b.is_adjacent(self.forward[e.a], self.forward[e.b]))
    }
}
