//! Candidate compatibility predicates for the exact search.

use giso_common::{Graph, VertexId};

use crate::state::State;

/// Whether extending the partial mapping with `u -> v` keeps it
/// adjacency-consistent.
///
/// Both directions are checked against the mapped prefix: every mapped
/// neighbor of `u` must land on a neighbor of `v`, and every mapped
/// neighbor of `v` must pull back to a neighbor of `u`. The second
/// direction is what rejects merely "compatible" partial maps where a
/// mapped non-neighbor of `u` sits adjacent to `v`.
pub(crate) fn vertices_compatible(
    a: &Graph,
    b: &Graph,
    st: &State,
    u: VertexId,
    v: VertexId,
) -> bool {
    if a.degree(u) != b.degree(v) {
        return false;
    }

    for &ua in a.neighbors(u) {
        if let Some(vb) = st.mapped_to(ua) {
            if !b.is_adjacent(v, vb) {
                return false;
            }
        }
    }

    for &vb in b.neighbors(v) {
        if let Some(ua) = st.inverse_of(vb) {
            if !a.is_adjacent(u, ua) {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_mismatch_is_incompatible() {
        let a = Graph::from_pairs(3, &[(0, 1), (1, 2)]).unwrap();
        let b = Graph::from_pairs(3, &[(0, 1), (1, 2)]).unwrap();
        let st = State::new(3);
        // a-vertex 1 has degree 2, b-vertex 0 has degree 1
        assert!(!vertices_compatible(&a, &b, &st, 1, 0));
        assert!(vertices_compatible(&a, &b, &st, 1, 1));
    }

    #[test]
    fn mapped_neighbor_must_stay_adjacent() {
        let a = Graph::from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let b = Graph::from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let mut st = State::new(4);
        st.map(0, 0);
        // 1 neighbors 0 in A, so its image must neighbor 0 in B.
        assert!(vertices_compatible(&a, &b, &st, 1, 1));
        assert!(!vertices_compatible(&a, &b, &st, 1, 2));
    }

    #[test]
    fn mapped_non_neighbor_must_stay_non_adjacent() {
        let a = Graph::from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let b = Graph::from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let mut st = State::new(4);
        st.map(0, 0);
        // 2 does not neighbor 0 in A, so it cannot map onto a B-vertex
        // adjacent to 0.
        assert!(!vertices_compatible(&a, &b, &st, 2, 1));
        assert!(vertices_compatible(&a, &b, &st, 2, 2));
    }
}
