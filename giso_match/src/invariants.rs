//! Cheap invariant filters.
//!
//! Each filter is a necessary condition for isomorphism: a mismatch
//! yields a definitive verdict, a match is inconclusive (`None`). The
//! filters are strictly ordered by cost and the pipeline short-circuits
//! on the first mismatch, so the verdict always names the cheapest
//! invariant that disproved isomorphism.

use giso_common::{Graph, Verdict};

use crate::components::ComponentPartition;

pub(crate) fn vertex_count_filter(a: &Graph, b: &Graph) -> Option<Verdict> {
    (a.vertex_count() != b.vertex_count()).then_some(Verdict::VerticesUnequal)
}

pub(crate) fn edge_count_filter(a: &Graph, b: &Graph) -> Option<Verdict> {
    (a.edge_count() != b.edge_count()).then_some(Verdict::EdgesUnequal)
}

/// Compares degree multisets, not per-vertex degrees: no vertex
/// correspondence is known at this stage.
pub(crate) fn degree_filter(a: &Graph, b: &Graph) -> Option<Verdict> {
    (a.degree_multiset() != b.degree_multiset()).then_some(Verdict::DegreesUnequal)
}

/// Compares the sorted multisets of component signatures (size, edge
/// count, degree multiset).
pub(crate) fn component_filter(
    pa: &ComponentPartition,
    pb: &ComponentPartition,
) -> Option<Verdict> {
    (pa.signature_multiset() != pb.signature_multiset()).then_some(Verdict::ComponentsUnequal)
}

/// Runs the filters that need no component analysis, in cost order.
pub(crate) fn run_cheap_filters(a: &Graph, b: &Graph) -> Option<Verdict> {
    vertex_count_filter(a, b)
        .or_else(|| edge_count_filter(a, b))
        .or_else(|| degree_filter(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_mismatch_short_circuits() {
        let a = Graph::from_pairs(2, &[(0, 1)]).unwrap();
        let b = Graph::from_pairs(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        // Edge counts differ too, but the cheaper filter wins.
        assert_eq!(run_cheap_filters(&a, &b), Some(Verdict::VerticesUnequal));
    }

    #[test]
    fn edge_count_mismatch() {
        let a = Graph::from_pairs(3, &[(0, 1), (1, 2)]).unwrap();
        let b = Graph::from_pairs(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(run_cheap_filters(&a, &b), Some(Verdict::EdgesUnequal));
    }

    #[test]
    fn degree_multiset_mismatch() {
        // Equal vertex and edge counts; degrees {2,2,2,2} vs {3,2,2,1}.
        let a = Graph::from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let b = Graph::from_pairs(4, &[(0, 1), (0, 2), (0, 3), (1, 2)]).unwrap();
        assert_eq!(run_cheap_filters(&a, &b), Some(Verdict::DegreesUnequal));
    }

    #[test]
    fn matching_invariants_are_inconclusive() {
        let a = Graph::from_pairs(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let b = Graph::from_pairs(3, &[(0, 2), (2, 1), (1, 0)]).unwrap();
        assert_eq!(run_cheap_filters(&a, &b), None);
    }

    #[test]
    fn component_structure_mismatch() {
        // Hexagon vs two triangles: identical cheap invariants,
        // different component sizes.
        let a =
            Graph::from_pairs(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]).unwrap();
        let b =
            Graph::from_pairs(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]).unwrap();
        assert_eq!(run_cheap_filters(&a, &b), None);

        let pa = ComponentPartition::build(&a);
        let pb = ComponentPartition::build(&b);
        assert_eq!(component_filter(&pa, &pb), Some(Verdict::ComponentsUnequal));
    }
}
