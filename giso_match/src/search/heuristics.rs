//! Vertex ordering heuristics for the exact search.

use giso_common::{Graph, VertexId};

/// Fixed search order: descending degree, ties broken by original
/// index.
///
/// High-degree vertices constrain the most neighbors, so mapping them
/// first prunes the search tree fastest. The index tie-break keeps the
/// order deterministic.
pub(crate) fn degree_descending_order(g: &Graph) -> Vec<VertexId> {
    let mut order: Vec<VertexId> = (0..g.vertex_count()).collect();
    order.sort_unstable_by(|&x, &y| g.degree(y).cmp(&g.degree(x)).then(x.cmp(&y)));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_degree_then_index() {
        // degrees: 0 -> 1, 1 -> 3, 2 -> 2, 3 -> 2
        let g = Graph::from_pairs(4, &[(1, 0), (1, 2), (1, 3), (2, 3)]).unwrap();
        assert_eq!(degree_descending_order(&g), vec![1, 2, 3, 0]);
    }

    #[test]
    fn empty_graph_has_empty_order() {
        let g = Graph::from_pairs(0, &[]).unwrap();
        assert!(degree_descending_order(&g).is_empty());
    }
}
