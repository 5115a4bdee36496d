//! Component matcher: assignment of components across graphs.
//!
//! Components are grouped by signature; only same-signature components
//! can map to each other. Within each group the matcher backtracks over
//! one-to-one assignments, using the exact search as the feasibility
//! test for a pair. Signature collisions do not guarantee isomorphism,
//! so a failed assignment is undone and an alternative is tried before
//! the group (and the whole pairing) is given up. Exact-search results
//! are memoized per pair so retried assignments never rerun a decided
//! search.

use std::collections::{BTreeMap, HashMap};

use giso_common::VertexId;
use tracing::debug;

use crate::components::{Component, ComponentPartition, Signature};
use crate::mapping::Bijection;
use crate::search::find_isomorphism;

/// Pairs the components of two partitions and runs the exact search
/// per pair, assembling the global bijection from the per-component
/// ones.
///
/// Returns `None` when no full pairing exists, including after
/// exhausting every assignment among same-signature components.
pub(crate) fn pair_and_search(
    vertex_count: usize,
    pa: &ComponentPartition,
    pb: &ComponentPartition,
) -> Option<Bijection> {
    let mut groups: BTreeMap<&Signature, (Vec<&Component>, Vec<&Component>)> = BTreeMap::new();
    for c in pa.components() {
        groups.entry(c.signature()).or_default().0.push(c);
    }
    for c in pb.components() {
        groups.entry(c.signature()).or_default().1.push(c);
    }

    debug!(
        "pairing {} components across {} signature groups",
        pa.len(),
        groups.len()
    );

    let mut forward: Vec<Option<VertexId>> = vec![None; vertex_count];
    for (signature, (a_comps, b_comps)) in groups {
        // The component filter already compared signature multisets;
        // an uneven group here would mean it was skipped.
        if a_comps.len() != b_comps.len() {
            return None;
        }

        let mut matcher = GroupMatcher {
            a_comps,
            b_comps,
            memo: HashMap::new(),
        };
        let Some(assignment) = matcher.solve() else {
            debug!(
                "no assignment for signature group (size {}, {} components)",
                signature.size,
                matcher.a_comps.len()
            );
            return None;
        };

        for (i, j, bijection) in assignment {
            let ca = matcher.a_comps[i];
            let cb = matcher.b_comps[j];
            for local in 0..ca.len() {
                forward[ca.to_global()[local]] = Some(cb.to_global()[bijection.map(local)]);
            }
        }
    }

    let forward = forward
        .into_iter()
        .map(|m| m.expect("every vertex belongs to exactly one matched component"))
        .collect();
    Some(Bijection::from_forward(forward))
}

/// Backtracking assignment of one signature group, with memoized
/// per-pair exact-search results.
struct GroupMatcher<'c> {
    a_comps: Vec<&'c Component>,
    b_comps: Vec<&'c Component>,
    memo: HashMap<(usize, usize), Option<Bijection>>,
}

impl GroupMatcher<'_> {
    fn solve(&mut self) -> Option<Vec<(usize, usize, Bijection)>> {
        let mut used = vec![false; self.b_comps.len()];
        let mut out = Vec::with_capacity(self.a_comps.len());
        self.assign(0, &mut used, &mut out).then_some(out)
    }

    fn assign(
        &mut self,
        i: usize,
        used: &mut [bool],
        out: &mut Vec<(usize, usize, Bijection)>,
    ) -> bool {
        if i == self.a_comps.len() {
            return true;
        }
        for j in 0..self.b_comps.len() {
            if used[j] {
                continue;
            }
            let Some(bijection) = self.pair_isomorphism(i, j) else {
                continue;
            };
            used[j] = true;
            out.push((i, j, bijection));
            if self.assign(i + 1, used, out) {
                return true;
            }
            out.pop();
            used[j] = false;
        }
        false
    }

    fn pair_isomorphism(&mut self, i: usize, j: usize) -> Option<Bijection> {
        if let Some(cached) = self.memo.get(&(i, j)) {
            return cached.clone();
        }
        let result = find_isomorphism(self.a_comps[i].graph(), self.b_comps[j].graph());
        self.memo.insert((i, j), result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use giso_common::Graph;

    use super::*;

    fn pair(a: &Graph, b: &Graph) -> Option<Bijection> {
        let pa = ComponentPartition::build(a);
        let pb = ComponentPartition::build(b);
        pair_and_search(a.vertex_count(), &pa, &pb)
    }

    #[test]
    fn single_components_pair_directly() {
        let a = Graph::from_pairs(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let b = Graph::from_pairs(3, &[(0, 2), (2, 1), (1, 0)]).unwrap();
        let bij = pair(&a, &b).unwrap();
        assert!(bij.preserves_adjacency(&a, &b));
    }

    #[test]
    fn same_signature_components_need_retry() {
        // Both graphs hold one (1,2,2)-spider and one (1,1,3)-spider;
        // the two spiders share a signature but are not isomorphic, so
        // a first-come pairing can fail and must be retried.
        let a = Graph::from_pairs(
            12,
            &[
                (0, 1),
                (0, 2),
                (2, 3),
                (0, 4),
                (4, 5),
                (6, 7),
                (6, 8),
                (6, 9),
                (9, 10),
                (10, 11),
            ],
        )
        .unwrap();
        let b = Graph::from_pairs(
            12,
            &[
                (0, 1),
                (0, 2),
                (0, 3),
                (3, 4),
                (4, 5),
                (6, 7),
                (6, 8),
                (8, 9),
                (6, 10),
                (10, 11),
            ],
        )
        .unwrap();
        let bij = pair(&a, &b).unwrap();
        assert!(bij.preserves_adjacency(&a, &b));
    }

    #[test]
    fn mismatched_multiplicity_fails_after_exhaustion() {
        // A holds two (1,2,2)-spiders, B holds one of each kind.
        let a = Graph::from_pairs(
            12,
            &[
                (0, 1),
                (0, 2),
                (2, 3),
                (0, 4),
                (4, 5),
                (6, 7),
                (6, 8),
                (8, 9),
                (6, 10),
                (10, 11),
            ],
        )
        .unwrap();
        let b = Graph::from_pairs(
            12,
            &[
                (0, 1),
                (0, 2),
                (2, 3),
                (0, 4),
                (4, 5),
                (6, 7),
                (6, 8),
                (6, 9),
                (9, 10),
                (10, 11),
            ],
        )
        .unwrap();
        assert!(pair(&a, &b).is_none());
    }

    #[test]
    fn isolated_vertices_pair_freely() {
        let a = Graph::from_pairs(3, &[]).unwrap();
        let b = Graph::from_pairs(3, &[]).unwrap();
        let bij = pair(&a, &b).unwrap();
        assert!(bij.preserves_adjacency(&a, &b));
    }

    #[test]
    fn empty_graphs_pair_to_empty_witness() {
        let a = Graph::from_pairs(0, &[]).unwrap();
        let b = Graph::from_pairs(0, &[]).unwrap();
        assert!(pair(&a, &b).unwrap().is_empty());
    }
}
