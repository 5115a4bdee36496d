//! Exact isomorphism search.
//!
//! Backtracking construction of an adjacency-preserving bijection
//! between two graphs already known to share vertex count, edge count,
//! and degree multiset. Vertices of A are processed in a fixed
//! degree-descending order; candidates in B are the unmapped vertices
//! of equal degree that keep the partial mapping adjacency-consistent
//! in both directions. The search space is finite and shrinks with
//! every extension, so the search always terminates.

use giso_common::{Graph, VertexId};
use tracing::debug;

use crate::constraints::vertices_compatible;
use crate::mapping::Bijection;
use crate::state::State;

pub(crate) mod heuristics;
use heuristics::degree_descending_order;

/// Finds one adjacency-preserving bijection from `a` to `b`, if any
/// exists.
///
/// Both graphs must have the same vertex count; the invariant filters
/// guarantee this before the search runs.
pub(crate) fn find_isomorphism(a: &Graph, b: &Graph) -> Option<Bijection> {
    debug_assert_eq!(a.vertex_count(), b.vertex_count());

    let order = degree_descending_order(a);
    let st = State::new(a.vertex_count());

    // A zero-vertex pair is trivially isomorphic under the empty
    // mapping.
    if st.done() {
        return Some(st.to_bijection());
    }

    debug!(
        "starting exact search: {} vertices, {} edges",
        a.vertex_count(),
        a.edge_count()
    );

    search_root(a, b, &order, st)
}

/// Fans out over the root vertex's candidates in parallel. Each branch
/// owns a cloned state, and the first branch to complete a mapping
/// wins; `find_map_any` stops scheduling siblings after that.
#[cfg(feature = "rayon")]
fn search_root(a: &Graph, b: &Graph, order: &[VertexId], st: State) -> Option<Bijection> {
    use rayon::prelude::*;

    let root = order[0];
    let candidates: Vec<VertexId> = (0..b.vertex_count())
        .filter(|&v| vertices_compatible(a, b, &st, root, v))
        .collect();

    candidates.into_par_iter().find_map_any(|v| {
        let mut branch = st.clone();
        branch.map(root, v);
        backtrack(a, b, order, 1, &mut branch)
    })
}

#[cfg(not(feature = "rayon"))]
fn search_root(a: &Graph, b: &Graph, order: &[VertexId], mut st: State) -> Option<Bijection> {
    backtrack(a, b, order, 0, &mut st)
}

fn backtrack(
    a: &Graph,
    b: &Graph,
    order: &[VertexId],
    depth: usize,
    st: &mut State,
) -> Option<Bijection> {
    if st.done() {
        return Some(st.to_bijection());
    }

    let u = order[depth];

    // Phase 1: compute candidates with only immutable access to `st`.
    let candidates: Vec<VertexId> = (0..b.vertex_count())
        .filter(|&v| !st.is_used(v))
        .filter(|&v| vertices_compatible(a, b, st, u, v))
        .collect();

    // Phase 2: iterate candidates and perform scoped mutable updates.
    for v in candidates {
        if let Some(found) = with_mapping(st, u, v, |st_inner| {
            backtrack(a, b, order, depth + 1, st_inner)
        }) {
            return Some(found);
        }
    }

    None
}

/// Scoped helper that maps `u -> v`, runs `f`, then unmaps again so the
/// caller's state is unchanged whether or not `f` succeeded.
fn with_mapping<R>(
    st: &mut State,
    u: VertexId,
    v: VertexId,
    f: impl FnOnce(&mut State) -> Option<R>,
) -> Option<R> {
    st.map(u, v);
    let result = f(st);
    st.unmap(u, v);
    result
}
