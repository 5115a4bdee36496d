//! The isomorphism decision pipeline.
//!
//! Runs the invariant filters in increasing cost order, short-circuits
//! on the first mismatch, then decomposes both graphs into components,
//! pairs them, and runs the exact search per pair. `Isomorphic` is
//! reported only when every component pair matched, and the returned
//! witness is the union of the per-component bijections.

use giso_common::{Graph, Verdict};
use tracing::info;

use crate::components::ComponentPartition;
use crate::invariants::{component_filter, run_cheap_filters};
use crate::mapping::Bijection;
use crate::pairing::pair_and_search;

/// Result of one pipeline run.
#[derive(Clone, Debug)]
pub struct MatchOutcome {
    /// The decided verdict.
    pub verdict: Verdict,
    /// A witness bijection, present exactly when the verdict is
    /// [`Verdict::Isomorphic`].
    pub witness: Option<Bijection>,
}

/// Entry point for isomorphism decisions.
pub struct IsoMatcher<'a, 'b> {
    a: &'a Graph,
    b: &'b Graph,
}

impl<'a, 'b> IsoMatcher<'a, 'b> {
    /// Decides whether two graphs are isomorphic, producing a witness
    /// bijection on success.
    pub fn check(a: &'a Graph, b: &'b Graph) -> MatchOutcome {
        info!(
            "checking isomorphism: {} vs {} vertices, {} vs {} edges",
            a.vertex_count(),
            b.vertex_count(),
            a.edge_count(),
            b.edge_count()
        );
        IsoMatcher { a, b }.run()
    }

    fn run(self) -> MatchOutcome {
        if let Some(verdict) = run_cheap_filters(self.a, self.b) {
            info!("cheap invariant mismatch: {verdict}");
            return MatchOutcome {
                verdict,
                witness: None,
            };
        }

        let pa = ComponentPartition::build(self.a);
        let pb = ComponentPartition::build(self.b);
        if let Some(verdict) = component_filter(&pa, &pb) {
            info!("component signature mismatch: {verdict}");
            return MatchOutcome {
                verdict,
                witness: None,
            };
        }

        match pair_and_search(self.a.vertex_count(), &pa, &pb) {
            Some(witness) => {
                debug_assert!(witness.preserves_adjacency(self.a, self.b));
                info!("isomorphic with witness over {} vertices", witness.len());
                MatchOutcome {
                    verdict: Verdict::Isomorphic,
                    witness: Some(witness),
                }
            }
            None => {
                info!("exact search exhausted: not isomorphic");
                MatchOutcome {
                    verdict: Verdict::NotIsomorphic,
                    witness: None,
                }
            }
        }
    }
}

/// Convenience wrapper returning only the verdict.
pub fn is_isomorphic(a: &Graph, b: &Graph) -> Verdict {
    IsoMatcher::check(a, b).verdict
}
