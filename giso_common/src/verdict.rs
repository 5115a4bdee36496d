//! The verdict taxonomy of the isomorphism decision pipeline.

use std::fmt;

/// Outcome of comparing two graphs.
///
/// Every variant is a successful, defined result of the decision
/// procedure; "not isomorphic" outcomes travel on the value channel,
/// never as errors. The first four name the cheapest invariant that
/// disproved isomorphism, in the order the pipeline checks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The graphs have different vertex counts.
    VerticesUnequal,
    /// The graphs have different edge counts.
    EdgesUnequal,
    /// The graphs have different degree multisets.
    DegreesUnequal,
    /// The graphs have different connected-component signatures.
    ComponentsUnequal,
    /// All cheap invariants agree, but the exact search found no
    /// adjacency-preserving bijection.
    NotIsomorphic,
    /// An adjacency-preserving bijection exists.
    Isomorphic,
}

impl Verdict {
    /// Whether this verdict means the graphs are isomorphic.
    pub fn is_isomorphic(&self) -> bool {
        matches!(self, Verdict::Isomorphic)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = match self {
            Verdict::VerticesUnequal => "not isomorphic: unequal number of vertices",
            Verdict::EdgesUnequal => "not isomorphic: unequal number of edges",
            Verdict::DegreesUnequal => "not isomorphic: unequal degree distribution",
            Verdict::ComponentsUnequal => "not isomorphic: unequal component structure",
            Verdict::NotIsomorphic => "not isomorphic: no adjacency-preserving bijection",
            Verdict::Isomorphic => "isomorphic",
        };
        write!(f, "{line}")
    }
}
