//! Graph isomorphism decision engine.
//!
//! This crate decides whether two finite, simple, undirected graphs are
//! isomorphic. It runs a multi-stage filter pipeline that rejects
//! non-isomorphic pairs as cheaply as possible (vertex count, edge
//! count, degree multiset, component signatures) and falls back to a
//! backtracking exact search, scoped to matched connected components,
//! only when all cheap invariants agree.
//!
//! The optional `rayon` feature parallelizes the root fan-out of the
//! exact search with first-success-wins semantics.

mod components;
mod constraints;
mod invariants;
mod mapping;
mod matcher;
mod pairing;
mod search;
mod state;

pub use crate::components::{Component, ComponentPartition, Signature};
pub use crate::mapping::Bijection;
pub use crate::matcher::{IsoMatcher, MatchOutcome, is_isomorphic};
