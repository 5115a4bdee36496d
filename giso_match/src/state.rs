//! Partial bijection state owned by one exact-search frame.

use giso_common::VertexId;

use crate::mapping::Bijection;

/// Incrementally built one-to-one vertex mapping with its inverse.
///
/// Exactly one search frame owns a `State` at a time; parallel branches
/// each clone their own copy and never share partial mappings.
#[derive(Clone, Debug)]
pub(crate) struct State {
    // A-vertex -> B-vertex
    mapping: Vec<Option<VertexId>>,
    // B-vertex -> A-vertex
    inverse: Vec<Option<VertexId>>,
    mapped: usize,
}

impl State {
    pub(crate) fn new(vertex_count: usize) -> Self {
        State {
            mapping: vec![None; vertex_count],
            inverse: vec![None; vertex_count],
            mapped: 0,
        }
    }

    pub(crate) fn is_mapped(&self, a: VertexId) -> bool {
        self.mapping[a].is_some()
    }

    pub(crate) fn mapped_to(&self, a: VertexId) -> Option<VertexId> {
        self.mapping[a]
    }

    pub(crate) fn is_used(&self, b: VertexId) -> bool {
        self.inverse[b].is_some()
    }

    pub(crate) fn inverse_of(&self, b: VertexId) -> Option<VertexId> {
        self.inverse[b]
    }

    #[contracts::debug_requires(!self.is_mapped(a))]
    #[contracts::debug_requires(!self.is_used(b))]
    #[contracts::debug_ensures(self.is_mapped(a) && self.is_used(b))]
    pub(crate) fn map(&mut self, a: VertexId, b: VertexId) {
        self.mapping[a] = Some(b);
        self.inverse[b] = Some(a);
        self.mapped += 1;
    }

    #[contracts::debug_requires(self.is_mapped(a) && self.is_used(b))]
    #[contracts::debug_ensures(!self.is_mapped(a) && !self.is_used(b))]
    pub(crate) fn unmap(&mut self, a: VertexId, b: VertexId) {
        self.mapping[a] = None;
        self.inverse[b] = None;
        self.mapped -= 1;
    }

    /// Whether every A-vertex has been assigned.
    pub(crate) fn done(&self) -> bool {
        self.mapped == self.mapping.len()
    }

    /// Freezes a completed mapping into a witness.
    #[contracts::debug_requires(self.done())]
    pub(crate) fn to_bijection(&self) -> Bijection {
        Bijection::from_forward(
            self.mapping
                .iter()
                .map(|m| m.expect("state is complete"))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_and_unmap_round_trip() {
        let mut st = State::new(3);
        assert!(!st.done());
        st.map(0, 2);
        assert!(st.is_mapped(0));
        assert!(st.is_used(2));
        assert_eq!(st.mapped_to(0), Some(2));
        assert_eq!(st.inverse_of(2), Some(0));
        st.unmap(0, 2);
        assert!(!st.is_mapped(0));
        assert!(!st.is_used(2));
    }

    #[test]
    fn zero_vertex_state_is_already_done() {
        let st = State::new(0);
        assert!(st.done());
        assert!(st.to_bijection().is_empty());
    }

    #[test]
    fn full_state_freezes_to_witness() {
        let mut st = State::new(2);
        st.map(0, 1);
        st.map(1, 0);
        assert!(st.done());
        let bij = st.to_bijection();
        assert_eq!(bij.as_slice(), &[1, 0]);
    }
}
