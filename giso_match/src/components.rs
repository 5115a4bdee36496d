//! Connected-component partition of a graph.
//!
//! Components are discovered by breadth-first traversal and materialized
//! as induced subgraphs with local vertex numbering, so the exact search
//! can run on one component pair at a time. Each component carries a
//! signature used to pair components across graphs.

use std::collections::VecDeque;

use giso_common::{Edge, Graph, VertexId};
use itertools::Itertools;

/// Isomorphism-invariant fingerprint of a component.
///
/// Components with different signatures can never map to each other;
/// equal signatures are necessary but not sufficient.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature {
    /// Number of vertices in the component.
    pub size: usize,
    /// Number of edges in the component.
    pub edge_count: usize,
    /// Sorted degree multiset of the component.
    pub degrees: Vec<usize>,
}

/// One maximal connected subset of a graph, as an induced subgraph.
#[derive(Clone, Debug)]
pub struct Component {
    graph: Graph,
    to_global: Vec<VertexId>,
    signature: Signature,
}

impl Component {
    /// The induced subgraph, with vertices renumbered to
    /// `[0, size)`.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Local-to-global vertex translation, indexed by local vertex.
    pub fn to_global(&self) -> &[VertexId] {
        &self.to_global
    }

    /// The component's pairing signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Number of vertices in the component.
    pub fn len(&self) -> usize {
        self.to_global.len()
    }

    /// Whether the component is empty (never true for components of a
    /// real partition).
    pub fn is_empty(&self) -> bool {
        self.to_global.is_empty()
    }
}

/// Partition of a graph's vertex set into connected components.
#[derive(Clone, Debug)]
pub struct ComponentPartition {
    components: Vec<Component>,
}

impl ComponentPartition {
    /// Decomposes a graph into its connected components.
    pub fn build(g: &Graph) -> Self {
        let n = g.vertex_count();
        const UNASSIGNED: usize = usize::MAX;
        let mut component_of: Vec<usize> = vec![UNASSIGNED; n];
        let mut memberships: Vec<Vec<VertexId>> = Vec::new();

        for start in 0..n {
            if component_of[start] != UNASSIGNED {
                continue;
            }
            let id = memberships.len();
            let mut members = Vec::new();
            let mut queue = VecDeque::from([start]);
            component_of[start] = id;
            while let Some(v) = queue.pop_front() {
                members.push(v);
                for &w in g.neighbors(v) {
                    if component_of[w] == UNASSIGNED {
                        component_of[w] = id;
                        queue.push_back(w);
                    }
                }
            }
            members.sort_unstable();
            memberships.push(members);
        }

        // Local vertex numbering follows the sorted global order within
        // each component.
        let mut local_of: Vec<usize> = vec![0; n];
        for members in &memberships {
            for (local, &global) in members.iter().enumerate() {
                local_of[global] = local;
            }
        }

        let mut edge_lists: Vec<Vec<Edge>> = vec![Vec::new(); memberships.len()];
        for edge in g.edges() {
            let id = component_of[edge.a];
            debug_assert_eq!(id, component_of[edge.b]);
            edge_lists[id].push(Edge::new(local_of[edge.a], local_of[edge.b]));
        }

        let components = memberships
            .into_iter()
            .zip(edge_lists)
            .map(|(to_global, edges)| {
                let graph = Graph::new(to_global.len(), edges)
                    .expect("induced subgraph of a valid graph is valid");
                let signature = Signature {
                    size: graph.vertex_count(),
                    edge_count: graph.edge_count(),
                    degrees: graph.degrees().iter().copied().sorted_unstable().collect(),
                };
                Component {
                    graph,
                    to_global,
                    signature,
                }
            })
            .collect();

        ComponentPartition { components }
    }

    /// The components, in order of their smallest global vertex.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the partition has no components (zero-vertex graph).
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// All component signatures as a sorted multiset.
    pub fn signature_multiset(&self) -> Vec<Signature> {
        self.components
            .iter()
            .map(|c| c.signature().clone())
            .sorted()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_graph_is_one_component() {
        let g = Graph::from_pairs(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let p = ComponentPartition::build(&g);
        assert_eq!(p.len(), 1);
        let c = &p.components()[0];
        assert_eq!(c.to_global(), &[0, 1, 2]);
        assert_eq!(c.signature().degrees, vec![2, 2, 2]);
    }

    #[test]
    fn disjoint_edges_and_isolated_vertex() {
        let g = Graph::from_pairs(5, &[(0, 3), (1, 2)]).unwrap();
        let p = ComponentPartition::build(&g);
        assert_eq!(p.len(), 3);

        let sizes: Vec<usize> = p.components().iter().map(Component::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);

        // The isolated vertex forms an edgeless singleton component.
        let singleton = &p.components()[2];
        assert_eq!(singleton.to_global(), &[4]);
        assert_eq!(singleton.signature().edge_count, 0);
    }

    #[test]
    fn induced_subgraph_keeps_adjacency() {
        let g = Graph::from_pairs(6, &[(3, 4), (4, 5), (5, 3), (0, 1)]).unwrap();
        let p = ComponentPartition::build(&g);
        let triangle = p
            .components()
            .iter()
            .find(|c| c.len() == 3)
            .expect("triangle component exists");
        assert_eq!(triangle.to_global(), &[3, 4, 5]);
        assert!(triangle.graph().is_adjacent(0, 1));
        assert!(triangle.graph().is_adjacent(1, 2));
        assert!(triangle.graph().is_adjacent(2, 0));
    }

    #[test]
    fn signature_multiset_is_order_independent() {
        let a = Graph::from_pairs(5, &[(0, 1), (1, 2), (3, 4)]).unwrap();
        let b = Graph::from_pairs(5, &[(0, 1), (2, 3), (3, 4)]).unwrap();
        assert_eq!(
            ComponentPartition::build(&a).signature_multiset(),
            ComponentPartition::build(&b).signature_multiset()
        );
    }

    #[test]
    fn zero_vertex_graph_has_empty_partition() {
        let g = Graph::from_pairs(0, &[]).unwrap();
        assert!(ComponentPartition::build(&g).is_empty());
    }
}
