//! Common test cases for the GISO workspace.
//!
//! Each case is a pair of graph files (inline `.gf` text) together with
//! the verdict the pipeline must produce for them. Integration tests in
//! `giso_match` run every case in both argument orders.

use crate::verdict::Verdict;

/// A complete test case definition.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// The name of the test case.
    pub name: &'static str,
    /// `.gf` text of the first graph.
    pub graph_a: &'static str,
    /// `.gf` text of the second graph.
    pub graph_b: &'static str,
    /// The verdict expected from the pipeline, in either argument
    /// order.
    pub expected: Verdict,
}

// #####################
// GRAPH FIXTURES
// #####################

const TRIANGLE: &str = "3 3\n0 1\n1 2\n2 0\n";
const TRIANGLE_PERMUTED: &str = "3 3\n0 2\n2 1\n1 0\n";
const PATH_3: &str = "3 2\n0 1\n1 2\n";
const CYCLE_4: &str = "4 4\n0 1\n1 2\n2 3\n3 0\n";
const STAR_PLUS_EDGE: &str = "4 4\n0 1\n0 2\n0 3\n1 2\n";
const HEXAGON: &str = "6 6\n0 1\n1 2\n2 3\n3 4\n4 5\n5 0\n";
const TWO_TRIANGLES: &str = "6 6\n0 1\n1 2\n2 0\n3 4\n4 5\n5 3\n";

// Two non-isomorphic trees sharing the degree multiset {1,1,1,2,2,3}:
// a spider with leg lengths (1,2,2) and one with leg lengths (1,1,3).
const SPIDER_122: &str = "6 5\n0 1\n0 2\n2 3\n0 4\n4 5\n";
const SPIDER_113: &str = "6 5\n0 1\n0 2\n0 3\n3 4\n4 5\n";

// Disjoint unions of the two spiders. Every component carries the same
// signature, so the component matcher has to try alternative pairings
// before settling on a verdict.
const SPIDERS_122_113: &str =
    "12 10\n0 1\n0 2\n2 3\n0 4\n4 5\n6 7\n6 8\n6 9\n9 10\n10 11\n";
const SPIDERS_113_122: &str =
    "12 10\n0 1\n0 2\n0 3\n3 4\n4 5\n6 7\n6 8\n8 9\n6 10\n10 11\n";
const SPIDERS_122_122: &str =
    "12 10\n0 1\n0 2\n2 3\n0 4\n4 5\n6 7\n6 8\n8 9\n6 10\n10 11\n";

// #####################
// TEST CASES
// #####################

lazy_static::lazy_static! {
    /// All pipeline test cases.
    pub static ref ALL_TEST_CASES: Vec<TestCase> = vec![
        TestCase {
            name: "triangle_vs_permuted_triangle",
            graph_a: TRIANGLE,
            graph_b: TRIANGLE_PERMUTED,
            expected: Verdict::Isomorphic,
        },
        TestCase {
            name: "path3_vs_triangle",
            graph_a: PATH_3,
            graph_b: TRIANGLE,
            expected: Verdict::EdgesUnequal,
        },
        TestCase {
            name: "triangle_vs_path3_sized_pair",
            graph_a: TRIANGLE,
            graph_b: "4 3\n0 1\n1 2\n2 3\n",
            expected: Verdict::VerticesUnequal,
        },
        TestCase {
            name: "cycle4_vs_star_plus_edge",
            graph_a: CYCLE_4,
            graph_b: STAR_PLUS_EDGE,
            expected: Verdict::DegreesUnequal,
        },
        TestCase {
            name: "hexagon_vs_two_triangles",
            graph_a: HEXAGON,
            graph_b: TWO_TRIANGLES,
            expected: Verdict::ComponentsUnequal,
        },
        TestCase {
            name: "spider_122_vs_spider_113",
            graph_a: SPIDER_122,
            graph_b: SPIDER_113,
            expected: Verdict::NotIsomorphic,
        },
        TestCase {
            name: "spider_unions_swapped_order",
            graph_a: SPIDERS_122_113,
            graph_b: SPIDERS_113_122,
            expected: Verdict::Isomorphic,
        },
        TestCase {
            name: "spider_unions_mismatched_multiplicity",
            graph_a: SPIDERS_122_122,
            graph_b: SPIDERS_122_113,
            expected: Verdict::NotIsomorphic,
        },
        TestCase {
            name: "empty_vs_empty",
            graph_a: "0 0\n",
            graph_b: "0 0\n",
            expected: Verdict::Isomorphic,
        },
        TestCase {
            name: "isolated_vertices",
            graph_a: "3 0\n",
            graph_b: "3 0\n",
            expected: Verdict::Isomorphic,
        },
        TestCase {
            name: "hexagon_vs_itself",
            graph_a: HEXAGON,
            graph_b: HEXAGON,
            expected: Verdict::Isomorphic,
        },
    ];
}
