//! Shared types for the GISO workspace.
//!
//! This crate provides the validated graph data model, the `.gf` file
//! loader, the verdict taxonomy, and common test cases used across the
//! GISO project.

mod graph;
mod loader;
mod test_cases;
mod verdict;

pub use crate::graph::*;
pub use crate::loader::*;
pub use crate::test_cases::*;
pub use crate::verdict::*;
