// src/graph/mod.rs

//! DAG representation and traversal.
//!
//! - [`builder`] turns flat node/parent inputs into a deduplicated graph
//!   description ready for rendering.
//! - [`traverse`] contains BFS queries over a built graph (ancestors,
//!   descendants, connected components).

pub mod builder;
pub mod traverse;

pub use builder::{build_graph, DagGraph, NodeRecord, DEFAULT_FILL_COLOR};
pub use traverse::{ancestors_of, connected_components, descendants_of};
