// src/config/mod.rs

//! Loading and validation of the DAG description file.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{DagFile, GraphSection, NodeConfig};
