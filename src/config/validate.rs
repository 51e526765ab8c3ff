// src/config/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::DagFile;
use crate::errors::{DagplotError, Result};

/// Run semantic validation against a loaded DAG description.
///
/// This checks:
/// - there is at least one node
/// - all `parents` entries refer to declared nodes
/// - no node lists itself as a parent
/// - the graph has no cycles
pub fn validate_dag_file(file: &DagFile) -> Result<()> {
    ensure_has_nodes(file)?;
    validate_parent_refs(file)?;
    validate_acyclic(file)?;
    Ok(())
}

fn ensure_has_nodes(file: &DagFile) -> Result<()> {
    if file.node.is_empty() {
        return Err(DagplotError::ConfigError(
            "DAG file must contain at least one [node.<id>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_parent_refs(file: &DagFile) -> Result<()> {
    for (id, node) in file.node.iter() {
        for parent in node.parents.iter() {
            if !file.node.contains_key(parent) {
                return Err(DagplotError::ConfigError(format!(
                    "node '{}' has unknown parent '{}'",
                    id, parent
                )));
            }
            if parent == id {
                return Err(DagplotError::ConfigError(format!(
                    "node '{}' cannot be its own parent",
                    id
                )));
            }
        }
    }
    Ok(())
}

fn validate_acyclic(file: &DagFile) -> Result<()> {
    // Build a petgraph graph from the nodes and their parent lists.
    //
    // Edge direction: parent -> child. For:
    //   [node.2]
    //   parents = ["1"]
    // we add edge 1 -> 2.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for id in file.node.keys() {
        graph.add_node(id.as_str());
    }

    for (id, node) in file.node.iter() {
        for parent in node.parents.iter() {
            graph.add_edge(parent.as_str(), id.as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(DagplotError::DagCycle(format!(
            "involving node '{}'",
            cycle.node_id()
        ))),
    }
}
