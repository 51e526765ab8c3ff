// src/graph/builder.rs

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

use tracing::debug;

use crate::errors::{DagplotError, Result};

/// Fill color applied to every node when no `colors` sequence is given.
pub const DEFAULT_FILL_COLOR: &str = "yellow";

/// Display attributes of one graph vertex.
///
/// Created once per distinct identifier and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeRecord {
    pub id: String,
    pub label: String,
    pub fill_color: String,
}

/// Deduplicated node/edge description of a DAG.
///
/// Nodes and edges are kept in insertion order so that serialization is
/// deterministic; a side index enforces at most one node per identifier and
/// at most one edge per ordered (parent, child) pair.
#[derive(Debug, Clone, Default)]
pub struct DagGraph {
    nodes: Vec<NodeRecord>,
    index: HashMap<String, usize>,
    edges: Vec<(String, String)>,
    edge_set: HashSet<(String, String)>,
}

impl DagGraph {
    /// Register a node unless one with the same id already exists.
    ///
    /// Returns `true` when a new record was created.
    fn add_node(&mut self, record: NodeRecord) -> bool {
        if self.index.contains_key(&record.id) {
            return false;
        }
        self.index.insert(record.id.clone(), self.nodes.len());
        self.nodes.push(record);
        true
    }

    /// Add a parent → child edge unless that ordered pair already exists.
    ///
    /// Returns `true` when a new edge was created.
    fn add_edge(&mut self, parent: &str, child: &str) -> bool {
        let key = (parent.to_string(), child.to_string());
        if self.edge_set.contains(&key) {
            return false;
        }
        self.edges.push(key.clone());
        self.edge_set.insert(key);
        true
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&NodeRecord> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// All node records, in insertion order.
    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    /// All (parent, child) edges, in insertion order.
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Ids of the immediate parents of a node.
    pub fn parents_of(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|(_, child)| child == id)
            .map(|(parent, _)| parent.as_str())
            .collect()
    }

    /// Ids of the immediate children of a node.
    pub fn children_of(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|(parent, _)| parent == id)
            .map(|(_, child)| child.as_str())
            .collect()
    }

    /// Nodes with no incoming edges.
    pub fn roots(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| self.parents_of(&n.id).is_empty())
            .map(|n| n.id.as_str())
            .collect()
    }
}

/// Build a [`DagGraph`] from a flat node list and a parent-adjacency mapping.
///
/// - `node_ids`: ordered node identifiers. Duplicates are tolerated but
///   produce only one node record, using the first occurrence's label/color.
/// - `parents_of`: must have an entry (possibly empty) for every id in
///   `node_ids`; edges point parent → child.
/// - `labels` / `colors`: positional attribute sequences. When omitted, the
///   label defaults to the identifier's string form and the color to
///   [`DEFAULT_FILL_COLOR`].
///
/// Two passes, mirroring the input contract:
/// 1. register one node record per distinct identifier;
/// 2. add one edge per distinct (parent, child) pair.
///
/// Edge creation fails with [`DagplotError::UnknownParent`] if a parent id was
/// never listed in `node_ids`, and with [`DagplotError::MissingParentEntry`]
/// if `parents_of` lacks an entry for a listed node. No partial graph is
/// returned on error.
pub fn build_graph<I>(
    node_ids: &[I],
    parents_of: &HashMap<I, Vec<I>>,
    labels: Option<&[String]>,
    colors: Option<&[String]>,
) -> Result<DagGraph>
where
    I: Eq + Hash + Display,
{
    let mut graph = DagGraph::default();

    // First pass: node records, deduplicated by identifier.
    for (i, id) in node_ids.iter().enumerate() {
        let id = id.to_string();
        if graph.contains_node(&id) {
            continue;
        }
        let label = labels
            .and_then(|l| l.get(i).cloned())
            .unwrap_or_else(|| id.clone());
        let fill_color = colors
            .and_then(|c| c.get(i).cloned())
            .unwrap_or_else(|| DEFAULT_FILL_COLOR.to_string());
        graph.add_node(NodeRecord {
            id,
            label,
            fill_color,
        });
    }

    // Second pass: edges, deduplicated by ordered (parent, child) pair.
    for id in node_ids.iter() {
        let child = id.to_string();
        let parents = parents_of
            .get(id)
            .ok_or_else(|| DagplotError::MissingParentEntry(child.clone()))?;

        for parent in parents.iter() {
            let parent = parent.to_string();
            if !graph.contains_node(&parent) {
                return Err(DagplotError::UnknownParent {
                    parent,
                    child,
                });
            }
            graph.add_edge(&parent, &child);
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built graph"
    );

    Ok(graph)
}
