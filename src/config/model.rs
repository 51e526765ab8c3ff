// src/config/model.rs

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::graph::DEFAULT_FILL_COLOR;
use crate::render::DotOptions;

/// Top-level DAG description as read from a TOML file.
///
/// ```toml
/// [graph]
/// name = "dag"
/// rankdir = "TB"
/// fill_color = "yellow"
///
/// [node.1]
/// label = "one"
/// color = "red"
/// parents = []
///
/// [node.2]
/// label = "two"
/// color = "lightblue"
/// parents = ["1"]
/// ```
///
/// The `[graph]` section is optional; every `label`, `color` and `parents`
/// field has a default.
#[derive(Debug, Clone, Deserialize)]
pub struct DagFile {
    /// Graph-wide settings from `[graph]`.
    #[serde(default)]
    pub graph: GraphSection,

    /// All nodes from `[node.<id>]`.
    ///
    /// Keys are the *node identifiers* (e.g. `"1"`, `"build"`). A `BTreeMap`
    /// keeps the node order deterministic.
    #[serde(default)]
    pub node: BTreeMap<String, NodeConfig>,
}

/// `[graph]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphSection {
    /// Graph name emitted in the DOT header.
    #[serde(default = "default_graph_name")]
    pub name: String,

    /// Optional Graphviz `rankdir` (e.g. `"LR"`, `"TB"`).
    #[serde(default)]
    pub rankdir: Option<String>,

    /// Fill color for nodes that do not set their own `color`.
    #[serde(default = "default_fill_color")]
    pub fill_color: String,
}

fn default_graph_name() -> String {
    "dag".to_string()
}

fn default_fill_color() -> String {
    DEFAULT_FILL_COLOR.to_string()
}

impl Default for GraphSection {
    fn default() -> Self {
        Self {
            name: default_graph_name(),
            rankdir: None,
            fill_color: default_fill_color(),
        }
    }
}

/// `[node.<id>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeConfig {
    /// Display label; if `None`, the node id is used.
    #[serde(default)]
    pub label: Option<String>,

    /// Fill color; if `None`, `graph.fill_color` applies.
    #[serde(default)]
    pub color: Option<String>,

    /// Ids of this node's parents (edges point parent → this node).
    #[serde(default)]
    pub parents: Vec<String>,
}

impl DagFile {
    /// Node ids in file (lexicographic) order.
    pub fn node_ids(&self) -> Vec<String> {
        self.node.keys().cloned().collect()
    }

    /// Labels positionally aligned with [`DagFile::node_ids`], with the node
    /// id substituted where no label was given.
    pub fn labels(&self) -> Vec<String> {
        self.node
            .iter()
            .map(|(id, n)| n.label.clone().unwrap_or_else(|| id.clone()))
            .collect()
    }

    /// Colors positionally aligned with [`DagFile::node_ids`], with
    /// `graph.fill_color` substituted where no color was given.
    pub fn colors(&self) -> Vec<String> {
        self.node
            .values()
            .map(|n| n.color.clone().unwrap_or_else(|| self.graph.fill_color.clone()))
            .collect()
    }

    /// The child → parents adjacency mapping, one entry per declared node.
    pub fn parent_map(&self) -> HashMap<String, Vec<String>> {
        self.node
            .iter()
            .map(|(id, n)| (id.clone(), n.parents.clone()))
            .collect()
    }

    /// DOT serialization options derived from the `[graph]` section.
    pub fn dot_options(&self) -> DotOptions {
        DotOptions {
            graph_name: self.graph.name.clone(),
            rankdir: self.graph.rankdir.clone(),
        }
    }
}
