// src/render/dot.rs

use crate::graph::DagGraph;

/// Graph-level settings for DOT output.
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Name emitted in the `digraph <name> {` header.
    pub graph_name: String,

    /// Optional `rankdir` attribute (e.g. `"LR"`).
    pub rankdir: Option<String>,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            graph_name: "dag".to_string(),
            rankdir: None,
        }
    }
}

/// Serialize a graph to Graphviz DOT text.
///
/// Emits one statement per node (`style=filled` with label and fillcolor)
/// and one per edge, in the graph's insertion order, so the output is
/// deterministic for a given graph.
pub fn to_dot(graph: &DagGraph, opts: &DotOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("digraph {} {{\n", quote(&opts.graph_name)));

    if let Some(ref rankdir) = opts.rankdir {
        out.push_str(&format!("  rankdir={};\n", quote(rankdir)));
    }

    for node in graph.nodes() {
        out.push_str(&format!(
            "  {} [style=filled, label={}, fillcolor={}];\n",
            quote(&node.id),
            quote(&node.label),
            quote(&node.fill_color)
        ));
    }

    for (parent, child) in graph.edges() {
        out.push_str(&format!("  {} -> {};\n", quote(parent), quote(child)));
    }

    out.push_str("}\n");
    out
}

/// Quote a DOT identifier or attribute value, escaping backslashes and
/// double quotes.
fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
