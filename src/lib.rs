// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod render;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::{CliArgs, OutputFormat};
use crate::config::loader::load_and_validate;
use crate::config::model::DagFile;
use crate::errors::Result;
use crate::graph::{build_graph, DagGraph};
use crate::render::{render_image, to_dot, write_dot, ImageFormat};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - DAG description loading
/// - graph construction
/// - DOT serialization
/// - Graphviz rendering (or DOT/dry-run output)
pub fn run(args: CliArgs) -> Result<()> {
    let input_path = PathBuf::from(&args.input);
    let file = load_and_validate(&input_path)?;

    let graph = build_dag_graph(&file)?;
    let dot = to_dot(&graph, &file.dot_options());

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        roots = ?graph.roots(),
        "graph constructed"
    );

    if args.dry_run {
        print_dry_run(&file, &graph, &dot);
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.format.default_output().to_string());

    match args.format {
        OutputFormat::Png => render_image(&dot, ImageFormat::Png, &output)?,
        OutputFormat::Svg => render_image(&dot, ImageFormat::Svg, &output)?,
        OutputFormat::Dot => write_dot(&dot, &output)?,
    }

    Ok(())
}

/// Build the graph description from a validated DAG file.
///
/// The file's per-node records are flattened into the parallel sequences the
/// builder takes: node ids in file order, with labels and colors positionally
/// aligned (defaults already substituted by the file model).
pub fn build_dag_graph(file: &DagFile) -> Result<DagGraph> {
    let node_ids = file.node_ids();
    let parents = file.parent_map();
    let labels = file.labels();
    let colors = file.colors();

    build_graph(&node_ids, &parents, Some(&labels), Some(&colors))
}

/// Simple dry-run output: print nodes, edges and the DOT text.
fn print_dry_run(file: &DagFile, graph: &DagGraph, dot: &str) {
    println!("dagplot dry-run");
    println!("  graph.name = {}", file.graph.name);
    if let Some(ref rankdir) = file.graph.rankdir {
        println!("  graph.rankdir = {rankdir}");
    }
    println!("  graph.fill_color = {}", file.graph.fill_color);
    println!();

    println!("nodes ({}):", graph.node_count());
    for node in graph.nodes() {
        println!("  - {}", node.id);
        println!("      label: {}", node.label);
        println!("      fillcolor: {}", node.fill_color);
        let parents = graph.parents_of(&node.id);
        if !parents.is_empty() {
            println!("      parents: {:?}", parents);
        }
    }

    println!();
    println!("edges ({}):", graph.edge_count());
    for (parent, child) in graph.edges() {
        println!("  - {parent} -> {child}");
    }

    println!();
    print!("{dot}");

    debug!("dry-run complete (no rendering)");
}
