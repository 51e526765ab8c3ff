// src/graph/traverse.rs

//! BFS queries over a built [`DagGraph`].
//!
//! A search may follow child edges, parent edges, or undirected links; the
//! undirected variant groups every node into its connected block.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::errors::{DagplotError, Result};
use crate::graph::DagGraph;

/// Direction followed when expanding a node during BFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Children,
    Parents,
    Undirected,
}

/// Adjacency lists precomputed from the graph's edge list, so that repeated
/// expansion during BFS does not rescan all edges.
struct Adjacency {
    children: HashMap<String, Vec<String>>,
    parents: HashMap<String, Vec<String>>,
}

impl Adjacency {
    fn from_graph(graph: &DagGraph) -> Self {
        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        let mut parents: HashMap<String, Vec<String>> = HashMap::new();
        for (parent, child) in graph.edges() {
            children.entry(parent.clone()).or_default().push(child.clone());
            parents.entry(child.clone()).or_default().push(parent.clone());
        }
        Self { children, parents }
    }

    fn neighbours(&self, id: &str, direction: Direction) -> Vec<&str> {
        let mut out = Vec::new();
        if matches!(direction, Direction::Children | Direction::Undirected) {
            if let Some(next) = self.children.get(id) {
                out.extend(next.iter().map(|s| s.as_str()));
            }
        }
        if matches!(direction, Direction::Parents | Direction::Undirected) {
            if let Some(next) = self.parents.get(id) {
                out.extend(next.iter().map(|s| s.as_str()));
            }
        }
        out
    }
}

/// BFS from `start`, returning visited ids in visit order (start included).
fn bfs(adj: &Adjacency, start: &str, direction: Direction) -> Vec<String> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut order: Vec<String> = Vec::new();
    let mut queue: VecDeque<String> = VecDeque::new();

    visited.insert(start.to_string());
    order.push(start.to_string());
    queue.push_back(start.to_string());

    while let Some(id) = queue.pop_front() {
        for next in adj.neighbours(&id, direction) {
            if visited.insert(next.to_string()) {
                order.push(next.to_string());
                queue.push_back(next.to_string());
            }
        }
    }

    order
}

fn require_node(graph: &DagGraph, id: &str) -> Result<()> {
    if !graph.contains_node(id) {
        return Err(DagplotError::UnknownNode(id.to_string()));
    }
    Ok(())
}

/// All nodes reachable from `id` by following child edges, `id` included.
pub fn descendants_of(graph: &DagGraph, id: &str) -> Result<Vec<String>> {
    require_node(graph, id)?;
    Ok(bfs(&Adjacency::from_graph(graph), id, Direction::Children))
}

/// All nodes reachable from `id` by following parent edges, `id` included.
pub fn ancestors_of(graph: &DagGraph, id: &str) -> Result<Vec<String>> {
    require_node(graph, id)?;
    Ok(bfs(&Adjacency::from_graph(graph), id, Direction::Parents))
}

/// Group every node of the graph into blocks of connected elements.
///
/// An undirected flood fill: two nodes share a block when some chain of
/// edges links them, ignoring edge direction. Blocks are ordered by the
/// first member's position in the graph's node order.
pub fn connected_components(graph: &DagGraph) -> Vec<Vec<String>> {
    let adj = Adjacency::from_graph(graph);
    let mut visited: HashSet<String> = HashSet::new();
    let mut blocks: Vec<Vec<String>> = Vec::new();

    for node in graph.nodes() {
        if visited.contains(&node.id) {
            continue;
        }
        let block = bfs(&adj, &node.id, Direction::Undirected);
        for id in block.iter() {
            visited.insert(id.clone());
        }
        blocks.push(block);
    }

    blocks
}
