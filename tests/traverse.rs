use std::collections::{HashMap, HashSet};
use std::error::Error;

use dagplot::errors::DagplotError;
use dagplot::graph::{ancestors_of, build_graph, connected_components, descendants_of, DagGraph};

type TestResult = Result<(), Box<dyn Error>>;

// Diamond plus a detached pair:
//
//   1 -> 2 -> 4        5 -> 6
//   1 -> 3 -> 4
fn two_block_graph() -> Result<DagGraph, Box<dyn Error>> {
    let mut parents = HashMap::new();
    parents.insert(1, vec![]);
    parents.insert(2, vec![1]);
    parents.insert(3, vec![1]);
    parents.insert(4, vec![2, 3]);
    parents.insert(5, vec![]);
    parents.insert(6, vec![5]);

    Ok(build_graph(&[1, 2, 3, 4, 5, 6], &parents, None, None)?)
}

fn as_set(ids: Vec<String>) -> HashSet<String> {
    ids.into_iter().collect()
}

#[test]
fn descendants_follow_child_edges_and_include_start() -> TestResult {
    let graph = two_block_graph()?;

    let from_root = as_set(descendants_of(&graph, "1")?);
    let expected: HashSet<String> = ["1", "2", "3", "4"].iter().map(|s| s.to_string()).collect();
    assert_eq!(from_root, expected);

    let from_leaf = descendants_of(&graph, "4")?;
    assert_eq!(from_leaf, vec!["4".to_string()]);

    Ok(())
}

#[test]
fn ancestors_follow_parent_edges_and_include_start() -> TestResult {
    let graph = two_block_graph()?;

    let of_leaf = as_set(ancestors_of(&graph, "4")?);
    let expected: HashSet<String> = ["1", "2", "3", "4"].iter().map(|s| s.to_string()).collect();
    assert_eq!(of_leaf, expected);

    let of_root = ancestors_of(&graph, "1")?;
    assert_eq!(of_root, vec!["1".to_string()]);

    Ok(())
}

#[test]
fn immediate_children_and_parents_mirror_the_edge_list() -> TestResult {
    let graph = two_block_graph()?;

    let mut children = graph.children_of("1");
    children.sort();
    assert_eq!(children, vec!["2", "3"]);
    assert!(graph.children_of("4").is_empty());

    let mut parents = graph.parents_of("4");
    parents.sort();
    assert_eq!(parents, vec!["2", "3"]);
    assert!(graph.parents_of("5").is_empty());

    Ok(())
}

#[test]
fn traversal_never_crosses_between_disconnected_blocks() -> TestResult {
    let graph = two_block_graph()?;

    let from_five = as_set(descendants_of(&graph, "5")?);
    assert!(!from_five.contains("1"));
    assert_eq!(from_five.len(), 2);

    Ok(())
}

#[test]
fn connected_components_group_nodes_into_blocks() -> TestResult {
    let graph = two_block_graph()?;

    let blocks = connected_components(&graph);
    assert_eq!(blocks.len(), 2);

    let first = as_set(blocks[0].clone());
    let second = as_set(blocks[1].clone());
    assert_eq!(first.len(), 4);
    assert!(first.contains("1") && first.contains("4"));
    assert_eq!(second.len(), 2);
    assert!(second.contains("5") && second.contains("6"));

    Ok(())
}

#[test]
fn unknown_start_node_is_an_error() -> TestResult {
    let graph = two_block_graph()?;

    let err = descendants_of(&graph, "99").unwrap_err();
    assert!(matches!(err, DagplotError::UnknownNode(_)));

    let err = ancestors_of(&graph, "99").unwrap_err();
    assert!(matches!(err, DagplotError::UnknownNode(_)));

    Ok(())
}
