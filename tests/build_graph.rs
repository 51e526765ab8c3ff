use std::collections::{HashMap, HashSet};
use std::error::Error;

use dagplot::errors::DagplotError;
use dagplot::graph::{build_graph, DEFAULT_FILL_COLOR};

type TestResult = Result<(), Box<dyn Error>>;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn diamond_parents() -> HashMap<i32, Vec<i32>> {
    let mut parents = HashMap::new();
    parents.insert(1, vec![]);
    parents.insert(2, vec![1]);
    parents.insert(3, vec![1]);
    parents.insert(4, vec![2, 3]);
    parents
}

#[test]
fn diamond_dag_gets_expected_nodes_and_edges() -> TestResult {
    let labels = strings(&["one", "two", "three", "four"]);
    let colors = strings(&["red", "lightblue", "green", "green"]);

    let graph = build_graph(&[1, 2, 3, 4], &diamond_parents(), Some(&labels), Some(&colors))?;

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);

    let one = graph.node("1").expect("node 1 missing");
    assert_eq!(one.label, "one");
    assert_eq!(one.fill_color, "red");

    let four = graph.node("4").expect("node 4 missing");
    assert_eq!(four.label, "four");
    assert_eq!(four.fill_color, "green");

    let edges: HashSet<(String, String)> = graph.edges().iter().cloned().collect();
    for (parent, child) in [("1", "2"), ("1", "3"), ("2", "4"), ("3", "4")] {
        assert!(
            edges.contains(&(parent.to_string(), child.to_string())),
            "missing edge {parent} -> {child}"
        );
    }

    Ok(())
}

#[test]
fn duplicate_node_id_produces_single_record_from_first_occurrence() -> TestResult {
    let mut parents = HashMap::new();
    parents.insert(1, vec![]);
    parents.insert(2, vec![1]);

    let labels = strings(&["first", "second", "ignored"]);
    let colors = strings(&["red", "blue", "green"]);

    // Node 1 is listed twice; the third positional label/color must not win.
    let graph = build_graph(&[1, 2, 1], &parents, Some(&labels), Some(&colors))?;

    assert_eq!(graph.node_count(), 2);
    let one = graph.node("1").expect("node 1 missing");
    assert_eq!(one.label, "first");
    assert_eq!(one.fill_color, "red");

    Ok(())
}

#[test]
fn duplicate_parent_listing_produces_single_edge() -> TestResult {
    let mut parents = HashMap::new();
    parents.insert("a".to_string(), vec![]);
    parents.insert("b".to_string(), vec!["a".to_string(), "a".to_string()]);

    let ids = strings(&["a", "b"]);
    let graph = build_graph(&ids, &parents, None, None)?;

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges()[0], ("a".to_string(), "b".to_string()));

    Ok(())
}

#[test]
fn omitted_labels_default_to_id_string_form() -> TestResult {
    let mut parents = HashMap::new();
    parents.insert(10, vec![]);
    parents.insert(20, vec![10]);

    let graph = build_graph(&[10, 20], &parents, None, None)?;

    assert_eq!(graph.node("10").map(|n| n.label.as_str()), Some("10"));
    assert_eq!(graph.node("20").map(|n| n.label.as_str()), Some("20"));

    Ok(())
}

#[test]
fn omitted_colors_default_to_single_fallback() -> TestResult {
    let mut parents = HashMap::new();
    parents.insert(1, vec![]);
    parents.insert(2, vec![1]);
    parents.insert(3, vec![1]);

    let graph = build_graph(&[1, 2, 3], &parents, None, None)?;

    for node in graph.nodes() {
        assert_eq!(node.fill_color, DEFAULT_FILL_COLOR);
    }

    Ok(())
}

#[test]
fn missing_parent_entry_fails_with_offending_id() {
    let mut parents = HashMap::new();
    parents.insert(1, vec![]);
    // no entry for 2

    let err = build_graph(&[1, 2], &parents, None, None).unwrap_err();
    match err {
        DagplotError::MissingParentEntry(id) => assert_eq!(id, "2"),
        other => panic!("expected MissingParentEntry, got {other:?}"),
    }
}

#[test]
fn parent_not_listed_as_node_fails_with_unknown_parent() {
    let mut parents = HashMap::new();
    parents.insert(2, vec![99]);

    let err = build_graph(&[2], &parents, None, None).unwrap_err();
    match err {
        DagplotError::UnknownParent { parent, child } => {
            assert_eq!(parent, "99");
            assert_eq!(child, "2");
        }
        other => panic!("expected UnknownParent, got {other:?}"),
    }
}

#[test]
fn rebuilding_from_same_inputs_yields_identical_sets() -> TestResult {
    let labels = strings(&["one", "two", "three", "four"]);
    let colors = strings(&["red", "lightblue", "green", "green"]);
    let parents = diamond_parents();

    let a = build_graph(&[1, 2, 3, 4], &parents, Some(&labels), Some(&colors))?;
    let b = build_graph(&[1, 2, 3, 4], &parents, Some(&labels), Some(&colors))?;

    let nodes_a: HashSet<_> = a.nodes().iter().cloned().collect();
    let nodes_b: HashSet<_> = b.nodes().iter().cloned().collect();
    assert_eq!(nodes_a, nodes_b);

    let edges_a: HashSet<_> = a.edges().iter().cloned().collect();
    let edges_b: HashSet<_> = b.edges().iter().cloned().collect();
    assert_eq!(edges_a, edges_b);

    Ok(())
}
