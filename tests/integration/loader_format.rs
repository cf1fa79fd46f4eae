#![allow(missing_docs)]

use std::fs;

use senda::{load_path, load_str, LoadError};
use tempfile::TempDir;

#[test]
fn example_document_yields_the_documented_adjacency() {
    let graph = load_str("3\n0:1,2\n1:2\n2:\n").expect("example parses");
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![2]);
    assert_eq!(graph.neighbors(2).count(), 0);
}

#[test]
fn header_trailing_content_is_ignored() {
    let graph = load_str("2 vertices follow\n0:1\n1:\n").expect("header with junk");
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn malformed_header_is_fatal() {
    assert!(matches!(
        load_str("graph\n0:1\n"),
        Err(LoadError::MalformedHeader { .. })
    ));
    assert!(matches!(load_str(""), Err(LoadError::MalformedHeader { .. })));
    assert!(matches!(
        load_str("-1\n"),
        Err(LoadError::MalformedHeader { .. })
    ));
}

#[test]
fn lines_without_a_colon_are_skipped() {
    let graph = load_str("3\nnot a data line\n1:2\n2:\n").expect("parses");
    assert_eq!(graph.neighbors(0).count(), 0);
    assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn out_of_range_neighbors_are_dropped() {
    let graph = load_str("2\n0:5\n1:\n").expect("parses");
    assert_eq!(graph.neighbors(0).count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn negative_and_garbled_neighbor_tokens_are_dropped() {
    let graph = load_str("3\n0:-1,zz,1\n1:\n2:\n").expect("parses");
    assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn neighbor_lists_split_on_commas_and_whitespace() {
    let graph = load_str("4\n0:1 2,3\n1:\n2:\n3:\n").expect("parses");
    assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[test]
fn missing_trailing_neighbor_list_yields_no_edges() {
    let graph = load_str("2\n0:\n1:\n").expect("parses");
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn fewer_data_lines_than_vertices_is_tolerated() {
    let graph = load_str("4\n0:1\n").expect("parses");
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1]);
    for v in 1..4 {
        assert_eq!(graph.neighbors(v).count(), 0);
    }
}

#[test]
fn data_lines_beyond_the_vertex_count_are_ignored() {
    let graph = load_str("1\n0:0\n0:0\n0:0\n").expect("parses");
    assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![0]);
}

#[test]
fn non_numeric_vertex_prefix_names_vertex_zero() {
    // atoi compatibility: "x:1" reads as vertex 0
    let graph = load_str("2\nx:1\n").expect("parses");
    assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn out_of_range_owning_vertex_skips_the_line() {
    let graph = load_str("2\n7:0\n-3:1\n").expect("parses");
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn zero_vertex_graph_loads_successfully() {
    let graph = load_str("0\n").expect("parses");
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn load_path_round_trips_through_a_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("graph.txt");
    fs::write(&path, "3\n0:1,2\n1:2\n2:\n").expect("write graph");

    let graph = load_path(&path).expect("load from file");
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn missing_file_reports_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("nonexistent.txt");
    match load_path(&path) {
        Err(LoadError::NotFound { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
