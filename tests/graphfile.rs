use std::path::Path;

use wpath::{path_cost, AStarSearcher};

#[path = "../demos/graphfile/mod.rs"]
mod graphfile;

#[test]
fn six_node_file_matches_builtin_example() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/six_node.graph");
    let problem = graphfile::read_problem(&path).unwrap();
    assert_eq!(problem.graph.node_count(), 6);
    assert_eq!(problem.heuristic, [20.0, 16.0, 6.0, 10.0, 4.0, 0.0]);
    assert_eq!(problem.graph.edge_cost(5, 2), Some(9.0));

    let searcher = AStarSearcher::new(&problem.graph, &problem.heuristic).unwrap();
    let steps = searcher.search(0, 5).unwrap();
    let ids: Vec<_> = steps.iter().map(|step| step.id).collect();
    assert_eq!(ids, [0, 1, 2, 5]);
    assert_eq!(path_cost(&steps), 16.0);
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let text = "# header\n\n3   # nodes\n1 0.5 0\n\n0 1 2 # first\n# whole line\n1 2 1.5\n";
    let problem = graphfile::parse_problem(text.as_bytes()).unwrap();
    assert_eq!(problem.graph.node_count(), 3);
    assert_eq!(problem.heuristic, [1.0, 0.5, 0.0]);
    assert_eq!(problem.graph.edge_cost(0, 1), Some(2.0));
    assert_eq!(problem.graph.edge_cost(2, 1), Some(1.5));
    assert_eq!(problem.graph.edges(2).len(), 1);
}

#[test]
fn missing_lines_are_errors() {
    assert!(graphfile::parse_problem("".as_bytes()).is_err());
    assert!(graphfile::parse_problem("# only a comment\n".as_bytes()).is_err());
    assert!(graphfile::parse_problem("3\n".as_bytes()).is_err());
}

#[test]
fn malformed_fields_are_errors() {
    // node count is not a number
    assert!(graphfile::parse_problem("three\n0 0 0\n".as_bytes()).is_err());
    // bad heuristic value
    assert!(graphfile::parse_problem("2\n0 x\n".as_bytes()).is_err());
    // edge line without a cost
    assert!(graphfile::parse_problem("2\n0 0\n0 1\n".as_bytes()).is_err());
    // edge to a node outside the graph
    assert!(graphfile::parse_problem("2\n0 0\n0 2 1\n".as_bytes()).is_err());
    // negative cost
    assert!(graphfile::parse_problem("2\n0 0\n0 1 -1\n".as_bytes()).is_err());
}

#[test]
fn missing_file_is_an_error() {
    assert!(graphfile::read_problem(Path::new("does/not/exist.graph")).is_err());
}
