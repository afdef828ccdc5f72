use crate::codec;
use crate::error::Error;
use crate::graph::Graph;

fn decode_str(text: &str) -> Graph {
    codec::decode(text.as_bytes()).unwrap()
}

fn encode_string(graph: &Graph) -> String {
    let mut buf = Vec::new();
    codec::encode(graph, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn decode_canonical_header_creates_vertices_and_stays_clean() {
    let g = decode_str("5 2\n0 1 7\n1 2 -3\n");

    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.cost(0, 1), Ok(7));
    assert_eq!(g.cost(1, 2), Ok(-3));
    assert!(!g.is_dirty());
}

#[test]
fn decode_does_not_validate_the_declared_edge_count() {
    let g = decode_str("3 9\n0 1 5\n");

    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn decode_edge_lines_create_missing_endpoints() {
    let g = decode_str("7 8 1\n");

    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.cost(7, 8), Ok(1));
    assert!(g.is_dirty());
}

#[test]
fn decode_repeated_edge_lines_overwrite_the_cost() {
    let g = decode_str("0 1 5\n0 1 9\n");

    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.cost(0, 1), Ok(9));
    assert_eq!(g.degree(1), Ok((1, 0)));
}

#[test]
fn decode_isolated_line_skips_fillers() {
    let g = decode_str("0 1 5\n4 -1 -1 -1");

    assert_eq!(g.vertex_count(), 3);
    assert!(g.has_vertex(4));
    assert!(!g.has_vertex(-1));
    assert!(g.is_dirty());
}

#[test]
fn decode_single_token_line_is_an_isolated_vertex() {
    let g = decode_str("7");

    assert_eq!(g.vertex_count(), 1);
    assert!(g.has_vertex(7));
    assert!(g.is_dirty());
}

#[test]
fn decode_line_shapes_mix_in_any_order() {
    let g = decode_str("0 1 5\n4 2\n2 3 -7\n9 -1 -1 -1");

    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.edge_count(), 2);
    assert!(g.has_vertex(9));
    assert!(!g.is_dirty());
}

#[test]
fn decode_empty_input_is_an_empty_dirty_graph() {
    let g = decode_str("");

    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.is_dirty());
}

#[test]
fn decode_rejects_non_integer_tokens() {
    let err = codec::decode("1 2\nx y z\n".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::MalformedFile { line: 2, .. }));
}

#[test]
fn encode_clean_graph_writes_the_header_layout() {
    let g = decode_str("3 2\n0 1 7\n1 2 -3\n");
    assert_eq!(encode_string(&g), "3 2\n0 1 7\n1 2 -3\n");
}

#[test]
fn encode_dirty_graph_pads_two_isolated_vertices_to_four() {
    let mut g = Graph::new();
    for v in 0..4 {
        g.add_vertex(v);
    }
    g.add_edge(0, 1, 9).unwrap();

    assert_eq!(encode_string(&g), "0 1 9\n2 3 -1 -1");
}

#[test]
fn encode_dirty_graph_pads_three_isolated_vertices_to_four() {
    let mut g = Graph::new();
    for v in 0..5 {
        g.add_vertex(v);
    }
    g.add_edge(0, 1, 2).unwrap();

    assert_eq!(encode_string(&g), "0 1 2\n2 3 4 -1");
}

#[test]
fn encode_leaves_other_isolated_counts_unpadded() {
    let mut g = Graph::new();
    g.add_vertex(5);
    assert_eq!(encode_string(&g), "5");

    for v in [6, 7, 8] {
        g.add_vertex(v);
    }
    assert_eq!(encode_string(&g), "5 6 7 8");
}

#[test]
fn encode_dirty_graph_without_isolated_vertices_writes_edges_only() {
    let mut g = Graph::new();
    g.add_vertex(0);
    g.add_vertex(1);
    g.add_edge(0, 1, 3).unwrap();

    assert_eq!(encode_string(&g), "0 1 3\n");
}

#[test]
fn clean_round_trip_preserves_counts_and_costs() {
    let original = decode_str("4 3\n0 1 7\n1 2 -3\n2 0 255\n");
    let restored = decode_str(&encode_string(&original));

    assert!(!restored.is_dirty());
    assert_eq!(restored.vertex_count(), original.vertex_count());
    assert_eq!(restored.edge_count(), original.edge_count());
    for (edge, cost) in original.edges() {
        assert_eq!(restored.cost(edge.from, edge.to), Ok(cost));
    }
}

#[test]
fn dirty_round_trip_recovers_two_isolated_vertices() {
    let mut g = Graph::new();
    for v in [10, 11, 12, 13] {
        g.add_vertex(v);
    }
    g.add_edge(10, 11, 5).unwrap();

    let restored = decode_str(&encode_string(&g));
    assert_eq!(restored.isolated_vertices(), vec![12, 13]);
    assert_eq!(restored.vertex_count(), 4);
    assert_eq!(restored.edge_count(), 1);
    assert!(!restored.has_vertex(-1));
}

#[test]
fn dirty_round_trip_recovers_three_isolated_vertices() {
    let mut g = Graph::new();
    for v in [10, 11, 12, 13, 14] {
        g.add_vertex(v);
    }
    g.add_edge(10, 11, 5).unwrap();

    let restored = decode_str(&encode_string(&g));
    assert_eq!(restored.isolated_vertices(), vec![12, 13, 14]);
    assert_eq!(restored.vertex_count(), 5);
    assert!(!restored.has_vertex(-1));
}

#[test]
fn save_and_load_round_trip_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");

    let original = decode_str("3 1\n0 2 -5\n");
    codec::save(&original, &path).unwrap();
    let restored = codec::load(&path).unwrap();

    assert_eq!(restored.vertex_count(), 3);
    assert_eq!(restored.cost(0, 2), Ok(-5));
    assert!(!restored.is_dirty());
}

#[test]
fn load_missing_file_reports_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = codec::load(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn mutations_flip_a_loaded_graph_to_the_dirty_layout() {
    let mut g = decode_str("3 1\n0 1 4\n");
    assert!(!g.is_dirty());
    g.add_vertex(0);
    assert!(!g.is_dirty());
    g.set_cost(0, 1, 9).unwrap();
    assert!(g.is_dirty());

    let mut g = decode_str("3 1\n0 1 4\n");
    g.remove_edge(0, 1).unwrap();
    assert!(g.is_dirty());

    let mut g = decode_str("3 1\n0 1 4\n");
    g.add_vertex(9);
    assert!(g.is_dirty());

    let mut g = decode_str("3 1\n0 1 4\n");
    g.add_edge(0, 2, 1).unwrap();
    assert!(g.is_dirty());
}
