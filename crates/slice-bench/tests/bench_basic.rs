use pretty_assertions::assert_eq;

#[test]
fn fully_disconnected_graph_has_slice_size_one_everywhere() {
    let adj: Vec<Vec<usize>> = vec![vec![], vec![], vec![]];
    let report = slice_bench::benchmark(&adj);
    assert_eq!(report.nodes, 3);
    assert_eq!(report.edges, 0);
    // each vertex's own single-element bitmap differs from the others, so all 3 are unique.
    assert_eq!(report.unique_slices, 3);
    assert_eq!(report.avg_size_uw, 1.0);
    assert_eq!(report.avg_size_w, 1.0);
}

#[test]
fn fully_connected_graph_has_slice_size_n_everywhere() {
    let adj: Vec<Vec<usize>> = vec![vec![1, 2], vec![0, 2], vec![0, 1]];
    let report = slice_bench::benchmark(&adj);
    assert_eq!(report.nodes, 3);
    assert_eq!(report.edges, 6);
    assert_eq!(report.unique_slices, 1);
    assert_eq!(report.avg_size_uw, 3.0);
    assert_eq!(report.avg_size_w, 3.0);
}

#[test]
fn chain_graph_has_varying_slice_sizes() {
    // 0 -> 1 -> 2: slicing from 0 reaches all 3, from 1 reaches 2, from 2 reaches 1.
    let adj: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![]];
    let report = slice_bench::benchmark(&adj);
    assert_eq!(report.nodes, 3);
    assert_eq!(report.edges, 2);
    assert_eq!(report.unique_slices, 3);
    // sizes are 3, 2, 1 -> avg_size_uw = (3+2+1)/3
    assert!((report.avg_size_uw - 2.0).abs() < 1e-9);
}

#[test]
fn real_program_benchmark_is_grounded_in_its_own_graph() {
    let src = r#"
        mdp
        module A
            a : bool init false;
            [] true -> (a'=true);
        endmodule
    "#;
    let program = prism_syntax::parse(src).expect("parses");
    let vertices = slice_graph::build_component_vertices(&program);
    let adj = slice_graph::build_component_edges(&vertices, &program);
    let report = slice_bench::benchmark(&adj);
    assert_eq!(report.nodes, vertices.len());
}
