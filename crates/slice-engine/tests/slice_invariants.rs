use proptest::prelude::*;
use slice_graph::ModuleVertex;
use std::collections::BTreeSet;

fn vertices_for(n: usize) -> Vec<ModuleVertex> {
    (0..n)
        .map(|i| ModuleVertex {
            name: format!("m{i}"),
            def: BTreeSet::new(),
            refs: BTreeSet::new(),
            actions: BTreeSet::new(),
        })
        .collect()
}

fn arbitrary_graph(n: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0..n, 0..n), n)
}

proptest! {
    #[test]
    fn slicing_from_every_vertex_yields_every_vertex(n in 1usize..8) {
        let vertices = vertices_for(n);
        let adj: Vec<Vec<usize>> = vec![vec![]; n];
        let starts: Vec<usize> = (0..n).collect();
        let sliced = slice_engine::slice_modules(&vertices, &adj, &starts);
        prop_assert_eq!(sliced.len(), n);
    }

    #[test]
    fn slicing_from_no_criteria_yields_nothing(adj in arbitrary_graph(6)) {
        let vertices = vertices_for(adj.len());
        let sliced = slice_engine::slice_modules(&vertices, &adj, &[]);
        prop_assert!(sliced.is_empty());
    }

    #[test]
    fn adding_a_starting_criterion_never_shrinks_the_slice(adj in arbitrary_graph(6), start in 0usize..6, extra in 0usize..6) {
        let vertices = vertices_for(adj.len());
        let small = slice_engine::slice_modules(&vertices, &adj, &[start]);
        let big = slice_engine::slice_modules(&vertices, &adj, &[start, extra]);
        let small_names: BTreeSet<&str> = small.iter().map(|v| v.name.as_str()).collect();
        let big_names: BTreeSet<&str> = big.iter().map(|v| v.name.as_str()).collect();
        prop_assert!(small_names.is_subset(&big_names));
    }
}
