use pretty_assertions::assert_eq;
use slice_graph::VertexKind;

const SRC: &str = r#"
    mdp
    const int N = 3;
    global g : bool init false;

    module A
        a : [0..N] init 0;
        [sync] a < N & g -> 1: (a'=a+1);
        [] true -> (a'=0);
    endmodule

    module B
        b : bool init false;
        unused : bool init false;
        [sync] !b -> (b'=true) & (g'=true);
    endmodule

    init a = 0 & b = false endinit
"#;

#[test]
fn slice_by_variable_criterion_keeps_its_own_declaration() {
    let program = prism_syntax::parse(SRC).expect("parses");
    let vertices = slice_graph::build_component_vertices(&program);
    let adj = slice_graph::build_component_edges(&vertices, &program);

    let starts = slice_engine::resolve_variable_criteria(&vertices, &["unused".to_string()]).expect("found");
    let sliced = slice_engine::slice_components(&vertices, &adj, &starts, &program);

    assert!(sliced.iter().any(|v| v.kind == VertexKind::LocalDecl && v.code.starts_with("unused")));
    assert!(!sliced.iter().any(|v| v.module_name == "A"));
}

#[test]
fn slice_by_unknown_variable_is_an_error() {
    let program = prism_syntax::parse(SRC).expect("parses");
    let vertices = slice_graph::build_component_vertices(&program);
    let err = slice_engine::resolve_variable_criteria(&vertices, &["nope".to_string()]).unwrap_err();
    assert!(matches!(err, slice_engine::SliceError::InvalidArgument(_)));
}

#[test]
fn slice_by_module_criterion_follows_action_dependence() {
    let program = prism_syntax::parse(SRC).expect("parses");
    let module_vertices = slice_graph::build_module_vertices(&program);
    let adj = slice_graph::build_module_edges(&module_vertices);

    let starts = slice_engine::resolve_module_criteria(&module_vertices, &["A".to_string()]).expect("found");
    let sliced = slice_engine::slice_modules(&module_vertices, &adj, &starts);

    let names: Vec<&str> = sliced.iter().map(|m| m.name.as_str()).collect();
    assert!(names.contains(&"A"));
    assert!(names.contains(&"B"));
}

#[test]
fn prune_dead_commands_drops_trivial_guard_with_no_surviving_rate() {
    let src = r#"
        mdp
        module M
            x : bool init false;
            y : bool init false;
            [] true -> (x'=true);
        endmodule
    "#;
    let program = prism_syntax::parse(src).expect("parses");
    let vertices = slice_graph::build_component_vertices(&program);
    let adj = slice_graph::build_component_edges(&vertices, &program);

    let starts = slice_engine::resolve_variable_criteria(&vertices, &["y".to_string()]).expect("found");
    let sliced = slice_engine::slice_components(&vertices, &adj, &starts, &program);

    assert!(!sliced.iter().any(|v| v.kind == VertexKind::Guard));
}

#[test]
fn full_criteria_slice_contains_every_vertex() {
    let program = prism_syntax::parse(SRC).expect("parses");
    let vertices = slice_graph::build_component_vertices(&program);
    let adj = slice_graph::build_component_edges(&vertices, &program);
    let all: Vec<usize> = (0..vertices.len()).collect();
    let sliced = slice_engine::slice_components(&vertices, &adj, &all, &program);
    assert_eq!(sliced.len(), vertices.len());
}

#[test]
fn empty_criteria_slice_is_empty() {
    let program = prism_syntax::parse(SRC).expect("parses");
    let vertices = slice_graph::build_component_vertices(&program);
    let adj = slice_graph::build_component_edges(&vertices, &program);
    let sliced = slice_engine::slice_components(&vertices, &adj, &[], &program);
    assert!(sliced.is_empty());
}
