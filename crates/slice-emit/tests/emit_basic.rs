use pretty_assertions::assert_eq;

const SRC: &str = r#"
    mdp
    const int N = 3;

    module A
        a : [0..N] init 0;
        [sync] a < N -> 1: (a'=a+1);
    endmodule

    module B
        b : bool init false;
        [sync] !b -> (b'=true);
    endmodule

    init a = 0 & b = false endinit
"#;

#[test]
fn unsliced_render_reparses_into_an_equivalent_program() {
    let program = prism_syntax::parse(SRC).expect("parses");
    let vertices = slice_graph::build_component_vertices(&program);
    let rendered = slice_emit::render(&vertices, &program);

    let reparsed = prism_syntax::parse(&rendered).expect("rendered output re-parses");
    assert_eq!(reparsed.modules.len(), 2);
    assert_eq!(reparsed.modules[0].commands[0].action.as_deref(), Some("sync"));
    assert!(reparsed.initial.is_some());

    // §8 invariant #6: emit(build(parse(F))) must yield a vertex set equal to the original's.
    let reparsed_vertices = slice_graph::build_component_vertices(&reparsed);
    assert_eq!(reparsed_vertices, vertices);
}

#[test]
fn sliced_module_is_omitted_entirely_when_irrelevant() {
    let src = r#"
        mdp
        module A
            a : bool init false;
            [] true -> (a'=true);
        endmodule

        module B
            b : bool init false;
            [] true -> (b'=true);
        endmodule
    "#;
    let program = prism_syntax::parse(src).expect("parses");
    let vertices = slice_graph::build_component_vertices(&program);
    let adj = slice_graph::build_component_edges(&vertices, &program);
    let starts = slice_engine::resolve_variable_criteria(&vertices, &["a".to_string()]).expect("found");
    let sliced = slice_engine::slice_components(&vertices, &adj, &starts, &program);

    let rendered = slice_emit::render(&sliced, &program);
    assert!(!rendered.contains("module B"));
    assert!(rendered.contains("module A"));
}

#[test]
fn update_not_in_slice_falls_back_to_likelihood_true() {
    let src = r#"
        mdp
        module M
            x : bool init false;
            y : bool init false;
            [] true -> 0.5: (x'=true) + 0.5: (y'=true);
        endmodule
    "#;
    let program = prism_syntax::parse(src).expect("parses");
    let vertices = slice_graph::build_component_vertices(&program);
    let adj = slice_graph::build_component_edges(&vertices, &program);
    let starts = slice_engine::resolve_variable_criteria(&vertices, &["x".to_string()]).expect("found");
    let sliced = slice_engine::slice_components(&vertices, &adj, &starts, &program);

    let rendered = slice_emit::render(&sliced, &program);
    assert!(rendered.contains("0.5: true"));
    assert!(rendered.contains("(x'=true)"));
}

#[test]
fn header_reflects_model_type() {
    let program = prism_syntax::parse(SRC).expect("parses");
    let vertices = slice_graph::build_component_vertices(&program);
    let rendered = slice_emit::render(&vertices, &program);
    assert!(rendered.starts_with("mdp\n\n"));
}
