use pretty_assertions::assert_eq;

const SRC: &str = r#"
    mdp
    const int N = 3;
    global g : bool init false;

    module A
        a : [0..N] init 0;
        [sync] a < N & g -> (a'=a+1);
        [] true -> (a'=0);
    endmodule

    module B
        b : bool init false;
        [sync] !b -> (b'=true) & (g'=true);
    endmodule

    init a = 0 & b = false endinit
"#;

#[test]
fn module_defs_includes_decls_and_assignment_targets() {
    let program = prism_syntax::parse(SRC).expect("parses");
    let a = &program.modules[0];
    let defs = slice_extract::defs(a);
    assert!(defs.contains("a"));
    assert_eq!(defs.len(), 1);

    let b = &program.modules[1];
    let defs_b = slice_extract::defs(b);
    assert!(defs_b.contains("b"));
    assert!(defs_b.contains("g"));
}

#[test]
fn module_refs_includes_guard_and_rhs_variables() {
    let program = prism_syntax::parse(SRC).expect("parses");
    let a = &program.modules[0];
    let refs = slice_extract::refs(a);
    assert!(refs.contains("a"));
    assert!(refs.contains("g"));
    assert!(refs.contains("N"));
}

#[test]
fn module_actions_excludes_unlabeled_commands() {
    let program = prism_syntax::parse(SRC).expect("parses");
    let a = &program.modules[0];
    let actions = slice_extract::actions(a);
    assert_eq!(actions.len(), 1);
    assert!(actions.contains("sync"));
}

#[test]
fn global_defs_and_refs_cover_constants_globals_and_init() {
    let program = prism_syntax::parse(SRC).expect("parses");
    let defs = slice_extract::global_defs(&program);
    assert!(defs.contains("N"));
    assert!(defs.contains("g"));
    assert!(defs.contains("a"));
    assert!(defs.contains("b"));

    let refs = slice_extract::global_refs(&program);
    assert!(refs.contains("N"));
    assert!(refs.contains("g"));
}
