use pretty_assertions::assert_eq;

#[test]
fn parses_minimal_dtmc() {
    let src = r#"
        dtmc

        module M
            x : [0..1] init 0;
            [] true -> 1: (x'=1-x);
        endmodule
    "#;
    let program = prism_syntax::parse(src).expect("parses");
    assert_eq!(program.modules.len(), 1);
    let m = &program.modules[0];
    assert_eq!(m.name, "M");
    assert_eq!(m.int_vars.len(), 1);
    assert_eq!(m.commands.len(), 1);
    let cmd = &m.commands[0];
    assert_eq!(cmd.action, None);
    assert!(cmd.guard.is_trivially_true());
    assert_eq!(cmd.updates.len(), 1);
    assert_eq!(cmd.updates[0].assignments.len(), 1);
}

#[test]
fn parses_synchronized_modules_and_init() {
    let src = r#"
        mdp
        const int N = 3;

        module A
            a : [0..N] init 0;
            [sync] a < N -> (a'=a+1);
        endmodule

        module B
            b : bool init false;
            [sync] !b -> (b'=true);
        endmodule

        init a = 0 & b = false endinit
    "#;
    let program = prism_syntax::parse(src).expect("parses");
    assert_eq!(program.constants.len(), 1);
    assert_eq!(program.modules.len(), 2);
    assert_eq!(program.modules[0].commands[0].action.as_deref(), Some("sync"));
    assert_eq!(program.modules[1].commands[0].action.as_deref(), Some("sync"));
    assert!(program.initial.is_some());
}

#[test]
fn rejects_malformed_input() {
    let src = "module M\n    x : bool;\n    [] true -> (x'=);\nendmodule";
    let err = prism_syntax::parse(src).unwrap_err();
    assert!(!err.message.is_empty());
}
