use std::io::Write;
use std::process::Command;

const SRC: &str = r#"
    mdp
    const int N = 3;

    module A
        a : [0..N] init 0;
        [] a < N -> 1: (a'=a+1);
    endmodule

    module B
        b : bool init false;
        [] !b -> (b'=true);
    endmodule
"#;

fn write_model(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("model.prism");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(SRC.as_bytes()).unwrap();
    path
}

fn prisl() -> Command {
    Command::new(env!("CARGO_BIN_EXE_prisl"))
}

#[test]
fn parse_mode_writes_a_reparseable_slice() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_model(&dir);
    let out = dir.path().join("out.prism");

    let status = prisl()
        .args([model.to_str().unwrap(), "parse", "--output"])
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("mdp"));
    assert!(text.contains("module A"));
    assert!(text.contains("module B"));
}

#[test]
fn variable_mode_excludes_unrelated_module() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_model(&dir);
    let out = dir.path().join("out.prism");

    let status = prisl()
        .args([model.to_str().unwrap(), "v", "a", "--output"])
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("module A"));
    assert!(!text.contains("module B"));
}

#[test]
fn unresolved_variable_criterion_is_a_fatal_error() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_model(&dir);

    let status = prisl()
        .args([model.to_str().unwrap(), "v", "nope"])
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn benchmark_mode_prints_both_graphs() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_model(&dir);

    let output = prisl().args([model.to_str().unwrap(), "b"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("CDG:"));
    assert!(stdout.contains("MDG:"));
    assert!(stdout.contains("CDG: took"));
    assert!(stdout.contains("MDG: took"));
}
