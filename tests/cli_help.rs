use assert_cmd::Command;

#[test]
fn cli_help_lists_subcommands() {
    let out = Command::cargo_bin("kira-pathscore")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("run"));
    assert!(stdout.contains("convert"));
    assert!(stdout.contains("geneset"));
}

#[test]
fn run_help_lists_layouts() {
    let out = Command::cargo_bin("kira-pathscore")
        .unwrap()
        .args(["run", "--help"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--sample-layout"));
    assert!(stdout.contains("--control-layout"));
}
