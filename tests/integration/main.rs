//! Integration tests for Egress
//!
//! These drive the `egress` binary end to end over stdin, script files and
//! configuration files.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn egress(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_egress"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start egress");
    // The child may exit before reading everything
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes).lines().map(str::to_string).collect()
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_help() {
    let output = egress(&["--help"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Escape-route networks and their maximum flows"));
}

#[test]
fn test_version() {
    let output = egress(&["version"], "");
    assert_eq!(
        lines(&output.stdout),
        [format!("Egress v{}", env!("CARGO_PKG_VERSION"))]
    );
}

#[test]
fn test_repl_is_the_default() {
    let output = egress(&[], "add A a3b;b2c\nflow A a c\nflow A c a\nquit\nflow A a c\n");
    assert!(output.status.success());
    assert_eq!(
        lines(&output.stdout),
        ["Added new escape network with identifier A.", "2"]
    );
    assert_eq!(
        lines(&output.stderr),
        ["Error, c is not a valid start vertex of escape network A"]
    );
}

#[test]
fn test_repl_stops_at_end_of_input() {
    let output = egress(&["repl"], "add B s5a;s3b;a2t;b4t\nflow B s t\nlist B");
    assert!(output.status.success());
    assert_eq!(
        lines(&output.stdout),
        ["Added new escape network with identifier B.", "5", "5 s t"]
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_run_script_with_config() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("routes.txt");
    std::fs::write(&script, "add C x7y\nadd C x7y;y1z\nflow C x z\nprint C\nquit\n").unwrap();
    let config = dir.path().join("egress.toml");
    std::fs::write(&config, "error_prefix = \"E: \"\necho_commands = true\n").unwrap();

    let output = egress(
        &["--config", config.to_str().unwrap(), "run", script.to_str().unwrap()],
        "",
    );
    assert!(output.status.success());
    assert_eq!(
        lines(&output.stdout),
        [
            "> add C x7y",
            "> add C x7y;y1z",
            "Added new escape network with identifier C.",
            "> flow C x z",
            "1",
            "> print C",
            "x7y",
            "y1z",
            "> quit",
        ]
    );
    assert_eq!(lines(&output.stderr), ["E: there is no escape network called C"]);
}

#[test]
fn test_missing_script_fails() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("absent.txt");
    let output = egress(&["run", script.to_str().unwrap()], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.txt"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "colour = \"red\"\n").unwrap();
    let output = egress(&["--config", config.to_str().unwrap()], "list\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
