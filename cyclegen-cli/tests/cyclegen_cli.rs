//! Behavioural tests for the cyclegen binary.

use std::path::Path;
use std::process::{Command, Output};

use cyclegen_test_support::fs::{file_names, read_single_file};
use rstest::rstest;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    let result = Command::new(env!("CARGO_BIN_EXE_cyclegen"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("CYCLEGEN_LOG_FORMAT")
        .output();
    match result {
        Ok(output) => output,
        Err(err) => panic!("failed to spawn cyclegen: {err}"),
    }
}

#[rstest]
fn bare_invocation_writes_reference_document_silently() -> std::io::Result<()> {
    let dir = temp_dir();
    let output = run_in(dir.path(), &[]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let (name, contents) = read_single_file(dir.path())?;
    assert_eq!(name.len(), 36);
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1999);
    assert_eq!(lines.first(), Some(&"999,999"));
    assert_eq!(lines.get(999), Some(&"999,1"));
    assert_eq!(lines.last(), Some(&"999,B"));
    assert!(!contents.ends_with('\n'));
    Ok(())
}

#[rstest]
fn two_runs_never_share_a_file() -> std::io::Result<()> {
    let dir = temp_dir();
    assert!(run_in(dir.path(), &[]).status.success());
    assert!(run_in(dir.path(), &[]).status.success());
    assert_eq!(file_names(dir.path())?.len(), 2);
    Ok(())
}

#[rstest]
fn print_path_then_check_round_trip() {
    let dir = temp_dir();
    let generated = run_in(dir.path(), &["generate", "--vertices", "5", "--print-path"]);
    assert!(generated.status.success());
    let stdout = String::from_utf8_lossy(&generated.stdout);
    let path = stdout.trim();
    assert!(!path.is_empty());

    let checked = run_in(dir.path(), &["check", path]);
    assert!(
        checked.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&checked.stderr)
    );
    let report = String::from_utf8_lossy(&checked.stdout);
    assert!(report.contains("vertices: 5"));
    assert!(report.contains("colouring: proper"));
}

#[rstest]
#[case::improper_colouring(&["generate", "--vertices", "4", "--print-path"], "COLOURING_IMPROPER")]
fn check_failure_exits_non_zero_with_code(#[case] generate: &[&str], #[case] code: &str) {
    let dir = temp_dir();
    let generated = run_in(dir.path(), generate);
    assert!(generated.status.success());
    let stdout = String::from_utf8_lossy(&generated.stdout);

    let checked = run_in(dir.path(), &["check", stdout.trim()]);
    assert!(!checked.status.success());
    assert!(checked.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&checked.stderr);
    assert!(stderr.contains(code), "stderr: {stderr}");
}

#[rstest]
fn unwritable_output_dir_fails() {
    let dir = temp_dir();
    let output = run_in(dir.path(), &["generate", "--output-dir", "missing"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GENERATE_FILE_SYSTEM"), "stderr: {stderr}");
}
