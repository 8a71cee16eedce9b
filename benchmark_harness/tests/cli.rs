//!
//! The benchmark harness command line tests.
//!

use std::path::Path;

use assert_cmd::Command;

const MANIFEST: &str = r#"
benchmarks:
  - name: 2to3
    tags: [apps]
  - name: chaos
  - name: generators
  - name: chameleon
    tags: [apps]
groups:
  default: ["-generators"]
"#;

fn suite() -> tempfile::TempDir {
    let directory = tempfile::tempdir().expect("Temporary directory creation failed");
    std::fs::write(directory.path().join("manifest.yaml"), MANIFEST)
        .expect("Manifest writing failed");
    directory
}

fn harness(suite: &Path) -> Command {
    let mut command = Command::cargo_bin("benchmark-harness").expect("Binary exists");
    command.arg("--quiet").current_dir(suite);
    command
}

fn stdout(command: &mut Command) -> String {
    let output = command.output().expect("Runs");
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(output.stderr.as_slice())
    );
    String::from_utf8(output.stdout).expect("UTF-8")
}

#[test]
fn list_default_group() {
    let suite = suite();
    let output = stdout(harness(suite.path()).args(["list", "--manifest", "."]));
    assert_eq!(
        output,
        "- 2to3\n- chaos\n- chameleon\n\nTotal: 3 benchmarks\n"
    );
}

#[test]
fn list_with_selection() {
    let suite = suite();
    let output = stdout(harness(suite.path()).args([
        "list",
        "--manifest",
        "manifest.yaml",
        "--benchmarks",
        "Chameleon,2TO3",
    ]));
    assert_eq!(output, "- 2to3\n- chameleon\n\nTotal: 2 benchmarks\n");
}

#[test]
fn list_with_exclusion_only() {
    let suite = suite();
    let output = stdout(harness(suite.path()).args([
        "list",
        "--manifest",
        ".",
        "-b",
        "-<apps>",
    ]));
    assert_eq!(output, "- chaos\n- generators\n\nTotal: 2 benchmarks\n");
}

#[test]
fn list_groups() {
    let suite = suite();
    let output = stdout(harness(suite.path()).args(["list-groups", "--manifest", "."]));
    assert!(output.starts_with("all (4):\n"));
    assert!(output.contains("default (3):\n"));
    assert!(output.contains("apps (2):\n- 2to3\n- chameleon\n"));

    let alias = stdout(harness(suite.path()).args(["list_groups", "--manifest", "."]));
    assert_eq!(output, alias);
}

#[test]
fn select_json() {
    let suite = suite();
    let output = stdout(harness(suite.path()).args([
        "select",
        "--manifest",
        ".",
        "-b",
        "<apps>,zzz",
        "--format",
        "json",
        "--inherit-environ",
        "PATH,HOME",
    ]));
    let value: serde_json::Value = serde_json::from_str(output.as_str()).expect("Valid JSON");
    assert_eq!(
        value,
        serde_json::json!({
            "benchmarks": ["2to3", "chameleon"],
            "unmatched": ["zzz"],
            "inherit_environ": ["PATH", "HOME"],
        })
    );
}

#[test]
fn select_to_file() {
    let suite = suite();
    let output = stdout(harness(suite.path()).args([
        "select",
        "--manifest",
        ".",
        "-b",
        "chaos",
        "-o",
        "selection.txt",
    ]));
    assert!(output.is_empty());
    let contents =
        std::fs::read_to_string(suite.path().join("selection.txt")).expect("Output file exists");
    assert_eq!(contents, "chaos\n");
}

#[test]
fn unmatched_selection_is_a_warning() {
    let suite = suite();
    let output = Command::cargo_bin("benchmark-harness")
        .expect("Binary exists")
        .current_dir(suite.path())
        .args(["list", "--manifest", ".", "-b", "chaos,zzz"])
        .output()
        .expect("Runs");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(output.stderr.as_slice());
    assert!(stderr.contains("no benchmark named \"zzz\""));
    let stdout = String::from_utf8_lossy(output.stdout.as_slice());
    assert!(stdout.contains("Total: 1 benchmarks"));
}

#[test]
fn select_empty_is_an_error_unless_allowed() {
    let suite = suite();
    let output = harness(suite.path())
        .args(["select", "--manifest", ".", "-b", "zzz"])
        .output()
        .expect("Runs");
    assert!(!output.status.success());

    let output = stdout(harness(suite.path()).args([
        "select",
        "--manifest",
        ".",
        "-b",
        "<NONE>",
        "--allow-no-benchmarks",
    ]));
    assert!(output.is_empty());
}

#[test]
fn negated_group_name_is_rejected() {
    let suite = suite();
    let output = harness(suite.path())
        .args(["list", "--manifest", ".", "-b", "-apps"])
        .output()
        .expect("Runs");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(output.stderr.as_slice());
    assert!(stderr.contains("negative groups not supported"));
}

#[test]
fn config_file() {
    let suite = suite();
    std::fs::write(
        suite.path().join("config.json"),
        r#"{ "manifest": "manifest.yaml", "legacy_guard": { "reject_negated_group_names": false } }"#,
    )
    .expect("Config writing failed");
    let output = stdout(harness(suite.path()).args([
        "--config",
        "config.json",
        "list",
        "-b",
        "-apps",
    ]));
    assert_eq!(output, "- chaos\n- generators\n\nTotal: 2 benchmarks\n");
}

#[test]
fn invalid_selection_fails_before_reading_the_manifest() {
    let suite = suite();
    let output = harness(suite.path())
        .args(["list", "--manifest", "missing.yaml", "-b", "<bad tag>"])
        .output()
        .expect("Runs");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(output.stderr.as_slice());
    assert!(stderr.contains("bad tag"));
    assert!(!stderr.contains("missing.yaml"));
}
