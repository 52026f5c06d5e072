use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn authors_sorted() -> Command {
    Command::cargo_bin("authors-sorted").unwrap()
}

/// Repository fixture with a `.git` marker and the given registry text.
fn repo_with(registry: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join("authors.yaml"), registry).unwrap();
    dir
}

fn run_in(root: &Path, args: &[&str]) -> (i32, String, String) {
    let out = authors_sorted()
        .current_dir(root)
        .args(args)
        .output()
        .unwrap();
    (
        out.status.code().unwrap_or(-1),
        String::from_utf8(out.stdout).unwrap(),
        String::from_utf8(out.stderr).unwrap(),
    )
}

#[test]
fn sorted_registry_exits_zero() {
    let repo = repo_with("alice:\n  name: Alice\nbob:\n  name: Bob\ncarol:\n  name: Carol\n");
    let (code, stdout, _) = run_in(repo.path(), &[]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "authors.yaml is sorted correctly\n");
}

#[test]
fn swapped_entries_are_reported() {
    let repo = repo_with("bob: {}\nalice: {}\ncarol: {}\n");
    let (code, stdout, _) = run_in(repo.path(), &[]);
    assert_eq!(code, 1);
    assert!(stdout.starts_with("authors.yaml is not sorted alphabetically (case-insensitive)."));
    assert!(stdout.contains("Current order:\n  bob\n  alice\n  carol\n"));
    assert!(stdout.contains("Expected order:\n  alice\n  bob\n  carol\n"));
    assert!(stdout.contains("Position 0: got 'bob', expected 'alice'"));
    assert!(stdout.contains("Position 1: got 'alice', expected 'bob'"));
    assert!(!stdout.contains("Position 2"));
}

#[test]
fn empty_registry_exits_zero() {
    for text in ["", "~\n"] {
        let repo = repo_with(text);
        let (code, stdout, _) = run_in(repo.path(), &[]);
        assert_eq!(code, 0);
        assert_eq!(stdout, "authors.yaml is empty\n");
    }
}

#[test]
fn uppercase_key_sorts_case_insensitively() {
    let repo = repo_with("Zed: {}\nalice: {}\n");
    let (code, stdout, _) = run_in(repo.path(), &[]);
    assert_eq!(code, 1);
    assert!(stdout.contains("Current order:\n  Zed\n  alice\n"));
    assert!(stdout.contains("Expected order:\n  alice\n  Zed\n"));

    let repo = repo_with("alice: {}\nBob: {}\n");
    let (code, _, _) = run_in(repo.path(), &[]);
    assert_eq!(code, 0);
}

#[test]
fn repeated_runs_are_identical() {
    let repo = repo_with("dave: {}\nCarol: {}\nbob: {}\n");
    let first = run_in(repo.path(), &[]);
    let second = run_in(repo.path(), &[]);
    assert_eq!(first, second);
}

#[test]
fn non_ascii_usernames_are_printed() {
    let repo = repo_with("zoë: {}\nÖztürk: {}\nölçer: {}\n");
    let (code, stdout, _) = run_in(repo.path(), &[]);
    assert_eq!(code, 1);
    assert!(stdout.contains("  Öztürk\n"));
    assert!(stdout.contains("Position 1: got 'Öztürk', expected 'ölçer'"));
}

#[test]
fn runs_from_nested_directory() {
    let repo = repo_with("bob: {}\nalice: {}\n");
    let scripts = repo.path().join("scripts");
    fs::create_dir(&scripts).unwrap();
    let (code, stdout, _) = run_in(&scripts, &[]);
    assert_eq!(code, 1);
    assert!(stdout.starts_with("authors.yaml is not sorted"));
}

#[test]
fn missing_registry_fails() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    let (code, stdout, stderr) = run_in(dir.path(), &[]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("authors.yaml"));
}

#[test]
fn malformed_registry_fails() {
    let repo = repo_with("alice: [unclosed\n");
    let (code, stdout, stderr) = run_in(repo.path(), &[]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("failed to parse"));
}

#[test]
fn json_output_and_registry_override() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::create_dir(dir.path().join("meta")).unwrap();
    fs::write(dir.path().join("meta/people.yaml"), "bob: {}\nalice: {}\n").unwrap();

    let (code, stdout, _) = run_in(
        dir.path(),
        &["--registry", "meta/people.yaml", "--output", "json"],
    );
    assert_eq!(code, 1);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["status"], "unsorted");
    assert_eq!(v["expected"][0], "alice");
    assert_eq!(v["misplaced"].as_array().unwrap().len(), 2);
}

#[test]
fn config_file_selects_registry() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("authors-sorted.toml"), "registry = \"people.yaml\"\n").unwrap();
    fs::write(dir.path().join("people.yaml"), "alice: {}\nbob: {}\n").unwrap();
    let (code, stdout, _) = run_in(dir.path(), &[]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "people.yaml is sorted correctly\n");
}
