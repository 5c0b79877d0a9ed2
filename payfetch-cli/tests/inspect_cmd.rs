use assert_cmd::Command;
use tempfile::TempDir;

fn write_ids(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("ids.txt");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn inspect_reports_identifier_counts() {
    let dir = TempDir::new().unwrap();
    let infile = write_ids(&dir, "# march batch\n111\n222\n111\n");

    let mut cmd = Command::cargo_bin("payfetch").unwrap();
    cmd.args(["inspect", infile.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("3 payment ids (2 unique)"));
}

#[test]
fn inspect_emits_json_when_requested() {
    let dir = TempDir::new().unwrap();
    let infile = write_ids(&dir, "111\n222\n");

    let mut cmd = Command::cargo_bin("payfetch").unwrap();
    cmd.args(["inspect", infile.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\"identifiers\":2"));
}

#[test]
fn inspect_fails_on_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");

    let mut cmd = Command::cargo_bin("payfetch").unwrap();
    cmd.args(["inspect", missing.to_str().unwrap()])
        .assert()
        .failure()
        .code(4); // RUNTIME_ERROR
}
