use std::fs;
use std::path::Path;

use predicates::str::contains;
use tempfile::TempDir;

fn create_source_tree(root: &Path) {
    fs::create_dir_all(root.join("sub")).expect("failed to create source dirs");
    fs::write(root.join("a.txt"), "alpha").expect("failed to write a.txt");
    fs::write(root.join("sub/b.txt"), "beta").expect("failed to write b.txt");
}

fn create_scenario_dir() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    create_source_tree(&dir.path().join("source"));
    dir
}

#[test]
fn checkout_with_flags_stages_and_writes_change_log() {
    let dir = create_scenario_dir();
    let workspace = dir.path().join("workspace");
    let changelog = dir.path().join("changelog.xml");

    assert_cmd::cargo::cargo_bin_cmd!("folder-scm")
        .arg("checkout")
        .arg("--source")
        .arg(dir.path().join("source"))
        .arg("--file")
        .arg("a.txt")
        .arg("--file")
        .arg("sub/b.txt")
        .arg("--workspace")
        .arg(&workspace)
        .arg("--changelog")
        .arg(&changelog)
        .assert()
        .success()
        .stdout(contains("Staging"))
        .stdout(contains("Checked out into"));

    assert_eq!(
        fs::read_to_string(workspace.join("a.txt")).expect("read staged file"),
        "alpha"
    );
    let xml = fs::read_to_string(&changelog).expect("read change log");
    assert!(xml.contains("<fileName>a.txt</fileName>"));
    assert!(xml.contains("<fileName>sub/b.txt</fileName>"));
}

#[test]
fn checkout_with_existing_workspace_reports_deletion() {
    let dir = create_scenario_dir();
    let workspace = dir.path().join("workspace");
    let changelog = dir.path().join("changelog.xml");
    fs::create_dir_all(&workspace).expect("failed to create workspace");
    fs::write(workspace.join("stale.txt"), "stale").expect("failed to write stale file");

    assert_cmd::cargo::cargo_bin_cmd!("folder-scm")
        .arg("checkout")
        .arg("--source")
        .arg(dir.path().join("source"))
        .arg("--workspace")
        .arg(&workspace)
        .arg("--changelog")
        .arg(&changelog)
        .assert()
        .success()
        .stdout(contains("Deleting existing workspace"));

    assert!(!workspace.join("stale.txt").exists());
}

#[test]
fn checkout_quiet_suppresses_progress() {
    let dir = create_scenario_dir();

    assert_cmd::cargo::cargo_bin_cmd!("folder-scm")
        .arg("checkout")
        .arg("--source")
        .arg(dir.path().join("source"))
        .arg("--workspace")
        .arg(dir.path().join("workspace"))
        .arg("--changelog")
        .arg(dir.path().join("changelog.xml"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn checkout_with_scenario_file() {
    let dir = create_scenario_dir();
    let scenario = dir.path().join("scenario.toml");
    fs::write(
        &scenario,
        format!(
            "source-dir = '{}'\nchangelog-files = [\"a.txt\"]\n",
            dir.path().join("source").display()
        ),
    )
    .expect("failed to write scenario");

    let changelog = dir.path().join("changelog.xml");

    assert_cmd::cargo::cargo_bin_cmd!("folder-scm")
        .arg("checkout")
        .arg("--scenario")
        .arg(&scenario)
        .arg("--workspace")
        .arg(dir.path().join("workspace"))
        .arg("--changelog")
        .arg(&changelog)
        .assert()
        .success();

    let xml = fs::read_to_string(&changelog).expect("read change log");
    assert_eq!(xml.matches("<file>").count(), 1);
    assert!(xml.contains("<fileName>a.txt</fileName>"));
}

#[test]
fn checkout_with_missing_source_fails() {
    let dir = TempDir::new().expect("failed to create temp dir");

    assert_cmd::cargo::cargo_bin_cmd!("folder-scm")
        .arg("checkout")
        .arg("--source")
        .arg(dir.path().join("never-created"))
        .arg("--workspace")
        .arg(dir.path().join("workspace"))
        .arg("--changelog")
        .arg(dir.path().join("changelog.xml"))
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}

#[test]
fn checkout_without_source_or_scenario_fails() {
    let dir = TempDir::new().expect("failed to create temp dir");

    assert_cmd::cargo::cargo_bin_cmd!("folder-scm")
        .arg("checkout")
        .arg("--workspace")
        .arg(dir.path().join("workspace"))
        .arg("--changelog")
        .arg(dir.path().join("changelog.xml"))
        .assert()
        .failure();
}

#[test]
fn checkout_with_bad_scenario_file_fails() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let scenario = dir.path().join("scenario.toml");
    fs::write(&scenario, "not valid toml [").expect("failed to write scenario");

    assert_cmd::cargo::cargo_bin_cmd!("folder-scm")
        .arg("checkout")
        .arg("--scenario")
        .arg(&scenario)
        .arg("--workspace")
        .arg(dir.path().join("workspace"))
        .arg("--changelog")
        .arg(dir.path().join("changelog.xml"))
        .assert()
        .failure()
        .stderr(contains("failed to parse scenario file"));
}
