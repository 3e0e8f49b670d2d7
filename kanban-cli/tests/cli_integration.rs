//! End-to-end tests for the `kanban` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `kanban` command run from an empty directory, so no config is discovered
fn kanban(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kanban").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("KANBAN_GENERATOR__MIN_TASKS");
    cmd
}

fn demo_board_json(dir: &TempDir) -> std::path::PathBuf {
    let output = kanban(dir)
        .args(["--format", "json", "demo"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let path = dir.path().join("board.json");
    fs::write(&path, output).unwrap();
    path
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    kanban(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("drop"));
}

#[test]
fn test_analyze_table() {
    let dir = TempDir::new().unwrap();
    kanban(&dir)
        .args(["analyze", "Build an e-commerce website with cart and checkout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("e-commerce"))
        .stdout(predicate::str::contains("cart"));
}

#[test]
fn test_analyze_json() {
    let dir = TempDir::new().unwrap();
    let output = kanban(&dir)
        .args(["--format", "json", "analyze", "a personal blog"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["projectType"], "blog");
    assert_eq!(value["complexity"], "low");
}

#[test]
fn test_generate_json_puts_tasks_in_first_column() {
    let dir = TempDir::new().unwrap();
    let output = kanban(&dir)
        .args(["--format", "json", "generate", ""])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    let tasks = value["tasks"].as_object().unwrap();
    assert_eq!(tasks.len(), 5);
    let first = value["columnOrder"][0].as_str().unwrap();
    assert_eq!(value["columns"][first]["taskIds"].as_array().unwrap().len(), 5);
}

#[test]
fn test_generate_table() {
    let dir = TempDir::new().unwrap();
    kanban(&dir)
        .args(["generate", "A dashboard with charts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"))
        .stdout(predicate::str::contains("Initial project setup for dashboard"));
}

#[test]
fn test_generate_respects_config_file() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".kanban");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[board]\ncolumn_titles = [\"Backlog\", \"Shipped\"]\n",
    )
    .unwrap();

    kanban(&dir)
        .args(["generate", "portfolio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backlog"))
        .stdout(predicate::str::contains("Shipped"));
}

#[test]
fn test_drop_moves_task() {
    let dir = TempDir::new().unwrap();
    let board = demo_board_json(&dir);

    let output = kanban(&dir)
        .args(["--format", "json", "drop", "--board"])
        .arg(&board)
        .args(["--from", "column-1:1", "--to", "column-2:0", "--item", "task-6"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["outcome"]["outcome"], "moved");
    assert_eq!(value["board"]["columns"]["column-2"]["taskIds"][0], "task-6");
}

#[test]
fn test_drop_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let board = demo_board_json(&dir);

    kanban(&dir)
        .args(["drop", "--board", "-", "--column", "--from", "0", "--to", "2", "--item", "column-1"])
        .write_stdin(fs::read_to_string(board).unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Columns reordered"));
}

#[test]
fn test_drop_without_destination_is_cancelled() {
    let dir = TempDir::new().unwrap();
    let board = demo_board_json(&dir);

    kanban(&dir)
        .args(["drop", "--board"])
        .arg(&board)
        .args(["--from", "column-1:0", "--item", "task-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing changed"));
}

#[test]
fn test_drop_mismatched_item_fails() {
    let dir = TempDir::new().unwrap();
    let board = demo_board_json(&dir);

    kanban(&dir)
        .args(["drop", "--board"])
        .arg(&board)
        .args(["--from", "column-1:0", "--to", "column-3:0", "--item", "task-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn test_drop_missing_board_file() {
    let dir = TempDir::new().unwrap();
    kanban(&dir)
        .args(["drop", "--board", "missing.json", "--from", "column-1:0", "--item", "task-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read board"));
}

#[test]
fn test_bad_location_is_usage_error() {
    let dir = TempDir::new().unwrap();
    kanban(&dir)
        .args(["drop", "--board", "-", "--from", "column-1", "--item", "task-1"])
        .assert()
        .code(2);
}

#[test]
fn test_drop_rejects_inconsistent_board() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{"tasks":{},"columns":{"column-1":{"id":"column-1","title":"To Do","taskIds":["task-9"]}},"columnOrder":["column-1"]}"#,
    )
    .unwrap();

    kanban(&dir)
        .args(["drop", "--board"])
        .arg(&path)
        .args(["--from", "column-1:0", "--item", "task-9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid board snapshot"));
}
