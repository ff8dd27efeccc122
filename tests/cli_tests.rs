//! Integration tests for the mazegraph CLI
//!
//! These tests run the mazegraph binary and check output and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Get a Command for mazegraph
fn mazegraph() -> Command {
    let mut cmd = cargo_bin_cmd!("mazegraph");
    cmd.env_remove("MAZEGRAPH_CONFIG")
        .env_remove("MAZEGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_graph(dir: &Path, name: &str, text: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path.display().to_string()
}

const TRIANGLE: &str = "# triangle\nA B 1\nB C 2\nA C 4\n";

// ============================================================================
// Help, version and usage errors
// ============================================================================

#[test]
fn test_help_flag() {
    mazegraph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: mazegraph"))
        .stdout(predicate::str::contains("grid"))
        .stdout(predicate::str::contains("maze"))
        .stdout(predicate::str::contains("paths"))
        .stdout(predicate::str::contains("mst"));
}

#[test]
fn test_version_flag() {
    mazegraph()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mazegraph"));
}

#[test]
fn test_no_command_prints_banner() {
    mazegraph()
        .assert()
        .success()
        .stdout(predicate::str::contains("mazegraph --help"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    mazegraph()
        .args(["--format", "xml", "grid"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_command_json_usage_error() {
    mazegraph()
        .args(["--format", "json", "carve"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

#[test]
fn test_bad_flag_value_json_names_flag_and_value() {
    mazegraph()
        .args(["--format", "json", "traverse", "g.txt", "-s", "A", "--order", "sideways"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"invalid_value\""))
        .stderr(predicate::str::contains("--order"))
        .stderr(predicate::str::contains("sideways"));
}

#[test]
fn test_zero_rows_exit_code_2() {
    let dir = tempdir().unwrap();
    mazegraph()
        .current_dir(dir.path())
        .args(["grid", "--rows", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid rows: 0"));
}

// ============================================================================
// grid and maze
// ============================================================================

#[test]
fn test_grid_to_stdout() {
    let dir = tempdir().unwrap();
    mazegraph()
        .current_dir(dir.path())
        .args(["grid", "--rows", "2", "--cols", "2"])
        .assert()
        .success()
        .stdout(
            "graph grid1 {\n\
             { rank=same; r0c0, r0c1 }\n\
             { rank=same; r1c0, r1c1 }\n\
             r0c0 -- r0c1;\n\
             r0c0 -- r1c0;\n\
             r0c1 -- r1c1;\n\
             r1c0 -- r1c1;\n\
             }\n",
        );
}

#[test]
fn test_grid_json_counts() {
    let dir = tempdir().unwrap();
    let output = mazegraph()
        .current_dir(dir.path())
        .args(["--format", "json", "grid", "--rows", "3", "--cols", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 12);
    assert_eq!(json["edges"].as_array().unwrap().len(), 17);
    assert_eq!(json["total_weight"], 17);
}

#[test]
fn test_grid_writes_config_output_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("c.toml");
    fs::write(&config, "rows = 2\ncols = 3\ngrid_output = \"out/g.dot\"\n").unwrap();

    mazegraph()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("grid")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2x3 grid"));

    let dot = fs::read_to_string(dir.path().join("out/g.dot")).unwrap();
    assert!(dot.starts_with("graph grid1 {\n"));
    assert!(dot.contains("r1c1 -- r1c2;"));
}

#[test]
fn test_grid_default_config_file_sets_output() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("mazegraph.toml"),
        "rows = 2\ncols = 2\ngrid_name = \"g2\"\n",
    )
    .unwrap();

    mazegraph()
        .current_dir(dir.path())
        .arg("grid")
        .assert()
        .success()
        .stdout(predicate::str::contains("files/grid.dot"));

    let dot = fs::read_to_string(dir.path().join("files/grid.dot")).unwrap();
    assert!(dot.starts_with("graph g2 {\n"));
}

#[test]
fn test_grid_output_flag_beats_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("c.toml");
    fs::write(&config, "grid_output = \"out/g.dot\"\n").unwrap();

    mazegraph()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["grid", "--output", "mine.dot"])
        .assert()
        .success();

    assert!(dir.path().join("mine.dot").exists());
    assert!(!dir.path().join("out/g.dot").exists());
}

#[test]
fn test_maze_to_stdout_is_deterministic() {
    let dir = tempdir().unwrap();
    mazegraph()
        .current_dir(dir.path())
        .args(["maze", "--rows", "2", "--cols", "2", "--stdout"])
        .assert()
        .success()
        .stdout(
            "graph maze1 {\n\
             { rank=same; r0c0, r0c1 }\n\
             { rank=same; r1c0, r1c1 }\n\
             r0c0 -- r0c1;\n\
             r0c0 -- r1c0;\n\
             r1c0 -- r1c1;\n\
             }\n",
        );
}

#[test]
fn test_maze_writes_default_files() {
    let dir = tempdir().unwrap();
    mazegraph()
        .current_dir(dir.path())
        .arg("maze")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote grid to files/grid.dot"))
        .stdout(predicate::str::contains("(24 passages)"));

    let grid = fs::read_to_string(dir.path().join("files/grid.dot")).unwrap();
    let maze = fs::read_to_string(dir.path().join("files/maze.dot")).unwrap();
    assert!(grid.starts_with("graph grid1 {"));
    assert_eq!(grid.matches(" -- ").count(), 40);
    assert!(maze.starts_with("graph maze1 {"));
    assert_eq!(maze.matches(" -- ").count(), 24);
}

#[test]
fn test_maze_uses_config_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("mazegraph.toml"),
        "rows = 3\ncols = 4\nstart = \"r2c3\"\ngrid_output = \"out/g.dot\"\nmaze_output = \"out/m.dot\"\nmaze_name = \"labyrinth\"\n",
    )
    .unwrap();

    mazegraph()
        .current_dir(dir.path())
        .args(["--quiet", "maze"])
        .assert()
        .success()
        .stdout("");

    let maze = fs::read_to_string(dir.path().join("out/m.dot")).unwrap();
    assert!(maze.starts_with("graph labyrinth {"));
    assert_eq!(maze.matches(" -- ").count(), 11);
    assert!(dir.path().join("out/g.dot").exists());
}

#[test]
fn test_maze_flags_override_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "rows = 9\ncols = 9\n").unwrap();

    let output = mazegraph()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "maze", "--rows", "2", "--stdout"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 18);
    assert_eq!(json["edges"].as_array().unwrap().len(), 17);
}

#[test]
fn test_maze_unknown_start_exit_code_3() {
    let dir = tempdir().unwrap();
    mazegraph()
        .current_dir(dir.path())
        .args(["maze", "--start", "r9c9", "--stdout"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: r9c9"));
}

#[test]
fn test_missing_explicit_config_exit_code_3() {
    let dir = tempdir().unwrap();
    mazegraph()
        .current_dir(dir.path())
        .args(["--config", "absent.toml", "grid"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

// ============================================================================
// traverse, paths and mst
// ============================================================================

#[test]
fn test_traverse_dfs_order() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "tree.edges", "A B\nA C\nB D\nC E\n");

    mazegraph()
        .args(["traverse", &file, "--start", "A", "--order", "dfs"])
        .assert()
        .success()
        .stdout("B\nC\nE\nD\n");

    mazegraph()
        .args(["traverse", &file, "--start", "A"])
        .assert()
        .success()
        .stdout("B\nC\nD\nE\n");
}

#[test]
fn test_paths_triangle() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "triangle.edges", TRIANGLE);

    mazegraph()
        .args(["paths", &file, "--start", "A"])
        .assert()
        .success()
        .stdout("A\t0\nB\t1\nC\t3\n");
}

#[test]
fn test_paths_json() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "triangle.edges", TRIANGLE);

    let output = mazegraph()
        .args(["--format", "json", "paths", &file, "--start", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], "C");
    assert_eq!(json["costs"]["A"], 3);
    assert_eq!(json["costs"]["B"], 2);
}

#[test]
fn test_paths_unreachable_exit_code_3() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "split.edges", "A B 1\nX Y 1\n");

    mazegraph()
        .args(["paths", &file, "--start", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unreachable from A: X, Y"));
}

#[test]
fn test_mst_triangle() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "triangle.edges", TRIANGLE);
    let dot_path = dir.path().join("mst.dot");

    mazegraph()
        .args(["mst", &file, "--output"])
        .arg(&dot_path)
        .assert()
        .success()
        .stdout("A B 1\nB C 2\ntotal weight: 3\n");

    let dot = fs::read_to_string(&dot_path).unwrap();
    assert!(dot.contains("\"A\" -- \"B\" [label=1];"));
    assert!(!dot.contains("\"A\" -- \"C\""));
}

#[test]
fn test_mst_disconnected_json_error() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "split.edges", "A B 1\nC D 1\n");

    mazegraph()
        .args(["--format", "json", "mst", &file])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"disconnected\""))
        .stderr(predicate::str::contains("\"reached\": 2").or(predicate::str::contains("\"reached\":2")));
}

#[test]
fn test_parse_error_exit_code_3() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "bad.edges", "A B 1\nB C heavy\n");

    mazegraph()
        .args(["mst", &file])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("parse error on line 2"));
}

#[test]
fn test_missing_graph_file_exit_code_1() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.edges");

    mazegraph()
        .arg("paths")
        .arg(&missing)
        .args(["--start", "A"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}
