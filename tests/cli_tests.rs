//! Integration tests for the roadgraph CLI
//!
//! These tests run the roadgraph binary against graph documents written to
//! a temporary directory.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Get a Command for roadgraph
fn roadgraph() -> Command {
    cargo_bin_cmd!("roadgraph")
}

const TRAVERSAL: &str = r#"
nodes = ["a", "b", "c", "d", "e", "f", "g", "h"]
edges = [
    { from = "a", to = "b" },
    { from = "a", to = "g" },
    { from = "a", to = "d" },
    { from = "b", to = "e" },
    { from = "b", to = "f" },
    { from = "c", to = "f" },
    { from = "c", to = "h" },
    { from = "d", to = "f" },
    { from = "e", to = "g" },
]
"#;

const KRUSKAL: &str = r#"
nodes = ["a", "b", "c", "d", "e", "f", "g"]
edges = [
    { from = "a", to = "d", cost = 5 },
    { from = "a", to = "b", cost = 7 },
    { from = "b", to = "c", cost = 8 },
    { from = "b", to = "d", cost = 9 },
    { from = "b", to = "e", cost = 7 },
    { from = "c", to = "e", cost = 5 },
    { from = "d", to = "e", cost = 15 },
    { from = "d", to = "f", cost = 6 },
    { from = "f", to = "e", cost = 8 },
    { from = "e", to = "g", cost = 9 },
    { from = "f", to = "g", cost = 11 },
]
"#;

const DIRECTED: &str = r#"
directed = true
nodes = ["a", "b", "c", "d"]
edges = [
    { from = "a", to = "b", cost = 3 },
    { from = "b", to = "c", cost = 4 },
    { from = "a", to = "c", cost = 10 },
]
"#;

const COMPONENTS: &str = r#"
nodes = ["c", "a", "b", "d", "e", "f"]
edges = [
    { from = "a", to = "b" },
    { from = "b", to = "c" },
    { from = "d", to = "e" },
]
"#;

fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Help, version and banner
// ============================================================================

#[test]
fn test_help_lists_commands() {
    roadgraph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: roadgraph"))
        .stdout(predicate::str::contains("dfs"))
        .stdout(predicate::str::contains("partitions"))
        .stdout(predicate::str::contains("roads"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    roadgraph()
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "roadgraph {}",
            env!("CARGO_PKG_VERSION")
        )));
}

// ============================================================================
// Traversals
// ============================================================================

#[test]
fn test_dfs_order() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", TRAVERSAL);

    roadgraph()
        .arg("dfs")
        .arg(&graph)
        .args(["--start", "a"])
        .assert()
        .success()
        .stdout("a b e g f c h d\n");
}

#[test]
fn test_bfs_order() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", TRAVERSAL);

    roadgraph()
        .arg("bfs")
        .arg(&graph)
        .args(["--start", "a"])
        .assert()
        .success()
        .stdout("a b d g e f c h\n");
}

#[test]
fn test_zigzag_matches_bfs() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", TRAVERSAL);

    roadgraph()
        .arg("zigzag")
        .arg(&graph)
        .args(["-s", "a"])
        .assert()
        .success()
        .stdout("a b d g e f c h\n");
}

#[test]
fn test_dfs_records_format() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", TRAVERSAL);

    let output = roadgraph()
        .arg("dfs")
        .arg(&graph)
        .args(["--start", "a", "--format", "records"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        "H roadgraph=1 records=1 mode=dfs start=a visited=8"
    );
    assert_eq!(lines[1], "N a");
    assert_eq!(lines[2], "N b");
    assert_eq!(lines.len(), 9);
}

#[test]
fn test_bfs_json_format() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", TRAVERSAL);

    let output = roadgraph()
        .arg("bfs")
        .arg(&graph)
        .args(["--start", "a", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mode"], "bfs");
    assert_eq!(json["start"], "a");
    assert_eq!(
        json["order"],
        serde_json::json!(["a", "b", "d", "g", "e", "f", "c", "h"])
    );
}

#[test]
fn test_traversal_missing_start_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", TRAVERSAL);

    roadgraph()
        .arg("dfs")
        .arg(&graph)
        .args(["--start", "zz"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: node zz not in graph"));
}

// ============================================================================
// Partitions and spanning trees
// ============================================================================

#[test]
fn test_partitions_human() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", COMPONENTS);

    roadgraph()
        .arg("partitions")
        .arg(&graph)
        .assert()
        .success()
        .stdout("1: a b c\n2: d e\n3: f\n");
}

#[test]
fn test_partitions_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", COMPONENTS);

    let output = roadgraph()
        .arg("partitions")
        .arg(&graph)
        .args(["--format", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 3);
    assert_eq!(json["components"][1], serde_json::json!(["d", "e"]));
}

#[test]
fn test_partitions_rejects_directed() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", DIRECTED);

    roadgraph()
        .arg("partitions")
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn test_mst_total() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", KRUSKAL);

    roadgraph()
        .arg("mst")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("e - g (9)"))
        .stdout(predicate::str::contains("b - c").not())
        .stdout(predicate::str::ends_with("total: 39\n"));
}

#[test]
fn test_mst_records() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", KRUSKAL);

    roadgraph()
        .arg("mst")
        .arg(&graph)
        .args(["--format", "records"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H roadgraph=1 records=1 mode=mst nodes=7 edges=6 total=39\n",
        ))
        .stdout(predicate::str::contains("E a d 5\n"));
}

#[test]
fn test_mst_directed_json_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", DIRECTED);

    let output = roadgraph()
        .arg("mst")
        .arg(&graph)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unsupported");
    assert_eq!(json["error"]["code"], 2);
}

// ============================================================================
// Shortest paths
// ============================================================================

#[test]
fn test_shortest_distances() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", DIRECTED);

    roadgraph()
        .arg("shortest")
        .arg(&graph)
        .args(["--from", "a"])
        .assert()
        .success()
        .stdout("a: 0\nb: 3\nc: 7\nd: unreachable\n");
}

#[test]
fn test_shortest_path_to_target() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", DIRECTED);

    roadgraph()
        .arg("shortest")
        .arg(&graph)
        .args(["--from", "a", "--to", "c"])
        .assert()
        .success()
        .stdout("a -> b -> c (7)\n");
}

#[test]
fn test_shortest_json_unreachable_is_null() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.json", &json_directed());

    let output = roadgraph()
        .arg("shortest")
        .arg(&graph)
        .args(["--from", "a", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["from"], "a");
    assert_eq!(json["distances"]["c"], 7);
    assert!(json["distances"]["d"].is_null());
}

#[test]
fn test_shortest_unknown_target() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", DIRECTED);

    roadgraph()
        .arg("shortest")
        .arg(&graph)
        .args(["--from", "a", "--to", "nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node nowhere not in graph"));
}

fn json_directed() -> String {
    serde_json::json!({
        "directed": true,
        "nodes": ["a", "b", "c", "d"],
        "edges": [
            {"from": "a", "to": "b", "cost": 3},
            {"from": "b", "to": "c", "cost": 4},
            {"from": "a", "to": "c", "cost": 10},
        ],
    })
    .to_string()
}

// ============================================================================
// Dump and documents
// ============================================================================

#[test]
fn test_dump_human() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", DIRECTED);

    roadgraph()
        .arg("dump")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("directed graph, 4 nodes\n"))
        .stdout(predicate::str::contains("  a: [b(3), c(10)]"))
        .stdout(predicate::str::contains("  d: []"));
}

#[test]
fn test_dump_records_lists_edges() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", COMPONENTS);

    roadgraph()
        .arg("dump")
        .arg(&graph)
        .args(["--format", "records"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H roadgraph=1 records=1 mode=dump kind=undirected nodes=6 edges=3\n",
        ))
        .stdout(predicate::str::contains("E b c 1\n"));
}

#[test]
fn test_missing_document() {
    let dir = tempdir().unwrap();

    roadgraph()
        .arg("dump")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph document"));
}

#[test]
fn test_undeclared_edge_endpoint() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "graph.toml",
        "nodes = [\"a\"]\nedges = [{ from = \"a\", to = \"b\" }]\n",
    );

    roadgraph()
        .arg("dump")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node b not in graph"));
}

// ============================================================================
// Roads planner
// ============================================================================

#[test]
fn test_roads_inline() {
    roadgraph()
        .args(["roads", "--cities", "3"])
        .args(["--library-cost", "2", "--road-cost", "1"])
        .args(["--road", "1-2", "--road", "3-1", "--road", "2-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cities 1 2 3: 1 libraries, 2 roads, cost 4"))
        .stdout(predicate::str::ends_with("total: 4\n"));
}

#[test]
fn test_roads_from_file_json() {
    let dir = tempdir().unwrap();
    let doc = write_graph(
        dir.path(),
        "roads.toml",
        r#"
cities = 6
library_cost = 2
road_cost = 5
roads = [[1, 3], [3, 4], [2, 4], [1, 2], [2, 3], [5, 6]]
"#,
    );

    let output = roadgraph()
        .arg("roads")
        .arg("--file")
        .arg(&doc)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 12);
    assert_eq!(
        json["components"][0]["cities"],
        serde_json::json!([1, 2, 3, 4])
    );
    assert_eq!(json["components"][0]["strategy"], "library-per-city");
}

#[test]
fn test_roads_records() {
    roadgraph()
        .args(["roads", "--cities", "2"])
        .args(["--library-cost", "10", "--road-cost", "1"])
        .args(["--road", "1-2", "--format", "records"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H roadgraph=1 records=1 mode=roads cities=2 library_cost=10 road_cost=1 total=11\n",
        ))
        .stdout(predicate::str::contains("D 2 component=1\n"))
        .stdout(predicate::str::contains(
            "D component=1 strategy=one-library-and-roads libraries=1 roads=1 cost=11\n",
        ));
}

#[test]
fn test_roads_requires_costs() {
    roadgraph()
        .args(["roads", "--cities", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--library-cost"));
}

#[test]
fn test_roads_bad_road_json_envelope() {
    let output = roadgraph()
        .args(["--format", "json", "roads", "--road", "1to2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_uppercase_json_format_gets_envelope() {
    let output = roadgraph()
        .args(["--format", "JSON", "roads", "--road", "1to2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_quiet_suppresses_errors() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.toml", TRAVERSAL);

    roadgraph()
        .arg("bfs")
        .arg(&graph)
        .args(["--start", "zz", "--quiet"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
