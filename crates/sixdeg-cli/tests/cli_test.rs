use assert_cmd::Command;
use predicates::str::contains;
use std::io::Write;

const SOCIAL: &str = "\
Connor Elmore -- Alice
Alice -- Bob
Bob -- Carol
Carol -- Dave
Dave -- Kevin Bacon
Mallory
";

fn write_graph(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write graph");
    file
}

fn sixdeg() -> Command {
    Command::cargo_bin("sixdeg").expect("binary builds")
}

#[test]
fn separation_reports_degrees_and_path() {
    let graph = write_graph(SOCIAL);
    sixdeg()
        .args(["separation", "--from", "Connor Elmore"])
        .arg(graph.path())
        .assert()
        .success()
        .stdout(contains("degrees of separation: 5"))
        .stdout(contains(
            "Connor Elmore -> Alice -> Bob -> Carol -> Dave -> Kevin Bacon",
        ));
}

#[test]
fn separation_not_connected_exits_one() {
    let graph = write_graph(SOCIAL);
    sixdeg()
        .args(["separation", "--from", "Mallory"])
        .arg(graph.path())
        .assert()
        .code(1)
        .stdout(contains("not connected"));
}

#[test]
fn separation_json_output() {
    let graph = write_graph(SOCIAL);
    let assert = sixdeg()
        .args(["separation", "--from", "Alice", "--to", "Dave", "--json"])
        .arg(graph.path())
        .assert()
        .success();

    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(value["connected"], serde_json::json!(true));
    assert_eq!(value["degrees"], serde_json::json!(3));
    assert_eq!(value["path"][0], serde_json::json!("Alice"));
    assert_eq!(value["path"][3], serde_json::json!("Dave"));
}

#[test]
fn separation_json_not_connected_omits_path() {
    let graph = write_graph(SOCIAL);
    let assert = sixdeg()
        .args(["separation", "--from", "Mallory", "--json"])
        .arg(graph.path())
        .assert()
        .code(1);

    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(value["connected"], serde_json::json!(false));
    assert!(value.get("degrees").is_none());
    assert!(value.get("path").is_none());
}

#[test]
fn matrix_representation_agrees_with_list() {
    let graph = write_graph(SOCIAL);
    for extra in [None, Some("--matrix")] {
        let mut cmd = sixdeg();
        cmd.args(["separation", "--from", "Connor Elmore", "--json"]);
        if let Some(flag) = extra {
            cmd.arg(flag);
        }
        let assert = cmd.arg(graph.path()).assert().success();
        let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(value["degrees"], serde_json::json!(5));
    }
}

#[test]
fn cycle_accepts_a_triangle_walk() {
    let graph = write_graph("0 -- 1\n1 -- 2\n2 -- 0\n");
    sixdeg()
        .args(["cycle", "--walk", "0,1,2,0"])
        .arg(graph.path())
        .assert()
        .success()
        .stdout(contains("simple cycle"));
}

#[test]
fn cycle_rejects_an_open_walk() {
    let graph = write_graph("0 -- 1\n1 -- 2\n2 -- 0\n");
    sixdeg()
        .args(["cycle", "--walk", "0,1,2"])
        .arg(graph.path())
        .assert()
        .code(1)
        .stdout(contains("not a simple cycle"));
}

#[test]
fn cycle_json_over_matrix_representation() {
    let graph = write_graph("0 -- 1\n1 -- 2\n2 -- 0\n");
    let assert = sixdeg()
        .args(["cycle", "--walk", "0,1,0,1,0", "--matrix", "--json"])
        .arg(graph.path())
        .assert()
        .code(1);
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(value["simple_cycle"], serde_json::json!(false));
}

#[test]
fn reads_graph_from_stdin() {
    sixdeg()
        .args(["separation", "--from", "Alice", "--to", "Bob", "-"])
        .write_stdin("Alice -- Bob\n")
        .assert()
        .success()
        .stdout(contains("degrees of separation: 1"));
}

#[test]
fn malformed_edge_list_exits_two() {
    let graph = write_graph("Alice -- Bob -- Carol\n");
    sixdeg()
        .args(["separation", "--from", "Alice"])
        .arg(graph.path())
        .assert()
        .code(2)
        .stderr(contains("line 1"));
}

#[test]
fn missing_command_prints_usage() {
    sixdeg().assert().code(2).stderr(contains("USAGE"));
}
