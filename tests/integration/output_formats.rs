// tests/integration/output_formats.rs
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, bin};

fn run_json(ws: &TempWorkspace) -> Value {
    let output = bin()
        .args(["--format", "json"])
        .arg(ws.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn json_report_matches_text_counters() {
    let ws = TempWorkspace::new();
    ws.create_file("a.md", "![1](1.png) ![2](2.png)\n");
    ws.create_file("b/c.md", "nothing\n");

    let report = run_json(&ws);

    assert_eq!(report["summary"]["files_found"], 2);
    assert_eq!(report["summary"]["files_modified"], 1);
    assert_eq!(report["summary"]["files_failed"], 0);
    assert_eq!(report["summary"]["images_converted"], 2);

    let files = report["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["relative"], "a.md");
    assert_eq!(files[0]["status"], "converted");
    assert_eq!(files[0]["images"], 2);
    assert_eq!(files[1]["status"], "unchanged");
}

#[test]
fn json_report_for_empty_directory() {
    let ws = TempWorkspace::new();
    ws.create_file("readme.txt", "text\n");

    let report = run_json(&ws);

    assert_eq!(report["summary"]["files_found"], 0);
    assert!(report["files"].as_array().unwrap().is_empty());
    assert!(report["root"].as_str().is_some());
}

#[test]
fn json_missing_directory_fails() {
    let ws = TempWorkspace::new();
    bin()
        .args(["--format", "json"])
        .arg(ws.path().join("missing"))
        .assert()
        .code(1);
}
