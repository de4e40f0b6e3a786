// tests/integration/end_to_end.rs
use predicates::prelude::*;
use std::fs;

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, bin};

fn sample_workspace() -> TempWorkspace {
    let ws = TempWorkspace::new();
    ws.create_file(
        "README.md",
        "# Project\n![logo](img/logo.png)\n\nSee ![a](1.png) and ![b](2.png).\n",
    );
    ws.create_file("docs/plain.md", "no images, just a [link](https://example.com)\n");
    ws.create_file("docs/guide/deep.md", "![](diagram.svg)\n");
    ws.create_file("notes.txt", "![ignored](x.png)\n");
    ws
}

#[test]
fn converts_nested_markdown_files() {
    let ws = sample_workspace();

    bin()
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting conversion in directory: "))
        .stdout(predicate::str::contains("Found 3 markdown file(s)"))
        .stdout(predicate::str::contains("Processing: README.md\n  ✓ Converted 3 image(s)"))
        .stdout(predicate::str::contains("  - No images found"))
        .stdout(predicate::str::contains("  ✓ Converted 1 image(s)"))
        .stdout(predicate::str::contains("Files modified: 2"))
        .stdout(predicate::str::contains("Total images converted: 4"));

    assert_eq!(
        ws.read("README.md"),
        "# Project\n<img src=\"img/logo.png\" alt=\"logo\">\n\nSee <img src=\"1.png\" alt=\"a\"> and <img src=\"2.png\" alt=\"b\">.\n"
    );
    assert_eq!(ws.read("docs/guide/deep.md"), "<img src=\"diagram.svg\" alt=\"\">\n");
    assert_eq!(ws.read("notes.txt"), "![ignored](x.png)\n");
}

#[test]
fn unchanged_file_is_not_rewritten() {
    let ws = sample_workspace();
    let plain = ws.path().join("docs/plain.md");
    let before = fs::metadata(&plain).unwrap().modified().unwrap();

    bin().arg(ws.path()).assert().success();

    let after = fs::metadata(&plain).unwrap().modified().unwrap();
    assert_eq!(before, after);
    assert_eq!(
        ws.read("docs/plain.md"),
        "no images, just a [link](https://example.com)\n"
    );
}

#[test]
fn second_run_is_a_noop() {
    let ws = sample_workspace();

    bin().arg(ws.path()).assert().success();
    let converted = ws.read("README.md");

    bin()
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files modified: 0"))
        .stdout(predicate::str::contains("Total images converted: 0"));

    assert_eq!(ws.read("README.md"), converted);
}

#[test]
fn unreadable_file_does_not_abort_the_run() {
    let ws = TempWorkspace::new();
    ws.create_file("a_broken.md", b"![a](b)\n\xff\xfe\n".as_slice());
    ws.create_file("b_fine.md", "![a](b)\n");

    bin()
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ Error processing file:"))
        .stdout(predicate::str::contains("Files modified: 1"))
        .stdout(predicate::str::contains("Total images converted: 1"));

    assert_eq!(
        fs::read(ws.path().join("a_broken.md")).unwrap(),
        b"![a](b)\n\xff\xfe\n"
    );
    assert_eq!(ws.read("b_fine.md"), "<img src=\"b\" alt=\"a\">\n");
}

#[test]
fn runs_in_current_directory_by_default() {
    let ws = TempWorkspace::new();
    ws.create_file("index.md", "![x](y.png)\n");

    bin()
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total images converted: 1"));

    assert_eq!(ws.read("index.md"), "<img src=\"y.png\" alt=\"x\">\n");
}

#[test]
fn escape_attributes_flag() {
    let ws = TempWorkspace::new();
    ws.create_file("q.md", "![a \"quoted\" <alt>](x.png?a=1&b=2)\n");

    bin().arg("--escape-attributes").arg(ws.path()).assert().success();

    assert_eq!(
        ws.read("q.md"),
        "<img src=\"x.png?a=1&amp;b=2\" alt=\"a &quot;quoted&quot; &lt;alt&gt;\">\n"
    );
}

#[test]
fn skip_hidden_flag() {
    let ws = TempWorkspace::new();
    ws.create_file(".drafts/hidden.md", "![h](h.png)\n");
    ws.create_file("shown.md", "![s](s.png)\n");

    bin()
        .arg("--skip-hidden")
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 markdown file(s)"));

    assert_eq!(ws.read(".drafts/hidden.md"), "![h](h.png)\n");
    assert_eq!(ws.read("shown.md"), "<img src=\"s.png\" alt=\"s\">\n");
}
