mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_show_prints_document_text() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["show", "research.md"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("research.md\n"))
        .stdout(predicate::str::contains("APPROACH"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_show_unknown_document_lists_known_ids() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["show", "blog.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown document 'blog.md'"))
        .stderr(predicate::str::contains("README.md, projects.md"));
}

#[test]
fn test_show_json_carries_payload_kind() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["--format", "json", "show", "intern.md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["id"], "intern.md");
    assert_eq!(json["payload"]["kind"], "intern");
    assert_eq!(json["payload"]["content"]["schema"], "summary");
}

#[test]
fn test_sidebar_skin_switches_intern_schema() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["--skin", "sidebar", "--format", "json", "show", "intern.md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["payload"]["content"]["schema"], "timeline");
}

#[test]
fn test_search_uses_palette_matching() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["search", "  RE "])
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md"))
        .stdout(predicate::str::contains("research.md"))
        .stdout(predicate::str::contains("projects.md").not());
}

#[test]
fn test_search_json_lists_entries() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["--format", "json", "search", "proj"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["query"], "proj");
    assert_eq!(json["entries"].as_array().unwrap().len(), 1);
    assert_eq!(json["entries"][0]["id"], "projects.md");
}

#[test]
fn test_list_json_is_an_array() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["home"], true);
}

#[test]
fn test_open_requires_terminal() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("open")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn test_open_rejects_unknown_document_first() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["open", "blog.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown document 'blog.md'"));
}

#[test]
fn test_content_pack_replaces_builtin_content() {
    let fixture = TestFixture::new();
    let pack = r#"{
        "documents": [
            { "id": "home.md", "label": "home.md", "kind": "readme" },
            { "id": "work.md", "label": "work.md", "kind": "projects" },
            { "id": "lab.md", "label": "lab.md", "kind": "research" },
            { "id": "jobs.md", "label": "jobs.md", "kind": "intern" }
        ],
        "profile": { "name": "Ada", "title": "Engineer", "location": "London" },
        "research": { "title": "Engines" },
        "intern": { "schema": "summary", "title": "Analytical", "approach": "Notes" }
    }"#;
    let path = fixture.write_file("pack.json", pack);

    fixture
        .command()
        .arg("--content")
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("home.md"))
        .stdout(predicate::str::contains("README.md").not());
}

#[test]
fn test_invalid_content_pack_is_reported() {
    let fixture = TestFixture::new();
    let path = fixture.write_file("pack.toml", "documents = []\n");

    fixture
        .command()
        .arg("--content")
        .arg(&path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pack.toml"));
}
