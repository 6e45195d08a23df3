mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_config_path_points_into_data_dir() {
    let fixture = TestFixture::new();
    let expected = fixture.data_dir().join("config.toml");

    fixture
        .command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_config_init_then_refuses_overwrite() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Wrote "));
    assert!(fixture.data_dir().join("config.toml").exists());

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    fixture
        .command()
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_show_reflects_file() {
    let fixture = TestFixture::new();
    fixture.write_file("config.toml", "skin = \"sidebar\"\n[ui]\nexplorer_width = 32\n");

    let output = fixture
        .command()
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["skin"], "sidebar");
    assert_eq!(json["ui"]["explorer_width"], 32);
    assert_eq!(json["intro"]["delay_ms"], 1800);
}

#[test]
fn test_config_skin_selects_builtin_content() {
    let fixture = TestFixture::new();
    fixture.write_file("config.toml", "skin = \"sidebar\"\n");

    fixture
        .command()
        .args(["show", "intern.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AI Engineer Intern"));
}

#[test]
fn test_broken_config_names_the_file() {
    let fixture = TestFixture::new();
    fixture.write_file("config.toml", "skin = [\n");

    fixture
        .command()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}
