use folio_content::{ContentPack, ContentStore, Error, Payload, builtin};
use folio_types::{DocumentKind, Skin};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_json_pack_from_disk_replaces_builtin_content() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("content.json");

    let mut pack = builtin::classic();
    pack.profile.name = "Jane Doe".to_string();
    fs::write(&path, serde_json::to_string_pretty(&pack)?)?;

    let store = ContentStore::new(ContentPack::load_from(&path)?)?;
    let Payload::Readme(profile) = store.payload("README.md").unwrap() else {
        panic!("README.md must render the profile");
    };
    assert_eq!(profile.name, "Jane Doe");

    Ok(())
}

#[test]
fn test_toml_pack_from_disk_is_accepted() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("content.toml");

    let toml_src = r#"
[[documents]]
id = "index.md"
label = "index.md"
kind = "readme"

[[documents]]
id = "work.md"
label = "work.md"
kind = "projects"

[[documents]]
id = "papers.md"
label = "papers.md"
kind = "research"

[[documents]]
id = "jobs.md"
label = "jobs.md"
kind = "intern"

[profile]
name = "Jane Doe"
title = "Engineer"
location = "Osaka, Japan"

[research]
title = "Planning"

[intern]
schema = "summary"
title = "Internship"
approach = "iterate"
"#;
    fs::write(&path, toml_src)?;

    let store = ContentStore::new(ContentPack::load_from(&path)?)?;
    assert_eq!(store.home(), &"index.md");
    assert_eq!(store.entry("jobs.md").unwrap().kind, DocumentKind::Intern);
    assert!(matches!(store.payload("work.md"), Some(Payload::Projects(p)) if p.is_empty()));

    Ok(())
}

#[test]
fn test_unknown_extension_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("content.yaml");
    fs::write(&path, "documents: []").unwrap();

    let err = ContentPack::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
    assert!(err.to_string().contains("content.yaml"));
}

#[test]
fn test_malformed_json_reports_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("content.json");
    fs::write(&path, "{ \"documents\": ").unwrap();

    assert!(matches!(
        ContentPack::load_from(&path).unwrap_err(),
        Error::Json(_)
    ));
}

#[test]
fn test_store_converts_back_to_equivalent_pack() {
    let store = ContentStore::builtin(Skin::Sidebar).unwrap();
    assert_eq!(store.to_pack(), builtin::sidebar());
}
