use folio_types::{InternRecord, Profile, Project, SkillSet};

#[test]
fn test_flat_skills_deserialize_as_flat() {
    let json = r#"{
        "name": "Test",
        "title": "Engineer",
        "location": "Kyoto",
        "skills": [{ "name": "Rust", "image": "/assets/skills/rust.svg" }, { "name": "Go" }]
    }"#;

    let profile: Profile = serde_json::from_str(json).unwrap();
    match profile.skills {
        SkillSet::Flat(skills) => {
            assert_eq!(skills.len(), 2);
            assert_eq!(skills[1].image, None);
        }
        SkillSet::Grouped(_) => panic!("expected flat skills"),
    }
}

#[test]
fn test_grouped_skills_deserialize_as_grouped() {
    let json = r#"{
        "name": "Test",
        "title": "Engineer",
        "location": "Kyoto",
        "skills": [{ "category": "Backend", "skills": ["FastAPI", "MySQL"] }]
    }"#;

    let profile: Profile = serde_json::from_str(json).unwrap();
    match profile.skills {
        SkillSet::Grouped(groups) => {
            assert_eq!(groups[0].category, "Backend");
            assert_eq!(groups[0].skills, vec!["FastAPI", "MySQL"]);
        }
        SkillSet::Flat(_) => panic!("expected grouped skills"),
    }
}

#[test]
fn test_missing_optional_profile_fields_default() {
    let json = r#"{ "name": "Test", "title": "Engineer", "location": "Kyoto" }"#;

    let profile: Profile = serde_json::from_str(json).unwrap();
    assert!(profile.intro.is_empty());
    assert!(profile.skills.is_empty());
    assert_eq!(profile.links.github, None);
    assert_eq!(profile.featured_hobby_image(), None);
}

#[test]
fn test_intern_record_is_tagged_by_schema() {
    let toml_src = r#"
schema = "timeline"
title = "Work"

[[engagements]]
company = "Acme"
role = "Intern"
period = "2024"
duties = ["prototyping"]
"#;

    let record: InternRecord = toml::from_str(toml_src).unwrap();
    assert_eq!(record.title(), "Work");
    let InternRecord::Timeline(timeline) = record else {
        panic!("expected timeline schema");
    };
    assert_eq!(timeline.engagements[0].company, "Acme");
    assert!(timeline.engagements[0].stack.is_empty());
}

#[test]
fn test_project_omits_absent_optionals_when_serialized() {
    let project = Project {
        title: "Diary Board".to_string(),
        tags: vec!["Team Project".to_string()],
        org: None,
        lead: None,
        paragraphs: vec![],
        highlights: vec![],
        summary: None,
        references: vec![],
        languages: vec![],
        image: None,
    };

    let value = serde_json::to_value(&project).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("org"));
    assert!(!object.contains_key("image"));
    assert!(object.contains_key("highlights"));
}
