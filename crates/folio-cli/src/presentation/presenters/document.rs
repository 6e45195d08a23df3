use folio_content::{ContentStore, Payload};
use folio_types::{
    DocumentEntry, DocumentKind, InternRecord, InternTimeline, Internship, Profile, Project,
    Research, SkillSet,
};

use crate::presentation::view_models::{
    BlockViewModel, DocumentViewModel, QuickOpenViewModel, SectionViewModel,
};

/// Build the view model for a registered document
pub fn present_document(store: &ContentStore, entry: &DocumentEntry) -> DocumentViewModel {
    let payload = store.payload_for(entry.kind);

    let (quick_open, sections) = match payload {
        Payload::Readme(profile) => (quick_open(store), readme_sections(profile)),
        Payload::Projects(projects) => (Vec::new(), project_sections(projects)),
        Payload::Research(research) => (Vec::new(), research_sections(research)),
        Payload::Intern(record) => (Vec::new(), intern_sections(record)),
    };

    DocumentViewModel {
        id: entry.id.clone(),
        label: entry.label.clone(),
        kind: entry.kind,
        quick_open,
        sections,
    }
}

fn quick_open(store: &ContentStore) -> Vec<QuickOpenViewModel> {
    store
        .registry()
        .iter()
        .filter(|entry| entry.kind != DocumentKind::Readme)
        .map(|entry| QuickOpenViewModel {
            target: entry.id.clone(),
            label: format!("→ Open {}", entry.label),
        })
        .collect()
}

fn section(caption: &str, blocks: Vec<BlockViewModel>) -> SectionViewModel {
    SectionViewModel {
        caption: caption.to_string(),
        blocks,
    }
}

fn readme_sections(profile: &Profile) -> Vec<SectionViewModel> {
    let mut about = vec![
        BlockViewModel::Heading(profile.name.clone()),
        BlockViewModel::Subtitle(profile.title.clone()),
    ];
    if let Some(affiliation) = &profile.affiliation {
        about.push(BlockViewModel::Subtitle(affiliation.clone()));
    }
    about.push(BlockViewModel::Caption(profile.location.clone()));
    about.extend(profile.intro.iter().cloned().map(BlockViewModel::Card));

    if let Some(lab) = &profile.links.lab {
        about.push(link("SI Lab", lab));
    }
    if let Some(github) = &profile.links.github {
        about.push(link("GitHub Portfolio", github));
    }
    if let Some(email) = &profile.links.email {
        about.push(link(email, &format!("mailto:{}", email)));
    }

    let mut sections = vec![section("Profile", about)];

    if !profile.skills.is_empty() {
        let blocks = match &profile.skills {
            SkillSet::Flat(skills) => vec![BlockViewModel::Tags(
                skills.iter().map(|skill| skill.name.clone()).collect(),
            )],
            SkillSet::Grouped(groups) => groups
                .iter()
                .map(|group| BlockViewModel::Definition {
                    term: group.category.clone(),
                    detail: group.skills.join(", "),
                })
                .collect(),
        };
        sections.push(section("Skills", blocks));
    }

    if !profile.certifications.is_empty() {
        sections.push(section(
            "Certifications",
            profile
                .certifications
                .iter()
                .cloned()
                .map(BlockViewModel::Card)
                .collect(),
        ));
    }

    if !profile.hobbies.is_empty() {
        let mut blocks: Vec<BlockViewModel> = profile
            .hobbies
            .iter()
            .map(|hobby| BlockViewModel::Bullet(hobby.name.clone()))
            .collect();
        if let Some(hobby) = profile.hobbies.iter().find(|h| h.image.is_some())
            && let Some(image) = &hobby.image
        {
            blocks.push(BlockViewModel::Image {
                path: image.clone(),
                alt: hobby.name.clone(),
            });
        }
        sections.push(section("Hobbies", blocks));
    }

    sections
}

fn project_sections(projects: &[Project]) -> Vec<SectionViewModel> {
    projects.iter().map(project_section).collect()
}

fn project_section(project: &Project) -> SectionViewModel {
    let mut blocks = Vec::new();
    if !project.tags.is_empty() {
        blocks.push(BlockViewModel::Tags(project.tags.clone()));
    }
    blocks.push(BlockViewModel::Heading(project.title.clone()));
    if let Some(org) = &project.org {
        blocks.push(BlockViewModel::Subtitle(org.clone()));
    }
    if let Some(lead) = &project.lead {
        blocks.push(BlockViewModel::Paragraph(lead.clone()));
    }
    blocks.extend(project.paragraphs.iter().cloned().map(BlockViewModel::Paragraph));
    if let Some(image) = &project.image {
        blocks.push(BlockViewModel::Image {
            path: image.clone(),
            alt: format!("{} figure", project.title),
        });
    }
    if let Some(summary) = &project.summary {
        blocks.push(BlockViewModel::Card(summary.clone()));
    }
    if !project.highlights.is_empty() {
        blocks.push(BlockViewModel::Caption("こだわった点".to_string()));
        blocks.extend(project.highlights.iter().cloned().map(BlockViewModel::Bullet));
    }
    if !project.languages.is_empty() {
        blocks.push(BlockViewModel::Caption("Languages".to_string()));
        blocks.push(BlockViewModel::Tags(project.languages.clone()));
    }
    if !project.references.is_empty() {
        blocks.push(BlockViewModel::Caption("References".to_string()));
        blocks.extend(project.references.iter().cloned().map(BlockViewModel::Bullet));
    }

    section("Project", blocks)
}

fn research_sections(research: &Research) -> Vec<SectionViewModel> {
    let mut overview = vec![BlockViewModel::Heading(research.title.clone())];
    if let Some(summary) = &research.summary {
        overview.push(BlockViewModel::Card(summary.clone()));
    }
    let mut sections = vec![section("Research", overview)];

    if !research.approach.is_empty() {
        sections.push(section(
            "Approach",
            research
                .approach
                .iter()
                .map(|step| BlockViewModel::Definition {
                    term: step.title.clone(),
                    detail: step.desc.clone(),
                })
                .collect(),
        ));
    }

    if let Some(diagram) = &research.diagram {
        let mut blocks = vec![BlockViewModel::Image {
            path: diagram.path.clone(),
            alt: "Shared Plans diagram".to_string(),
        }];
        if let Some(caption) = &diagram.caption {
            blocks.push(BlockViewModel::Caption(caption.clone()));
        }
        sections.push(section("Diagram", blocks));
    }

    sections
}

fn intern_sections(record: &InternRecord) -> Vec<SectionViewModel> {
    match record {
        InternRecord::Summary(internship) => internship_summary_sections(internship),
        InternRecord::Timeline(timeline) => internship_timeline_sections(timeline),
    }
}

fn internship_summary_sections(internship: &Internship) -> Vec<SectionViewModel> {
    let mut work = vec![BlockViewModel::Heading(internship.title.clone())];
    work.extend(internship.summary.iter().cloned().map(BlockViewModel::Card));

    vec![
        section("Intern / Work", work),
        section(
            "Outcomes",
            internship
                .outcomes
                .iter()
                .cloned()
                .map(BlockViewModel::Card)
                .collect(),
        ),
        section(
            "Approach",
            vec![BlockViewModel::Paragraph(internship.approach.clone())],
        ),
    ]
}

fn internship_timeline_sections(timeline: &InternTimeline) -> Vec<SectionViewModel> {
    timeline
        .engagements
        .iter()
        .map(|engagement| {
            let mut blocks = vec![
                BlockViewModel::Heading(engagement.company.clone()),
                BlockViewModel::Subtitle(format!("{} · {}", engagement.role, engagement.period)),
            ];
            blocks.extend(engagement.duties.iter().cloned().map(BlockViewModel::Bullet));
            if !engagement.stack.is_empty() {
                blocks.push(BlockViewModel::Tags(engagement.stack.clone()));
            }
            section(&timeline.title, blocks)
        })
        .collect()
}

fn link(label: &str, target: &str) -> BlockViewModel {
    BlockViewModel::Link {
        label: label.to_string(),
        target: target.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Skin;

    fn present(skin: Skin, id: &str) -> DocumentViewModel {
        let store = ContentStore::builtin(skin).unwrap();
        let entry = store.entry(id).unwrap().clone();
        present_document(&store, &entry)
    }

    fn captions(vm: &DocumentViewModel) -> Vec<&str> {
        vm.sections.iter().map(|s| s.caption.as_str()).collect()
    }

    #[test]
    fn test_readme_links_to_other_documents() {
        let vm = present(Skin::Classic, "README.md");
        let targets: Vec<_> = vm.quick_open.iter().map(|q| q.target.as_str()).collect();
        assert_eq!(targets, vec!["projects.md", "research.md", "intern.md"]);
        assert_eq!(vm.quick_open[0].label, "→ Open projects.md");
        assert_eq!(
            captions(&vm),
            vec!["Profile", "Skills", "Certifications", "Hobbies"]
        );
    }

    #[test]
    fn test_readme_email_link_uses_mailto() {
        let vm = present(Skin::Classic, "README.md");
        let has_mailto = vm.sections[0].blocks.iter().any(|block| {
            matches!(block, BlockViewModel::Link { target, .. } if target.starts_with("mailto:"))
        });
        assert!(has_mailto);
    }

    #[test]
    fn test_flat_and_grouped_skills_render_differently() {
        let classic = present(Skin::Classic, "README.md");
        assert!(matches!(
            classic.sections[1].blocks[0],
            BlockViewModel::Tags(ref tags) if tags.contains(&"Python".to_string())
        ));

        let sidebar = present(Skin::Sidebar, "README.md");
        assert!(matches!(
            sidebar.sections[1].blocks[0],
            BlockViewModel::Definition { ref term, .. } if term == "Languages"
        ));
    }

    #[test]
    fn test_projects_render_one_section_each() {
        let vm = present(Skin::Classic, "projects.md");
        assert_eq!(vm.sections.len(), 2);
        assert!(vm.quick_open.is_empty());
        assert!(vm.sections[0]
            .blocks
            .contains(&BlockViewModel::Heading("ShigaChat".to_string())));
        assert!(vm.sections[1].blocks.iter().any(|b| matches!(b, BlockViewModel::Image { .. })));
    }

    #[test]
    fn test_research_has_approach_and_diagram() {
        let vm = present(Skin::Classic, "research.md");
        assert_eq!(captions(&vm), vec!["Research", "Approach", "Diagram"]);
        assert_eq!(vm.sections[1].blocks.len(), 3);
    }

    #[test]
    fn test_intern_schema_follows_skin() {
        let classic = present(Skin::Classic, "intern.md");
        assert_eq!(captions(&classic), vec!["Intern / Work", "Outcomes", "Approach"]);

        let sidebar = present(Skin::Sidebar, "intern.md");
        assert_eq!(captions(&sidebar), vec!["Intern / Work"]);
        assert!(sidebar.sections[0]
            .blocks
            .contains(&BlockViewModel::Subtitle("AI Engineer Intern · 2025 –".to_string())));
    }
}
