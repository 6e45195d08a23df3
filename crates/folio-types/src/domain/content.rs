//! Structured payloads behind each document kind.
//!
//! These records are pure data. Optional fields are omitted from serialized
//! output so that content packs stay small and hand-editable.

use serde::{Deserialize, Serialize};

/// Everything the README document shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    pub location: String,
    #[serde(default)]
    pub links: ProfileLinks,
    #[serde(default)]
    pub intro: Vec<String>,
    #[serde(default)]
    pub hobbies: Vec<Hobby>,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl Profile {
    /// Image of the first hobby that has one; shown next to the hobby list
    pub fn featured_hobby_image(&self) -> Option<&str> {
        self.hobbies.iter().find_map(|h| h.image.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hobby {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

/// Skills are a flat icon list in the classic skin and grouped by category
/// in the sidebar skin. The two shapes are kept apart on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillSet {
    Flat(Vec<Skill>),
    Grouped(Vec<SkillGroup>),
}

impl Default for SkillSet {
    fn default() -> Self {
        SkillSet::Flat(Vec::new())
    }
}

impl SkillSet {
    pub fn is_empty(&self) -> bool {
        match self {
            SkillSet::Flat(skills) => skills.is_empty(),
            SkillSet::Grouped(groups) => groups.iter().all(|g| g.skills.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Research {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub approach: Vec<ApproachStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<Figure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproachStep {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Internship content. Each skin has its own schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "schema", rename_all = "lowercase")]
pub enum InternRecord {
    Summary(Internship),
    Timeline(InternTimeline),
}

impl InternRecord {
    pub fn title(&self) -> &str {
        match self {
            InternRecord::Summary(internship) => &internship.title,
            InternRecord::Timeline(timeline) => &timeline.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    pub title: String,
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    pub approach: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternTimeline {
    pub title: String,
    pub engagements: Vec<Engagement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub duties: Vec<String>,
    #[serde(default)]
    pub stack: Vec<String>,
}
