use folio_types::{
    DocumentEntry, DocumentId, DocumentKind, InternRecord, Profile, Project, Research, Skin,
};
use serde::Serialize;
use std::collections::HashSet;

use crate::{ContentPack, Error, Result, builtin};

/// Read-only view of the content behind one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum Payload<'a> {
    Readme(&'a Profile),
    Projects(&'a [Project]),
    Research(&'a Research),
    Intern(&'a InternRecord),
}

impl Payload<'_> {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Payload::Readme(_) => DocumentKind::Readme,
            Payload::Projects(_) => DocumentKind::Projects,
            Payload::Research(_) => DocumentKind::Research,
            Payload::Intern(_) => DocumentKind::Intern,
        }
    }
}

/// Immutable registry of navigable documents and their payloads.
///
/// Construction validates the registry: ids are unique, the home document
/// is registered, and each [`DocumentKind`] is rendered by exactly one entry.
/// After that every lookup for a registered id succeeds.
#[derive(Debug, Clone)]
pub struct ContentStore {
    home: DocumentId,
    home_index: usize,
    registry: Vec<DocumentEntry>,
    profile: Profile,
    projects: Vec<Project>,
    research: Research,
    intern: InternRecord,
}

impl ContentStore {
    pub fn new(pack: ContentPack) -> Result<Self> {
        let home = validate(&pack)?;
        let home_index = pack
            .documents
            .iter()
            .position(|entry| entry.id == home)
            .ok_or_else(|| Error::MissingHome(home.clone()))?;

        Ok(Self {
            home,
            home_index,
            registry: pack.documents,
            profile: pack.profile,
            projects: pack.projects,
            research: pack.research,
            intern: pack.intern,
        })
    }

    /// Store backed by the content compiled into the binary for `skin`
    pub fn builtin(skin: Skin) -> Result<Self> {
        Self::new(builtin::for_skin(skin))
    }

    pub fn home(&self) -> &DocumentId {
        &self.home
    }

    pub fn home_entry(&self) -> &DocumentEntry {
        &self.registry[self.home_index]
    }

    /// Registry entries in display order
    pub fn registry(&self) -> &[DocumentEntry] {
        &self.registry
    }

    pub fn entry(&self, id: &str) -> Option<&DocumentEntry> {
        self.registry.iter().find(|entry| entry.id == id)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn payload(&self, id: &str) -> Option<Payload<'_>> {
        self.entry(id).map(|entry| self.payload_for(entry.kind))
    }

    pub fn payload_for(&self, kind: DocumentKind) -> Payload<'_> {
        match kind {
            DocumentKind::Readme => Payload::Readme(&self.profile),
            DocumentKind::Projects => Payload::Projects(&self.projects),
            DocumentKind::Research => Payload::Research(&self.research),
            DocumentKind::Intern => Payload::Intern(&self.intern),
        }
    }

    /// Convert back into the serializable pack shape
    pub fn to_pack(&self) -> ContentPack {
        ContentPack {
            home: Some(self.home.clone()),
            documents: self.registry.clone(),
            profile: self.profile.clone(),
            projects: self.projects.clone(),
            research: self.research.clone(),
            intern: self.intern.clone(),
        }
    }
}

fn validate(pack: &ContentPack) -> Result<DocumentId> {
    let home = pack.home_id().cloned().ok_or(Error::EmptyRegistry)?;

    let mut seen_ids = HashSet::new();
    let mut seen_kinds = HashSet::new();
    for entry in &pack.documents {
        if !seen_ids.insert(entry.id.as_str()) {
            return Err(Error::DuplicateId(entry.id.clone()));
        }
        if !seen_kinds.insert(entry.kind) {
            return Err(Error::DuplicateKind(entry.kind));
        }
    }

    if !seen_ids.contains(home.as_str()) {
        return Err(Error::MissingHome(home));
    }

    if let Some(kind) = DocumentKind::ALL
        .into_iter()
        .find(|kind| !seen_kinds.contains(kind))
    {
        return Err(Error::MissingKind(kind));
    }

    Ok(home)
}
