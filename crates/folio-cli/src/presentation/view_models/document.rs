use folio_types::{DocumentId, DocumentKind};

/// A document flattened into captioned sections of simple blocks.
///
/// Both the console and the TUI render from this, so a document reads the
/// same on either surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentViewModel {
    pub id: DocumentId,
    pub label: String,
    pub kind: DocumentKind,
    /// Links to other documents; only the README has them
    pub quick_open: Vec<QuickOpenViewModel>,
    pub sections: Vec<SectionViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickOpenViewModel {
    pub target: DocumentId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionViewModel {
    pub caption: String,
    pub blocks: Vec<BlockViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockViewModel {
    Heading(String),
    Subtitle(String),
    /// Small dim label inside a section (e.g. the highlights header)
    Caption(String),
    Paragraph(String),
    /// Boxed item: intro lines, certifications, outcomes
    Card(String),
    Bullet(String),
    Tags(Vec<String>),
    Link { label: String, target: String },
    Image { path: String, alt: String },
    Definition { term: String, detail: String },
}
