use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Identifier of the document every shell starts with and can never fully close
pub const HOME_DOCUMENT: &str = "README.md";

/// Stable identifier of a navigable document (e.g. `"README.md"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a new DocumentId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DocumentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DocumentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// What a document shows. Rendering dispatches on this, never on the id string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Readme,
    Projects,
    Research,
    Intern,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Readme,
        DocumentKind::Projects,
        DocumentKind::Research,
        DocumentKind::Intern,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Readme => "readme",
            DocumentKind::Projects => "projects",
            DocumentKind::Research => "research",
            DocumentKind::Intern => "intern",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "readme" => Ok(DocumentKind::Readme),
            "projects" => Ok(DocumentKind::Projects),
            "research" => Ok(DocumentKind::Research),
            "intern" => Ok(DocumentKind::Intern),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

/// One row of the document registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub id: DocumentId,
    pub label: String,
    pub kind: DocumentKind,
}

impl DocumentEntry {
    pub fn new(id: impl Into<DocumentId>, label: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }
}
