use folio_types::{DocumentEntry, DocumentId, InternRecord, Profile, Project, Research};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

/// Serializable shape of a complete content source.
///
/// Any file with this shape can replace the built-in content. The home
/// document defaults to the first registry entry when `home` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<DocumentId>,
    pub documents: Vec<DocumentEntry>,
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub research: Research,
    pub intern: InternRecord,
}

impl ContentPack {
    /// Load a content pack, choosing the parser from the file extension
    pub fn load_from(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let pack = match extension.as_deref() {
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(Error::UnsupportedFormat(path.to_path_buf())),
        };

        log::info!(
            "Loaded content pack from {} ({} documents)",
            path.display(),
            pack.documents.len()
        );
        Ok(pack)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The declared home id, or the first registry entry
    pub fn home_id(&self) -> Option<&DocumentId> {
        self.home
            .as_ref()
            .or_else(|| self.documents.first().map(|entry| &entry.id))
    }
}
