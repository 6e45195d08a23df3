use folio_types::{DocumentId, DocumentKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryEntryViewModel {
    pub id: DocumentId,
    pub label: String,
    pub kind: DocumentKind,
    pub home: bool,
}

/// Output of `folio list` and `folio search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub entries: Vec<RegistryEntryViewModel>,
}
