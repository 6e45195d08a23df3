use folio_types::DocumentEntry;

/// Documents whose label contains `query` as a case-insensitive substring,
/// in registry order. A blank query (after trimming) matches everything.
pub fn filter_documents<'a>(registry: &'a [DocumentEntry], query: &str) -> Vec<&'a DocumentEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return registry.iter().collect();
    }

    registry
        .iter()
        .filter(|entry| entry.label.to_lowercase().contains(&needle))
        .collect()
}

/// Quick-open input state. Visibility lives in [`crate::Navigation`];
/// the palette only owns what has been typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    query: String,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop(&mut self) {
        self.query.pop();
    }

    pub fn reset(&mut self) {
        self.query.clear();
    }

    pub fn results<'a>(&self, registry: &'a [DocumentEntry]) -> Vec<&'a DocumentEntry> {
        filter_documents(registry, &self.query)
    }
}
