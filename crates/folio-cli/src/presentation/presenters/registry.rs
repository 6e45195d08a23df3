use folio_content::ContentStore;
use folio_engine::filter_documents;
use folio_types::DocumentEntry;

use crate::presentation::view_models::{RegistryEntryViewModel, RegistryViewModel};

pub fn present_registry(store: &ContentStore) -> RegistryViewModel {
    RegistryViewModel {
        query: None,
        entries: store
            .registry()
            .iter()
            .map(|entry| entry_view_model(store, entry))
            .collect(),
    }
}

/// Same matching as the quick-open palette
pub fn present_search(store: &ContentStore, query: &str) -> RegistryViewModel {
    RegistryViewModel {
        query: Some(query.to_string()),
        entries: filter_documents(store.registry(), query)
            .into_iter()
            .map(|entry| entry_view_model(store, entry))
            .collect(),
    }
}

fn entry_view_model(store: &ContentStore, entry: &DocumentEntry) -> RegistryEntryViewModel {
    RegistryEntryViewModel {
        id: entry.id.clone(),
        label: entry.label.clone(),
        kind: entry.kind,
        home: entry.id == *store.home(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Skin;

    #[test]
    fn test_registry_marks_home() {
        let store = ContentStore::builtin(Skin::Classic).unwrap();
        let vm = present_registry(&store);
        assert_eq!(vm.entries.len(), 4);
        assert!(vm.entries[0].home);
        assert!(vm.entries[1..].iter().all(|e| !e.home));
    }

    #[test]
    fn test_search_keeps_query_and_matches() {
        let store = ContentStore::builtin(Skin::Classic).unwrap();
        let vm = present_search(&store, "RE");
        assert_eq!(vm.query.as_deref(), Some("RE"));
        let labels: Vec<_> = vm.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["README.md", "research.md"]);
    }
}
