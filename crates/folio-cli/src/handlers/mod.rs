pub mod config;
pub mod list;
pub mod open;
pub mod search;
pub mod show;

use anyhow::{Result, bail};
use folio_content::ContentStore;
use folio_types::DocumentEntry;

/// Registry entry for `id`, or an error naming the ids that do exist
pub(crate) fn require_entry<'a>(store: &'a ContentStore, id: &str) -> Result<&'a DocumentEntry> {
    match store.entry(id) {
        Some(entry) => Ok(entry),
        None => {
            let known: Vec<&str> = store.registry().iter().map(|e| e.id.as_str()).collect();
            bail!("Unknown document '{}' (known: {})", id, known.join(", "))
        }
    }
}
