// Views turn view models into output: Display impls for the console,
// ratatui widgets for the TUI. No state, no content lookups.

pub mod document;
pub mod registry;
pub mod tui;

pub use document::DocumentView;
pub use registry::RegistryView;
