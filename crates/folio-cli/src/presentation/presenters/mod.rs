pub mod document;
pub mod registry;
pub mod shell;

pub use document::present_document;
pub use registry::{present_registry, present_search};
pub use shell::{ShellChrome, palette_shortcut_label, present_shell};
