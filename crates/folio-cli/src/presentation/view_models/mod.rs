pub mod document;
pub mod registry;
pub mod shell;

pub use document::{BlockViewModel, DocumentViewModel, QuickOpenViewModel, SectionViewModel};
pub use registry::{RegistryEntryViewModel, RegistryViewModel};
pub use shell::{
    ExplorerRowViewModel, IntroViewModel, PaletteViewModel, ShellViewModel, StatusBarViewModel,
    TabViewModel,
};
