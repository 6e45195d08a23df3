use folio_types::DocumentId;

use super::DocumentViewModel;

/// Everything one TUI frame shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellViewModel {
    pub title: String,
    pub shortcut_hint: String,
    /// None while the explorer is collapsed
    pub explorer: Option<Vec<ExplorerRowViewModel>>,
    pub tabs: Vec<TabViewModel>,
    pub document: DocumentViewModel,
    pub status_bar: Option<StatusBarViewModel>,
    pub palette: Option<PaletteViewModel>,
    pub intro: Option<IntroViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerRowViewModel {
    pub id: DocumentId,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabViewModel {
    pub id: DocumentId,
    pub label: String,
    pub active: bool,
    pub closable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarViewModel {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteViewModel {
    pub query: String,
    pub placeholder: String,
    pub results: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroViewModel {
    pub name: String,
    pub title: String,
    pub hint: String,
}
