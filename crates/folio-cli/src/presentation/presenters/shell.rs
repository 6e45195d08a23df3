use folio_content::ContentStore;
use folio_engine::Shell;

use super::present_document;
use crate::presentation::view_models::{
    ExplorerRowViewModel, IntroViewModel, PaletteViewModel, ShellViewModel, StatusBarViewModel,
    TabViewModel,
};

const TITLE: &str = "VSCode Portfolio";
const PALETTE_PLACEHOLDER: &str = "Type to search files… (Enter to open)";

/// Frame decoration that comes from config rather than shell state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellChrome {
    pub show_status_bar: bool,
}

impl Default for ShellChrome {
    fn default() -> Self {
        Self {
            show_status_bar: true,
        }
    }
}

/// Label for the quick-open shortcut on the current platform
pub fn palette_shortcut_label() -> &'static str {
    if cfg!(target_os = "macos") {
        "⌘P / Ctrl+P"
    } else {
        "Ctrl+P"
    }
}

pub fn present_shell(shell: &Shell, store: &ContentStore, chrome: ShellChrome) -> ShellViewModel {
    let navigation = shell.navigation();
    let home = store.home();

    let active_entry = shell
        .active_entry()
        .unwrap_or_else(|| store.home_entry());

    let explorer = shell.sidebar_visible().then(|| {
        shell
            .registry()
            .iter()
            .map(|entry| ExplorerRowViewModel {
                id: entry.id.clone(),
                label: entry.label.clone(),
                active: navigation.is_active(entry.id.as_str()),
            })
            .collect()
    });

    let tabs = navigation
        .open_tabs()
        .iter()
        .map(|id| TabViewModel {
            id: id.clone(),
            label: shell
                .entry(id.as_str())
                .map(|entry| entry.label.clone())
                .unwrap_or_else(|| id.to_string()),
            active: navigation.is_active(id.as_str()),
            closable: id != home,
        })
        .collect();

    let status_bar = chrome.show_status_bar.then(|| StatusBarViewModel {
        left: vec!["Portfolio".to_string(), active_entry.label.clone()],
        right: vec![
            "Rust".to_string(),
            "UTF-8".to_string(),
            "LF".to_string(),
            store.profile().location.clone(),
        ],
    });

    let palette = navigation.palette_visible().then(|| PaletteViewModel {
        query: shell.palette().query().to_string(),
        placeholder: PALETTE_PLACEHOLDER.to_string(),
        results: shell
            .palette_results()
            .into_iter()
            .map(|entry| entry.label.clone())
            .collect(),
    });

    let intro = shell.intro_visible().then(|| {
        let profile = store.profile();
        IntroViewModel {
            name: profile.name.clone(),
            title: profile.title.clone(),
            hint: "Press any key to continue".to_string(),
        }
    });

    ShellViewModel {
        title: TITLE.to_string(),
        shortcut_hint: format!("{} to search", palette_shortcut_label()),
        explorer,
        tabs,
        document: present_document(store, active_entry),
        status_bar,
        palette,
        intro,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::{Action, ShellOptions};
    use folio_types::{DocumentId, Skin};
    use std::time::{Duration, Instant};

    fn shell_for(store: &ContentStore, options: ShellOptions) -> Shell {
        Shell::new(
            store.registry().to_vec(),
            store.home().clone(),
            options,
            Instant::now(),
        )
    }

    #[test]
    fn test_home_tab_is_not_closable() {
        let store = ContentStore::builtin(Skin::Classic).unwrap();
        let mut shell = shell_for(&store, ShellOptions::default());
        shell.apply(Action::OpenDocument(DocumentId::new("projects.md")));

        let vm = present_shell(&shell, &store, ShellChrome::default());
        let tabs: Vec<_> = vm
            .tabs
            .iter()
            .map(|t| (t.label.as_str(), t.active, t.closable))
            .collect();
        assert_eq!(
            tabs,
            vec![("README.md", false, false), ("projects.md", true, true)]
        );
        assert_eq!(vm.document.id, "projects.md");
    }

    #[test]
    fn test_status_bar_names_active_document() {
        let store = ContentStore::builtin(Skin::Classic).unwrap();
        let shell = shell_for(&store, ShellOptions::default());

        let vm = present_shell(&shell, &store, ShellChrome::default());
        let status = vm.status_bar.unwrap();
        assert_eq!(status.left, vec!["Portfolio", "README.md"]);
        assert_eq!(&status.right[..3], &["Rust", "UTF-8", "LF"]);

        let hidden = present_shell(
            &shell,
            &store,
            ShellChrome {
                show_status_bar: false,
            },
        );
        assert!(hidden.status_bar.is_none());
    }

    #[test]
    fn test_palette_lists_filtered_labels() {
        let store = ContentStore::builtin(Skin::Classic).unwrap();
        let mut shell = shell_for(&store, ShellOptions::default());
        assert!(
            present_shell(&shell, &store, ShellChrome::default())
                .palette
                .is_none()
        );

        shell.apply(Action::ShowPalette);
        shell.apply(Action::PaletteInput('i'));
        shell.apply(Action::PaletteInput('n'));

        let palette = present_shell(&shell, &store, ShellChrome::default())
            .palette
            .unwrap();
        assert_eq!(palette.query, "in");
        assert_eq!(palette.results, vec!["intern.md"]);
    }

    #[test]
    fn test_collapsed_sidebar_hides_explorer() {
        let store = ContentStore::builtin(Skin::Sidebar).unwrap();
        let mut shell = shell_for(
            &store,
            ShellOptions {
                collapsible_sidebar: true,
                intro_delay: Some(Duration::from_secs(2)),
            },
        );

        let vm = present_shell(&shell, &store, ShellChrome::default());
        assert_eq!(vm.explorer.as_ref().map(Vec::len), Some(4));
        assert_eq!(vm.intro.unwrap().name, store.profile().name);

        shell.apply(Action::ToggleSidebar);
        shell.apply(Action::DismissIntro);
        let vm = present_shell(&shell, &store, ShellChrome::default());
        assert!(vm.explorer.is_none());
        assert!(vm.intro.is_none());
    }
}
