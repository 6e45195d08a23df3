//! The editor shell as a single owned state object.
//!
//! The presentation layer turns gestures into [`Action`]s and feeds them to
//! [`Shell::apply`]; it reads everything it draws back through accessors.
//! Nothing else mutates navigation state.

use folio_types::{DocumentEntry, DocumentId};
use std::time::{Duration, Instant};

use crate::{Navigation, OneShot, Palette};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Explorer entry, quick-start link, or CLI argument
    OpenDocument(DocumentId),
    /// Close glyph on a tab header
    CloseTab(DocumentId),
    CloseActiveTab,
    /// Tab header click
    SelectTab(DocumentId),
    NextTab,
    PreviousTab,
    /// Global quick-open shortcut
    ShowPalette,
    /// Escape, or a click outside the palette
    DismissPalette,
    PaletteInput(char),
    PaletteBackspace,
    /// Enter: open the first filtered result
    ConfirmPalette,
    /// Click on the n-th filtered result
    PickPaletteResult(usize),
    ToggleSidebar,
    DismissIntro,
    Quit,
}

/// Skin-dependent features of the shell chrome
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOptions {
    pub collapsible_sidebar: bool,
    /// Show the intro overlay and auto-dismiss it after this delay
    pub intro_delay: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct Shell {
    registry: Vec<DocumentEntry>,
    navigation: Navigation,
    palette: Palette,
    collapsible_sidebar: bool,
    sidebar_visible: bool,
    intro: Option<OneShot>,
    should_quit: bool,
}

impl Shell {
    pub fn new(
        registry: Vec<DocumentEntry>,
        home: DocumentId,
        options: ShellOptions,
        now: Instant,
    ) -> Self {
        Self {
            registry,
            navigation: Navigation::new(home),
            palette: Palette::new(),
            collapsible_sidebar: options.collapsible_sidebar,
            sidebar_visible: true,
            intro: options.intro_delay.map(|delay| OneShot::after(delay, now)),
            should_quit: false,
        }
    }

    pub fn registry(&self) -> &[DocumentEntry] {
        &self.registry
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn active_entry(&self) -> Option<&DocumentEntry> {
        self.entry(self.navigation.active().as_str())
    }

    pub fn entry(&self, id: &str) -> Option<&DocumentEntry> {
        self.registry.iter().find(|entry| entry.id == id)
    }

    /// Current quick-open matches in registry order
    pub fn palette_results(&self) -> Vec<&DocumentEntry> {
        self.palette.results(&self.registry)
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    /// Collapse or restore the explorer without a user toggle (e.g. on resize)
    pub fn set_sidebar_visible(&mut self, visible: bool) {
        if self.collapsible_sidebar {
            self.sidebar_visible = visible;
        }
    }

    pub fn intro_visible(&self) -> bool {
        self.intro.as_ref().is_some_and(OneShot::is_pending)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Advance time-based state. Returns true when the intro overlay was
    /// dismissed by its timer on this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = self.intro.as_mut().is_some_and(|timer| timer.poll(now));
        if fired {
            log::debug!("intro overlay dismissed by timer");
        }
        fired
    }

    /// How long the event loop may sleep before [`Shell::tick`] has work
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.intro.as_ref().and_then(|timer| timer.remaining(now))
    }

    pub fn apply(&mut self, action: Action) {
        log::debug!("apply {:?}", action);

        match action {
            Action::OpenDocument(id) => self.open(&id),
            Action::CloseTab(id) => self.navigation.close_tab(id.as_str()),
            Action::CloseActiveTab => {
                let active = self.navigation.active().clone();
                self.navigation.close_tab(active.as_str());
            }
            Action::SelectTab(id) => {
                if !self.navigation.select_tab(id.as_str()) {
                    log::warn!("ignoring select of unopened tab {}", id);
                }
            }
            Action::NextTab => self.navigation.select_next_tab(),
            Action::PreviousTab => self.navigation.select_previous_tab(),
            Action::ShowPalette => self.set_palette_visible(true),
            Action::DismissPalette => self.set_palette_visible(false),
            Action::PaletteInput(c) => {
                if self.navigation.palette_visible() {
                    self.palette.push(c);
                }
            }
            Action::PaletteBackspace => {
                if self.navigation.palette_visible() {
                    self.palette.pop();
                }
            }
            Action::ConfirmPalette => self.pick(0),
            Action::PickPaletteResult(index) => self.pick(index),
            Action::ToggleSidebar => {
                if self.collapsible_sidebar {
                    self.sidebar_visible = !self.sidebar_visible;
                }
            }
            Action::DismissIntro => {
                if let Some(timer) = self.intro.as_mut() {
                    timer.cancel();
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn open(&mut self, id: &DocumentId) {
        if self.entry(id.as_str()).is_none() {
            log::warn!("ignoring open of unregistered document {}", id);
            return;
        }
        self.navigation.open_document(id);
    }

    fn set_palette_visible(&mut self, visible: bool) {
        if self.navigation.set_palette_visible(visible) {
            self.palette.reset();
        }
    }

    fn pick(&mut self, index: usize) {
        if !self.navigation.palette_visible() {
            return;
        }

        let Some(id) = self
            .palette_results()
            .get(index)
            .map(|entry| entry.id.clone())
        else {
            return;
        };

        self.navigation.open_document(&id);
        self.set_palette_visible(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::DocumentKind;

    fn shell(options: ShellOptions, now: Instant) -> Shell {
        let registry = vec![
            DocumentEntry::new("README.md", "README.md", DocumentKind::Readme),
            DocumentEntry::new("projects.md", "projects.md", DocumentKind::Projects),
            DocumentEntry::new("research.md", "research.md", DocumentKind::Research),
            DocumentEntry::new("intern.md", "intern.md", DocumentKind::Intern),
        ];
        Shell::new(registry, DocumentId::new("README.md"), options, now)
    }

    #[test]
    fn test_typing_is_ignored_while_palette_hidden() {
        let mut shell = shell(ShellOptions::default(), Instant::now());
        shell.apply(Action::PaletteInput('x'));
        assert_eq!(shell.palette().query(), "");
    }

    #[test]
    fn test_showing_palette_resets_query() {
        let mut shell = shell(ShellOptions::default(), Instant::now());
        shell.apply(Action::ShowPalette);
        shell.apply(Action::PaletteInput('r'));
        shell.apply(Action::DismissPalette);
        shell.apply(Action::ShowPalette);

        assert_eq!(shell.palette().query(), "");
    }

    #[test]
    fn test_reopening_visible_palette_keeps_query() {
        let mut shell = shell(ShellOptions::default(), Instant::now());
        shell.apply(Action::ShowPalette);
        shell.apply(Action::PaletteInput('r'));
        shell.apply(Action::ShowPalette);

        assert_eq!(shell.palette().query(), "r");
    }

    #[test]
    fn test_pick_opens_nth_result() {
        let mut shell = shell(ShellOptions::default(), Instant::now());
        shell.apply(Action::ShowPalette);
        shell.apply(Action::PickPaletteResult(2));

        assert_eq!(shell.navigation().active(), &"research.md");
        assert!(!shell.navigation().palette_visible());
    }

    #[test]
    fn test_unregistered_document_is_not_opened() {
        let mut shell = shell(ShellOptions::default(), Instant::now());
        shell.apply(Action::OpenDocument(DocumentId::new("blog.md")));

        assert_eq!(shell.navigation().open_tabs().len(), 1);
        assert_eq!(shell.navigation().active(), &"README.md");
    }

    #[test]
    fn test_sidebar_toggle_requires_collapsible_skin() {
        let mut fixed = shell(ShellOptions::default(), Instant::now());
        fixed.apply(Action::ToggleSidebar);
        assert!(fixed.sidebar_visible());

        let mut collapsible = shell(
            ShellOptions {
                collapsible_sidebar: true,
                intro_delay: None,
            },
            Instant::now(),
        );
        collapsible.apply(Action::ToggleSidebar);
        assert!(!collapsible.sidebar_visible());
    }

    #[test]
    fn test_intro_dismisses_on_timer() {
        let start = Instant::now();
        let mut shell = shell(
            ShellOptions {
                collapsible_sidebar: true,
                intro_delay: Some(Duration::from_millis(1800)),
            },
            start,
        );
        assert!(shell.intro_visible());
        assert!(!shell.tick(start + Duration::from_millis(100)));
        assert!(shell.tick(start + Duration::from_millis(1800)));
        assert!(!shell.intro_visible());
        assert!(!shell.tick(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_intro_dismissed_early_never_fires() {
        let start = Instant::now();
        let mut shell = shell(
            ShellOptions {
                collapsible_sidebar: false,
                intro_delay: Some(Duration::from_millis(1800)),
            },
            start,
        );
        shell.apply(Action::DismissIntro);

        assert!(!shell.intro_visible());
        assert!(!shell.tick(start + Duration::from_secs(5)));
        assert_eq!(shell.next_deadline(start), None);
    }

    #[test]
    fn test_close_active_tab() {
        let mut shell = shell(ShellOptions::default(), Instant::now());
        shell.apply(Action::OpenDocument(DocumentId::new("projects.md")));
        shell.apply(Action::CloseActiveTab);

        assert_eq!(shell.navigation().active(), &"README.md");
        assert_eq!(shell.navigation().open_tabs().len(), 1);
    }
}
