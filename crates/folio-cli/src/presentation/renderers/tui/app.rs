use crossterm::event::Event;
use folio_content::ContentStore;
use folio_engine::Shell;
use folio_types::DocumentId;
use ratatui::Frame;
use std::time::{Duration, Instant};

use super::hit_map::HitMap;
use super::input::{Intent, Scroll, map_key, map_mouse};
use super::layout::ShellLayout;
use crate::presentation::presenters::{ShellChrome, present_shell};
use crate::presentation::view_models::ShellViewModel;
use crate::presentation::views::tui::document::document_lines;
use crate::presentation::views::tui::{
    DocumentView, ExplorerView, IntroView, PaletteView, QuickOpenView, StatusBarView,
    TabStripView, TitleBarView,
};

/// Below this many columns a collapsible explorer hides itself
pub const NARROW_WIDTH: u16 = 80;

/// Renderer-side state around the shell: scroll offset and the hit map of
/// the last frame. Navigation state stays inside [`Shell`].
pub struct App<'a> {
    store: &'a ContentStore,
    shell: Shell,
    chrome: ShellChrome,
    explorer_width: u16,
    scroll: u16,
    max_scroll: u16,
    shown: DocumentId,
    hits: HitMap,
}

impl<'a> App<'a> {
    pub fn new(
        store: &'a ContentStore,
        shell: Shell,
        chrome: ShellChrome,
        explorer_width: u16,
    ) -> Self {
        let shown = shell.navigation().active().clone();
        Self {
            store,
            shell,
            chrome,
            explorer_width,
            scroll: 0,
            max_scroll: 0,
            shown,
            hits: HitMap::new(),
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn should_quit(&self) -> bool {
        self.shell.should_quit()
    }

    pub fn view_model(&self) -> ShellViewModel {
        present_shell(&self.shell, self.store, self.chrome)
    }

    /// Collapse the explorer on narrow terminals, restore it on wide ones
    pub fn fit_width(&mut self, width: u16) {
        self.shell.set_sidebar_visible(width >= NARROW_WIDTH);
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant, tick_rate: Duration) -> Duration {
        self.shell
            .next_deadline(now)
            .map_or(tick_rate, |deadline| deadline.min(tick_rate))
    }

    pub fn tick(&mut self, now: Instant) {
        self.shell.tick(now);
    }

    pub fn handle_event(&mut self, event: Event) {
        let intent = match event {
            Event::Key(key) => map_key(key, &self.view_model()),
            Event::Mouse(mouse) => map_mouse(mouse, &self.hits),
            Event::Resize(width, _) => {
                self.fit_width(width);
                None
            }
            _ => None,
        };

        if let Some(intent) = intent {
            self.apply(intent);
        }
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Apply(action) => {
                self.shell.apply(action);
                self.follow_active_document();
            }
            Intent::Scroll(scroll) => {
                self.scroll = match scroll {
                    Scroll::Up(lines) => self.scroll.saturating_sub(lines),
                    Scroll::Down(lines) => self.scroll.saturating_add(lines).min(self.max_scroll),
                    Scroll::Top => 0,
                    Scroll::Bottom => self.max_scroll,
                };
            }
        }
    }

    fn follow_active_document(&mut self) {
        let active = self.shell.navigation().active();
        if *active != self.shown {
            self.shown = active.clone();
            self.scroll = 0;
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let model = self.view_model();
        let layout = ShellLayout::new(frame.area(), &model, self.explorer_width);

        self.max_scroll = u16::try_from(document_lines(&model.document).len().saturating_sub(1))
            .unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(self.max_scroll);

        frame.render_widget(TitleBarView::new(&model.title, &model.shortcut_hint), layout.title);

        if let (Some(area), Some(rows)) = (layout.explorer, &model.explorer) {
            let tip = format!("Tip: {}", model.shortcut_hint);
            frame.render_widget(ExplorerView::new(rows, &tip), area);
        }

        frame.render_widget(TabStripView::new(&model.tabs), layout.tabs);

        if let Some(area) = layout.quick_open {
            frame.render_widget(QuickOpenView::new(&model.document.quick_open), area);
        }
        frame.render_widget(
            DocumentView::new(&model.document).scroll(self.scroll),
            layout.content,
        );

        if let (Some(area), Some(status)) = (layout.status, &model.status_bar) {
            frame.render_widget(StatusBarView::new(status), area);
        }

        if let (Some(area), Some(palette)) = (layout.palette, &model.palette) {
            frame.render_widget(PaletteView::new(palette), area);
        }

        if let (Some(area), Some(intro)) = (layout.intro, &model.intro) {
            frame.render_widget(IntroView::new(intro), area);
        }

        self.hits = HitMap::build(&layout, &model);
    }
}
