use ratatui::layout::{Constraint, Layout, Rect};

use crate::presentation::view_models::ShellViewModel;
use crate::presentation::views::tui::QuickOpenView;
use crate::presentation::views::tui::intro::intro_area;
use crate::presentation::views::tui::palette::palette_area;

/// Screen regions for one frame. Drawing and hit testing both read this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub frame: Rect,
    pub title: Rect,
    pub explorer: Option<Rect>,
    pub tabs: Rect,
    pub quick_open: Option<Rect>,
    pub content: Rect,
    pub status: Option<Rect>,
    pub palette: Option<Rect>,
    pub intro: Option<Rect>,
}

impl ShellLayout {
    pub fn new(frame: Rect, model: &ShellViewModel, explorer_width: u16) -> Self {
        let status_height = u16::from(model.status_bar.is_some());
        let [title, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(status_height),
        ])
        .areas(frame);

        let (explorer, main) = if model.explorer.is_some() {
            let width = explorer_width.min(body.width / 2);
            let [explorer, main] =
                Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(body);
            (Some(explorer), main)
        } else {
            (None, body)
        };

        let [tabs, editor] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(main);

        let quick_open_height = QuickOpenView::height(&model.document.quick_open).min(editor.height);
        let [quick_open, content] = Layout::vertical([
            Constraint::Length(quick_open_height),
            Constraint::Min(0),
        ])
        .areas(editor);

        Self {
            frame,
            title,
            explorer,
            tabs,
            quick_open: (quick_open_height > 0).then_some(quick_open),
            content,
            status: model.status_bar.as_ref().map(|_| status),
            palette: model
                .palette
                .as_ref()
                .map(|palette| palette_area(frame, palette)),
            intro: model.intro.as_ref().map(|_| intro_area(frame)),
        }
    }
}
