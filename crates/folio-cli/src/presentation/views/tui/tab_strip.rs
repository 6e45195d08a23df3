use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme;
use crate::presentation::formatters::display_width;
use crate::presentation::view_models::TabViewModel;

pub const CLOSE_GLYPH: &str = "✕";

/// Horizontal extent of one tab header, relative to the strip's left edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabCell {
    pub x: u16,
    pub width: u16,
    /// Column of the close glyph, when the tab has one
    pub close_x: Option<u16>,
}

/// Lay out tab headers left to right: ` label ✕ ` or ` label `
pub fn tab_cells(tabs: &[TabViewModel]) -> Vec<TabCell> {
    let mut x = 0u16;
    tabs.iter()
        .map(|tab| {
            let label_width = display_width(&tab.label) as u16;
            let (width, close_x) = if tab.closable {
                (label_width + 4, Some(x + label_width + 2))
            } else {
                (label_width + 2, None)
            };
            let cell = TabCell { x, width, close_x };
            x = x.saturating_add(width);
            cell
        })
        .collect()
}

pub struct TabStripView<'a> {
    tabs: &'a [TabViewModel],
}

impl<'a> TabStripView<'a> {
    pub fn new(tabs: &'a [TabViewModel]) -> Self {
        Self { tabs }
    }
}

impl Widget for TabStripView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(theme::TAB_BG));

        let mut spans = Vec::new();
        for tab in self.tabs {
            let style = if tab.active {
                Style::default()
                    .bg(theme::EDITOR_BG)
                    .fg(theme::WHITE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().bg(theme::TAB_BG).fg(theme::MUTED)
            };
            spans.push(Span::styled(format!(" {} ", tab.label), style));
            if tab.closable {
                spans.push(Span::styled(format!("{} ", CLOSE_GLYPH), style.fg(theme::MUTED)));
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
