use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme;
use crate::presentation::formatters::display_width;

/// Window title row: traffic-light dots, app title, search hint
pub struct TitleBarView<'a> {
    title: &'a str,
    hint: &'a str,
}

impl<'a> TitleBarView<'a> {
    pub fn new(title: &'a str, hint: &'a str) -> Self {
        Self { title, hint }
    }
}

/// Clickable hint box at the right edge of the title bar
pub fn hint_area(area: Rect, hint: &str) -> Rect {
    let width = (display_width(hint) as u16 + 2).min(area.width);
    Rect::new(area.right() - width, area.y, width, area.height.min(1))
}

impl Widget for TitleBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(theme::TITLE_BG).fg(theme::TEXT));

        let dots = Line::from(vec![
            Span::raw(" "),
            Span::styled("●", Style::default().fg(theme::DOT_RED)),
            Span::raw(" "),
            Span::styled("●", Style::default().fg(theme::DOT_YELLOW)),
            Span::raw(" "),
            Span::styled("●", Style::default().fg(theme::DOT_GREEN)),
        ]);
        Paragraph::new(dots).render(area, buf);

        Paragraph::new(Line::from(self.title).centered()).render(area, buf);

        let hint = hint_area(area, self.hint);
        if hint.width > 10 {
            Paragraph::new(Line::from(format!(" {} ", self.hint)))
                .style(Style::default().bg(theme::SELECTION_BG).fg(theme::MUTED))
                .render(hint, buf);
        }
    }
}
