use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::theme;
use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().bg(theme::STATUS_BG).fg(theme::WHITE);
        buf.set_style(area, style);

        let left = format!(" {}", self.model.left.join(" • "));
        let right = format!("{} ", self.model.right.join("  "));

        Paragraph::new(Line::from(right).right_aligned()).render(area, buf);
        Paragraph::new(Line::from(left)).render(area, buf);
    }
}
