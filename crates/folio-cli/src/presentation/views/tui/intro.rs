use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::theme;
use crate::presentation::view_models::IntroViewModel;

pub fn intro_area(frame: Rect) -> Rect {
    let width = 48.min(frame.width);
    let height = 7.min(frame.height);
    Rect::new(
        frame.x + (frame.width - width) / 2,
        frame.y + (frame.height - height) / 2,
        width,
        height,
    )
}

/// Splash card shown on launch in skins that have one
pub struct IntroView<'a> {
    model: &'a IntroViewModel,
}

impl<'a> IntroView<'a> {
    pub fn new(model: &'a IntroViewModel) -> Self {
        Self { model }
    }
}

impl Widget for IntroView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(theme::editor());

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.model.name.as_str(),
                Style::default()
                    .fg(theme::WHITE)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(
                self.model.title.as_str(),
                Style::default().fg(theme::FUNCTION),
            ))
            .centered(),
            Line::default(),
            Line::from(Span::styled(self.model.hint.as_str(), theme::muted())).centered(),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
