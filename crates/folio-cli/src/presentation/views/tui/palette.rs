use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::theme;
use crate::presentation::view_models::PaletteViewModel;

const MAX_WIDTH: u16 = 64;
/// Input line and the rule under it
const RESULTS_OFFSET: u16 = 2;
const TIP: &str = "Enter to open · Esc to dismiss";

/// Where the palette panel sits inside the frame: centered, just below
/// the title bar
pub fn palette_area(frame: Rect, model: &PaletteViewModel) -> Rect {
    let width = MAX_WIDTH.min(frame.width.saturating_sub(4)).max(1);
    let result_rows = model.results.len().max(1) as u16;
    // borders + input + rule + results + tip
    let height = (2 + RESULTS_OFFSET + result_rows + 1).min(frame.height.saturating_sub(1));
    let x = frame.x + frame.width.saturating_sub(width) / 2;
    let y = frame.y + 1.min(frame.height);
    Rect::new(x, y, width, height)
}

/// Clickable row of the `index`-th result; the tip row and border are not
pub fn result_area(panel: Rect, index: usize) -> Option<Rect> {
    let offset = u16::try_from(index).ok()?;
    let y = (panel.y + 1 + RESULTS_OFFSET).checked_add(offset)?;
    (y + 2 < panel.bottom())
        .then(|| Rect::new(panel.x + 1, y, panel.width.saturating_sub(2), 1))
}

pub struct PaletteView<'a> {
    model: &'a PaletteViewModel,
}

impl<'a> PaletteView<'a> {
    pub fn new(model: &'a PaletteViewModel) -> Self {
        Self { model }
    }
}

impl Widget for PaletteView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::SIDEBAR_BG).fg(theme::TEXT));
        let inner = block.inner(area);
        block.render(area, buf);

        let input = if self.model.query.is_empty() {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(theme::ACCENT)),
                Span::styled(self.model.placeholder.as_str(), theme::muted()),
            ])
        } else {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(theme::ACCENT)),
                Span::raw(self.model.query.as_str()),
                Span::styled("▏", Style::default().fg(theme::ACCENT)),
            ])
        };

        let mut lines = vec![
            input,
            Line::from(Span::styled(
                "─".repeat(usize::from(inner.width)),
                Style::default().fg(theme::TITLE_BG),
            )),
        ];

        if self.model.results.is_empty() {
            lines.push(Line::from(Span::styled("No matches.", theme::muted())));
        }
        for (index, label) in self.model.results.iter().enumerate() {
            let style = if index == 0 {
                Style::default()
                    .bg(theme::SELECTION_BG)
                    .fg(theme::WHITE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let width = usize::from(inner.width);
            lines.push(Line::from(Span::styled(
                format!(" {:<width$}", label, width = width.saturating_sub(1)),
                style,
            )));
        }

        Paragraph::new(lines).render(inner, buf);

        if inner.height > 0 {
            let tip = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
            Paragraph::new(Line::from(Span::styled(TIP, theme::muted())).right_aligned())
                .render(tip, buf);
        }
    }
}
