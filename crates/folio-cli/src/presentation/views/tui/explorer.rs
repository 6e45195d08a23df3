use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::theme;
use crate::presentation::view_models::ExplorerRowViewModel;

/// Rows above the first document entry ("EXPLORER", "▾ PORTFOLIO")
pub const EXPLORER_HEADER_ROWS: u16 = 2;

/// Clickable row of the `index`-th explorer entry, if it is on screen
pub fn row_area(area: Rect, index: usize) -> Option<Rect> {
    let offset = u16::try_from(index).ok()?;
    let y = area.y.checked_add(EXPLORER_HEADER_ROWS)?.checked_add(offset)?;
    (y < area.bottom()).then(|| Rect::new(area.x, y, area.width, 1))
}

pub struct ExplorerView<'a> {
    rows: &'a [ExplorerRowViewModel],
    tip: &'a str,
}

impl<'a> ExplorerView<'a> {
    pub fn new(rows: &'a [ExplorerRowViewModel], tip: &'a str) -> Self {
        Self { rows, tip }
    }
}

impl Widget for ExplorerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(theme::TITLE_BG))
            .style(Style::default().bg(theme::SIDEBAR_BG).fg(theme::TEXT));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(" EXPLORER", theme::muted())),
            Line::from(Span::styled(
                " ▾ PORTFOLIO",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        for row in self.rows {
            let style = if row.active {
                Style::default().bg(theme::SELECTION_BG).fg(theme::WHITE)
            } else {
                Style::default()
            };
            let width = usize::from(inner.width);
            let text = format!("   {:<width$}", row.label, width = width.saturating_sub(3));
            lines.push(Line::from(Span::styled(text, style)));
        }

        Paragraph::new(lines).render(inner, buf);

        if inner.height > EXPLORER_HEADER_ROWS + self.rows.len() as u16 + 1 {
            let tip = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
            Paragraph::new(Line::from(Span::styled(format!(" {}", self.tip), theme::muted())))
                .render(tip, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_start_below_headers() {
        let area = Rect::new(0, 1, 28, 6);
        assert_eq!(row_area(area, 0), Some(Rect::new(0, 3, 28, 1)));
        assert_eq!(row_area(area, 3), Some(Rect::new(0, 6, 28, 1)));
        assert_eq!(row_area(area, 4), None);
    }
}
