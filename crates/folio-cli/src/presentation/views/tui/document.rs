use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};

use super::theme;
use crate::presentation::view_models::{
    BlockViewModel, DocumentViewModel, QuickOpenViewModel, SectionViewModel,
};

/// Flatten a document into styled lines. Embedded newlines become separate
/// lines; long lines are wrapped by the paragraph at render time.
pub fn document_lines(doc: &DocumentViewModel) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, section) in doc.sections.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        section_lines(section, &mut lines);
    }
    lines
}

fn section_lines(section: &SectionViewModel, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(Span::styled(
        format!("// {}", section.caption),
        theme::caption(),
    )));

    for block in &section.blocks {
        match block {
            BlockViewModel::Heading(text) => push_text(lines, "", text, theme::heading()),
            BlockViewModel::Subtitle(text) => {
                push_text(lines, "", text, Style::default().fg(theme::FUNCTION))
            }
            BlockViewModel::Caption(text) => push_text(lines, "", text, theme::caption()),
            BlockViewModel::Paragraph(text) => push_text(lines, "", text, Style::default()),
            BlockViewModel::Card(text) => {
                push_text(lines, "│ ", text, Style::default().fg(theme::TEXT))
            }
            BlockViewModel::Bullet(text) => push_text(lines, "• ", text, Style::default()),
            BlockViewModel::Tags(tags) => {
                let mut spans = Vec::new();
                for tag in tags {
                    if !spans.is_empty() {
                        spans.push(Span::raw(" "));
                    }
                    spans.push(Span::styled(
                        format!("[{}]", tag),
                        Style::default().fg(theme::STRING),
                    ));
                }
                lines.push(Line::from(spans));
            }
            BlockViewModel::Link { label, target } => {
                let mut spans = vec![Span::styled(label.clone(), theme::link())];
                if label != target.trim_start_matches("mailto:") {
                    spans.push(Span::styled(format!("  {}", target), theme::muted()));
                }
                lines.push(Line::from(spans));
            }
            BlockViewModel::Image { path, .. } => {
                lines.push(Line::from(Span::styled(
                    format!("[image: {}]", path),
                    theme::muted().add_modifier(Modifier::ITALIC),
                )));
            }
            BlockViewModel::Definition { term, detail } => {
                lines.push(Line::from(Span::styled(
                    term.clone(),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )));
                push_text(lines, "  ", detail, Style::default());
            }
        }
    }
}

fn push_text(lines: &mut Vec<Line<'static>>, prefix: &'static str, text: &str, style: Style) {
    for (index, part) in text.split('\n').enumerate() {
        let lead = if index == 0 || prefix.is_empty() || prefix == "│ " {
            prefix
        } else {
            "  "
        };
        lines.push(Line::from(vec![
            Span::styled(lead, theme::muted()),
            Span::styled(part.to_string(), style),
        ]));
    }
}

/// Scrollable body of the active document
pub struct DocumentView<'a> {
    doc: &'a DocumentViewModel,
    scroll: u16,
}

impl<'a> DocumentView<'a> {
    pub fn new(doc: &'a DocumentViewModel) -> Self {
        Self { doc, scroll: 0 }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }
}

impl Widget for DocumentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(document_lines(self.doc))
            .block(
                Block::default()
                    .style(theme::editor())
                    .padding(Padding::horizontal(2)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

/// README quick-start links, one per row, pinned above the document
pub struct QuickOpenView<'a> {
    links: &'a [QuickOpenViewModel],
}

impl<'a> QuickOpenView<'a> {
    pub fn new(links: &'a [QuickOpenViewModel]) -> Self {
        Self { links }
    }

    /// Rows the strip needs, including the separator below it
    pub fn height(links: &[QuickOpenViewModel]) -> u16 {
        if links.is_empty() {
            0
        } else {
            links.len() as u16 + 1
        }
    }
}

/// Clickable row of the `index`-th quick-start link
pub fn quick_open_row(area: Rect, index: usize) -> Option<Rect> {
    let offset = u16::try_from(index).ok()?;
    let y = area.y.checked_add(offset)?;
    (y < area.bottom()).then(|| Rect::new(area.x, y, area.width, 1))
}

impl Widget for QuickOpenView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .links
            .iter()
            .enumerate()
            .map(|(index, link)| {
                Line::from(vec![
                    Span::styled(format!("[{}] ", index + 1), theme::muted()),
                    Span::styled(link.label.as_str(), theme::link()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .style(theme::editor())
                    .padding(Padding::horizontal(2)),
            )
            .render(area, buf);
    }
}
