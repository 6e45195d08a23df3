use std::fmt;

use crate::presentation::formatters::{Paint, display_width, rule, wrap};
use crate::presentation::view_models::{BlockViewModel, DocumentViewModel, SectionViewModel};

const INDENT: &str = "  ";

/// Plain-text rendering of a document for `folio show`
pub struct DocumentView<'a> {
    data: &'a DocumentViewModel,
    paint: Paint,
    width: usize,
}

impl<'a> DocumentView<'a> {
    pub fn new(data: &'a DocumentViewModel, paint: Paint, width: usize) -> Self {
        Self {
            data,
            paint,
            width: width.max(20),
        }
    }

    fn text_width(&self) -> usize {
        self.width - INDENT.len() * 2
    }

    fn render_quick_open(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.quick_open.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        for (index, link) in self.data.quick_open.iter().enumerate() {
            writeln!(
                f,
                "{}{} {}",
                INDENT,
                self.paint.dim(&format!("[{}]", index + 1)),
                self.paint.accent(&link.label)
            )?;
        }
        Ok(())
    }

    fn render_section(&self, f: &mut fmt::Formatter, section: &SectionViewModel) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.paint.dim(&section.caption.to_uppercase()))?;
        for block in &section.blocks {
            self.render_block(f, block)?;
        }
        Ok(())
    }

    fn render_block(&self, f: &mut fmt::Formatter, block: &BlockViewModel) -> fmt::Result {
        let paint = self.paint;
        match block {
            BlockViewModel::Heading(text) => {
                self.render_wrapped(f, INDENT, INDENT, text, |s| paint.heading(s))
            }
            BlockViewModel::Subtitle(text) | BlockViewModel::Paragraph(text) => {
                self.render_wrapped(f, INDENT, INDENT, text, str::to_string)
            }
            BlockViewModel::Caption(text) => {
                self.render_wrapped(f, INDENT, INDENT, text, |s| paint.dim(s))
            }
            BlockViewModel::Card(text) => {
                self.render_wrapped(f, "  │ ", "  │ ", text, str::to_string)
            }
            BlockViewModel::Bullet(text) => {
                self.render_wrapped(f, "  • ", "    ", text, str::to_string)
            }
            BlockViewModel::Tags(tags) => self.render_tags(f, tags),
            BlockViewModel::Link { label, target } => {
                if label == target.trim_start_matches("mailto:") {
                    return self.render_wrapped(f, INDENT, INDENT, label, |s| paint.link(s));
                }
                self.render_wrapped(f, INDENT, INDENT, label, str::to_string)?;
                self.render_wrapped(f, "    ", "    ", target, |s| paint.link(s))
            }
            BlockViewModel::Image { path, .. } => self.render_wrapped(
                f,
                INDENT,
                INDENT,
                &format!("[image: {}]", path),
                |s| paint.dim(s),
            ),
            BlockViewModel::Definition { term, detail } => {
                self.render_wrapped(f, INDENT, INDENT, term, |s| paint.strong(s))?;
                self.render_wrapped(f, "    ", "    ", detail, str::to_string)
            }
        }
    }

    /// Tags flow left to right and wrap between tags, never inside one
    fn render_tags(&self, f: &mut fmt::Formatter, tags: &[String]) -> fmt::Result {
        let mut line = Vec::new();
        let mut line_width = 0;

        for tag in tags {
            let label = format!("[{}]", tag);
            let tag_width = display_width(&label);
            let gap = usize::from(!line.is_empty());
            if !line.is_empty() && line_width + gap + tag_width > self.text_width() {
                writeln!(f, "{}{}", INDENT, line.join(" "))?;
                line.clear();
                line_width = 0;
            }
            line_width += usize::from(!line.is_empty()) + tag_width;
            line.push(self.paint.tag(&label));
        }

        if !line.is_empty() {
            writeln!(f, "{}{}", INDENT, line.join(" "))?;
        }
        Ok(())
    }

    fn render_wrapped(
        &self,
        f: &mut fmt::Formatter,
        first_prefix: &str,
        rest_prefix: &str,
        text: &str,
        style: impl Fn(&str) -> String,
    ) -> fmt::Result {
        for (index, line) in wrap(text, self.text_width()).iter().enumerate() {
            let prefix = if index == 0 { first_prefix } else { rest_prefix };
            writeln!(f, "{}{}", prefix, style(line))?;
        }
        Ok(())
    }
}

impl fmt::Display for DocumentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.paint.strong(&self.data.label))?;
        writeln!(f, "{}", self.paint.dim(&rule(self.width)))?;
        self.render_quick_open(f)?;
        for section in &self.data.sections {
            self.render_section(f, section)?;
        }
        Ok(())
    }
}
