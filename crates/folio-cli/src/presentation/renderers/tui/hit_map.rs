use folio_types::DocumentId;
use ratatui::layout::{Position, Rect};

use super::layout::ShellLayout;
use crate::presentation::view_models::ShellViewModel;
use crate::presentation::views::tui::document::quick_open_row;
use crate::presentation::views::tui::explorer::row_area;
use crate::presentation::views::tui::palette::result_area;
use crate::presentation::views::tui::tab_strip::tab_cells;
use crate::presentation::views::tui::title_bar::hint_area;

/// What a pointer press at some cell would activate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    TitleSearch,
    Explorer(DocumentId),
    Tab(DocumentId),
    CloseTab(DocumentId),
    QuickOpen(DocumentId),
    PaletteResult(usize),
    /// Inside the palette but not on a result
    PalettePanel,
    /// Anywhere outside the open palette
    PaletteBackdrop,
    Intro,
}

/// Clickable regions recorded while drawing a frame. Later regions sit on
/// top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    pub fn target_at(&self, x: u16, y: u16) -> Option<&HitTarget> {
        let position = Position::new(x, y);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| target)
    }

    /// Record every clickable region of `model` laid out as `layout`
    pub fn build(layout: &ShellLayout, model: &ShellViewModel) -> Self {
        let mut hits = Self::new();

        hits.push(hint_area(layout.title, &model.shortcut_hint), HitTarget::TitleSearch);

        if let (Some(area), Some(rows)) = (layout.explorer, &model.explorer) {
            for (index, row) in rows.iter().enumerate() {
                let Some(rect) = row_area(area, index) else {
                    break;
                };
                hits.push(rect, HitTarget::Explorer(row.id.clone()));
            }
        }

        for (tab, cell) in model.tabs.iter().zip(tab_cells(&model.tabs)) {
            let strip = layout.tabs;
            if cell.x >= strip.width {
                break;
            }
            let width = cell.width.min(strip.width - cell.x);
            hits.push(
                Rect::new(strip.x + cell.x, strip.y, width, strip.height),
                HitTarget::Tab(tab.id.clone()),
            );
            if let Some(close_x) = cell.close_x
                && close_x < strip.width
            {
                hits.push(
                    Rect::new(strip.x + close_x, strip.y, 1, strip.height),
                    HitTarget::CloseTab(tab.id.clone()),
                );
            }
        }

        if let Some(area) = layout.quick_open {
            for (index, link) in model.document.quick_open.iter().enumerate() {
                let Some(rect) = quick_open_row(area, index) else {
                    break;
                };
                hits.push(rect, HitTarget::QuickOpen(link.target.clone()));
            }
        }

        if let (Some(panel), Some(palette)) = (layout.palette, &model.palette) {
            hits.push(layout.frame, HitTarget::PaletteBackdrop);
            hits.push(panel, HitTarget::PalettePanel);
            for index in 0..palette.results.len() {
                let Some(rect) = result_area(panel, index) else {
                    break;
                };
                hits.push(rect, HitTarget::PaletteResult(index));
            }
        }

        if layout.intro.is_some() {
            hits.push(layout.frame, HitTarget::Intro);
        }

        hits
    }
}
