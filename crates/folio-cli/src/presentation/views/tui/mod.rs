//! Stateless ratatui widgets for the editor shell.
//!
//! Each view borrows its view model and only maps it to widgets. Geometry
//! helpers (`row_at`, `tab_cells`, `result_at`, ...) live next to the widget
//! that draws the rows, so hit testing and drawing agree on positions.

pub mod document;
pub mod explorer;
pub mod intro;
pub mod palette;
pub mod status_bar;
pub mod tab_strip;
pub mod theme;
pub mod title_bar;

pub use document::{DocumentView, QuickOpenView};
pub use explorer::ExplorerView;
pub use intro::IntroView;
pub use palette::PaletteView;
pub use status_bar::StatusBarView;
pub use tab_strip::TabStripView;
pub use title_bar::TitleBarView;
