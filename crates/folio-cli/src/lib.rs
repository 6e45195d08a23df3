// NOTE: folio architecture
//
// Content (folio-content) -> Shell state (folio-engine) -> Presentation (this crate)
//
// - Content is validated once at startup and never mutated.
// - All navigation changes go through folio_engine::Shell::apply. The TUI
//   renderer only translates key/mouse events into Actions and draws what
//   the Shell exposes.
// - Console commands (list/show/search) reuse the same presenters as the
//   TUI, so both surfaces show the same document text.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
