//! Presentation layer
//!
//! - presenters: content + shell state -> view models (no styling)
//! - views: view models -> text (console) or ratatui widgets (tui)
//! - renderers: own the output surface (stdout, or the terminal event loop)

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
