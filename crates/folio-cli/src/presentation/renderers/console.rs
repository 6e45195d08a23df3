use anyhow::Result;
use folio_content::Payload;
use serde::Serialize;

use crate::config::Config;
use crate::presentation::formatters::Paint;
use crate::presentation::view_models::{DocumentViewModel, RegistryViewModel};
use crate::presentation::views::{DocumentView, RegistryView};
use crate::types::OutputFormat;

const DEFAULT_WIDTH: usize = 80;
const MAX_WIDTH: usize = 100;

/// Width used for wrapping console output
pub fn console_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| usize::from(w))
        .unwrap_or(DEFAULT_WIDTH)
        .min(MAX_WIDTH)
}

#[derive(Serialize)]
struct DocumentJson<'a> {
    id: &'a str,
    label: &'a str,
    payload: Payload<'a>,
}

/// stdout renderer for the non-interactive commands
pub struct ConsoleRenderer {
    format: OutputFormat,
    paint: Paint,
    width: usize,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            paint: Paint::detect(),
            width: console_width(),
        }
    }

    pub fn render_list(&self, model: &RegistryViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => print_json(&model.entries),
            OutputFormat::Plain => {
                print!("{}", RegistryView::new(model, self.paint));
                Ok(())
            }
        }
    }

    pub fn render_search(&self, model: &RegistryViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => print_json(model),
            OutputFormat::Plain => {
                print!("{}", RegistryView::new(model, self.paint));
                Ok(())
            }
        }
    }

    pub fn render_document(&self, model: &DocumentViewModel, payload: Payload<'_>) -> Result<()> {
        match self.format {
            OutputFormat::Json => print_json(&DocumentJson {
                id: model.id.as_str(),
                label: &model.label,
                payload,
            }),
            OutputFormat::Plain => {
                print!("{}", DocumentView::new(model, self.paint, self.width));
                Ok(())
            }
        }
    }

    pub fn render_config(&self, config: &Config) -> Result<()> {
        match self.format {
            OutputFormat::Json => print_json(config),
            OutputFormat::Plain => {
                print!("{}", toml::to_string_pretty(config)?);
                Ok(())
            }
        }
    }

    pub fn render_message(&self, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Json => print_json(&serde_json::json!({ "message": message })),
            OutputFormat::Plain => {
                println!("{}", message);
                Ok(())
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
