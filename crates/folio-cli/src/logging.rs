use crate::types::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Console commands log next to their output
    Stderr,
    /// The TUI owns the terminal, so it appends to a file instead
    File(PathBuf),
}

/// Install the global logger. `RUST_LOG` takes precedence over `level`.
pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(level.to_filter().as_str());
    let mut builder = env_logger::Builder::from_env(env);

    match target {
        LogTarget::Stderr => {
            builder.target(env_logger::Target::Stderr);
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }

    // A second init (e.g. from tests) keeps the first logger
    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
    Ok(())
}
