use crate::types::{LogLevel, OutputFormat, SkinName};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse a personal portfolio like a code editor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml and folio.log
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Presentation skin (overrides config.toml)
    #[arg(long, global = true)]
    pub skin: Option<SkinName>,

    /// Content pack (.json or .toml) to show instead of the built-in content
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive editor shell
    Open {
        /// Document to open in a tab on start
        document: Option<String>,
    },

    /// List the documents in the explorer
    List,

    /// Print one document
    Show { document: String },

    /// Run the quick-open filter against document labels
    Search { query: String },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config.toml
    Init {
        #[arg(long)]
        force: bool,
    },

    /// Print the config.toml location
    Path,
}
