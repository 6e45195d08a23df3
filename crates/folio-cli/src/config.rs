use anyhow::{Context, Result, anyhow};
use folio_types::Skin;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "folio.log";

const DEFAULT_INTRO_DELAY_MS: u64 = 1800;
const DEFAULT_EXPLORER_WIDTH: u16 = 28;

/// Resolve the folio data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FOLIO_PATH environment variable (with tilde expansion)
/// 3. Platform config directory (e.g. ~/.config/folio)
/// 4. ~/.folio (fallback for systems without one)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FOLIO_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("folio"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".folio"));
    }

    Err(anyhow!(
        "Could not determine data directory: no HOME or platform config directory found"
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroConfig {
    /// Unset means "use the skin's default"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default = "default_intro_delay_ms")]
    pub delay_ms: u64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            delay_ms: DEFAULT_INTRO_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_explorer_width")]
    pub explorer_width: u16,
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            explorer_width: DEFAULT_EXPLORER_WIDTH,
            show_status_bar: true,
        }
    }
}

fn default_intro_delay_ms() -> u64 {
    DEFAULT_INTRO_DELAY_MS
}

fn default_explorer_width() -> u16 {
    DEFAULT_EXPLORER_WIDTH
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub skin: Skin,
    /// Content pack replacing the built-in content; relative paths are
    /// resolved against the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
    #[serde(default)]
    pub intro: IntroConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Delay before the intro overlay auto-dismisses, or None when the
    /// overlay is off for this skin
    pub fn intro_delay(&self, skin: Skin) -> Option<Duration> {
        self.intro
            .enabled
            .unwrap_or_else(|| skin.shows_intro_by_default())
            .then(|| Duration::from_millis(self.intro.delay_ms))
    }

    pub fn content_path(&self, data_dir: &Path) -> Option<PathBuf> {
        self.content.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                data_dir.join(path)
            }
        })
    }
}
