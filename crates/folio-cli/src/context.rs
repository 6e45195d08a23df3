use crate::config::{Config, LOG_FILE};
use anyhow::{Context, Result};
use folio_content::{ContentPack, ContentStore};
use folio_types::Skin;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Lazily loaded configuration and content shared by all handlers
pub struct ExecutionContext {
    data_dir: PathBuf,
    skin_override: Option<Skin>,
    content_override: Option<PathBuf>,
    config: OnceCell<Config>,
    store: OnceCell<ContentStore>,
}

impl ExecutionContext {
    pub fn new(
        data_dir: PathBuf,
        skin_override: Option<Skin>,
        content_override: Option<PathBuf>,
    ) -> Self {
        Self {
            data_dir,
            skin_override,
            content_override,
            config: OnceCell::new(),
            store: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }

    /// Skin from --skin, falling back to config.toml
    pub fn skin(&self) -> Result<Skin> {
        match self.skin_override {
            Some(skin) => Ok(skin),
            None => Ok(self.config()?.skin),
        }
    }

    pub fn store(&self) -> Result<&ContentStore> {
        self.store.get_or_try_init(|| {
            let content_path = match &self.content_override {
                Some(path) => Some(path.clone()),
                None => self.config()?.content_path(&self.data_dir),
            };

            match content_path {
                Some(path) => {
                    let pack = ContentPack::load_from(&path).with_context(|| {
                        format!("Failed to load content pack {}", path.display())
                    })?;
                    ContentStore::new(pack).with_context(|| {
                        format!("Invalid content pack {}", path.display())
                    })
                }
                None => {
                    let skin = self.skin()?;
                    log::info!("Using built-in content for skin {}", skin);
                    Ok(ContentStore::builtin(skin)?)
                }
            }
        })
    }
}
