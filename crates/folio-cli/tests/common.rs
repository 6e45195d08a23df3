//! Shared fixture for binary tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated data directory so tests never read the user's config
pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("folio");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        let path = self.data_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").expect("Failed to find folio binary");
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .env_remove("FOLIO_PATH")
            .env_remove("RUST_LOG");
        cmd
    }
}
