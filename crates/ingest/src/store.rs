//! Local buffer for fetched and uploaded bytes.
//!
//! Every stored blob gets a collision-free name of the form
//! `{prefix}-{uuid}`; concurrent requests never overwrite each other.
//! A temporary store is deleted with everything in it once its last clone
//! drops. A store opened on a configured directory is left in place.
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use uuid::Uuid;

use crate::config::ConfigError;
use crate::sanitize::key_prefix;

/// Directory-backed content store.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
    _guard: Option<Arc<TempDir>>,
}

impl ContentStore {
    /// Opens (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|err| ConfigError::Store(format!("{}: {err}", root.display())))?;
        Ok(Self { root, _guard: None })
    }

    /// Opens a fresh store under the OS temp directory, removed on drop.
    pub fn temporary() -> Result<Self, ConfigError> {
        let dir = tempfile::Builder::new()
            .prefix("wordstat_buffer_files_")
            .tempdir()
            .map_err(|err| ConfigError::Store(format!("temporary store: {err}")))?;
        Ok(Self {
            root: dir.path().to_path_buf(),
            _guard: Some(Arc::new(dir)),
        })
    }

    /// Opens `dir` when given, otherwise a temporary store.
    pub fn from_config(dir: Option<&Path>) -> Result<Self, ConfigError> {
        match dir {
            Some(dir) => Self::open(dir),
            None => Self::temporary(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `bytes` to a new uniquely named file and returns its path.
    pub async fn put(&self, prefix: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let name = format!("{}-{}", key_prefix(prefix), Uuid::new_v4());
        let path = self.root.join(name);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Reads a stored file back as UTF-8 text.
    pub async fn read_text(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}
