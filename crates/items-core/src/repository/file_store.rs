//! File-Backed Key-Value Store
//!
//! Keeps all keys in one JSON object file, e.g. under the app data dir of a
//! native shell. A missing file reads as an empty store. Writes go to a
//! sibling temp file which is then renamed over the original.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::{StoreError, StoreResult};
use super::traits::KeyValueStore;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Read(format!("{}: {}", self.path.display(), e)))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| StoreError::Parse(format!("{}: {}", self.path.display(), e)))
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Write(e.to_string()))?;

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)
                    .map_err(|e| StoreError::Write(format!("{}: {}", dir.display(), e)))?;
            }
        }

        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, content)
            .map_err(|e| StoreError::Write(format!("{}: {}", tmp_path.display(), e)))?;
        std::fs::rename(&tmp_path, &self.path)
            .map_err(|e| StoreError::Write(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait(?Send)]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        // A corrupt container file is not silently replaced
        let mut entries = self.read_all().map_err(|e| StoreError::Write(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }
}
