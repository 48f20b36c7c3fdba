//! Device Storage
//!
//! `localStorage` of the hosting webview, with an in-memory fallback when
//! the platform refuses storage (private mode, sandboxed frames). Outside a
//! webview the items live in a JSON file instead.

use async_trait::async_trait;
use std::path::PathBuf;

use items_core::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};

/// `window.localStorage` as a key-value store
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    pub fn open() -> StoreResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// Store file used when not running inside a webview
#[cfg(not(target_arch = "wasm32"))]
pub const NATIVE_STORE_FILE: &str = "items-storage.json";

/// Whichever store the platform gave us
pub enum DeviceStore {
    Local(LocalStorageStore),
    File(FileStore),
    Memory(MemoryStore),
}

impl DeviceStore {
    #[cfg(target_arch = "wasm32")]
    pub fn open() -> Self {
        match LocalStorageStore::open() {
            Ok(store) => DeviceStore::Local(store),
            Err(e) => {
                log::warn!("localStorage unavailable, items will not survive a restart: {}", e);
                DeviceStore::Memory(MemoryStore::new())
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open() -> Self {
        Self::open_file(NATIVE_STORE_FILE)
    }

    /// JSON file store, e.g. under the app data dir of a native shell
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        let store = FileStore::new(path);
        log::info!("Using file storage at {}", store.path().display());
        DeviceStore::File(store)
    }
}

#[async_trait(?Send)]
impl KeyValueStore for DeviceStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match self {
            DeviceStore::Local(store) => store.get(key).await,
            DeviceStore::File(store) => store.get(key).await,
            DeviceStore::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        match self {
            DeviceStore::Local(store) => store.set(key, value).await,
            DeviceStore::File(store) => store.set(key, value).await,
            DeviceStore::Memory(store) => store.set(key, value).await,
        }
    }
}
