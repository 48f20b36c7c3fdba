//! Record Store Adapter
//!
//! Maps the whole record list onto one JSON blob under a fixed key.
//! `load` and `save` never fail from the caller's point of view: storage
//! problems are logged and the in-memory list stays authoritative.

use log::{debug, error};

use crate::domain::{Record, StoreError, StoreResult};
use super::traits::KeyValueStore;

/// The only key this app writes
pub const ITEMS_KEY: &str = "items";

pub struct RecordStore<S> {
    kv: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// The wrapped key-value store
    pub fn inner(&self) -> &S {
        &self.kv
    }

    /// Load the stored list, surfacing read and parse errors
    ///
    /// An absent (or empty) blob is a first run, not an error.
    pub async fn load_checked(&self) -> StoreResult<Vec<Record>> {
        let blob = match self.kv.get(ITEMS_KEY).await? {
            Some(blob) if !blob.is_empty() => blob,
            _ => return Ok(Vec::new()),
        };
        serde_json::from_str(&blob).map_err(|e| StoreError::Parse(e.to_string()))
    }

    /// Load the stored list, substituting an empty list on any failure
    pub async fn load(&self) -> Vec<Record> {
        match self.load_checked().await {
            Ok(records) => {
                debug!("Loaded {} items", records.len());
                records
            }
            Err(e) => {
                error!("Failed to load items. {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list with `records`, surfacing write errors
    pub async fn save_checked(&self, records: &[Record]) -> StoreResult<()> {
        let blob = serde_json::to_string(records).map_err(|e| StoreError::Write(e.to_string()))?;
        self.kv.set(ITEMS_KEY, &blob).await
    }

    /// Overwrite the stored list with `records`, logging any failure
    pub async fn save(&self, records: &[Record]) {
        match self.save_checked(records).await {
            Ok(()) => debug!("Saved {} items", records.len()),
            Err(e) => error!("Failed to save items. {}", e),
        }
    }
}
