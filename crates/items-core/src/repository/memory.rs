//! In-Memory Key-Value Store
//!
//! Used in tests and as the fallback when the platform offers no storage.
//! Clones share the same map, so a store can be "reopened" to simulate a
//! restart.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::{StoreError, StoreResult};
use super::traits::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. a blob written by an earlier session
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent `set` fail (simulates a full or read-only store)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Synchronous peek at a raw value
    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

#[async_trait(?Send)]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entry(key))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::Write(format!("memory store rejected write to '{}'", key)));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
