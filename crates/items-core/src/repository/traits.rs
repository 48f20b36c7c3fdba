//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the platform key-value store.
//! Implementations can use browser localStorage, a file, in-memory, etc.

use async_trait::async_trait;
use crate::domain::StoreResult;

/// String-keyed, string-valued persistent store
///
/// Operations are async to support various backends. Not `Send`: the app is
/// single-threaded and platform storage handles are tied to their thread.
#[async_trait(?Send)]
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if never written
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value under `key`
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
