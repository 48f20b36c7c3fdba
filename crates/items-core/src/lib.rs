//! Items List Core
//!
//! Layered architecture:
//! - domain: Record, form state and error types
//! - repository: Key-value store abstraction and the record store adapter
//! - controller: List-form controller, persists after every list mutation
//! - view: Pure screen projection consumed by the UI

pub mod domain;
pub mod repository;
pub mod controller;
pub mod view;

pub use domain::{Record, FormState, StoreError, StoreResult, ValidationError};
pub use repository::{KeyValueStore, MemoryStore, FileStore, RecordStore, ITEMS_KEY};
pub use controller::{ListFormController, AddOutcome};
pub use view::{ScreenView, FieldView, RowView};
