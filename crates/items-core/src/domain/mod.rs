//! Domain Layer
//!
//! Records, transient form state and the error types shared by all layers.
//! No storage or UI dependencies (except serde for serialization).

mod error;
mod record;
mod form;

pub use error::{StoreError, StoreResult, ValidationError};
pub use record::{Record, next_record_id};
pub use form::FormState;
