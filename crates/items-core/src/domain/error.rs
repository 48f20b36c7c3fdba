//! Domain Layer - Errors
//!
//! Storage failures are recovered locally and only logged.
//! Validation failures are surfaced to the user as inline messages.

use serde::{Deserialize, Serialize};

/// Common result type for key-value store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreError {
    /// The underlying store could not be read
    Read(String),
    /// The underlying store rejected a write
    Write(String),
    /// A stored blob is corrupt or has a foreign shape
    Parse(String),
    /// No storage facility is available on this platform
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Read(msg) => write!(f, "Read failed: {}", msg),
            StoreError::Write(msg) => write!(f, "Write failed: {}", msg),
            StoreError::Parse(msg) => write!(f, "Parse failed: {}", msg),
            StoreError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Form validation outcome shown under the offending input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    EmptyDescription,
}

impl ValidationError {
    /// Inline message rendered under the input
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::EmptyTitle => "Title should not be empty",
            ValidationError::EmptyDescription => "Description should not be empty",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}
