//! Structured error types for campusctl-core.
//!
//! Uses `thiserror` for better API surface and error composition.
//! The binary crate (campusctl-cli) can still use `anyhow` for convenience,
//! but library consumers get structured, composable errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for campusctl-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A record collection contains a repeated id
    #[error("Duplicate id {id} in {collection} collection")]
    DuplicateId { collection: &'static str, id: u32 },

    /// A category string is outside the closed enumeration
    #[error("Unknown {collection} category '{value}'")]
    UnknownCategory {
        collection: &'static str,
        value: String,
    },
}

/// Result type alias for campusctl-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create a JSON error tied to the file it came from
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Create a duplicate id error
    pub fn duplicate_id(collection: &'static str, id: u32) -> Self {
        Self::DuplicateId { collection, id }
    }

    /// Create an unknown category error
    pub fn unknown_category(collection: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            collection,
            value: value.into(),
        }
    }
}
