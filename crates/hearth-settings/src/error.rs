//! Error types for settings storage and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for storage adapters.
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures raised while touching the persistent slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store is not reachable (e.g. `localStorage` disabled).
    #[error("storage backend unavailable")]
    Unavailable {
        /// Backend-specific detail.
        detail: String,
    },
    /// Reading a slot failed.
    #[error("failed to read storage slot")]
    Read {
        /// Slot key.
        key: String,
        /// Backend-specific detail.
        detail: String,
    },
    /// Writing a slot failed.
    #[error("failed to write storage slot")]
    Write {
        /// Slot key.
        key: String,
        /// Backend-specific detail.
        detail: String,
    },
    /// Filesystem access failed for a file-backed slot.
    #[error("storage io failed")]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The slot held data that is not a settings document.
    #[error("stored settings are malformed")]
    Malformed {
        /// Slot key.
        key: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising settings for a write failed.
    #[error("failed to serialize settings")]
    Serialize {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}
