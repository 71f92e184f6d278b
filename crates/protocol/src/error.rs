//! Error types for the craftwiki-protocol crate.
//!
//! This module defines the errors that can occur when reading domain data,
//! including catalog decoding failures and static-data lookups.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A building id is missing from the static footprint table.
    ///
    /// This points at an inconsistency between the backend's building list
    /// and the footprint table compiled into this crate.
    #[error("{0} is unknown building")]
    UnknownBuilding(String),

    /// Failed to deserialize domain data from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[from] serde_json::Error),

    /// Failed to read a catalog dump from disk.
    #[error("failed to read catalog at {path}: {source}")]
    ReadCatalog {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
