//! Typed error definitions for Filmoteca.
//!
//! Store errors are serializable so the API layer can surface them
//! directly; catalog errors only occur during startup and are fatal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by movie store operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum StoreError {
    /// No movie with the given ID exists in the store
    #[error("Movie not found: {id}")]
    NotFound {
        /// Unique identifier of the missing movie
        id: String,
    },
}

/// Errors raised while loading the seed catalog at startup.
///
/// Any of these aborts the process; there is no recovery path once the
/// initial snapshot cannot be trusted.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was attempted
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not a JSON array of movie records
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        /// Path that was attempted
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A seeded record violates the movie schema
    #[error("catalog record {id} violates the movie schema: {details}")]
    InvalidRecord {
        /// Offending record id
        id: String,
        /// Field-level rule failures, joined for display
        details: String,
    },

    /// Two seeded records share an id
    #[error("duplicate movie id in catalog: {id}")]
    DuplicateId {
        /// The id that appears more than once
        id: String,
    },
}
