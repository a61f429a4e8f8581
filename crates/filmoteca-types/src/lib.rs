//! # Filmoteca Types
//!
//! Core types, models, and error definitions for the Filmoteca movie API.
//!
//! This crate provides the foundational type system for the workspace:
//!
//! - **`models`** - Domain models (`Movie`, `Genre`) and write payloads
//!   (`MovieDraft`, `MoviePatch`)
//! - **`validation`** - Payload validation producing structured,
//!   field-level issues
//! - **`error`** - Typed errors for the store and the seed catalog
//!
//! ## Architecture Role
//!
//! `filmoteca-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        filmoteca-types (this crate)
//!                │
//!                ▼
//!         filmoteca-core
//!                │
//!                ▼
//!        filmoteca-server
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for API responses
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;
pub mod validation;

// Re-export error types for convenience
pub use error::{CatalogError, StoreError};

// Re-export core model types
pub use models::{Genre, Movie, MovieDraft, MoviePatch};

// Re-export the validation entry points
pub use validation::{validate_movie, validate_partial_movie, FieldIssue};
