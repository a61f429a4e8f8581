//! Seed catalog loading.
//!
//! The catalog is a JSON array of full movie records, read exactly once at
//! startup. Every record is re-checked against the movie schema so the
//! store never holds an invalid snapshot; any fault here is fatal.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;
use validator::Validate;

use filmoteca_types::{CatalogError, Movie};

/// Read and validate the seed catalog at `path`.
pub fn load_catalog(path: &Path) -> Result<Vec<Movie>, CatalogError> {
    let content = fs::read_to_string(path)
        .map_err(|source| CatalogError::Io { path: path.display().to_string(), source })?;

    let movies: Vec<Movie> = serde_json::from_str(&content)
        .map_err(|source| CatalogError::Parse { path: path.display().to_string(), source })?;

    let mut seen: HashSet<&str> = HashSet::with_capacity(movies.len());
    for movie in &movies {
        if !seen.insert(movie.id.as_str()) {
            return Err(CatalogError::DuplicateId { id: movie.id.clone() });
        }
        movie.validate().map_err(|errors| CatalogError::InvalidRecord {
            id: movie.id.clone(),
            details: errors.to_string(),
        })?;
    }

    info!("loaded {} movies from {}", movies.len(), path.display());
    Ok(movies)
}
