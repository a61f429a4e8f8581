//! Application State
//!
//! Holds shared state for the server: the movie store and the CORS gate.
//! The store is injected at construction rather than living in a module
//! singleton, so tests build isolated instances and a future backing-store
//! swap stays local to this type.

use std::sync::Arc;

use tokio::sync::RwLock;

use filmoteca_core::{CorsGate, MovieStore};
use filmoteca_types::{Movie, MovieDraft, MoviePatch, StoreError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The one in-memory store this process owns. The lock exists for the
    /// multi-threaded runtime; each operation is a single critical section.
    store: RwLock<MovieStore>,
    cors: CorsGate,
}

impl AppState {
    /// Build state around a seeded catalog and a fixed origin allow-list.
    pub fn new(catalog: Vec<Movie>, cors: CorsGate) -> Self {
        Self { inner: Arc::new(AppStateInner { store: RwLock::new(MovieStore::new(catalog)), cors }) }
    }

    pub fn cors(&self) -> &CorsGate {
        &self.inner.cors
    }

    /// All movies, or the case-insensitive genre subset when a tag is given.
    pub async fn list_movies(&self, genre: Option<&str>) -> Vec<Movie> {
        let store = self.inner.store.read().await;
        match genre {
            Some(tag) => store.list_by_genre(tag),
            None => store.list().to_vec(),
        }
    }

    pub async fn find_movie(&self, id: &str) -> Option<Movie> {
        self.inner.store.read().await.find_by_id(id).cloned()
    }

    /// Mint an id for the validated draft and append the record.
    pub async fn create_movie(&self, draft: MovieDraft) -> Movie {
        let movie = Movie::from_draft(draft);
        self.inner.store.write().await.insert(movie.clone());
        movie
    }

    pub async fn update_movie(&self, id: &str, patch: MoviePatch) -> Result<Movie, StoreError> {
        self.inner.store.write().await.update_by_id(id, patch)
    }

    pub async fn delete_movie(&self, id: &str) -> Result<(), StoreError> {
        self.inner.store.write().await.delete_by_id(id)
    }

    pub async fn movie_count(&self) -> usize {
        self.inner.store.read().await.len()
    }
}
