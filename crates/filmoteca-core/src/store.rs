//! In-memory movie store.
//!
//! The store is a plain insertion-ordered collection with no locking of
//! its own; the server owns exactly one instance per process and wraps it
//! in whatever synchronization its runtime requires.

use filmoteca_types::{Movie, MoviePatch, StoreError};

/// Insertion-ordered collection of movie records.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// Create a store seeded with the given records.
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// All records, in insertion order.
    pub fn list(&self) -> &[Movie] {
        &self.movies
    }

    /// Records carrying a tag that matches `genre` case-insensitively.
    pub fn list_by_genre(&self, genre: &str) -> Vec<Movie> {
        self.movies.iter().filter(|m| m.has_genre(genre)).cloned().collect()
    }

    /// Look up a record by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Append a record, preserving insertion order.
    pub fn insert(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    /// Remove a record by id.
    pub fn delete_by_id(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self
            .movies
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        self.movies.remove(index);
        Ok(())
    }

    /// Shallow-merge a validated patch over the record with the given id.
    ///
    /// Returns the updated record; fields absent from the patch are
    /// retained unchanged.
    pub fn update_by_id(&mut self, id: &str, patch: MoviePatch) -> Result<Movie, StoreError> {
        let movie = self
            .movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        movie.apply(patch);
        Ok(movie.clone())
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use filmoteca_types::{Genre, MovieDraft};

    fn movie(id: &str, title: &str, genre: Vec<Genre>) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            genre,
            year: 2009,
            director: "Pete Docter".to_string(),
            duration: 96,
            rate: 8.3,
            poster: "https://example.com/poster.jpg".to_string(),
        }
    }

    fn seeded() -> MovieStore {
        MovieStore::new(vec![
            movie("a1", "Up", vec![Genre::Adventure]),
            movie("b2", "Alien", vec![Genre::Horror, Genre::SciFi]),
            movie("c3", "Heat", vec![Genre::Action, Genre::Crime]),
        ])
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = seeded();
        store.insert(Movie::from_draft(MovieDraft {
            title: "Coherence".to_string(),
            genre: vec![Genre::SciFi],
            year: 2013,
            director: "James Ward Byrkit".to_string(),
            duration: 89,
            rate: 7.2,
            poster: "https://example.com/coherence.jpg".to_string(),
        }));

        let titles: Vec<&str> = store.list().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Up", "Alien", "Heat", "Coherence"]);
    }

    #[test]
    fn test_list_by_genre_matches_any_tag_case_insensitive() {
        let store = seeded();

        let hits = store.list_by_genre("sci-fi");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b2");

        assert!(store.list_by_genre("drama").is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let store = seeded();
        assert_eq!(store.find_by_id("c3").unwrap().title, "Heat");
        assert!(store.find_by_id("zz").is_none());
    }

    #[test]
    fn test_delete_then_delete_again() {
        let mut store = seeded();
        store.delete_by_id("b2").unwrap();
        assert_eq!(store.len(), 2);

        let err = store.delete_by_id("b2").unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: "b2".to_string() });
    }

    #[test]
    fn test_update_merges_and_returns_record() {
        let mut store = seeded();
        let updated = store
            .update_by_id("a1", MoviePatch { rate: Some(9.0), ..MoviePatch::default() })
            .unwrap();

        assert_eq!(updated.id, "a1");
        assert_eq!(updated.title, "Up");
        assert!((updated.rate - 9.0).abs() < f64::EPSILON);
        assert!((store.find_by_id("a1").unwrap().rate - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut store = seeded();
        let patch = MoviePatch { year: Some(2010), ..MoviePatch::default() };

        let first = store.update_by_id("a1", patch.clone()).unwrap();
        let second = store.update_by_id("a1", patch).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_update_missing_id() {
        let mut store = seeded();
        let err = store.update_by_id("zz", MoviePatch::default()).unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: "zz".to_string() });
    }
}
