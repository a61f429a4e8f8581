//! Test helpers for filmoteca-server unit tests.

use filmoteca_core::CorsGate;
use filmoteca_types::{Genre, Movie};

use crate::state::AppState;

/// Fixed three-movie catalog used across the API tests.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: "a1".to_string(),
            title: "Up".to_string(),
            genre: vec![Genre::Adventure],
            year: 2009,
            director: "Pete Docter".to_string(),
            duration: 96,
            rate: 8.3,
            poster: "https://example.com/up.jpg".to_string(),
        },
        Movie {
            id: "b2".to_string(),
            title: "The Shawshank Redemption".to_string(),
            genre: vec![Genre::Drama],
            year: 1994,
            director: "Frank Darabont".to_string(),
            duration: 142,
            rate: 9.3,
            poster: "https://example.com/shawshank.jpg".to_string(),
        },
        Movie {
            id: "c3".to_string(),
            title: "The Dark Knight".to_string(),
            genre: vec![Genre::Action, Genre::Crime, Genre::Drama],
            year: 2008,
            director: "Christopher Nolan".to_string(),
            duration: 152,
            rate: 9.0,
            poster: "https://example.com/dark-knight.jpg".to_string(),
        },
    ]
}

/// Create a minimal `AppState` for testing, seeded with `seed_movies()`.
pub fn test_app_state() -> AppState {
    AppState::new(seed_movies(), CorsGate::default())
}
