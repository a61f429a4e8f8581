//! API Routes
//!
//! REST handlers for the movie collection plus the greeting, health, and
//! fallback endpoints.

mod movies;


use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::{json, Value};

pub use movies::{
    create_movie, delete_movie, get_movie, list_movies, preflight_movie, update_movie,
};

/// Error half of every handler: a status code and a JSON body.
pub(crate) type ApiError = (StatusCode, Json<Value>);

pub(crate) fn movie_not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Movie not found" })))
}

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub format: Option<String>,
}

/// Greeting endpoint. `?format=xml` selects the literal markup
/// representation; everything else gets the JSON greeting.
pub async fn home(Query(query): Query<HomeQuery>) -> Response {
    if query.format.as_deref() == Some("xml") {
        Html("<h1>Hola mundo</h1>").into_response()
    } else {
        Json(json!({ "message": "Hola mundo" })).into_response()
    }
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Fallback for paths no route matches.
pub async fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" })))
}
