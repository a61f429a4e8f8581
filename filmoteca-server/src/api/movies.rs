//! Movie collection handlers: list, get, create, update, delete, preflight.

use axum::extract::{Path, Query, State};
use axum::http::header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use filmoteca_core::cors::request_origin;
use filmoteca_types::{validate_movie, validate_partial_movie, FieldIssue, Movie, StoreError};

use super::{movie_not_found, ApiError};
use crate::state::AppState;

/// Methods a browser may use against `/movies/:id` cross-origin.
const PREFLIGHT_METHODS: &str = "GET, POST, PATCH, DELETE";

#[derive(Debug, Deserialize)]
pub struct ListMoviesQuery {
    pub genre: Option<String>,
}

/// Headers advertising the request's own origin, when it is allow-listed.
/// The literal origin is echoed, never a wildcard.
fn cors_echo(state: &AppState, headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    if let Some(origin) = state.cors().echo_origin(request_origin(headers)) {
        if let Ok(value) = HeaderValue::from_str(origin) {
            out.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
    }
    out
}

fn validation_failure(issues: Vec<FieldIssue>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": issues })))
}

pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListMoviesQuery>,
    headers: HeaderMap,
) -> (HeaderMap, Json<Vec<Movie>>) {
    let cors = cors_echo(&state, &headers);
    let movies = state.list_movies(query.genre.as_deref()).await;
    (cors, Json(movies))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    state.find_movie(&id).await.map(Json).ok_or_else(movie_not_found)
}

pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let draft = validate_movie(&payload).map_err(validation_failure)?;
    let movie = state.create_movie(draft).await;
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Movie>, ApiError> {
    let patch = validate_partial_movie(&payload).map_err(validation_failure)?;
    match state.update_movie(&id, patch).await {
        Ok(movie) => Ok(Json(movie)),
        Err(StoreError::NotFound { .. }) => Err(movie_not_found()),
    }
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<(HeaderMap, Json<Value>), ApiError> {
    let cors = cors_echo(&state, &headers);
    match state.delete_movie(&id).await {
        Ok(()) => Ok((cors, Json(json!({ "message": "Movie deleted" })))),
        Err(StoreError::NotFound { .. }) => Err(movie_not_found()),
    }
}

/// Pre-flight for the "complex" verbs on `/movies/:id`. Advertises the
/// echoed origin plus the allowed method set.
pub async fn preflight_movie(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> (StatusCode, HeaderMap) {
    let mut cors = cors_echo(&state, &headers);
    if !cors.is_empty() {
        cors.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(PREFLIGHT_METHODS));
    }
    (StatusCode::OK, cors)
}
