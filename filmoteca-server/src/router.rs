use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use filmoteca_core::cors_gate_middleware;

use crate::api;
use crate::state::AppState;

/// Assemble the application router.
///
/// The CORS gate is the outermost layer: disallowed cross-origin requests
/// fail before routing work happens. Per-route header echoing stays inside
/// the handlers that advertise it.
pub fn build_router(state: AppState) -> Router {
    let gate = state.cors().clone();

    Router::new()
        .route("/", get(api::home))
        .route("/health", get(api::health_check))
        .route("/movies", get(api::list_movies).post(api::create_movie))
        .route(
            "/movies/:id",
            get(api::get_movie)
                .patch(api::update_movie)
                .delete(api::delete_movie)
                .options(api::preflight_movie),
        )
        .fallback(api::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(gate, cors_gate_middleware))
}
