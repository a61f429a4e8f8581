//! # Filmoteca Core
//!
//! Business logic for the Filmoteca movie API:
//!
//! - **`store`** - the in-memory, insertion-ordered movie collection
//! - **`catalog`** - seed catalog loading and startup validation
//! - **`cors`** - the origin allow-list gate and its axum middleware

pub mod catalog;
pub mod cors;
pub mod store;

pub use catalog::load_catalog;
pub use cors::{cors_gate_middleware, CorsGate, DEFAULT_ALLOWED_ORIGINS};
pub use store::MovieStore;
