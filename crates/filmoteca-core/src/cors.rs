//! Origin allow-list gate.
//!
//! Two forms, mirroring how browsers interact with the API:
//!
//! - the **global middleware** rejects any request whose `Origin` header is
//!   present but not allow-listed, before a handler runs;
//! - the **per-route form** (`echo_origin`) computes the exact origin value
//!   a handler should advertise back. The literal origin is echoed, never
//!   `*`.

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Origins permitted to receive permissive CORS headers.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8080",
    "http://localhost:1234",
    "http://localhost:3000",
    "http://movies.com.ar",
    "http://midu.dev",
];

/// Fixed, process-wide origin allow-list. Set at startup, immutable after.
#[derive(Debug, Clone)]
pub struct CorsGate {
    origins: Vec<String>,
}

impl CorsGate {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { origins: origins.into_iter().map(Into::into).collect() }
    }

    /// A request is allowed when it carries no `Origin` header (same-origin
    /// or non-browser client) or when the origin is allow-listed.
    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.origins.iter().any(|allowed| allowed == origin),
        }
    }

    /// The literal origin value to advertise in
    /// `Access-Control-Allow-Origin`, when there is one to echo.
    pub fn echo_origin<'a>(&self, origin: Option<&'a str>) -> Option<&'a str> {
        origin.filter(|o| self.is_allowed(Some(*o)))
    }
}

impl Default for CorsGate {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS.iter().copied())
    }
}

/// Extract the request's declared origin, if any.
pub fn request_origin(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::ORIGIN).and_then(|value| value.to_str().ok())
}

/// Global gate: fail disallowed cross-origin requests before any handler.
pub async fn cors_gate_middleware(
    State(gate): State<CorsGate>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request_origin(request.headers()).map(str::to_owned);
    if gate.is_allowed(origin.as_deref()) {
        next.run(request).await
    } else {
        (StatusCode::FORBIDDEN, Json(json!({ "message": "Not allowed by CORS" }))).into_response()
    }
}
