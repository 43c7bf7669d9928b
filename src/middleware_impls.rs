use crate::cors::{self, AdmitReason, Decision, ALLOWED_HEADERS, ALLOWED_METHODS};
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use uuid::Uuid;

/// Request ID wrapper for use in request extensions
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Request ID middleware - adds a unique ID to each request
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    // Keep a caller-supplied ID so traces line up across hops
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|h| h.to_str().ok())
        .map(|s| RequestId(s.to_string()))
        .unwrap_or_default();

    tracing::info!(
        request_id = %request_id.as_str(),
        method = %req.method(),
        path = %req.uri().path(),
        "Incoming request"
    );

    let header_value = HeaderValue::from_str(request_id.as_str()).ok();
    req.extensions_mut().insert(request_id);

    let mut response = next.run(req).await;

    if let Some(header_value) = header_value {
        response.headers_mut().insert("x-request-id", header_value);
    }

    response
}

/// Origin of the request, if the client declared one.
///
/// Non-ASCII bytes are kept (lossily) so such an origin is denied rather than
/// treated as absent.
fn request_origin(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::ORIGIN)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

fn is_preflight(req: &Request) -> bool {
    req.method() == Method::OPTIONS
        && req
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

/// Attach the CORS response headers for an admitted request.
pub fn apply_cors_headers(headers: &mut HeaderMap, origin: Option<&str>) {
    if let Some(origin) = origin {
        if let Ok(value) = HeaderValue::from_str(origin) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
    }

    // Responses differ by Origin, including the no-origin case
    headers.append(header::VARY, HeaderValue::from_static("origin"));

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
}

/// CORS admission middleware.
///
/// Denied requests never reach the router. Admitted preflights are answered
/// here with `204 No Content`.
pub async fn cors_gate(State(state): State<Arc<AppState>>, req: Request, next: Next) -> Response {
    let origin = request_origin(req.headers());

    match cors::admit(origin.as_deref(), &state.cors) {
        Decision::Deny(reason) => AppError::CorsDenied(reason.origin).into_response(),
        Decision::Admit(reason) => {
            tracing::debug!(?reason, origin = ?origin, "Admitted request");

            let mut response = if reason != AdmitReason::NoOrigin && is_preflight(&req) {
                StatusCode::NO_CONTENT.into_response()
            } else {
                next.run(req).await
            };

            apply_cors_headers(response.headers_mut(), origin.as_deref());
            response
        }
    }
}
