//! Request tracing middleware.
//!
//! Each request runs inside a `request` span tagged with a fresh UUID v4, so
//! every log line emitted while serving it can be correlated. The span also
//! records the response status and how long the request took. The response
//! itself is passed through untouched.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{Instrument, Span};
use uuid::Uuid;

/// Build the span a request is served in. `status` and `duration_ms` are
/// filled in once the response is ready.
fn request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Middleware that serves each request inside its own tracing span.
///
/// Install as the outermost layer so the span covers everything beneath it.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let span = request_span(&request);
    let start = Instant::now();

    let response = next.run(request).instrument(span.clone()).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;
    span.record("status", status);
    span.record("duration_ms", duration_ms);
    span.in_scope(|| tracing::info!(status, duration_ms, "Request completed"));

    response
}
