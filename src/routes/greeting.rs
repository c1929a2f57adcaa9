//! Greeting handler for the root path.

/// The fixed body served on `GET /`.
pub const GREETING: &str = "Hello, and sorry for this very boring and uninspiring Spring Boot app";

/// Greeting handler.
///
/// Reads nothing from the request and always returns the same plain-text body.
/// Axum renders a `&'static str` as `200 OK` with `text/plain; charset=utf-8`.
pub async fn hello() -> &'static str {
    GREETING
}
