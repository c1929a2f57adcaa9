//! greeting-server: a single-endpoint HTTP service.
//!
//! `GET /` answers with a fixed plain-text greeting. The rest of the crate is
//! the plumbing around it: configuration, request tracing and a server with
//! graceful shutdown.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
