//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown
//! - HTML or JSON responses by content negotiation
//! - Typed errors mapped to status codes

pub mod error;
pub mod negotiate;
pub mod routes;
pub mod server;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ApiError;
pub use negotiate::{Negotiated, Representation};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
