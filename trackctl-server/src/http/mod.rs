//! HTTP layer
//!
//! Axum server with:
//! - REST routes over the tracker
//! - GraphQL endpoint (see [`crate::graphql`])
//! - CORS (localhost only by default)
//! - Request tracing
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_http};
