//! Error types for trackctl-server

use thiserror::Error;

pub type ServerResult<T> = Result<T, ServerError>;

/// Failures that stop a listener. Request-level failures never end up
/// here; each surface maps those to its own response.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("no surface enabled; pick at least one of rest, graphql, grpc")]
    NothingToServe,
}
