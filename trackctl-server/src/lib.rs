//! trackctl-server: REST, GraphQL and gRPC faces over one tracker
//!
//! Every surface is a thin translation onto `trackctl_core::Tracker`.
//! They share a single [`SharedTracker`] so a user created over gRPC is
//! immediately visible to REST and GraphQL callers.

pub mod config;
pub mod error;
pub mod graphql;
pub mod grpc;
pub mod http;
pub mod serve;
pub mod state;

pub use config::{ServerConfig, Surface, Surfaces};
pub use error::{ServerError, ServerResult};
pub use serve::run;
pub use state::{AppState, SharedTracker};
