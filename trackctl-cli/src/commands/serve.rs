//! `trackctl serve`
//!
//! Runs the REST/GraphQL listener and the gRPC listener over one tracker.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use trackctl_server::{AppState, ServerConfig, Surface, Surfaces};

use crate::config::TrackctlConfig;

/// Which surfaces to start
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeTarget {
    /// REST, GraphQL and gRPC
    All,
    /// REST only
    Rest,
    /// GraphQL only
    Graphql,
    /// gRPC only
    Grpc,
}

impl From<ServeTarget> for Surfaces {
    fn from(target: ServeTarget) -> Self {
        match target {
            ServeTarget::All => Surfaces::all(),
            ServeTarget::Rest => Surfaces::only(Surface::Rest),
            ServeTarget::Graphql => Surfaces::only(Surface::Graphql),
            ServeTarget::Grpc => Surfaces::only(Surface::Grpc),
        }
    }
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Surfaces to run
    #[arg(value_enum, default_value_t = ServeTarget::All)]
    pub target: ServeTarget,

    /// REST/GraphQL listen address (default: 127.0.0.1:3000)
    #[arg(long, env = "TRACKCTL_HTTP_ADDR")]
    pub http_addr: Option<SocketAddr>,

    /// gRPC listen address (default: 127.0.0.1:50051)
    #[arg(long, env = "TRACKCTL_GRPC_ADDR")]
    pub grpc_addr: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    /// Flags and environment first, then the config file, then defaults.
    pub fn resolve(&self, file: &TrackctlConfig) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            http_addr: self
                .http_addr
                .or(file.server.http_addr)
                .unwrap_or(defaults.http_addr),
            grpc_addr: self
                .grpc_addr
                .or(file.server.grpc_addr)
                .unwrap_or(defaults.grpc_addr),
            cors_permissive: self.cors_permissive
                || file.server.cors_permissive.unwrap_or(defaults.cors_permissive),
            surfaces: self.target.into(),
        }
    }
}

/// Run the servers until Ctrl+C or SIGTERM
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.resolve(&TrackctlConfig::load());

    tracing::info!(
        surfaces = ?args.target,
        http = %config.http_addr,
        grpc = %config.grpc_addr,
        "Starting trackctl"
    );

    trackctl_server::run(config, AppState::default())
        .await
        .context("Server error")?;

    Ok(())
}
