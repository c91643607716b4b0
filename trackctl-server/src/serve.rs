//! Run the enabled surfaces side by side
//!
//! REST and GraphQL share the HTTP listener, gRPC gets its own. Both stop
//! on Ctrl+C or SIGTERM and share one tracker.

use std::future::Future;

use tokio::sync::watch;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::grpc::run_grpc;
use crate::http::run_http;
use crate::state::AppState;

/// Start every enabled surface and wait until all of them have stopped.
pub async fn run(config: ServerConfig, state: AppState) -> ServerResult<()> {
    if config.surfaces.is_empty() {
        return Err(ServerError::NothingToServe);
    }

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = stop_tx.send(true);
    });

    let http = async {
        if config.surfaces.needs_http() {
            run_http(state.clone(), &config, stopped(stop_rx.clone())).await
        } else {
            Ok(())
        }
    };

    let grpc = async {
        if config.surfaces.grpc {
            run_grpc(state.clone(), config.grpc_addr, stopped(stop_rx.clone())).await
        } else {
            Ok(())
        }
    };

    tokio::try_join!(http, grpc)?;
    Ok(())
}

/// Resolves once the stop flag flips (or its sender is gone).
fn stopped(mut rx: watch::Receiver<bool>) -> impl Future<Output = ()> + Send + 'static {
    async move {
        let _ = rx.wait_for(|stop| *stop).await;
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Surfaces;

    #[tokio::test]
    async fn refuses_to_run_nothing() {
        let config = ServerConfig {
            surfaces: Surfaces::none(),
            ..ServerConfig::default()
        };
        let err = run(config, AppState::default()).await.unwrap_err();
        assert!(matches!(err, ServerError::NothingToServe));
    }

    #[tokio::test]
    async fn stopped_resolves_when_flag_flips() {
        let (tx, rx) = watch::channel(false);
        let waiter = tokio::spawn(stopped(rx));
        tx.send(true).unwrap();
        waiter.await.unwrap();
    }
}
