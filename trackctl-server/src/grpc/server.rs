//! tonic server setup

use std::future::Future;
use std::net::SocketAddr;

use tonic::transport::Server;

use super::pb::tracker_service_server::TrackerServiceServer;
use super::service::TrackerGrpc;
use crate::error::ServerResult;
use crate::state::AppState;

/// Run the gRPC listener until `shutdown` resolves.
pub async fn run_grpc<F>(state: AppState, addr: SocketAddr, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send,
{
    let service = TrackerServiceServer::new(TrackerGrpc::new(state.tracker().clone()));

    tracing::info!(%addr, "gRPC server listening");
    Server::builder()
        .trace_fn(|request| tracing::info_span!("grpc", path = %request.uri().path()))
        .add_service(service)
        .serve_with_shutdown(addr, shutdown)
        .await?;

    tracing::info!("gRPC server shutdown complete");
    Ok(())
}
