//! Axum server setup
//!
//! One listener carries both REST and GraphQL; which of the two are
//! mounted follows [`ServerConfig::surfaces`]. `/health` is always on.

use std::future::Future;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::graphql;
use crate::state::AppState;

const LOCAL_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Build the HTTP application for the enabled surfaces.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(LOCAL_ORIGINS.map(HeaderValue::from_static))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let mut app = Router::new().merge(routes::health::router());

    if config.surfaces.rest {
        app = app.merge(routes::rest_router());
    }
    if config.surfaces.graphql {
        let schema = graphql::build_schema(state.tracker().clone());
        app = app.merge(graphql::router(schema));
    }

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP listener until `shutdown` resolves.
pub async fn run_http<F>(state: AppState, config: &ServerConfig, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state, config);

    let listener = TcpListener::bind(config.http_addr).await?;
    tracing::info!(
        addr = %config.http_addr,
        rest = config.surfaces.rest,
        graphql = config.surfaces.graphql,
        "HTTP server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("HTTP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Surface, Surfaces};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn status_of(app: Router, uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn graphql_only_hides_rest_routes() {
        let config = ServerConfig {
            surfaces: Surfaces::only(Surface::Graphql),
            ..ServerConfig::default()
        };
        let app = build_router(AppState::default(), &config);

        assert_eq!(status_of(app.clone(), "/users").await, StatusCode::NOT_FOUND);
        assert_eq!(status_of(app.clone(), "/graphql").await, StatusCode::OK);
        assert_eq!(status_of(app, "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn rest_only_hides_graphql() {
        let config = ServerConfig {
            surfaces: Surfaces::only(Surface::Rest),
            ..ServerConfig::default()
        };
        let app = build_router(AppState::default(), &config);

        assert_eq!(status_of(app.clone(), "/users").await, StatusCode::OK);
        assert_eq!(status_of(app, "/graphql").await, StatusCode::NOT_FOUND);
    }
}
