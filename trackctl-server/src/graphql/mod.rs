//! GraphQL surface
//!
//! `Query { users, projects, todos, user, project, todo,
//! userTodosWithProjects }` and `Mutation { addUser, addProject, addTodo }`
//! over the shared tracker, served at `/graphql` (POST for operations,
//! GET for GraphiQL).

pub mod error;
pub mod schema;
pub mod types;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::GraphQL;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::state::SharedTracker;
pub use schema::{MutationRoot, QueryRoot};

pub type TrackerSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema with the tracker attached as context data.
pub fn build_schema(tracker: SharedTracker) -> TrackerSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(tracker)
        .finish()
}

/// GET /graphql
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// GraphQL routes
pub fn router<S>(schema: TrackerSchema) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/graphql", get(graphiql).post_service(GraphQL::new(schema)))
}
