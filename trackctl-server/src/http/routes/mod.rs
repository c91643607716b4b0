//! Route handlers organized by resource

pub mod health;
pub mod projects;
pub mod todos;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// All REST resource routes
pub fn rest_router() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(projects::router())
        .merge(todos::router())
}
